// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::Form;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use explorify_accounts::*;
use explorify_adapter_oauth::{GOOGLE_CODE_REJECTED_MESSAGE, GoogleOAuthConfig, OAuthGoogle};
use pretty_assertions::assert_eq;
use serde_json::json;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const VALID_CODE: &str = "valid-code";
const ACCESS_TOKEN: &str = "ya29.test-token";

struct GoogleStubHarness {
    provider: OAuthGoogle,
}

impl GoogleStubHarness {
    async fn new(userinfo: serde_json::Value) -> Self {
        let app = Router::new()
            .route("/token", post(token_handler))
            .route(
                "/userinfo",
                get(move |headers: HeaderMap| async move {
                    let authorized = headers
                        .get(header::AUTHORIZATION)
                        .and_then(|v| v.to_str().ok())
                        == Some(format!("Bearer {ACCESS_TOKEN}").as_str());

                    if authorized {
                        Json(userinfo).into_response()
                    } else {
                        StatusCode::UNAUTHORIZED.into_response()
                    }
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

        let config = GoogleOAuthConfig::new(
            "client-id".to_string(),
            "client-secret".to_string(),
            "http://localhost:3000/auth/callback/google".to_string(),
        )
        .with_endpoints(
            format!("http://{addr}/token"),
            format!("http://{addr}/userinfo"),
        );

        Self {
            provider: OAuthGoogle::new(Arc::new(config)),
        }
    }

    async fn login(&self, code: &str) -> Result<ProviderLoginResponse, SignInError> {
        self.provider
            .login(json!({ "code": code }).to_string())
            .await
    }
}

async fn token_handler(Form(params): Form<HashMap<String, String>>) -> axum::response::Response {
    let expected = [
        ("client_id", "client-id"),
        ("client_secret", "client-secret"),
        ("grant_type", "authorization_code"),
        ("code", VALID_CODE),
    ];
    let valid = expected
        .iter()
        .all(|(k, v)| params.get(*k).map(String::as_str) == Some(*v));

    if valid {
        Json(json!({ "access_token": ACCESS_TOKEN, "token_type": "Bearer" })).into_response()
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid_grant" })),
        )
            .into_response()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_code_exchange_yields_external_identity() {
    let harness = GoogleStubHarness::new(json!({
        "sub": "1234",
        "email": "acme@example.com",
        "email_verified": true,
        "name": "Acme Tours",
        "picture": "https://example.com/acme.png",
    }))
    .await;

    assert_eq!(harness.provider.provider_name(), LOGIN_METHOD_GOOGLE);

    let response = harness.login(VALID_CODE).await.unwrap();
    let ProviderLoginResponse::ExternalIdentity(identity) = response else {
        panic!("Expected an external identity, got: {response:?}");
    };

    assert_eq!(
        identity,
        ExternalIdentity {
            email: "acme@example.com".to_string(),
            display_name: "Acme Tours".to_string(),
            avatar_url: Some("https://example.com/acme.png".to_string()),
            provider: AccountProvider::Google,
        }
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_nameless_identity_falls_back_to_email() {
    let harness = GoogleStubHarness::new(json!({ "email": "acme@example.com" })).await;

    let response = harness.login(VALID_CODE).await.unwrap();
    let ProviderLoginResponse::ExternalIdentity(identity) = response else {
        panic!("Expected an external identity, got: {response:?}");
    };

    assert_eq!(identity.display_name, "acme@example.com");
    assert_eq!(identity.avatar_url, None);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_bad_code_is_rejected() {
    let harness = GoogleStubHarness::new(json!({ "email": "acme@example.com" })).await;

    let res = harness.login("stale-code").await;
    let Err(SignInError::Rejected { reason }) = &res else {
        panic!("expected rejection, got {res:?}");
    };
    assert_eq!(reason, GOOGLE_CODE_REJECTED_MESSAGE);
    assert!(!reason.contains("invalid_grant"), "{reason}");
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_identity_without_email_is_rejected() {
    let harness = GoogleStubHarness::new(json!({ "name": "Nobody" })).await;

    let res = harness.login(VALID_CODE).await;
    assert!(
        matches!(&res, Err(SignInError::Rejected { .. })),
        "{res:?}"
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_malformed_credentials() {
    let harness = GoogleStubHarness::new(json!({})).await;

    let res = harness.provider.login("{}".to_string()).await;
    assert!(
        matches!(&res, Err(SignInError::MalformedCredentials(Some(_)))),
        "{res:?}"
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
