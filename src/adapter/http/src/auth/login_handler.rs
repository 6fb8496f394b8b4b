// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use axum::Extension;
use axum::Json;
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use dill::Catalog;
use explorify_accounts::*;
use serde::Deserialize;

use crate::axum_utils::get_component;
use crate::{ApiError, PortalConfig, SESSION_COOKIE_NAME};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequestBody {
    /// `password` or `oauth_google`
    pub method: String,
    /// Method-specific payload, passed through to the provider as-is
    pub credentials: serde_json::Value,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Signs in and hands back a session, both as a token and as a cookie
#[tracing::instrument(level = "info", skip_all, fields(method = %body.method))]
pub async fn login_handler(
    Extension(catalog): Extension<Catalog>,
    jar: CookieJar,
    Json(body): Json<LoginRequestBody>,
) -> Result<(CookieJar, Json<LoginResponse>), ApiError> {
    let authentication_service = get_component::<dyn AuthenticationService>(&catalog)?;
    let portal_config = get_component::<PortalConfig>(&catalog)?;

    let response = authentication_service
        .login(&body.method, body.credentials.to_string())
        .await
        .map_err(|e| sign_in_api_error(e, &portal_config))?;

    let session_cookie = Cookie::build((SESSION_COOKIE_NAME, response.access_token.clone()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);

    Ok((jar.add(session_cookie), Json(response)))
}

fn sign_in_api_error(e: SignInError, portal_config: &PortalConfig) -> ApiError {
    let kind = e.kind();
    if let SignInError::Internal(e) = e {
        return ApiError::internal(e);
    }

    let mut body = serde_json::json!({
        "kind": kind.to_string(),
        "message": e.to_string(),
    });
    if kind.is_user_site_redirect() {
        body["redirectUrl"] = serde_json::json!(portal_config.user_site_url);
    }

    ApiError::new(e, http::StatusCode::UNAUTHORIZED).with_body(body)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
