// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use dill::*;
use explorify_accounts::*;
use internal_error::ResultIntoInternal;
use secrecy::ExposeSecret;
use serde::Deserialize;

use crate::GoogleOAuthConfig;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Provider responses stay in the logs, callers only get this
pub const GOOGLE_CODE_REJECTED_MESSAGE: &str = "Google rejected the authorization code";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Exchanges a Google authorization code for the identity behind it.
///
/// Only vouches for the email, deciding what the identity may do is left to
/// [`AuthenticationService`].
pub struct OAuthGoogle {
    config: Arc<GoogleOAuthConfig>,
}

#[component(pub)]
#[interface(dyn AuthenticationProvider)]
impl OAuthGoogle {
    pub fn new(config: Arc<GoogleOAuthConfig>) -> Self {
        Self { config }
    }

    fn get_client(&self) -> Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION"),
            ))
            .build()
    }

    async fn exchange_code(
        &self,
        client: &reqwest::Client,
        code: String,
    ) -> Result<GoogleAccessToken, SignInError> {
        let params = [
            ("client_id", self.config.client_id.as_str()),
            ("client_secret", self.config.client_secret.expose_secret()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
            ("code", code.as_str()),
        ];

        let response = client
            .post(&self.config.token_url)
            .header(reqwest::header::ACCEPT, "application/json")
            .form(&params)
            .send()
            .await
            .int_err()?;

        let status = response.status();
        let body = response.text().await.int_err()?;

        // Google answers 4xx with an `error` body for bad or reused codes
        if !status.is_success() {
            tracing::warn!(%status, %body, "Google rejected authorization code");
            return Err(rejected_code());
        }

        serde_json::from_str::<GoogleAccessToken>(&body).map_err(|e| {
            tracing::warn!(error = %e, %body, "Unexpected Google token response");
            rejected_code()
        })
    }

    async fn fetch_userinfo(
        &self,
        client: &reqwest::Client,
        access_token: &str,
    ) -> Result<GoogleUserInfo, SignInError> {
        let userinfo = client
            .get(&self.config.userinfo_url)
            .bearer_auth(access_token)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .int_err()?
            .error_for_status()
            .int_err()?
            .json::<GoogleUserInfo>()
            .await
            .int_err()?;

        Ok(userinfo)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl AuthenticationProvider for OAuthGoogle {
    fn provider_name(&self) -> &'static str {
        LOGIN_METHOD_GOOGLE
    }

    #[tracing::instrument(level = "debug", skip_all)]
    async fn login(
        &self,
        login_credentials_json: String,
    ) -> Result<ProviderLoginResponse, SignInError> {
        let credentials = serde_json::from_str::<GoogleLoginCredentials>(&login_credentials_json)
            .map_err(|e| SignInError::MalformedCredentials(Some(e)))?;

        let client = self.get_client().int_err()?;

        let token = self.exchange_code(&client, credentials.code).await?;
        let userinfo = self.fetch_userinfo(&client, &token.access_token).await?;

        let Some(email) = userinfo.email.filter(|email| !email.is_empty()) else {
            return Err(SignInError::Rejected {
                reason: "Google account has no email address".to_string(),
            });
        };

        let display_name = userinfo
            .name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or_else(|| email.clone());

        Ok(ProviderLoginResponse::ExternalIdentity(ExternalIdentity {
            email,
            display_name,
            avatar_url: userinfo.picture,
            provider: AccountProvider::Google,
        }))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Deserialize)]
pub struct GoogleLoginCredentials {
    pub code: String,
}

#[derive(Debug, Clone, Deserialize)]
struct GoogleAccessToken {
    access_token: String,
}

#[derive(Debug, Clone, Deserialize)]
struct GoogleUserInfo {
    email: Option<String>,
    name: Option<String>,
    picture: Option<String>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn rejected_code() -> SignInError {
    SignInError::Rejected {
        reason: GOOGLE_CODE_REJECTED_MESSAGE.to_string(),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
