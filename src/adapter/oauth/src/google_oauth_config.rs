// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use secrecy::SecretString;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const ENV_VAR_EXPLORIFY_GOOGLE_CLIENT_ID: &str = "EXPLORIFY_GOOGLE_CLIENT_ID";
pub const ENV_VAR_EXPLORIFY_GOOGLE_CLIENT_SECRET: &str = "EXPLORIFY_GOOGLE_CLIENT_SECRET";

pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Client registration of the portal with Google
#[derive(Debug)]
pub struct GoogleOAuthConfig {
    pub client_id: String,
    pub client_secret: SecretString,
    /// Must match the redirect URI the authorization code was issued for
    pub redirect_uri: String,
    pub token_url: String,
    pub userinfo_url: String,
}

impl GoogleOAuthConfig {
    pub fn new(client_id: String, client_secret: String, redirect_uri: String) -> Self {
        Self {
            client_id,
            client_secret: SecretString::from(client_secret),
            redirect_uri,
            token_url: GOOGLE_TOKEN_URL.to_string(),
            userinfo_url: GOOGLE_USERINFO_URL.to_string(),
        }
    }

    /// Fills whatever is missing from the environment. Returns `None` when the
    /// client is still not fully identified, which means Google sign-in stays
    /// disabled.
    pub fn resolve(
        maybe_client_id: Option<String>,
        maybe_client_secret: Option<String>,
        redirect_uri: String,
    ) -> Option<Self> {
        let client_id =
            maybe_client_id.or_else(|| std::env::var(ENV_VAR_EXPLORIFY_GOOGLE_CLIENT_ID).ok())?;
        let client_secret = maybe_client_secret
            .or_else(|| std::env::var(ENV_VAR_EXPLORIFY_GOOGLE_CLIENT_SECRET).ok())?;

        if client_id.is_empty() || client_secret.is_empty() {
            return None;
        }

        Some(Self::new(client_id, client_secret, redirect_uri))
    }

    pub fn with_endpoints(mut self, token_url: String, userinfo_url: String) -> Self {
        self.token_url = token_url;
        self.userinfo_url = userinfo_url;
        self
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
