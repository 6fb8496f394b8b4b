// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::Serialize;

use crate::{AccountID, SignInError};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const LOGIN_METHOD_PASSWORD: &str = "password";
pub const LOGIN_METHOD_GOOGLE: &str = "oauth_google";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait AuthenticationService: Send + Sync {
    fn supported_login_methods(&self) -> Vec<&'static str>;

    /// Verifies the credentials with the provider registered for
    /// `login_method` and issues a session on success
    async fn login(
        &self,
        login_method: &str,
        login_credentials_json: String,
    ) -> Result<LoginResponse, SignInError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub account_id: AccountID,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
