// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::{Account, AccountDisplayName, AccountProvider, SignInError};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// One way of proving who you are
#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait AuthenticationProvider: Send + Sync {
    fn provider_name(&self) -> &'static str;

    async fn login(
        &self,
        login_credentials_json: String,
    ) -> Result<ProviderLoginResponse, SignInError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub enum ProviderLoginResponse {
    /// Provider checked the credentials against an existing account
    Verified(Account),

    /// Provider vouches for an email, the account may not exist yet
    ExternalIdentity(ExternalIdentity),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExternalIdentity {
    pub email: String,
    pub display_name: AccountDisplayName,
    pub avatar_url: Option<String>,
    pub provider: AccountProvider,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
