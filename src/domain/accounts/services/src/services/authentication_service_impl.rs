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

use dill::*;
use internal_error::{ErrorIntoInternal, InternalError};

use crate::domain::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct AuthenticationServiceImpl {
    account_repo: Arc<dyn AccountRepository>,
    account_service: Arc<dyn AccountService>,
    session_service: Arc<dyn SessionService>,
    authentication_providers_by_method: HashMap<&'static str, Arc<dyn AuthenticationProvider>>,
}

#[component(pub)]
#[interface(dyn AuthenticationService)]
impl AuthenticationServiceImpl {
    pub fn new(
        authentication_providers: Vec<Arc<dyn AuthenticationProvider>>,
        account_repo: Arc<dyn AccountRepository>,
        account_service: Arc<dyn AccountService>,
        session_service: Arc<dyn SessionService>,
    ) -> Self {
        let mut authentication_providers_by_method = HashMap::new();

        for authentication_provider in authentication_providers {
            let login_method = authentication_provider.provider_name();

            let insert_result =
                authentication_providers_by_method.insert(login_method, authentication_provider);

            assert!(
                insert_result.is_none(),
                "Duplicate authentication provider for method {login_method}"
            );
        }

        Self {
            account_repo,
            account_service,
            session_service,
            authentication_providers_by_method,
        }
    }

    fn resolve_authentication_provider(
        &self,
        login_method: &str,
    ) -> Result<Arc<dyn AuthenticationProvider>, SignInError> {
        self.authentication_providers_by_method
            .get(login_method)
            .cloned()
            .ok_or_else(|| SignInError::UnsupportedMethod {
                method: login_method.into(),
            })
    }

    /// Maps an identity vouched for by an OAuth provider to a portal account.
    ///
    /// Unknown emails get an unverified vendor account. Known accounts must be
    /// vendors or admins, plain users belong on the main site.
    async fn resolve_external_identity(
        &self,
        identity: ExternalIdentity,
    ) -> Result<Account, SignInError> {
        let maybe_account = self
            .account_repo
            .find_account_by_email(&identity.email)
            .await
            .map_err(ErrorIntoInternal::int_err)?;

        if let Some(account) = maybe_account {
            return match account.role {
                AccountRole::Vendor | AccountRole::Admin => Ok(account),
                AccountRole::User => Err(SignInError::RedirectToUserSite),
            };
        }

        let new_account = NewAccount::oauth_vendor(
            identity.email,
            identity.display_name,
            identity.avatar_url,
            identity.provider,
        );

        let account = self
            .account_service
            .create_account(new_account)
            .await
            .map_err(|e| -> InternalError {
                match e {
                    AccountCreationError::Internal(e) => e,
                    e => e.int_err(),
                }
            })?;

        tracing::info!(
            account_id = %account.id,
            provider = %account.provider,
            "Provisioned vendor account on first sign-in"
        );

        Ok(account)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl AuthenticationService for AuthenticationServiceImpl {
    fn supported_login_methods(&self) -> Vec<&'static str> {
        let mut methods: Vec<_> = self
            .authentication_providers_by_method
            .keys()
            .copied()
            .collect();
        methods.sort_unstable();
        methods
    }

    #[tracing::instrument(level = "debug", skip_all, fields(%login_method))]
    async fn login(
        &self,
        login_method: &str,
        login_credentials_json: String,
    ) -> Result<LoginResponse, SignInError> {
        let provider = self.resolve_authentication_provider(login_method)?;

        let account = match provider.login(login_credentials_json).await? {
            ProviderLoginResponse::Verified(account) => account,
            ProviderLoginResponse::ExternalIdentity(identity) => {
                self.resolve_external_identity(identity).await?
            }
        };

        let access_token = self.session_service.issue_session(&account)?;

        tracing::debug!(account_id = %account.id, "Signed in");

        Ok(LoginResponse {
            access_token,
            account_id: account.id,
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
