// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use crypto_utils::PasswordHashingMode;
use dill::*;
use internal_error::ErrorIntoInternal;
use serde::{Deserialize, Serialize};

use super::verify_password;
use crate::domain::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct LoginPasswordAuthProvider {
    account_repo: Arc<dyn AccountRepository>,
    password_hash_repo: Arc<dyn PasswordHashRepository>,
    password_hashing_mode: PasswordHashingMode,
}

#[component(pub)]
#[interface(dyn AuthenticationProvider)]
impl LoginPasswordAuthProvider {
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        password_hash_repo: Arc<dyn PasswordHashRepository>,
        password_hashing_mode: Option<Arc<PasswordHashingMode>>,
    ) -> Self {
        Self {
            account_repo,
            password_hash_repo,
            password_hashing_mode: password_hashing_mode
                .map_or(PasswordHashingMode::Default, |mode| *mode),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[async_trait::async_trait]
impl AuthenticationProvider for LoginPasswordAuthProvider {
    fn provider_name(&self) -> &'static str {
        LOGIN_METHOD_PASSWORD
    }

    async fn login(
        &self,
        login_credentials_json: String,
    ) -> Result<ProviderLoginResponse, SignInError> {
        let credentials =
            serde_json::from_str::<PasswordLoginCredentials>(login_credentials_json.as_str())
                .map_err(|e| SignInError::MalformedCredentials(Some(e)))?;

        if credentials.email.is_empty() || credentials.password.is_empty() {
            return Err(SignInError::MalformedCredentials(None));
        }

        // Checks run in a fixed order, each with its own outcome
        let account = self
            .account_repo
            .find_account_by_email(&credentials.email)
            .await
            .map_err(ErrorIntoInternal::int_err)?
            .ok_or(SignInError::NoSuchVendorAccount)?;

        if !account.is_vendor() {
            return Err(SignInError::NotAVendorAccount);
        }

        let password_hash = self
            .password_hash_repo
            .find_password_hash_by_account_id(&account.id)
            .await
            .map_err(ErrorIntoInternal::int_err)?
            .ok_or(SignInError::AccountUsesOAuthOnly)?;

        let is_valid = verify_password(
            self.password_hashing_mode,
            credentials.password,
            password_hash,
        )
        .await?;
        if !is_valid {
            return Err(SignInError::InvalidCredentials);
        }

        Ok(ProviderLoginResponse::Verified(account))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PasswordLoginCredentials {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
