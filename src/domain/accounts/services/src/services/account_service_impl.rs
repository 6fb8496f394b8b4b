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
use time_source::SystemTimeSource;

use super::hash_password;
use crate::domain::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct AccountServiceImpl {
    account_repo: Arc<dyn AccountRepository>,
    password_hash_repo: Arc<dyn PasswordHashRepository>,
    time_source: Arc<dyn SystemTimeSource>,
    password_hashing_mode: PasswordHashingMode,
}

#[component(pub)]
#[interface(dyn AccountService)]
impl AccountServiceImpl {
    #[allow(clippy::needless_pass_by_value)]
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        password_hash_repo: Arc<dyn PasswordHashRepository>,
        time_source: Arc<dyn SystemTimeSource>,
        password_hashing_mode: Option<Arc<PasswordHashingMode>>,
    ) -> Self {
        Self {
            account_repo,
            password_hash_repo,
            time_source,
            // Unconfigured means production strength
            password_hashing_mode: password_hashing_mode
                .map_or(PasswordHashingMode::Default, |mode| *mode),
        }
    }

    /// Rolls back an account whose credential could not be stored, so the
    /// email can sign up again
    async fn discard_account(&self, account_id: &AccountID) {
        match self.account_repo.delete_account(account_id).await {
            Ok(()) => tracing::warn!(%account_id, "Discarded account without a stored password"),
            Err(e) => tracing::error!(
                %account_id,
                error = ?e,
                "Failed to discard account without a stored password"
            ),
        }
    }
}

#[async_trait::async_trait]
impl AccountService for AccountServiceImpl {
    #[tracing::instrument(level = "debug", skip_all, fields(email = %new_account.email, role = %new_account.role))]
    async fn create_account(&self, new_account: NewAccount) -> Result<Account, AccountCreationError> {
        if new_account.provider == AccountProvider::Password && new_account.password.is_none() {
            return Err(AccountCreationError::PasswordRequired);
        }

        // Nothing is stored until the password is hashed
        let maybe_password_hash = match new_account.password {
            Some(password) => Some(hash_password(self.password_hashing_mode, password).await?),
            None => None,
        };

        let now = self.time_source.now();
        let account = Account {
            id: AccountID::new_generated(),
            email: new_account.email,
            display_name: new_account.display_name,
            avatar_url: new_account.avatar_url,
            role: new_account.role,
            provider: new_account.provider,
            vendor_verified: new_account.vendor_verified,
            vendor_info: new_account.vendor_info,
            created_at: now,
            updated_at: now,
        };

        self.account_repo
            .create_account(&account)
            .await
            .map_err(|e| match e {
                CreateAccountError::Duplicate(e) => AccountCreationError::Duplicate(e),
                CreateAccountError::Internal(e) => AccountCreationError::Internal(e),
            })?;

        if let Some(password_hash) = maybe_password_hash {
            let res = self
                .password_hash_repo
                .save_password_hash(&account.id, password_hash)
                .await;

            if let Err(e) = res {
                self.discard_account(&account.id).await;
                return Err(AccountCreationError::Internal(e.int_err()));
            }
        }

        tracing::info!(account_id = %account.id, "Account created");

        Ok(account)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
