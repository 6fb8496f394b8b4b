// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::collections::HashSet;
use std::sync::Arc;

use dill::*;
use internal_error::{ErrorIntoInternal, InternalError};

use crate::domain::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Registers the configured accounts on a one-time basis.
///
/// Accounts whose email is already known are left untouched, so edits made
/// through the portal survive restarts.
pub struct PredefinedAccountsRegistrator {
    predefined_accounts_config: Arc<PredefinedAccountsConfig>,
    account_repo: Arc<dyn AccountRepository>,
    account_service: Arc<dyn AccountService>,
}

#[component(pub)]
impl PredefinedAccountsRegistrator {
    pub fn new(
        predefined_accounts_config: Arc<PredefinedAccountsConfig>,
        account_repo: Arc<dyn AccountRepository>,
        account_service: Arc<dyn AccountService>,
    ) -> Self {
        Self {
            predefined_accounts_config,
            account_repo,
            account_service,
        }
    }

    #[tracing::instrument(
        level = "debug",
        skip_all,
        name = "PredefinedAccountsRegistrator::run_initialization"
    )]
    pub async fn run_initialization(&self) -> Result<(), InternalError> {
        let mut seen_emails = HashSet::new();

        for account_config in &self.predefined_accounts_config.predefined {
            if !seen_emails.insert(account_config.email.as_str()) {
                tracing::warn!(
                    email = %account_config.email,
                    "Duplicate predefined account configuration. Skipping."
                );
                continue;
            }

            let existing = self
                .account_repo
                .find_account_by_email(&account_config.email)
                .await
                .map_err(ErrorIntoInternal::int_err)?;
            if existing.is_some() {
                continue;
            }

            self.register_unknown_account(account_config).await?;
        }

        Ok(())
    }

    async fn register_unknown_account(
        &self,
        account_config: &AccountConfig,
    ) -> Result<(), InternalError> {
        let provider = if account_config.password.is_some() {
            AccountProvider::Password
        } else {
            AccountProvider::Google
        };

        let account = self
            .account_service
            .create_account(NewAccount {
                email: account_config.email.clone(),
                display_name: account_config.get_display_name(),
                avatar_url: account_config.avatar_url.clone(),
                role: account_config.role,
                provider,
                vendor_verified: account_config.vendor_verified,
                vendor_info: account_config.vendor_info.clone(),
                password: account_config.password.clone(),
            })
            .await
            .map_err(ErrorIntoInternal::int_err)?;

        tracing::info!(
            account_id = %account.id,
            email = %account.email,
            role = %account.role,
            "Registered predefined account"
        );

        Ok(())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
