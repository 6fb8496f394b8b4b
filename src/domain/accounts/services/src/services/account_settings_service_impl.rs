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
use time_source::SystemTimeSource;

use crate::domain::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct AccountSettingsServiceImpl {
    account_repo: Arc<dyn AccountRepository>,
    time_source: Arc<dyn SystemTimeSource>,
}

#[component(pub)]
#[interface(dyn AccountSettingsService)]
impl AccountSettingsServiceImpl {
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        time_source: Arc<dyn SystemTimeSource>,
    ) -> Self {
        Self {
            account_repo,
            time_source,
        }
    }
}

#[async_trait::async_trait]
impl AccountSettingsService for AccountSettingsServiceImpl {
    #[tracing::instrument(level = "debug", skip_all)]
    async fn get_settings(
        &self,
        subject: &CurrentAccountSubject,
    ) -> Result<Account, GetSettingsError> {
        let email = subject.email().ok_or(GetSettingsError::Unauthenticated)?;

        self.account_repo
            .find_account_by_email(email)
            .await
            .map_err(|e| match e {
                FindAccountByEmailError::Internal(e) => GetSettingsError::Internal(e),
            })?
            .ok_or(GetSettingsError::NotFound)
    }

    #[tracing::instrument(level = "debug", skip_all)]
    async fn update_settings(
        &self,
        subject: &CurrentAccountSubject,
        patch: AccountSettingsPatch,
    ) -> Result<Account, UpdateSettingsError> {
        let email = subject
            .email()
            .ok_or(UpdateSettingsError::Unauthenticated)?;

        let account = self
            .account_repo
            .find_account_by_email(email)
            .await
            .map_err(|e| match e {
                FindAccountByEmailError::Internal(e) => UpdateSettingsError::Internal(e),
            })?
            .ok_or(UpdateSettingsError::NotFound)?;

        if !account.is_vendor() {
            tracing::warn!(account_id = %account.id, role = %account.role, "Settings update refused");
            return Err(UpdateSettingsError::Forbidden);
        }

        let updated = self
            .account_repo
            .update_account(&account.id, &patch, self.time_source.now())
            .await
            .map_err(|e| match e {
                // Deleted between the read and the write
                UpdateAccountError::NotFound(_) => UpdateSettingsError::NotFound,
                UpdateAccountError::Internal(e) => UpdateSettingsError::Internal(e),
            })?;

        tracing::debug!(account_id = %updated.id, "Vendor settings updated");

        Ok(updated)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
