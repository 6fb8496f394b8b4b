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
use internal_error::InternalError;

use crate::domain::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct AccessGateImpl {
    account_repo: Arc<dyn AccountRepository>,
}

#[component(pub)]
#[interface(dyn AccessGate)]
impl AccessGateImpl {
    pub fn new(account_repo: Arc<dyn AccountRepository>) -> Self {
        Self { account_repo }
    }

    /// Loads the current record for the subject.
    ///
    /// Prefers the account id cached in the session and falls back to the
    /// email. `None` means the session points at nothing we know.
    async fn load_account(
        &self,
        subject: &CurrentAccountSubject,
    ) -> Result<Option<Account>, InternalError> {
        if let Some(account_id) = subject.account_id() {
            return match self.account_repo.get_account_by_id(account_id).await {
                Ok(account) => Ok(Some(account)),
                Err(GetAccountByIdError::NotFound(_)) => Ok(None),
                Err(GetAccountByIdError::Internal(e)) => Err(e),
            };
        }

        match subject.email() {
            Some(email) => self
                .account_repo
                .find_account_by_email(email)
                .await
                .map_err(|e| match e {
                    FindAccountByEmailError::Internal(e) => e,
                }),
            None => Ok(None),
        }
    }
}

#[async_trait::async_trait]
impl AccessGate for AccessGateImpl {
    #[tracing::instrument(level = "debug", skip_all, fields(%page))]
    async fn authorize_page(
        &self,
        subject: &CurrentAccountSubject,
        page: PortalPage,
    ) -> Result<PageAccess, AccessGateError> {
        let account = self.load_account(subject).await?;

        decide_page_access(subject, account).map_err(|denied| {
            tracing::warn!(%page, reason = %denied, "Page access refused");
            denied.into()
        })
    }

    #[tracing::instrument(level = "debug", skip_all)]
    async fn authorize_trip_mutation(
        &self,
        subject: &CurrentAccountSubject,
    ) -> Result<PageAccess, AccessGateError> {
        let account = self.load_account(subject).await?;

        decide_trip_mutation(subject, account).map_err(|denied| {
            tracing::warn!(reason = %denied, "Trip mutation refused");
            denied.into()
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
