// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::InternalError;
use thiserror::Error;

use crate::{Account, AccountSettingsPatch, CurrentAccountSubject};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Settings form backend. The account is resolved by the subject's email.
#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait AccountSettingsService: Send + Sync {
    async fn get_settings(
        &self,
        subject: &CurrentAccountSubject,
    ) -> Result<Account, GetSettingsError>;

    /// Only vendors may update their settings
    async fn update_settings(
        &self,
        subject: &CurrentAccountSubject,
        patch: AccountSettingsPatch,
    ) -> Result<Account, UpdateSettingsError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum GetSettingsError {
    #[error("Unauthorized")]
    Unauthenticated,

    #[error("User not found")]
    NotFound,

    #[error(transparent)]
    Internal(#[from] InternalError),
}

#[derive(Error, Debug)]
pub enum UpdateSettingsError {
    #[error("Unauthorized")]
    Unauthenticated,

    #[error("User not found")]
    NotFound,

    #[error("Only vendors can update settings")]
    Forbidden,

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
