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

use crate::AccountID;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Locally stored password hashes. OAuth-only accounts have no entry here.
#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait PasswordHashRepository: Send + Sync {
    async fn save_password_hash(
        &self,
        account_id: &AccountID,
        password_hash: String,
    ) -> Result<(), SavePasswordHashError>;

    async fn find_password_hash_by_account_id(
        &self,
        account_id: &AccountID,
    ) -> Result<Option<String>, FindPasswordHashError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum SavePasswordHashError {
    #[error("Account not found by id: '{account_id}'")]
    AccountNotFound { account_id: AccountID },

    #[error(transparent)]
    Internal(#[from] InternalError),
}

#[derive(Error, Debug)]
pub enum FindPasswordHashError {
    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
