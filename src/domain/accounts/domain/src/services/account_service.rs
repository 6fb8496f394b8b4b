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

use crate::{
    Account,
    AccountDisplayName,
    AccountProvider,
    AccountRole,
    CreateAccountErrorDuplicate,
    Password,
    VendorInfo,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait AccountService: Send + Sync {
    async fn create_account(&self, new_account: NewAccount) -> Result<Account, AccountCreationError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct NewAccount {
    pub email: String,
    pub display_name: AccountDisplayName,
    pub avatar_url: Option<String>,
    pub role: AccountRole,
    pub provider: AccountProvider,
    pub vendor_verified: bool,
    pub vendor_info: Option<VendorInfo>,
    /// Must be set for [`AccountProvider::Password`] accounts
    pub password: Option<Password>,
}

impl NewAccount {
    /// Self-service signup: always an unverified vendor
    pub fn vendor_signup(email: String, display_name: AccountDisplayName, password: Password) -> Self {
        Self {
            email,
            display_name,
            avatar_url: None,
            role: AccountRole::Vendor,
            provider: AccountProvider::Password,
            vendor_verified: false,
            vendor_info: None,
            password: Some(password),
        }
    }

    /// First sign-in through an OAuth provider
    pub fn oauth_vendor(
        email: String,
        display_name: AccountDisplayName,
        avatar_url: Option<String>,
        provider: AccountProvider,
    ) -> Self {
        Self {
            email,
            display_name,
            avatar_url,
            role: AccountRole::Vendor,
            provider,
            vendor_verified: false,
            vendor_info: None,
            password: None,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum AccountCreationError {
    #[error(transparent)]
    Duplicate(#[from] CreateAccountErrorDuplicate),

    #[error("Password is required for password-based accounts")]
    PasswordRequired,

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
