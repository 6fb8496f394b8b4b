// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{AccountDisplayName, AccountRole, Password, VendorInfo};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Accounts seeded at startup, mostly for local development
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PredefinedAccountsConfig {
    pub predefined: Vec<AccountConfig>,
}

impl PredefinedAccountsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_account_config_by_email(&self, email: &str) -> Option<&AccountConfig> {
        self.predefined.iter().find(|c| c.email == email)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AccountConfig {
    pub email: String,

    /// Derived from the email's local part if omitted
    #[serde(default)]
    pub display_name: Option<AccountDisplayName>,

    /// Accounts without a password can only sign in via OAuth
    #[serde(default)]
    pub password: Option<Password>,

    #[serde(default = "AccountConfig::default_role")]
    pub role: AccountRole,

    #[serde(default)]
    pub vendor_verified: bool,

    #[serde(default)]
    pub avatar_url: Option<String>,

    #[serde(default)]
    pub vendor_info: Option<VendorInfo>,
}

impl AccountConfig {
    pub fn default_role() -> AccountRole {
        AccountRole::Vendor
    }

    pub fn get_display_name(&self) -> AccountDisplayName {
        if let Some(display_name) = &self.display_name {
            return display_name.clone();
        }
        self.email
            .split_once('@')
            .map_or_else(|| self.email.clone(), |(local, _)| local.to_string())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
