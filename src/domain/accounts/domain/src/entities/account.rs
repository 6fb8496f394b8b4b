// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::VendorInfo;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

// TODO: have some length restrictions (0 < .. < limit)
pub type AccountDisplayName = String;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Opaque unique key of an account
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountID(String);

impl AccountID {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn new_generated() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AccountID {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: AccountID,
    /// Unique, compared exactly as stored
    pub email: String,
    #[serde(rename = "name", alias = "displayName")]
    pub display_name: AccountDisplayName,
    #[serde(rename = "image", alias = "avatarUrl")]
    pub avatar_url: Option<String>,
    pub role: AccountRole,
    pub provider: AccountProvider,
    pub vendor_verified: bool,
    pub vendor_info: Option<VendorInfo>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    pub fn is_vendor(&self) -> bool {
        self.role == AccountRole::Vendor
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Fixed at creation. Only an administrative action may change it, and the
/// settings update path has no way to express a role change.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum AccountRole {
    User,
    Vendor,
    Admin,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Where the account's credential lives. OAuth accounts have no local secret.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum AccountProvider {
    Password,
    Google,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
