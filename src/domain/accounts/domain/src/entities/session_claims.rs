// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};

use crate::{Account, AccountID, AccountRole};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Subset of [`Account`] captured into a session at sign-in time
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionClaims {
    pub account_id: AccountID,
    pub role: AccountRole,
    pub vendor_verified: bool,
}

impl From<&Account> for SessionClaims {
    fn from(account: &Account) -> Self {
        Self {
            account_id: account.id.clone(),
            role: account.role,
            vendor_verified: account.vendor_verified,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
