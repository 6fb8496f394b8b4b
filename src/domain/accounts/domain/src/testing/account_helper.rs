// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{DateTime, TimeZone, Utc};

use crate::{Account, AccountID, AccountProvider, AccountRole, BankDetails, VendorInfo};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct AccountTestHelper {}

impl AccountTestHelper {
    pub fn registered_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap()
    }

    /// Freshly signed up vendor: unverified, no vendor info
    pub fn vendor(email: &str) -> Account {
        Self::with_role(email, AccountRole::Vendor)
    }

    /// Verified vendor with org details and a UPI handle
    pub fn complete_vendor(email: &str) -> Account {
        let mut account = Self::vendor(email);
        account.vendor_verified = true;
        account.vendor_info = Some(VendorInfo {
            organization_name: Some("Acme Tours".into()),
            address: Some("12 Main St".into()),
            phone_number: Some("+911234567890".into()),
            bank_details: Some(BankDetails {
                upi_id: Some("acme@upi".into()),
                ..Default::default()
            }),
        });
        account
    }

    pub fn user(email: &str) -> Account {
        Self::with_role(email, AccountRole::User)
    }

    pub fn admin(email: &str) -> Account {
        Self::with_role(email, AccountRole::Admin)
    }

    pub fn with_role(email: &str, role: AccountRole) -> Account {
        let display_name = email.split('@').next().unwrap_or(email).to_string();

        Account {
            id: AccountID::new(format!("id-{display_name}")),
            email: email.to_string(),
            display_name,
            avatar_url: None,
            role,
            provider: AccountProvider::Password,
            vendor_verified: false,
            vendor_info: None,
            created_at: Self::registered_at(),
            updated_at: Self::registered_at(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
