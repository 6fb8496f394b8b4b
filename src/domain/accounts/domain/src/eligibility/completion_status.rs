// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::Serialize;

use crate::{Account, BankDetails, MissingField, VendorInfo};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const PROFILE_COMPLETE_MESSAGE: &str = "Your vendor profile is complete!";
pub const PROFILE_INCOMPLETE_FALLBACK_MESSAGE: &str =
    "Complete your profile to start posting trips";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Derived view of whether a vendor may publish trip listings.
///
/// Never persisted: recompute it from the current account on every decision.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompletionStatus {
    pub is_complete: bool,
    pub is_verified: bool,
    pub has_org_details: bool,
    pub has_bank_details: bool,
    pub missing_fields: Vec<MissingField>,
}

impl CompletionStatus {
    /// Evaluates the completion rules against an account.
    ///
    /// Absent accounts and non-vendors are not applicable: every flag is
    /// false and nothing is reported missing.
    pub fn evaluate(account: Option<&Account>) -> Self {
        let Some(account) = account else {
            return Self::default();
        };
        if !account.is_vendor() {
            return Self::default();
        }

        let mut missing_fields = Vec::new();

        let is_verified = account.vendor_verified;
        if !is_verified {
            missing_fields.push(MissingField::AdminVerification);
        }

        let empty_info = VendorInfo::default();
        let info = account.vendor_info.as_ref().unwrap_or(&empty_info);

        let mut has_org_details = true;
        for (value, field) in [
            (&info.organization_name, MissingField::OrganizationName),
            (&info.address, MissingField::BusinessAddress),
            (&info.phone_number, MissingField::PhoneNumber),
        ] {
            if !is_filled(value) {
                has_org_details = false;
                missing_fields.push(field);
            }
        }

        let has_bank_details = info.bank_details.as_ref().is_some_and(has_payout_method);
        if !has_bank_details {
            missing_fields.push(MissingField::PayoutMethod);
        }

        Self {
            is_complete: is_verified && has_org_details && has_bank_details,
            is_verified,
            has_org_details,
            has_bank_details,
            missing_fields,
        }
    }

    /// Human readable summary of the status
    pub fn describe(&self) -> String {
        if self.is_complete {
            return PROFILE_COMPLETE_MESSAGE.to_string();
        }
        if self.missing_fields.is_empty() {
            return PROFILE_INCOMPLETE_FALLBACK_MESSAGE.to_string();
        }

        let labels: Vec<&str> = self.missing_fields.iter().map(MissingField::label).collect();
        format!(
            "Complete your profile to post trips. Missing: {}",
            labels.join(", ")
        )
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// A full bank account, or a UPI handle on its own
fn has_payout_method(bank: &BankDetails) -> bool {
    let has_bank_account = is_filled(&bank.account_number)
        && is_filled(&bank.ifsc_code)
        && is_filled(&bank.account_holder_name);

    has_bank_account || is_filled(&bank.upi_id)
}

fn is_filled(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
