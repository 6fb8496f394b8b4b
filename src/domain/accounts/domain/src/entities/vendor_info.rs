// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Business details a vendor fills in on the settings page.
///
/// Every field is individually optional, storage imposes no constraints.
/// Which combination makes a vendor eligible is decided by
/// [`CompletionStatus::evaluate`](crate::CompletionStatus::evaluate).
#[skip_serializing_none]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorInfo {
    pub organization_name: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub bank_details: Option<BankDetails>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Payout details: either a full bank account or a UPI handle
#[skip_serializing_none]
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankDetails {
    pub account_holder_name: Option<String>,
    pub account_number: Option<String>,
    /// IFSC or another routing code
    pub ifsc_code: Option<String>,
    pub bank_name: Option<String>,
    pub upi_id: Option<String>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
