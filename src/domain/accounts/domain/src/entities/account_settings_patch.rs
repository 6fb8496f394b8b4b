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

use crate::{Account, AccountDisplayName, BankDetails, VendorInfo};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Partial update of the user-editable part of an [`Account`].
///
/// Every field is optional: `None` keeps the stored value, `Some(v)` replaces
/// it. Role, email, provider and the verification flag are deliberately absent,
/// so no settings update can change them.
///
/// On the wire the patch is the flat body the settings form submits:
/// `{name, image, organizationName, address, phoneNumber, bankDetails}`.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "SettingsPatchBody", into = "SettingsPatchBody")]
pub struct AccountSettingsPatch {
    pub display_name: Option<AccountDisplayName>,
    pub avatar_url: Option<String>,
    pub vendor_info: VendorInfoPatch,
}

impl AccountSettingsPatch {
    /// Merges the patch into the account in place.
    ///
    /// The vendor info block always ends up present afterwards, even when the
    /// patch carried no vendor fields at all.
    pub fn apply_to(&self, account: &mut Account) {
        if let Some(display_name) = &self.display_name {
            account.display_name.clone_from(display_name);
        }
        if let Some(avatar_url) = &self.avatar_url {
            account.avatar_url = Some(avatar_url.clone());
        }

        let mut vendor_info = account.vendor_info.take().unwrap_or_default();
        self.vendor_info.apply_to(&mut vendor_info);
        account.vendor_info = Some(vendor_info);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VendorInfoPatch {
    pub organization_name: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub bank_details: Option<BankDetailsPatch>,
}

impl VendorInfoPatch {
    pub fn apply_to(&self, vendor_info: &mut VendorInfo) {
        merge_field(&mut vendor_info.organization_name, &self.organization_name);
        merge_field(&mut vendor_info.address, &self.address);
        merge_field(&mut vendor_info.phone_number, &self.phone_number);

        if let Some(bank_details_patch) = &self.bank_details {
            let mut bank_details = vendor_info.bank_details.take().unwrap_or_default();
            bank_details_patch.apply_to(&mut bank_details);
            vendor_info.bank_details = Some(bank_details);
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BankDetailsPatch {
    #[serde(default)]
    pub account_holder_name: Option<String>,
    #[serde(default)]
    pub account_number: Option<String>,
    #[serde(default)]
    pub ifsc_code: Option<String>,
    #[serde(default)]
    pub bank_name: Option<String>,
    #[serde(default)]
    pub upi_id: Option<String>,
}

impl BankDetailsPatch {
    pub fn apply_to(&self, bank_details: &mut BankDetails) {
        merge_field(&mut bank_details.account_holder_name, &self.account_holder_name);
        merge_field(&mut bank_details.account_number, &self.account_number);
        merge_field(&mut bank_details.ifsc_code, &self.ifsc_code);
        merge_field(&mut bank_details.bank_name, &self.bank_name);
        merge_field(&mut bank_details.upi_id, &self.upi_id);
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[skip_serializing_none]
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct SettingsPatchBody {
    #[serde(default, alias = "displayName")]
    name: Option<AccountDisplayName>,
    #[serde(default, alias = "avatarUrl")]
    image: Option<String>,
    #[serde(default)]
    organization_name: Option<String>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    phone_number: Option<String>,
    #[serde(default)]
    bank_details: Option<BankDetailsPatch>,
}

impl From<SettingsPatchBody> for AccountSettingsPatch {
    fn from(body: SettingsPatchBody) -> Self {
        Self {
            display_name: body.name,
            avatar_url: body.image,
            vendor_info: VendorInfoPatch {
                organization_name: body.organization_name,
                address: body.address,
                phone_number: body.phone_number,
                bank_details: body.bank_details,
            },
        }
    }
}

impl From<AccountSettingsPatch> for SettingsPatchBody {
    fn from(patch: AccountSettingsPatch) -> Self {
        Self {
            name: patch.display_name,
            image: patch.avatar_url,
            organization_name: patch.vendor_info.organization_name,
            address: patch.vendor_info.address,
            phone_number: patch.vendor_info.phone_number,
            bank_details: patch.vendor_info.bank_details,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn merge_field(stored: &mut Option<String>, patch: &Option<String>) {
    if let Some(value) = patch {
        *stored = Some(value.clone());
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
