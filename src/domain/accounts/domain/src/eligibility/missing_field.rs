// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Serialize, Serializer};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// A single requirement a vendor has not met yet.
///
/// Declaration order is the order in which requirements are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, strum::EnumIter)]
pub enum MissingField {
    AdminVerification,
    OrganizationName,
    BusinessAddress,
    PhoneNumber,
    PayoutMethod,
}

impl MissingField {
    pub fn label(&self) -> &'static str {
        match self {
            Self::AdminVerification => "Admin verification pending",
            Self::OrganizationName => "Organization name",
            Self::BusinessAddress => "Business address",
            Self::PhoneNumber => "Phone number",
            Self::PayoutMethod => "Bank account or UPI details",
        }
    }
}

impl std::fmt::Display for MissingField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for MissingField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
