// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::{Account, CompletionStatus, CurrentAccountSubject};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Vendor-only pages of the portal
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum PortalPage {
    Dashboard,
    Settings,
}

/// Where a refused request is sent to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectTarget {
    SignIn,
    Settings,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AccessDenied {
    #[error("Not authenticated")]
    Unauthenticated,

    #[error("Account not found")]
    AccountNotFound,

    #[error("Portal is only available to vendor accounts")]
    Forbidden,

    #[error("{}", .0.describe())]
    IncompleteProfile(CompletionStatus),
}

impl AccessDenied {
    /// Every refusal is recovered from by a redirect, never by an error page
    pub fn redirect_target(&self) -> RedirectTarget {
        match self {
            Self::Unauthenticated | Self::AccountNotFound | Self::Forbidden => {
                RedirectTarget::SignIn
            }
            Self::IncompleteProfile(_) => RedirectTarget::Settings,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Outcome of a successful check: the fresh account and its current status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAccess {
    pub account: Account,
    pub completion: CompletionStatus,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Decides access to a vendor page.
///
/// `account` is the record freshly loaded for the subject, `None` if the store
/// has no such account. Vendors are always let through, whatever their
/// completion state, since these pages are where the profile gets completed.
pub fn decide_page_access(
    subject: &CurrentAccountSubject,
    account: Option<Account>,
) -> Result<PageAccess, AccessDenied> {
    let account = require_vendor(subject, account)?;
    let completion = CompletionStatus::evaluate(Some(&account));

    Ok(PageAccess {
        account,
        completion,
    })
}

/// Decides whether the subject may create or activate a trip listing.
///
/// Same chain as [`decide_page_access`], additionally requiring a complete
/// profile.
pub fn decide_trip_mutation(
    subject: &CurrentAccountSubject,
    account: Option<Account>,
) -> Result<PageAccess, AccessDenied> {
    let access = decide_page_access(subject, account)?;
    if !access.completion.is_complete {
        return Err(AccessDenied::IncompleteProfile(access.completion));
    }
    Ok(access)
}

fn require_vendor(
    subject: &CurrentAccountSubject,
    account: Option<Account>,
) -> Result<Account, AccessDenied> {
    if matches!(subject, CurrentAccountSubject::Anonymous(_)) {
        return Err(AccessDenied::Unauthenticated);
    }
    let account = account.ok_or(AccessDenied::AccountNotFound)?;
    if !account.is_vendor() {
        return Err(AccessDenied::Forbidden);
    }
    Ok(account)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
