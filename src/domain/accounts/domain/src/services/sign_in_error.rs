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

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Every way a sign-in attempt can fail.
///
/// Callers switch on the variant (or on [`SignInError::kind`] across process
/// boundaries), never on the message text.
#[derive(Error, Debug)]
pub enum SignInError {
    #[error("Email and password are required")]
    MalformedCredentials(#[source] Option<serde_json::Error>),

    #[error("No vendor account found with this email")]
    NoSuchVendorAccount,

    #[error("This platform is for vendors only. Please use the main Explorify website.")]
    NotAVendorAccount,

    #[error("This account uses OAuth. Please sign in with Google.")]
    AccountUsesOAuthOnly,

    #[error("Invalid password")]
    InvalidCredentials,

    /// OAuth identity belongs to a plain user of the main site
    #[error("This is the vendor portal. You have a user account. Redirecting you to Explorify Trips...")]
    RedirectToUserSite,

    #[error("Rejected by identity provider: {reason}")]
    Rejected { reason: String },

    #[error("Unsupported login method '{method}'")]
    UnsupportedMethod { method: String },

    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl SignInError {
    pub fn kind(&self) -> SignInErrorKind {
        match self {
            Self::MalformedCredentials(_) => SignInErrorKind::MalformedCredentials,
            Self::NoSuchVendorAccount => SignInErrorKind::NoSuchVendorAccount,
            Self::NotAVendorAccount => SignInErrorKind::NotAVendorAccount,
            Self::AccountUsesOAuthOnly => SignInErrorKind::AccountUsesOAuthOnly,
            Self::InvalidCredentials => SignInErrorKind::InvalidCredentials,
            Self::RedirectToUserSite => SignInErrorKind::RedirectToUserSite,
            Self::Rejected { .. } => SignInErrorKind::Rejected,
            Self::UnsupportedMethod { .. } => SignInErrorKind::UnsupportedMethod,
            Self::Internal(_) => SignInErrorKind::Internal,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
pub enum SignInErrorKind {
    MalformedCredentials,
    NoSuchVendorAccount,
    NotAVendorAccount,
    AccountUsesOAuthOnly,
    InvalidCredentials,
    RedirectToUserSite,
    Rejected,
    UnsupportedMethod,
    Internal,
}

impl SignInErrorKind {
    /// Account belongs on the general-audience site rather than this portal
    pub fn is_user_site_redirect(&self) -> bool {
        matches!(self, Self::NotAVendorAccount | Self::RedirectToUserSite)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
