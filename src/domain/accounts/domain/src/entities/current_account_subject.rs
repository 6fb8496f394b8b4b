// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::{AccountID, SessionClaims};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Who is asking, as far as the session layer can tell.
///
/// Only identifies the requester. Anything authorization-sensitive must be
/// decided against the account record loaded from the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrentAccountSubject {
    Logged(LoggedAccount),
    Anonymous(AnonymousAccountReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggedAccount {
    pub email: String,
    /// Snapshot taken when the session was issued, may be stale
    pub claims: Option<SessionClaims>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnonymousAccountReason {
    NoAuthenticationProvided,
    AuthenticationInvalid,
    AuthenticationExpired,
}

impl CurrentAccountSubject {
    pub fn anonymous(reason: AnonymousAccountReason) -> Self {
        Self::Anonymous(reason)
    }

    pub fn logged(email: impl Into<String>, claims: Option<SessionClaims>) -> Self {
        Self::Logged(LoggedAccount {
            email: email.into(),
            claims,
        })
    }

    pub fn email(&self) -> Option<&str> {
        match self {
            Self::Logged(l) => Some(l.email.as_str()),
            Self::Anonymous(_) => None,
        }
    }

    /// Account id as cached in the session, if the session carried one
    pub fn account_id(&self) -> Option<&AccountID> {
        match self {
            Self::Logged(l) => l.claims.as_ref().map(|c| &c.account_id),
            Self::Anonymous(_) => None,
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
