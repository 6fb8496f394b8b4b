// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crate::{Account, AnonymousAccountReason, CurrentAccountSubject, SessionClaims};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct CurrentAccountSubjectTestHelper {}

impl CurrentAccountSubjectTestHelper {
    /// Session that only knows the email
    pub fn logged(email: &str) -> CurrentAccountSubject {
        CurrentAccountSubject::logged(email, None)
    }

    /// Session issued for the given account, claims snapshot included
    pub fn logged_as(account: &Account) -> CurrentAccountSubject {
        CurrentAccountSubject::logged(&account.email, Some(SessionClaims::from(account)))
    }

    pub fn anonymous() -> CurrentAccountSubject {
        CurrentAccountSubject::anonymous(AnonymousAccountReason::NoAuthenticationProvided)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
