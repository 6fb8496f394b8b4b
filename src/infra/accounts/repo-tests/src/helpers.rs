// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crypto_utils::{Argon2Hasher, Hasher, PasswordHashingMode};
use explorify_accounts::testing::AccountTestHelper;
use explorify_accounts::{Account, AccountID, AccountRole};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub fn make_test_account(id: &str, email: &str, role: AccountRole) -> Account {
    Account {
        id: AccountID::new(id),
        ..AccountTestHelper::with_role(email, role)
    }
}

pub fn make_password_hash(password: &str) -> String {
    Argon2Hasher::new(PasswordHashingMode::Testing)
        .hash(password.as_bytes())
        .unwrap()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
