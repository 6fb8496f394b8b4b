// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

pub const MIN_PASSWORD_LENGTH: usize = 8;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Plain-text password as supplied at signup or sign-in. Never logged.
#[nutype::nutype(
    sanitize(trim),
    validate(with = validate_password, error = PasswordValidationError),
    derive(PartialEq, Eq, Clone, Deref, Serialize, Deserialize)
)]
pub struct Password(String);

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password(********)")
    }
}

impl std::fmt::Display for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("********")
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordValidationError {
    #[error("Password must be at least {MIN_PASSWORD_LENGTH} characters long")]
    TooShort,
    #[error("Password may only contain ASCII characters")]
    NonAscii,
}

fn validate_password(password: &str) -> Result<(), PasswordValidationError> {
    if !password.is_ascii() {
        return Err(PasswordValidationError::NonAscii);
    }
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(PasswordValidationError::TooShort);
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
