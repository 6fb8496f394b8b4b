// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use internal_error::ErrorIntoInternal;
use serde::{Deserialize, Serialize};

use crate::{Hasher, HashingError, VerificationError};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Cost profile of password hashing.
///
/// `Testing` uses the weakest parameters Argon2 accepts and must never be used
/// outside of test suites.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PasswordHashingMode {
    #[default]
    Default,
    Testing,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub struct Argon2Hasher<'a> {
    argon2: Argon2<'a>,
}

impl Argon2Hasher<'_> {
    pub fn new(mode: PasswordHashingMode) -> Self {
        let argon2 = match mode {
            PasswordHashingMode::Default => Argon2::default(),
            PasswordHashingMode::Testing => Argon2::new(
                Algorithm::Argon2id,
                Version::V0x13,
                Params::new(Params::MIN_M_COST, Params::MIN_T_COST, Params::MIN_P_COST, None)
                    .unwrap(),
            ),
        };

        Self { argon2 }
    }
}

impl Hasher for Argon2Hasher<'_> {
    fn hash(&self, value: &[u8]) -> Result<String, HashingError> {
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = self
            .argon2
            .hash_password(value, &salt)
            .map_err(|e| HashingError::Internal(e.to_string().int_err()))?;

        Ok(password_hash.to_string())
    }

    fn verify(&self, value: &[u8], hashed_value: &str) -> Result<(), VerificationError> {
        let parsed_hash = PasswordHash::new(hashed_value)
            .map_err(|e| VerificationError::Internal(e.to_string().int_err()))?;

        match self.argon2.verify_password(value, &parsed_hash) {
            Ok(()) => Ok(()),
            Err(argon2::password_hash::Error::Password) => Err(VerificationError::Mismatch),
            Err(e) => Err(VerificationError::Internal(e.to_string().int_err())),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////


////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
