// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use crypto_utils::{Argon2Hasher, Hasher, PasswordHashingMode, VerificationError};
use internal_error::{InternalError, ResultIntoInternal};

use crate::domain::Password;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

// Argon2 is compute-intensive, so both operations run on the blocking pool

pub(crate) async fn hash_password(
    hashing_mode: PasswordHashingMode,
    password: Password,
) -> Result<String, InternalError> {
    tokio::task::spawn_blocking(move || {
        tracing::info_span!("Generate password hash").in_scope(|| {
            Argon2Hasher::new(hashing_mode)
                .hash(password.as_bytes())
                .int_err()
        })
    })
    .await
    .int_err()?
}

/// Returns `false` when the password does not match the hash
pub(crate) async fn verify_password(
    hashing_mode: PasswordHashingMode,
    password: String,
    password_hash: String,
) -> Result<bool, InternalError> {
    tokio::task::spawn_blocking(move || {
        tracing::info_span!("Verify password hash").in_scope(|| {
            match Argon2Hasher::new(hashing_mode).verify(password.as_bytes(), &password_hash) {
                Ok(()) => Ok(true),
                Err(VerificationError::Mismatch) => Ok(false),
                Err(VerificationError::Internal(e)) => Err(e),
            }
        })
    })
    .await
    .int_err()?
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
