// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::Duration;
use internal_error::InternalError;
use rand::Rng;
use thiserror::Error;

use crate::{Account, LoggedAccount};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const ENV_VAR_EXPLORIFY_JWT_SECRET: &str = "EXPLORIFY_JWT_SECRET";

const RANDOM_SECRET_LENGTH: usize = 64;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Issues session tokens and resolves them back into an identity
#[cfg_attr(any(feature = "testing", test), mockall::automock)]
pub trait SessionService: Send + Sync {
    /// Captures id, role and verification flag of the account into the session
    fn issue_session(&self, account: &Account) -> Result<String, InternalError>;

    fn resolve_session(&self, access_token: &str) -> Result<LoggedAccount, AccessTokenError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum AccessTokenError {
    #[error("Invalid access token")]
    Invalid(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("Expired access token")]
    Expired,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub jwt_secret: String,
    pub session_ttl: Duration,
}

impl SessionConfig {
    pub fn default_session_ttl() -> Duration {
        Duration::days(30)
    }

    /// Missing secrets are replaced by a random one, so sessions will not
    /// survive a restart
    pub fn new(maybe_jwt_secret: Option<String>, session_ttl: Duration) -> Self {
        Self {
            jwt_secret: maybe_jwt_secret.unwrap_or_else(random_secret),
            session_ttl,
        }
    }
}

fn random_secret() -> String {
    rand::thread_rng()
        .sample_iter(&rand::distributions::Alphanumeric)
        .take(RANDOM_SECRET_LENGTH)
        .map(char::from)
        .collect()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
