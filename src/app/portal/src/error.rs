// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use internal_error::{BoxedError, InternalError};
use thiserror::Error;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Error)]
pub enum CLIError {
    /// Caller did something wrong: bad arguments, bad config
    #[error("{source}")]
    UsageError { source: BoxedError },

    #[error(transparent)]
    CriticalFailure(#[from] InternalError),
}

impl CLIError {
    pub fn usage_error(msg: impl Into<String>) -> Self {
        let msg: String = msg.into();
        Self::UsageError { source: msg.into() }
    }

    pub fn usage_error_from(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::UsageError { source: e.into() }
    }

    pub fn exit_code(&self) -> i32 {
        match self {
            Self::UsageError { .. } => 2,
            Self::CriticalFailure(_) => 1,
        }
    }
}

impl From<dill::InjectionError> for CLIError {
    fn from(e: dill::InjectionError) -> Self {
        Self::CriticalFailure(InternalError::new(e))
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
