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

use crate::{AccessDenied, CurrentAccountSubject, PageAccess, PortalPage};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Authorizes portal requests against freshly loaded account state.
///
/// Stateless: every call re-reads the account, nothing is cached between
/// requests.
#[cfg_attr(any(feature = "testing", test), mockall::automock)]
#[async_trait::async_trait]
pub trait AccessGate: Send + Sync {
    async fn authorize_page(
        &self,
        subject: &CurrentAccountSubject,
        page: PortalPage,
    ) -> Result<PageAccess, AccessGateError>;

    async fn authorize_trip_mutation(
        &self,
        subject: &CurrentAccountSubject,
    ) -> Result<PageAccess, AccessGateError>;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Error, Debug)]
pub enum AccessGateError {
    #[error(transparent)]
    Denied(#[from] AccessDenied),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
