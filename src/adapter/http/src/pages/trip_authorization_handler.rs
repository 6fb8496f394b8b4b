// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use axum::Extension;
use axum::response::IntoResponse;
use dill::Catalog;
use explorify_accounts::*;

use crate::axum_utils::{get_component, see_other};
use crate::{ApiError, PortalConfig};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Checked before a trip listing is created or activated: `204` lets the
/// caller proceed, otherwise it is sent to complete the profile or to sign in
#[tracing::instrument(level = "info", skip_all)]
pub async fn trip_authorization_handler(
    Extension(catalog): Extension<Catalog>,
) -> Result<axum::response::Response, ApiError> {
    let subject = get_component::<CurrentAccountSubject>(&catalog)?;
    let access_gate = get_component::<dyn AccessGate>(&catalog)?;

    match access_gate.authorize_trip_mutation(&subject).await {
        Ok(_) => Ok(http::StatusCode::NO_CONTENT.into_response()),
        Err(AccessGateError::Denied(denied)) => {
            let portal_config = get_component::<PortalConfig>(&catalog)?;
            Ok(see_other(
                portal_config.redirect_location(denied.redirect_target()),
            ))
        }
        Err(AccessGateError::Internal(e)) => Err(ApiError::internal(e)),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
