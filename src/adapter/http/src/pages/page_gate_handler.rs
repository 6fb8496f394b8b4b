// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use axum::response::IntoResponse;
use axum::{Extension, Json};
use dill::Catalog;
use explorify_accounts::*;
use serde::Serialize;

use crate::axum_utils::{get_component, see_other};
use crate::{ApiError, PortalConfig};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// What a vendor page renders from
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageData {
    pub account: Account,
    pub completion: CompletionStatus,
    pub message: String,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn dashboard_page_handler(
    Extension(catalog): Extension<Catalog>,
) -> Result<axum::response::Response, ApiError> {
    gate_page(&catalog, PortalPage::Dashboard).await
}

pub async fn settings_page_handler(
    Extension(catalog): Extension<Catalog>,
) -> Result<axum::response::Response, ApiError> {
    gate_page(&catalog, PortalPage::Settings).await
}

#[tracing::instrument(level = "info", skip_all, fields(%page))]
async fn gate_page(
    catalog: &Catalog,
    page: PortalPage,
) -> Result<axum::response::Response, ApiError> {
    let subject = get_component::<CurrentAccountSubject>(catalog)?;
    let access_gate = get_component::<dyn AccessGate>(catalog)?;

    match access_gate.authorize_page(&subject, page).await {
        Ok(PageAccess {
            account,
            completion,
        }) => {
            let message = completion.describe();
            Ok(Json(PageData {
                account,
                completion,
                message,
            })
            .into_response())
        }
        Err(AccessGateError::Denied(denied)) => {
            let portal_config = get_component::<PortalConfig>(catalog)?;
            Ok(see_other(
                portal_config.redirect_location(denied.redirect_target()),
            ))
        }
        Err(AccessGateError::Internal(e)) => Err(ApiError::internal(e)),
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
