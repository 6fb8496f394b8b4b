// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use axum::Extension;
use axum::Json;
use dill::Catalog;
use explorify_accounts::*;
use serde::{Deserialize, Serialize};

use crate::axum_utils::get_component;
use crate::ApiError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequestBody {
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupResponse {
    pub account_id: AccountID,
}

#[derive(thiserror::Error, Debug)]
enum SignupError {
    #[error("Email is required")]
    EmailRequired,

    #[error(transparent)]
    InvalidPassword(#[from] PasswordValidationError),

    #[error("User already exists")]
    AlreadyExists,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Self-service signup. The role is not up to the client: the account is
/// always an unverified vendor.
#[tracing::instrument(level = "info", skip_all)]
pub async fn signup_handler(
    Extension(catalog): Extension<Catalog>,
    Json(body): Json<SignupRequestBody>,
) -> Result<(http::StatusCode, Json<SignupResponse>), ApiError> {
    let email = body.email.trim().to_string();
    if email.is_empty() {
        return Err(ApiError::bad_request(SignupError::EmailRequired));
    }

    let password = Password::try_new(body.password)
        .map_err(|e| ApiError::bad_request(SignupError::from(e)))?;

    let display_name = body
        .name
        .map(|name| name.trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| email.split('@').next().unwrap_or_default().to_string());

    let account_service = get_component::<dyn AccountService>(&catalog)?;

    let account = account_service
        .create_account(NewAccount::vendor_signup(email, display_name, password))
        .await
        .map_err(|e| match e {
            AccountCreationError::Duplicate(_) => ApiError::conflict(SignupError::AlreadyExists),
            e @ (AccountCreationError::PasswordRequired | AccountCreationError::Internal(_)) => {
                ApiError::internal(e)
            }
        })?;

    Ok((
        http::StatusCode::CREATED,
        Json(SignupResponse {
            account_id: account.id,
        }),
    ))
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
