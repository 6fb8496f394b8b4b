// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::sync::Arc;

use axum::response::{IntoResponse, Redirect};
use internal_error::ResultIntoInternal;

use crate::{ApiError, INTERNAL_ERROR_MESSAGE, ResultIntoApiError};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub(crate) fn bad_request_response(message: &str) -> axum::response::Response {
    error_response(http::StatusCode::BAD_REQUEST, message)
}

pub(crate) fn internal_server_error_response() -> axum::response::Response {
    error_response(http::StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
}

fn error_response(status: http::StatusCode, message: &str) -> axum::response::Response {
    (status, axum::Json(serde_json::json!({ "error": message }))).into_response()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// `303 See Other`, so a refused `POST` is followed up with a `GET`
pub(crate) fn see_other(location: &str) -> axum::response::Response {
    Redirect::to(location).into_response()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub(crate) fn get_component<T>(catalog: &dill::Catalog) -> Result<Arc<T>, ApiError>
where
    T: ?Sized + Send + Sync + 'static,
{
    catalog.get_one::<T>().int_err().api_err()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
