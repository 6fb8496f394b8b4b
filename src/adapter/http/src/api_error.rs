// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use explorify_accounts::*;
use internal_error::InternalError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Only thing a client ever sees of an internal failure
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong, please try again";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Simplifies error handling in HTTP handlers and unifies logging of API
/// errors.
///
/// The typical usage pattern is:
///
/// ```
/// async fn handler() -> Result<(), ApiError> {
///     operation().await.api_err()?;
///     Ok(())
/// }
/// ```
///
/// Conversion from domain errors goes through [`IntoApiError`] rather than
/// [`From`], so every `?` in a handler states what the failure turns into.
/// Errors that only carry generic categories implement
/// [`ApiErrorCategorizable`], handlers needing other status codes build the
/// [`ApiError`] themselves.
///
/// Responses always carry a JSON body. Unless a custom body is attached it is
/// `{ "error": <message> }`, where internal failures get
/// [`INTERNAL_ERROR_MESSAGE`] instead of their real description.
#[derive(Debug, thiserror::Error)]
#[error("api error {status_code:?}")]
pub struct ApiError {
    status_code: http::StatusCode,
    source: Box<dyn std::error::Error + Send + Sync + 'static>,
    body: Option<serde_json::Value>,
}

impl ApiError {
    pub fn new(
        source: impl std::error::Error + Send + Sync + 'static,
        status_code: http::StatusCode,
    ) -> Self {
        Self {
            status_code,
            source: source.into(),
            body: None,
        }
    }

    pub fn bad_request(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::new(source, http::StatusCode::BAD_REQUEST)
    }

    pub fn not_found(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::new(source, http::StatusCode::NOT_FOUND)
    }

    pub fn conflict(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::new(source, http::StatusCode::CONFLICT)
    }

    pub fn internal(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::new(source, http::StatusCode::INTERNAL_SERVER_ERROR)
    }

    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    pub fn status_code(&self) -> http::StatusCode {
        self.status_code
    }
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let is_internal = self.status_code == http::StatusCode::INTERNAL_SERVER_ERROR;

        if is_internal {
            tracing::error!(
                error = ?self.source,
                error_msg = %self.source,
                status_code = %self.status_code,
                "Internal API error",
            );
        } else {
            tracing::warn!(
                error = ?self.source,
                error_msg = %self.source,
                status_code = %self.status_code,
                "API error",
            );
        }

        let body = if is_internal {
            serde_json::json!({ "error": INTERNAL_ERROR_MESSAGE })
        } else {
            self.body
                .unwrap_or_else(|| serde_json::json!({ "error": self.source.to_string() }))
        };

        (self.status_code, axum::Json(body)).into_response()
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Provides explicit conversion into [`ApiError`].
///
/// See also [`ApiErrorCategorizable`].
pub trait IntoApiError {
    fn api_err(self) -> ApiError;
}

/// Allows using `.api_err()` method on [`Result`] types.
pub trait ResultIntoApiError<K, E>
where
    E: IntoApiError,
{
    fn api_err(self) -> Result<K, ApiError>;
}

impl<K, E> ResultIntoApiError<K, E> for Result<K, E>
where
    E: IntoApiError,
{
    fn api_err(self) -> Result<K, ApiError> {
        self.map_err(IntoApiError::api_err)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub enum ApiErrorCategory<'a> {
    Unauthorized,
    Forbidden,
    NotFound,
    Internal(&'a InternalError),
}

/// Sorts an error into one of the few categories that map onto a status code
/// the same way in every handler.
pub trait ApiErrorCategorizable {
    fn categorize(&self) -> ApiErrorCategory<'_>;
}

impl<E> IntoApiError for E
where
    E: ApiErrorCategorizable,
    E: std::error::Error + Send + Sync + 'static,
{
    fn api_err(self) -> ApiError {
        let status_code = match self.categorize() {
            ApiErrorCategory::Unauthorized => http::StatusCode::UNAUTHORIZED,
            ApiErrorCategory::Forbidden => http::StatusCode::FORBIDDEN,
            ApiErrorCategory::NotFound => http::StatusCode::NOT_FOUND,
            ApiErrorCategory::Internal(_) => http::StatusCode::INTERNAL_SERVER_ERROR,
        };
        ApiError::new(self, status_code)
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

impl ApiErrorCategorizable for InternalError {
    fn categorize(&self) -> ApiErrorCategory<'_> {
        ApiErrorCategory::Internal(self)
    }
}

impl ApiErrorCategorizable for GetSettingsError {
    fn categorize(&self) -> ApiErrorCategory<'_> {
        match self {
            Self::Unauthenticated => ApiErrorCategory::Unauthorized,
            Self::NotFound => ApiErrorCategory::NotFound,
            Self::Internal(e) => ApiErrorCategory::Internal(e),
        }
    }
}

impl ApiErrorCategorizable for UpdateSettingsError {
    fn categorize(&self) -> ApiErrorCategory<'_> {
        match self {
            Self::Unauthenticated => ApiErrorCategory::Unauthorized,
            Self::NotFound => ApiErrorCategory::NotFound,
            Self::Forbidden => ApiErrorCategory::Forbidden,
            Self::Internal(e) => ApiErrorCategory::Internal(e),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
