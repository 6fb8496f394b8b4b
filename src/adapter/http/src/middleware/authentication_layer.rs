// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::pin::Pin;
use std::task::{Context, Poll};

use axum::body::Body;
use axum::response::Response;
use axum_extra::extract::cookie::CookieJar;
use explorify_accounts::{
    AccessTokenError,
    AnonymousAccountReason,
    CurrentAccountSubject,
    SessionService,
};
use tower::{Layer, Service};

use crate::axum_utils::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const SESSION_COOKIE_NAME: &str = "explorify-session";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Resolves the caller's session into a [`CurrentAccountSubject`].
///
/// Expects the base [`dill::Catalog`] in request extensions and replaces it
/// with a chained catalog that also holds the subject. A bearer token takes
/// precedence over the session cookie. Unusable credentials leave the caller
/// anonymous, handlers decide what that means.
#[derive(Debug, Clone, Default)]
pub struct AuthenticationLayer {}

impl AuthenticationLayer {
    pub fn new() -> Self {
        Self {}
    }
}

impl<Svc> Layer<Svc> for AuthenticationLayer {
    type Service = AuthenticationMiddleware<Svc>;

    fn layer(&self, inner: Svc) -> Self::Service {
        AuthenticationMiddleware { inner }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone)]
pub struct AuthenticationMiddleware<Svc> {
    inner: Svc,
}

enum SessionTokenLookup {
    Missing,
    Found(String),
    EmptyBearer,
}

impl<Svc> AuthenticationMiddleware<Svc> {
    fn extract_session_token(request: &http::Request<Body>) -> SessionTokenLookup {
        if let Some(authorization) = request.headers().get(http::header::AUTHORIZATION) {
            let token = authorization
                .to_str()
                .ok()
                .and_then(|value| value.strip_prefix("Bearer"))
                .map(str::trim)
                .unwrap_or_default();

            return if token.is_empty() {
                SessionTokenLookup::EmptyBearer
            } else {
                SessionTokenLookup::Found(token.to_string())
            };
        }

        CookieJar::from_headers(request.headers())
            .get(SESSION_COOKIE_NAME)
            .map(|cookie| cookie.value().trim())
            .filter(|token| !token.is_empty())
            .map_or(SessionTokenLookup::Missing, |token| {
                SessionTokenLookup::Found(token.to_string())
            })
    }

    fn resolve_subject(session_service: &dyn SessionService, token: &str) -> CurrentAccountSubject {
        match session_service.resolve_session(token) {
            Ok(logged_account) => CurrentAccountSubject::Logged(logged_account),
            Err(AccessTokenError::Expired) => {
                CurrentAccountSubject::anonymous(AnonymousAccountReason::AuthenticationExpired)
            }
            Err(AccessTokenError::Invalid(e)) => {
                tracing::debug!(error = %e, "Ignoring invalid session token");
                CurrentAccountSubject::anonymous(AnonymousAccountReason::AuthenticationInvalid)
            }
        }
    }
}

impl<Svc> Service<http::Request<Body>> for AuthenticationMiddleware<Svc>
where
    Svc: Service<http::Request<Body>, Response = Response> + Send + Clone + 'static,
    Svc::Future: Send + 'static,
{
    type Response = Svc::Response;
    type Error = Svc::Error;
    type Future =
        Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send + 'static>>;

    fn poll_ready(&mut self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.inner.poll_ready(cx)
    }

    fn call(&mut self, mut request: http::Request<Body>) -> Self::Future {
        let mut inner = self.inner.clone();

        Box::pin(async move {
            let Some(base_catalog) = request.extensions().get::<dill::Catalog>().cloned() else {
                tracing::error!("Catalog not found in http server extensions");
                return Ok(internal_server_error_response());
            };

            let subject = match Self::extract_session_token(&request) {
                SessionTokenLookup::EmptyBearer => {
                    return Ok(bad_request_response("Malformed Authorization header"));
                }
                SessionTokenLookup::Missing => {
                    CurrentAccountSubject::anonymous(AnonymousAccountReason::NoAuthenticationProvided)
                }
                SessionTokenLookup::Found(token) => {
                    let session_service = match base_catalog.get_one::<dyn SessionService>() {
                        Ok(session_service) => session_service,
                        Err(e) => {
                            tracing::error!(error = ?e, "Session service is not registered");
                            return Ok(internal_server_error_response());
                        }
                    };
                    Self::resolve_subject(session_service.as_ref(), &token)
                }
            };

            let request_catalog = dill::CatalogBuilder::new_chained(&base_catalog)
                .add_value(subject)
                .build();

            request.extensions_mut().insert(request_catalog);

            inner.call(request).await
        })
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
