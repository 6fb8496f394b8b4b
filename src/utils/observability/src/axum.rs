// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use axum::extract::MatchedPath;
use tower_http::classify::{ServerErrorsAsFailures, SharedClassifier};
use tower_http::trace::TraceLayer;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub type HttpTraceLayer = TraceLayer<
    SharedClassifier<ServerErrorsAsFailures>,
    fn(&http::Request<axum::body::Body>) -> tracing::Span,
>;

/// Request span named after the matched route, so that `/api/vendor/settings`
/// and friends group nicely regardless of query strings.
pub fn http_layer() -> HttpTraceLayer {
    TraceLayer::new_for_http()
        .make_span_with(make_request_span as fn(&http::Request<axum::body::Body>) -> tracing::Span)
}

fn make_request_span(request: &http::Request<axum::body::Body>) -> tracing::Span {
    let route = request
        .extensions()
        .get::<MatchedPath>()
        .map_or(request.uri().path(), MatchedPath::as_str);

    tracing::info_span!(
        "http_request",
        method = %request.method(),
        route,
        uri = %request.uri(),
    )
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
