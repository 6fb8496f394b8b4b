// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use axum::body::Body;
use pretty_assertions::assert_eq;

use crate::harness::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_empty_bearer_token_is_bad_request() {
    let harness = PortalHarness::new();

    let response = harness
        .send(http::Method::GET, "/api/vendor/settings", Some(""), None)
        .await;

    assert_eq!(response.status, http::StatusCode::BAD_REQUEST);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_invalid_token_leaves_caller_anonymous() {
    let harness = PortalHarness::new();

    let response = harness
        .send(
            http::Method::GET,
            "/api/vendor/settings",
            Some("not-a-session"),
            None,
        )
        .await;

    assert_eq!(response.status, http::StatusCode::UNAUTHORIZED);
    assert_eq!(response.body, serde_json::json!({ "error": "Unauthorized" }));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_session_cookie_is_accepted() {
    let harness = PortalHarness::new();
    let (vendor, token) = harness.create_vendor("acme@example.com").await;

    let request = http::Request::builder()
        .method(http::Method::GET)
        .uri("/api/vendor/settings")
        .header(http::header::COOKIE, format!("explorify-session={token}"))
        .body(Body::empty())
        .unwrap();

    let response = harness.send_request(request).await;

    assert_eq!(response.status, http::StatusCode::OK);
    assert_eq!(response.body["id"], serde_json::json!(vendor.id));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
