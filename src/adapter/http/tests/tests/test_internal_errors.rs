// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use explorify_accounts::testing::AccountTestHelper;
use explorify_adapter_http::INTERNAL_ERROR_MESSAGE;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::harness::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn assert_generic_internal_error(response: &TestResponse) {
    assert_eq!(response.status, http::StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.body, json!({ "error": INTERNAL_ERROR_MESSAGE }));
    assert!(
        !response.body.to_string().contains("portal.db"),
        "{}",
        response.body
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_settings_store_failure_is_not_exposed() {
    let harness = PortalHarness::with_failing_store();
    let token = harness.issue_session(&AccountTestHelper::vendor("acme@example.com"));

    let response = harness
        .send(http::Method::GET, "/api/vendor/settings", Some(&token), None)
        .await;
    assert_generic_internal_error(&response);

    let response = harness
        .send(
            http::Method::PUT,
            "/api/vendor/settings",
            Some(&token),
            Some(json!({ "name": "Acme" })),
        )
        .await;
    assert_generic_internal_error(&response);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_gate_store_failure_is_not_exposed() {
    let harness = PortalHarness::with_failing_store();
    let token = harness.issue_session(&AccountTestHelper::complete_vendor("acme@example.com"));

    let response = harness
        .send(http::Method::POST, "/api/plans/authorize", Some(&token), None)
        .await;
    assert_generic_internal_error(&response);
    assert_eq!(response.location(), None);

    let response = harness
        .send(http::Method::GET, "/dashboard", Some(&token), None)
        .await;
    assert_generic_internal_error(&response);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
