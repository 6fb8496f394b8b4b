// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use pretty_assertions::assert_eq;
use serde_json::json;

use crate::harness::*;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_anonymous_pages_redirect_to_sign_in() {
    let harness = PortalHarness::new();

    for page in ["/dashboard", "/settings"] {
        let response = harness.send(http::Method::GET, page, None, None).await;
        assert_eq!(response.status, http::StatusCode::SEE_OTHER, "{page}");
        assert_eq!(response.location(), Some("/auth/sign-in"), "{page}");
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_plain_user_is_sent_to_sign_in() {
    let harness = PortalHarness::new();
    let (_, token) = harness.create_user("user@example.com").await;

    let response = harness
        .send(http::Method::GET, "/dashboard", Some(&token), None)
        .await;

    assert_eq!(response.status, http::StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/auth/sign-in"));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_incomplete_vendor_sees_dashboard_with_status() {
    let harness = PortalHarness::new();
    let (vendor, token) = harness.create_vendor("acme@example.com").await;

    let response = harness
        .send(http::Method::GET, "/dashboard", Some(&token), None)
        .await;

    assert_eq!(response.status, http::StatusCode::OK);
    assert_eq!(response.body["account"]["id"], json!(vendor.id));
    assert_eq!(
        response.body["completion"],
        json!({
            "isComplete": false,
            "isVerified": false,
            "hasOrgDetails": false,
            "hasBankDetails": false,
            "missingFields": [
                "Admin verification pending",
                "Organization name",
                "Business address",
                "Phone number",
                "Bank account or UPI details",
            ],
        })
    );
    assert_eq!(
        response.body["message"],
        json!(
            "Complete your profile to post trips. Missing: Admin verification pending, \
             Organization name, Business address, Phone number, Bank account or UPI details"
        )
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_trip_authorization() {
    let harness = PortalHarness::new();
    let (_, eligible_token) = harness.create_eligible_vendor("eligible@example.com").await;
    let (_, incomplete_token) = harness.create_vendor("incomplete@example.com").await;
    let (_, user_token) = harness.create_user("user@example.com").await;

    let response = harness
        .send(
            http::Method::POST,
            "/api/plans/authorize",
            Some(&eligible_token),
            None,
        )
        .await;
    assert_eq!(response.status, http::StatusCode::NO_CONTENT);

    let response = harness
        .send(
            http::Method::POST,
            "/api/plans/authorize",
            Some(&incomplete_token),
            None,
        )
        .await;
    assert_eq!(response.status, http::StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/settings"));

    for maybe_token in [Some(user_token.as_str()), None] {
        let response = harness
            .send(http::Method::POST, "/api/plans/authorize", maybe_token, None)
            .await;
        assert_eq!(response.status, http::StatusCode::SEE_OTHER);
        assert_eq!(response.location(), Some("/auth/sign-in"));
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_trip_authorization_follows_settings_updates() {
    let harness = PortalHarness::new();
    let (_, token) = harness.create_eligible_vendor("acme@example.com").await;

    // Blanking the only payout method makes the vendor ineligible again
    let response = harness
        .send(
            http::Method::PUT,
            "/api/vendor/settings",
            Some(&token),
            Some(json!({ "bankDetails": { "upiId": "  " } })),
        )
        .await;
    assert_eq!(response.status, http::StatusCode::OK);

    let response = harness
        .send(http::Method::POST, "/api/plans/authorize", Some(&token), None)
        .await;
    assert_eq!(response.status, http::StatusCode::SEE_OTHER);
    assert_eq!(response.location(), Some("/settings"));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
