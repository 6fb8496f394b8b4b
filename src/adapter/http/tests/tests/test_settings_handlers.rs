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
async fn test_settings_require_identity() {
    let harness = PortalHarness::new();

    let response = harness
        .send(http::Method::GET, "/api/vendor/settings", None, None)
        .await;
    assert_eq!(response.status, http::StatusCode::UNAUTHORIZED);

    let response = harness
        .send(
            http::Method::PUT,
            "/api/vendor/settings",
            None,
            Some(json!({ "name": "Acme" })),
        )
        .await;
    assert_eq!(response.status, http::StatusCode::UNAUTHORIZED);
    assert_eq!(response.body, json!({ "error": "Unauthorized" }));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_plain_user_cannot_update_settings() {
    let harness = PortalHarness::new();
    let (_, token) = harness.create_user("user@example.com").await;

    let response = harness
        .send(http::Method::GET, "/api/vendor/settings", Some(&token), None)
        .await;
    assert_eq!(response.status, http::StatusCode::OK);

    let response = harness
        .send(
            http::Method::PUT,
            "/api/vendor/settings",
            Some(&token),
            Some(json!({ "name": "Sneaky" })),
        )
        .await;
    assert_eq!(response.status, http::StatusCode::FORBIDDEN);
    assert_eq!(
        response.body,
        json!({ "error": "Only vendors can update settings" })
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_settings_update_merges_nested_fields() {
    let harness = PortalHarness::new();
    let (_, token) = harness.create_vendor("acme@example.com").await;

    let response = harness
        .send(
            http::Method::PUT,
            "/api/vendor/settings",
            Some(&token),
            Some(json!({
                "name": "Acme Tours",
                "organizationName": "Acme Tours",
                "bankDetails": { "accountNumber": "1234", "ifscCode": "ACME0001" },
            })),
        )
        .await;
    assert_eq!(response.status, http::StatusCode::OK);

    let response = harness
        .send(
            http::Method::PUT,
            "/api/vendor/settings",
            Some(&token),
            Some(json!({
                "address": "12 Main St",
                "bankDetails": { "accountHolderName": "Acme Tours Pvt" },
            })),
        )
        .await;
    assert_eq!(response.status, http::StatusCode::OK);
    assert_eq!(response.body["name"], json!("Acme Tours"));
    assert_eq!(
        response.body["vendorInfo"],
        json!({
            "organizationName": "Acme Tours",
            "address": "12 Main St",
            "bankDetails": {
                "accountHolderName": "Acme Tours Pvt",
                "accountNumber": "1234",
                "ifscCode": "ACME0001",
            },
        })
    );
    // No credential material in the view
    assert!(response.body.get("password").is_none());
    assert!(response.body.get("passwordHash").is_none());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_settings_form_round_trip() {
    let harness = PortalHarness::new();
    let (_, token) = harness.create_vendor("acme@example.com").await;

    let response = harness
        .send(http::Method::GET, "/api/vendor/settings", Some(&token), None)
        .await;
    assert_eq!(response.status, http::StatusCode::OK);
    assert_eq!(response.body["name"], json!("Acme"));
    assert_eq!(response.body["email"], json!("acme@example.com"));

    // The form always submits every field, blanks included
    let form_data = json!({
        "name": "Acme Tours",
        "image": "https://cdn.example.com/acme.png",
        "organizationName": "Acme Tours Pvt Ltd",
        "address": "12 Main St, Goa",
        "phoneNumber": "+911234567890",
        "bankDetails": {
            "accountHolderName": "",
            "accountNumber": "",
            "ifscCode": "",
            "bankName": "",
            "upiId": "acme@upi",
        },
    });

    let response = harness
        .send(
            http::Method::PUT,
            "/api/vendor/settings",
            Some(&token),
            Some(form_data),
        )
        .await;
    assert_eq!(response.status, http::StatusCode::OK, "{}", response.body);
    assert_eq!(response.body["name"], json!("Acme Tours"));
    assert_eq!(
        response.body["image"],
        json!("https://cdn.example.com/acme.png")
    );
    assert_eq!(
        response.body["vendorInfo"]["organizationName"],
        json!("Acme Tours Pvt Ltd")
    );
    assert_eq!(
        response.body["vendorInfo"]["bankDetails"]["upiId"],
        json!("acme@upi")
    );

    // Only the admin verification is left
    let response = harness
        .send(http::Method::GET, "/api/vendor/completion", Some(&token), None)
        .await;
    assert_eq!(
        response.body["status"]["missingFields"],
        json!(["Admin verification pending"])
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_role_cannot_be_patched() {
    let harness = PortalHarness::new();
    let (_, token) = harness.create_vendor("acme@example.com").await;

    let response = harness
        .send(
            http::Method::PUT,
            "/api/vendor/settings",
            Some(&token),
            Some(json!({ "role": "admin" })),
        )
        .await;
    assert!(response.status.is_client_error(), "{}", response.status);

    let response = harness
        .send(http::Method::GET, "/api/vendor/settings", Some(&token), None)
        .await;
    assert_eq!(response.body["role"], json!("vendor"));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_completion_reflects_stored_account() {
    let harness = PortalHarness::new();
    let (_, token) = harness.create_eligible_vendor("acme@example.com").await;

    let response = harness
        .send(http::Method::GET, "/api/vendor/completion", Some(&token), None)
        .await;

    assert_eq!(response.status, http::StatusCode::OK);
    assert_eq!(response.body["status"]["isComplete"], json!(true));
    assert_eq!(response.body["status"]["missingFields"], json!([]));
    assert_eq!(
        response.body["message"],
        json!("Your vendor profile is complete!")
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
