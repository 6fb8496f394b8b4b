// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use explorify_accounts::testing::CurrentAccountSubjectTestHelper;
use explorify_accounts::*;
use pretty_assertions::assert_eq;

use crate::tests::accounts_harness::AccountsHarness;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_anonymous_is_refused() {
    let harness = AccountsHarness::new();
    let gate = harness.get::<dyn AccessGate>();

    let res = gate
        .authorize_page(
            &CurrentAccountSubjectTestHelper::anonymous(),
            PortalPage::Dashboard,
        )
        .await;

    assert!(
        matches!(res, Err(AccessGateError::Denied(AccessDenied::Unauthenticated))),
        "{res:?}"
    );
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_session_for_deleted_account_is_refused() {
    let harness = AccountsHarness::new();
    let gate = harness.get::<dyn AccessGate>();

    // Session issued for an account the store does not know
    let ghost = explorify_accounts::testing::AccountTestHelper::vendor("ghost@example.com");
    let subject = CurrentAccountSubjectTestHelper::logged_as(&ghost);

    let res = gate.authorize_page(&subject, PortalPage::Settings).await;

    let Err(AccessGateError::Denied(denied)) = res else {
        panic!("unexpected result: {res:?}");
    };
    assert_eq!(denied, AccessDenied::AccountNotFound);
    assert_eq!(denied.redirect_target(), RedirectTarget::SignIn);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_stale_vendor_claims_are_not_trusted() {
    let harness = AccountsHarness::new();
    let gate = harness.get::<dyn AccessGate>();

    let user = harness
        .create_account_with_role("user@example.com", AccountRole::User)
        .await;

    // Claims pretend the account is a verified vendor
    let subject = CurrentAccountSubject::logged(
        &user.email,
        Some(SessionClaims {
            account_id: user.id.clone(),
            role: AccountRole::Vendor,
            vendor_verified: true,
        }),
    );

    for res in [
        gate.authorize_page(&subject, PortalPage::Dashboard).await,
        gate.authorize_trip_mutation(&subject).await,
    ] {
        assert!(
            matches!(res, Err(AccessGateError::Denied(AccessDenied::Forbidden))),
            "{res:?}"
        );
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_incomplete_vendor_sees_pages_but_cannot_post_trips() {
    let harness = AccountsHarness::new();
    let gate = harness.get::<dyn AccessGate>();

    let vendor = harness.create_vendor("acme@example.com", None).await;
    let subject = CurrentAccountSubjectTestHelper::logged_as(&vendor);

    let access = gate
        .authorize_page(&subject, PortalPage::Dashboard)
        .await
        .unwrap();
    assert_eq!(access.account, vendor);
    assert!(!access.completion.is_complete);
    assert_eq!(
        access.completion.missing_fields,
        vec![
            MissingField::AdminVerification,
            MissingField::OrganizationName,
            MissingField::BusinessAddress,
            MissingField::PhoneNumber,
            MissingField::PayoutMethod,
        ]
    );

    let res = gate.authorize_trip_mutation(&subject).await;
    let Err(AccessGateError::Denied(denied)) = res else {
        panic!("unexpected result: {res:?}");
    };
    assert_eq!(denied.redirect_target(), RedirectTarget::Settings);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_decision_follows_fresh_account_state() {
    let harness = AccountsHarness::new();
    let gate = harness.get::<dyn AccessGate>();
    let settings = harness.get::<dyn AccountSettingsService>();

    let vendor = harness.create_eligible_vendor("acme@example.com").await;
    let subject = CurrentAccountSubjectTestHelper::logged_as(&vendor);

    let access = gate.authorize_trip_mutation(&subject).await.unwrap();
    assert!(access.completion.is_complete);

    // Clearing the UPI handle must take effect immediately
    settings
        .update_settings(
            &subject,
            AccountSettingsPatch {
                vendor_info: VendorInfoPatch {
                    bank_details: Some(BankDetailsPatch {
                        upi_id: Some(String::new()),
                        ..Default::default()
                    }),
                    ..Default::default()
                },
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let res = gate.authorize_trip_mutation(&subject).await;
    let Err(AccessGateError::Denied(AccessDenied::IncompleteProfile(status))) = res else {
        panic!("unexpected result: {res:?}");
    };
    assert_eq!(status.missing_fields, vec![MissingField::PayoutMethod]);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_email_only_session_is_resolved() {
    let harness = AccountsHarness::new();
    let gate = harness.get::<dyn AccessGate>();

    let vendor = harness.create_eligible_vendor("acme@example.com").await;
    let subject = CurrentAccountSubjectTestHelper::logged(&vendor.email);

    let access = gate.authorize_trip_mutation(&subject).await.unwrap();
    assert_eq!(access.account.id, vendor.id);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
