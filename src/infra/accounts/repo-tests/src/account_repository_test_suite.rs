// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use chrono::{Duration, Utc};
use dill::Catalog;
use explorify_accounts::*;
use pretty_assertions::assert_eq;

use crate::make_test_account;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn test_missing_account_not_found(catalog: &Catalog) {
    let account_repo = catalog.get_one::<dyn AccountRepository>().unwrap();

    let account_id = AccountID::new("ghost");
    let maybe_account = account_repo.get_account_by_id(&account_id).await;
    assert!(
        matches!(maybe_account, Err(GetAccountByIdError::NotFound(e)) if e.account_id == account_id)
    );

    let maybe_account = account_repo
        .find_account_by_email("ghost@example.com")
        .await
        .unwrap();
    assert!(maybe_account.is_none());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn test_insert_and_locate_account(catalog: &Catalog) {
    let account_repo = catalog.get_one::<dyn AccountRepository>().unwrap();

    let mut account = make_test_account("acme-id", "acme@example.com", AccountRole::Vendor);
    account.avatar_url = Some("https://example.com/acme.png".into());
    account.vendor_info = Some(VendorInfo {
        organization_name: Some("Acme Tours".into()),
        bank_details: Some(BankDetails {
            upi_id: Some("acme@upi".into()),
            ..Default::default()
        }),
        ..Default::default()
    });
    account_repo.create_account(&account).await.unwrap();

    let by_id = account_repo.get_account_by_id(&account.id).await.unwrap();
    assert_eq!(by_id, account);

    let by_email = account_repo
        .find_account_by_email("acme@example.com")
        .await
        .unwrap();
    assert_eq!(by_email, Some(account));

    // Lookup is exact
    let by_other_case = account_repo
        .find_account_by_email("ACME@example.com")
        .await
        .unwrap();
    assert_eq!(by_other_case, None);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn test_insert_account_without_vendor_info(catalog: &Catalog) {
    let account_repo = catalog.get_one::<dyn AccountRepository>().unwrap();

    let account = make_test_account("user-id", "user@example.com", AccountRole::User);
    account_repo.create_account(&account).await.unwrap();

    let stored = account_repo.get_account_by_id(&account.id).await.unwrap();
    assert_eq!(stored.vendor_info, None);
    assert_eq!(stored.role, AccountRole::User);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn test_duplicate_account(catalog: &Catalog) {
    let account_repo = catalog.get_one::<dyn AccountRepository>().unwrap();

    let account = make_test_account("acme-id", "acme@example.com", AccountRole::Vendor);
    account_repo.create_account(&account).await.unwrap();

    let same_email = make_test_account("other-id", "acme@example.com", AccountRole::Vendor);
    let res = account_repo.create_account(&same_email).await;
    assert!(matches!(
        res,
        Err(CreateAccountError::Duplicate(CreateAccountErrorDuplicate {
            account_field: CreateAccountDuplicateField::Email
        }))
    ));

    let same_id = make_test_account("acme-id", "other@example.com", AccountRole::Vendor);
    let res = account_repo.create_account(&same_id).await;
    assert!(matches!(
        res,
        Err(CreateAccountError::Duplicate(CreateAccountErrorDuplicate {
            account_field: CreateAccountDuplicateField::Id
        }))
    ));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn test_update_account_merges_patch(catalog: &Catalog) {
    let account_repo = catalog.get_one::<dyn AccountRepository>().unwrap();

    let mut account = make_test_account("acme-id", "acme@example.com", AccountRole::Vendor);
    account.vendor_info = Some(VendorInfo {
        organization_name: Some("Acme Tours".into()),
        address: Some("12 Main St".into()),
        phone_number: None,
        bank_details: Some(BankDetails {
            account_number: Some("000123456789".into()),
            ..Default::default()
        }),
    });
    account_repo.create_account(&account).await.unwrap();

    let updated_at = account.updated_at + Duration::hours(1);
    let patch = AccountSettingsPatch {
        display_name: Some("Acme Travel".into()),
        avatar_url: None,
        vendor_info: VendorInfoPatch {
            phone_number: Some("+911234567890".into()),
            bank_details: Some(BankDetailsPatch {
                ifsc_code: Some("HDFC0000123".into()),
                account_holder_name: Some("Acme Tours Pvt".into()),
                ..Default::default()
            }),
            ..Default::default()
        },
    };

    let updated = account_repo
        .update_account(&account.id, &patch, updated_at)
        .await
        .unwrap();

    let expected = Account {
        display_name: "Acme Travel".into(),
        vendor_info: Some(VendorInfo {
            organization_name: Some("Acme Tours".into()),
            address: Some("12 Main St".into()),
            phone_number: Some("+911234567890".into()),
            bank_details: Some(BankDetails {
                account_holder_name: Some("Acme Tours Pvt".into()),
                account_number: Some("000123456789".into()),
                ifsc_code: Some("HDFC0000123".into()),
                ..Default::default()
            }),
        }),
        updated_at,
        ..account.clone()
    };
    assert_eq!(updated, expected);

    let stored = account_repo.get_account_by_id(&account.id).await.unwrap();
    assert_eq!(stored, expected);
    assert_eq!(stored.created_at, account.created_at);
    assert_eq!(stored.role, AccountRole::Vendor);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn test_update_missing_account(catalog: &Catalog) {
    let account_repo = catalog.get_one::<dyn AccountRepository>().unwrap();

    let res = account_repo
        .update_account(
            &AccountID::new("ghost"),
            &AccountSettingsPatch::default(),
            Utc::now(),
        )
        .await;
    assert!(matches!(res, Err(UpdateAccountError::NotFound(_))));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn test_delete_account(catalog: &Catalog) {
    let account_repo = catalog.get_one::<dyn AccountRepository>().unwrap();
    let password_hash_repo = catalog.get_one::<dyn PasswordHashRepository>().unwrap();

    let account = make_test_account("acme-id", "acme@example.com", AccountRole::Vendor);
    account_repo.create_account(&account).await.unwrap();
    password_hash_repo
        .save_password_hash(&account.id, "hash".to_string())
        .await
        .unwrap();

    account_repo.delete_account(&account.id).await.unwrap();

    assert!(matches!(
        account_repo.get_account_by_id(&account.id).await,
        Err(GetAccountByIdError::NotFound(_))
    ));
    assert_eq!(
        account_repo
            .find_account_by_email("acme@example.com")
            .await
            .unwrap(),
        None
    );
    assert_eq!(
        password_hash_repo
            .find_password_hash_by_account_id(&account.id)
            .await
            .unwrap(),
        None
    );

    // The email is free again
    account_repo.create_account(&account).await.unwrap();

    let res = account_repo.delete_account(&AccountID::new("ghost")).await;
    assert!(matches!(res, Err(DeleteAccountError::NotFound(_))), "{res:?}");
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
