// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use dill::Catalog;
use explorify_accounts::*;
use pretty_assertions::assert_eq;

use crate::{make_password_hash, make_test_account};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn test_no_password_stored(catalog: &Catalog) {
    let password_hash_repo = catalog.get_one::<dyn PasswordHashRepository>().unwrap();

    let result = password_hash_repo
        .find_password_hash_by_account_id(&AccountID::new("I don't exist"))
        .await
        .unwrap();
    assert!(result.is_none());
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn test_store_couple_account_passwords(catalog: &Catalog) {
    let account_repo = catalog.get_one::<dyn AccountRepository>().unwrap();
    let password_hash_repo = catalog.get_one::<dyn PasswordHashRepository>().unwrap();

    let account_acme = make_test_account("acme-id", "acme@example.com", AccountRole::Vendor);
    let account_zen = make_test_account("zen-id", "zen@example.com", AccountRole::Vendor);

    account_repo.create_account(&account_acme).await.unwrap();
    account_repo.create_account(&account_zen).await.unwrap();

    let hash_acme = make_password_hash("password_acme");
    let hash_zen = make_password_hash("password_zen");

    password_hash_repo
        .save_password_hash(&account_acme.id, hash_acme.clone())
        .await
        .unwrap();
    password_hash_repo
        .save_password_hash(&account_zen.id, hash_zen.clone())
        .await
        .unwrap();

    let result = password_hash_repo
        .find_password_hash_by_account_id(&account_acme.id)
        .await
        .unwrap();
    assert_eq!(result, Some(hash_acme));

    let result = password_hash_repo
        .find_password_hash_by_account_id(&account_zen.id)
        .await
        .unwrap();
    assert_eq!(result, Some(hash_zen));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn test_save_password_replaces_previous(catalog: &Catalog) {
    let account_repo = catalog.get_one::<dyn AccountRepository>().unwrap();
    let password_hash_repo = catalog.get_one::<dyn PasswordHashRepository>().unwrap();

    let account = make_test_account("acme-id", "acme@example.com", AccountRole::Vendor);
    account_repo.create_account(&account).await.unwrap();

    password_hash_repo
        .save_password_hash(&account.id, make_password_hash("old_password"))
        .await
        .unwrap();

    let new_hash = make_password_hash("new_password");
    password_hash_repo
        .save_password_hash(&account.id, new_hash.clone())
        .await
        .unwrap();

    let result = password_hash_repo
        .find_password_hash_by_account_id(&account.id)
        .await
        .unwrap();
    assert_eq!(result, Some(new_hash));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn test_save_password_for_missing_account(catalog: &Catalog) {
    let password_hash_repo = catalog.get_one::<dyn PasswordHashRepository>().unwrap();

    let res = password_hash_repo
        .save_password_hash(&AccountID::new("ghost"), make_password_hash("password"))
        .await;
    assert!(matches!(
        res,
        Err(SavePasswordHashError::AccountNotFound { account_id }) if account_id.as_str() == "ghost"
    ));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
