// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use dill::{Catalog, CatalogBuilder};
use explorify_accounts_sqlite::{SqliteAccountRepository, connect_sqlite_database};
use tempfile::TempDir;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_no_password_stored() {
    let harness = SqlitePasswordHashRepositoryHarness::new().await;
    explorify_accounts_repo_tests::test_no_password_stored(&harness.catalog).await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_store_couple_account_passwords() {
    let harness = SqlitePasswordHashRepositoryHarness::new().await;
    explorify_accounts_repo_tests::test_store_couple_account_passwords(&harness.catalog).await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_save_password_replaces_previous() {
    let harness = SqlitePasswordHashRepositoryHarness::new().await;
    explorify_accounts_repo_tests::test_save_password_replaces_previous(&harness.catalog).await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_save_password_for_missing_account() {
    let harness = SqlitePasswordHashRepositoryHarness::new().await;
    explorify_accounts_repo_tests::test_save_password_for_missing_account(&harness.catalog).await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

struct SqlitePasswordHashRepositoryHarness {
    _temp_dir: TempDir,
    catalog: Catalog,
}

impl SqlitePasswordHashRepositoryHarness {
    pub async fn new() -> Self {
        let temp_dir = tempfile::tempdir().unwrap();
        let sqlite_pool = connect_sqlite_database(&temp_dir.path().join("accounts.db"))
            .await
            .unwrap();

        let mut catalog_builder = CatalogBuilder::new();
        catalog_builder.add_value(sqlite_pool);
        catalog_builder.add::<SqliteAccountRepository>();

        Self {
            _temp_dir: temp_dir,
            catalog: catalog_builder.build(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
