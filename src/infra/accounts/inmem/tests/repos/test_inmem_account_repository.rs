// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use dill::{Catalog, CatalogBuilder};
use explorify_accounts_inmem::InMemoryAccountRepository;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_missing_account_not_found() {
    let harness = InmemAccountRepositoryHarness::new();
    explorify_accounts_repo_tests::test_missing_account_not_found(&harness.catalog).await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_insert_and_locate_account() {
    let harness = InmemAccountRepositoryHarness::new();
    explorify_accounts_repo_tests::test_insert_and_locate_account(&harness.catalog).await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_insert_account_without_vendor_info() {
    let harness = InmemAccountRepositoryHarness::new();
    explorify_accounts_repo_tests::test_insert_account_without_vendor_info(&harness.catalog).await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_duplicate_account() {
    let harness = InmemAccountRepositoryHarness::new();
    explorify_accounts_repo_tests::test_duplicate_account(&harness.catalog).await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_update_account_merges_patch() {
    let harness = InmemAccountRepositoryHarness::new();
    explorify_accounts_repo_tests::test_update_account_merges_patch(&harness.catalog).await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_update_missing_account() {
    let harness = InmemAccountRepositoryHarness::new();
    explorify_accounts_repo_tests::test_update_missing_account(&harness.catalog).await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_delete_account() {
    let harness = InmemAccountRepositoryHarness::new();
    explorify_accounts_repo_tests::test_delete_account(&harness.catalog).await;
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

struct InmemAccountRepositoryHarness {
    catalog: Catalog,
}

impl InmemAccountRepositoryHarness {
    pub fn new() -> Self {
        let mut catalog_builder = CatalogBuilder::new();
        catalog_builder.add::<InMemoryAccountRepository>();

        Self {
            catalog: catalog_builder.build(),
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
