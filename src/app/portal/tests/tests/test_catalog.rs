// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use explorify_accounts::{
    AccountRepository,
    AccountRole,
    AuthenticationService,
    LOGIN_METHOD_GOOGLE,
    LOGIN_METHOD_PASSWORD,
    SessionService,
};
use explorify_portal::*;
use pretty_assertions::assert_eq;
use serde_json::json;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const VENDOR_EMAIL: &str = "acme@example.com";
const VENDOR_PASSWORD: &str = "acme-password-1";

fn config_with(extra: &str) -> PortalAppConfig {
    let contents = format!(
        r"
auth:
  jwtSecret: catalog-test-secret
  passwordHashing: testing
  predefinedAccounts:
    - email: {VENDOR_EMAIL}
      password: {VENDOR_PASSWORD}
    - email: admin@example.com
      role: admin
{extra}"
    );

    let mut config = parse_config(&contents).unwrap();
    merge::Merge::merge(&mut config, PortalAppConfig::default_values());
    config
}

async fn login(catalog: &dill::Catalog) -> explorify_accounts::LoginResponse {
    catalog
        .get_one::<dyn AuthenticationService>()
        .unwrap()
        .login(
            LOGIN_METHOD_PASSWORD,
            json!({ "email": VENDOR_EMAIL, "password": VENDOR_PASSWORD }).to_string(),
        )
        .await
        .unwrap()
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test_log::test(tokio::test)]
async fn test_in_memory_catalog_serves_predefined_vendor() {
    let config = config_with("");

    let catalog = configure_base_catalog(&config).await.unwrap().build();
    initialize_components(&catalog).await.unwrap();

    let response = login(&catalog).await;

    let logged = catalog
        .get_one::<dyn SessionService>()
        .unwrap()
        .resolve_session(&response.access_token)
        .unwrap();
    assert_eq!(logged.email, VENDOR_EMAIL);
    assert_eq!(
        logged.claims.map(|c| (c.account_id, c.role)),
        Some((response.account_id, AccountRole::Vendor))
    );

    let admin = catalog
        .get_one::<dyn AccountRepository>()
        .unwrap()
        .find_account_by_email("admin@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(admin.role, AccountRole::Admin);
}

#[test_log::test(tokio::test)]
async fn test_google_provider_is_registered_only_when_configured() {
    let without_google = configure_base_catalog(&config_with(""))
        .await
        .unwrap()
        .build();
    assert!(
        !without_google
            .get_one::<dyn AuthenticationService>()
            .unwrap()
            .supported_login_methods()
            .contains(&LOGIN_METHOD_GOOGLE)
            || std::env::var(explorify_adapter_oauth::ENV_VAR_EXPLORIFY_GOOGLE_CLIENT_ID).is_ok()
    );

    let with_google = configure_base_catalog(&config_with(
        "  google:\n    clientId: google-client\n    clientSecret: google-secret\n",
    ))
    .await
    .unwrap()
    .build();
    assert_eq!(
        with_google
            .get_one::<dyn AuthenticationService>()
            .unwrap()
            .supported_login_methods(),
        vec![LOGIN_METHOD_GOOGLE, LOGIN_METHOD_PASSWORD]
    );
}

#[test_log::test(tokio::test)]
async fn test_sqlite_catalog_persists_accounts_across_restarts() {
    let temp_dir = tempfile::tempdir().unwrap();
    let database_path = temp_dir.path().join("portal.db");

    let config = config_with(&format!(
        "database:\n  provider: sqlite\n  databasePath: {}\n",
        database_path.display()
    ));

    let first_account_id = {
        let catalog = configure_base_catalog(&config).await.unwrap().build();
        initialize_components(&catalog).await.unwrap();
        login(&catalog).await.account_id
    };
    assert!(database_path.exists());

    // Seeding again is a no-op and the stored account is reused
    let catalog = configure_base_catalog(&config).await.unwrap().build();
    initialize_components(&catalog).await.unwrap();

    assert_eq!(login(&catalog).await.account_id, first_account_id);
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
