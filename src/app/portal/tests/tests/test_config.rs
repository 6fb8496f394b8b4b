// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::io::Write;
use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;
use std::time::Duration;

use crypto_utils::PasswordHashingMode;
use explorify_portal::*;
use observability::init::LogFormat;
use pretty_assertions::assert_eq;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

const FULL_CONFIG: &str = r"
server:
  address: 0.0.0.0
  port: 8080
database:
  provider: sqlite
  databasePath: /var/lib/explorify/portal.db
auth:
  jwtSecret: top-secret
  sessionTtl: 7d
  passwordHashing: testing
  google:
    clientId: google-client
    clientSecret: google-secret
  predefinedAccounts:
    - email: admin@explorifytrips.com
      password: admin-password-1
      role: admin
portal:
  userSiteUrl: https://staging.explorifytrips.com
logging:
  format: json
";

fn write_config(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[test]
fn test_no_config_file_yields_defaults() {
    let config = load_config(None).unwrap();

    assert_eq!(config.server.address, Some(DEFAULT_SERVER_ADDRESS));
    assert_eq!(config.server.port, Some(DEFAULT_SERVER_PORT));
    assert_eq!(config.database.provider, Some(DatabaseProvider::InMemory));
    assert_eq!(
        config.database.database_path,
        Some(PathBuf::from(DEFAULT_DATABASE_PATH))
    );
    assert_eq!(config.auth.jwt_secret, None);
    assert_eq!(
        config.auth.session_ttl.map(Duration::from),
        Some(Duration::from_secs(30 * 24 * 60 * 60))
    );
    assert_eq!(config.auth.password_hashing, Some(PasswordHashingMode::Default));
    assert!(config.auth.google.is_none());
    assert_eq!(config.portal.sign_in_path.as_deref(), Some("/auth/sign-in"));
    assert_eq!(config.portal.settings_path.as_deref(), Some("/settings"));
    assert_eq!(
        config.portal.user_site_url.as_deref(),
        Some("https://explorifytrips.com")
    );
    assert_eq!(config.logging.format, Some(LogFormat::Pretty));
}

#[test]
fn test_empty_config_file_yields_defaults() {
    let file = write_config("\n");

    let config = load_config(Some(file.path())).unwrap();

    assert_eq!(config.server.port, Some(DEFAULT_SERVER_PORT));
    assert_eq!(config.database.provider, Some(DatabaseProvider::InMemory));
}

#[test]
fn test_file_values_win_over_defaults() {
    let file = write_config(FULL_CONFIG);

    let config = load_config(Some(file.path())).unwrap();

    assert_eq!(
        config.server.address,
        Some(IpAddr::V4(Ipv4Addr::UNSPECIFIED))
    );
    assert_eq!(config.server.port, Some(8080));
    assert_eq!(config.database.provider, Some(DatabaseProvider::Sqlite));
    assert_eq!(
        config.database.database_path,
        Some(PathBuf::from("/var/lib/explorify/portal.db"))
    );
    assert_eq!(config.auth.jwt_secret.as_deref(), Some("top-secret"));
    assert_eq!(
        config.auth.session_ttl.map(Duration::from),
        Some(Duration::from_secs(7 * 24 * 60 * 60))
    );
    assert_eq!(config.auth.password_hashing, Some(PasswordHashingMode::Testing));
    assert_eq!(
        config.auth.google,
        Some(GoogleAuthConfig {
            client_id: Some("google-client".to_string()),
            client_secret: Some("google-secret".to_string()),
            redirect_uri: None,
        })
    );
    assert_eq!(
        config
            .auth
            .predefined_accounts
            .as_ref()
            .map(|c| c.predefined.len()),
        Some(1)
    );
    assert_eq!(config.logging.format, Some(LogFormat::Json));

    // Partially specified sections are completed from defaults
    assert_eq!(config.portal.sign_in_path.as_deref(), Some("/auth/sign-in"));
    assert_eq!(
        config.portal.user_site_url.as_deref(),
        Some("https://staging.explorifytrips.com")
    );
}

#[test]
fn test_unknown_keys_are_rejected() {
    let err = parse_config("server:\n  hostname: portal.local\n").unwrap_err();

    assert!(matches!(err, CLIError::UsageError { .. }));
    assert!(err.to_string().contains("hostname"), "{err}");
}

#[test]
fn test_malformed_duration_is_rejected() {
    let err = parse_config("auth:\n  sessionTtl: forever\n").unwrap_err();

    assert!(matches!(err, CLIError::UsageError { .. }));
}

#[test]
fn test_missing_config_file_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("portal.yaml");

    let err = load_config(Some(&missing)).unwrap_err();

    assert!(matches!(err, CLIError::UsageError { .. }));
    assert_eq!(err.exit_code(), 2);
}

#[test]
fn test_config_show_masks_secrets() {
    let config = load_config(Some(write_config(FULL_CONFIG).path())).unwrap();

    let rendered = ConfigShowCommand::new(config).render().unwrap();

    assert!(rendered.contains("********"), "{rendered}");
    assert!(rendered.contains("google-client"), "{rendered}");
    for secret in ["top-secret", "google-secret", "admin-password-1"] {
        assert!(!rendered.contains(secret), "{secret} leaked:\n{rendered}");
    }

    // Rendered config is itself a valid config
    let reparsed = parse_config(&rendered).unwrap();
    assert_eq!(reparsed.server.port, Some(8080));
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
