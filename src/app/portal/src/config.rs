// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::net::{IpAddr, Ipv4Addr};
use std::path::{Path, PathBuf};

use crypto_utils::PasswordHashingMode;
use duration_string::DurationString;
use explorify_accounts::PredefinedAccountsConfig;
use merge::Merge;
use observability::init::LogFormat;
use serde::{Deserialize, Serialize};

use crate::CLIError;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const DEFAULT_SERVER_ADDRESS: IpAddr = IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1));
pub const DEFAULT_SERVER_PORT: u16 = 3000;
pub const DEFAULT_DATABASE_PATH: &str = "explorify-portal.db";
pub const DEFAULT_SESSION_TTL: &str = "30d";
pub const DEFAULT_GOOGLE_REDIRECT_URI: &str = "http://localhost:3000/auth/callback/google";

const MASKED_SECRET: &str = "********";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Contents of the portal configuration file.
///
/// Every value is optional in the file. Loading merges the file over
/// [`PortalAppConfig::default_values`], so after [`load_config`] all values
/// that have a default are set.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Merge)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PortalAppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub portal: PortalPathsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PortalAppConfig {
    pub fn default_values() -> Self {
        Self {
            server: ServerConfig {
                address: Some(DEFAULT_SERVER_ADDRESS),
                port: Some(DEFAULT_SERVER_PORT),
            },
            database: DatabaseConfig {
                provider: Some(DatabaseProvider::InMemory),
                database_path: Some(PathBuf::from(DEFAULT_DATABASE_PATH)),
            },
            auth: AuthConfig {
                jwt_secret: None,
                session_ttl: DEFAULT_SESSION_TTL.parse().ok(),
                password_hashing: Some(PasswordHashingMode::Default),
                google: None,
                predefined_accounts: None,
            },
            portal: PortalPathsConfig {
                sign_in_path: Some(explorify_adapter_http::DEFAULT_SIGN_IN_PATH.to_string()),
                settings_path: Some(explorify_adapter_http::DEFAULT_SETTINGS_PATH.to_string()),
                user_site_url: Some(explorify_adapter_http::DEFAULT_USER_SITE_URL.to_string()),
            },
            logging: LoggingConfig {
                format: Some(LogFormat::Pretty),
            },
        }
    }

    /// Copy that is safe to print
    pub fn masked(&self) -> Self {
        let mut masked = self.clone();
        if masked.auth.jwt_secret.is_some() {
            masked.auth.jwt_secret = Some(MASKED_SECRET.to_string());
        }
        if let Some(google) = masked.auth.google.as_mut() {
            if google.client_secret.is_some() {
                google.client_secret = Some(MASKED_SECRET.to_string());
            }
        }
        if let Some(predefined_accounts) = masked.auth.predefined_accounts.as_mut() {
            for account in &mut predefined_accounts.predefined {
                account.password = None;
            }
        }
        masked
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Server
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Merge)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ServerConfig {
    pub address: Option<IpAddr>,
    pub port: Option<u16>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Database
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Merge)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DatabaseConfig {
    pub provider: Option<DatabaseProvider>,
    /// Only used by the `sqlite` provider
    pub database_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DatabaseProvider {
    /// Nothing survives a restart
    InMemory,
    Sqlite,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Auth
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Default, Serialize, Deserialize, Merge)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AuthConfig {
    /// Signing secret of session tokens. Falls back to the
    /// `EXPLORIFY_JWT_SECRET` env var, then to a random secret that
    /// invalidates all sessions on restart.
    pub jwt_secret: Option<String>,
    pub session_ttl: Option<DurationString>,
    pub password_hashing: Option<PasswordHashingMode>,
    /// Google sign-in stays disabled unless client credentials are known
    pub google: Option<GoogleAuthConfig>,
    pub predefined_accounts: Option<PredefinedAccountsConfig>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct GoogleAuthConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_uri: Option<String>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Portal
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Merge)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PortalPathsConfig {
    pub sign_in_path: Option<String>,
    pub settings_path: Option<String>,
    pub user_site_url: Option<String>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
// Logging
////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Merge)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LoggingConfig {
    pub format: Option<LogFormat>,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Reads the config file, if any, and fills the gaps with defaults
pub fn load_config(maybe_path: Option<&Path>) -> Result<PortalAppConfig, CLIError> {
    let mut config = match maybe_path {
        Some(path) => {
            let contents = std::fs::read_to_string(path).map_err(|e| {
                CLIError::usage_error(format!(
                    "Cannot read config file {}: {e}",
                    path.display()
                ))
            })?;
            parse_config(&contents)?
        }
        None => PortalAppConfig::default(),
    };

    config.merge(PortalAppConfig::default_values());
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<PortalAppConfig, CLIError> {
    // An empty file is a valid config with nothing set
    if contents.trim().is_empty() {
        return Ok(PortalAppConfig::default());
    }
    serde_yaml::from_str(contents).map_err(CLIError::usage_error_from)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
