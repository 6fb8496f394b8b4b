// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::path::PathBuf;

use dill::{Catalog, CatalogBuilder};
use explorify_accounts::{ENV_VAR_EXPLORIFY_JWT_SECRET, SessionConfig};
use explorify_accounts_services::PredefinedAccountsRegistrator;
use explorify_adapter_http::PortalConfig;
use explorify_adapter_oauth::{GoogleOAuthConfig, OAuthGoogle};
use internal_error::InternalError;

use crate::cli::{self, ConfigSubCommand};
use crate::{
    AuthConfig,
    CLIError,
    Command,
    ConfigShowCommand,
    DEFAULT_DATABASE_PATH,
    DEFAULT_GOOGLE_REDIRECT_URI,
    DEFAULT_SERVER_ADDRESS,
    DEFAULT_SERVER_PORT,
    DatabaseProvider,
    PortalAppConfig,
    PortalPathsConfig,
    ServeCommand,
    load_config,
};

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const BINARY_NAME: &str = "explorify-portal";
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub async fn run(args: cli::Cli) -> Result<(), CLIError> {
    let config = load_config(args.config.as_deref())?;

    observability::init::init(
        BINARY_NAME,
        config.logging.format.unwrap_or_default(),
        args.verbose,
    );
    observability::panic_handler::set_hook_trace_panics(true);

    tracing::info!(
        version = VERSION,
        args = ?std::env::args().collect::<Vec<_>>(),
        config_path = ?args.config,
        "Initializing {BINARY_NAME}"
    );

    let mut command: Box<dyn Command> = match args.command {
        cli::Command::Config(c) => match c.subcommand {
            ConfigSubCommand::Show => Box::new(ConfigShowCommand::new(config)),
        },
        cli::Command::Serve(serve) => {
            let catalog = configure_base_catalog(&config).await?.build();
            initialize_components(&catalog).await?;

            Box::new(ServeCommand::new(
                catalog,
                serve
                    .address
                    .or(config.server.address)
                    .unwrap_or(DEFAULT_SERVER_ADDRESS),
                serve
                    .port
                    .or(config.server.port)
                    .unwrap_or(DEFAULT_SERVER_PORT),
            ))
        }
    };

    let result = command.run().await;

    match &result {
        Ok(()) => tracing::info!("Command successful"),
        Err(err) => tracing::error!(error = ?err, error_msg = %err, "Command failed"),
    }

    result
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Registers everything the portal needs, backed by the configured store
pub async fn configure_base_catalog(config: &PortalAppConfig) -> Result<CatalogBuilder, CLIError> {
    let mut b = CatalogBuilder::new();

    b.add::<time_source::SystemTimeSourceDefault>();

    match config.database.provider.unwrap_or(DatabaseProvider::InMemory) {
        DatabaseProvider::InMemory => {
            tracing::warn!("Using in-memory account store, nothing will survive a restart");
            b.add::<explorify_accounts_inmem::InMemoryAccountRepository>();
        }
        DatabaseProvider::Sqlite => {
            let database_path = config
                .database
                .database_path
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_DATABASE_PATH));

            let pool = explorify_accounts_sqlite::connect_sqlite_database(&database_path).await?;

            b.add_value(pool);
            b.add::<explorify_accounts_sqlite::SqliteAccountRepository>();
        }
    }

    b.add_value(config.auth.password_hashing.unwrap_or_default());
    b.add_value(session_config(&config.auth)?);
    b.add_value(config.auth.predefined_accounts.clone().unwrap_or_default());
    b.add_value(portal_config(&config.portal));

    if let Some(google_config) = google_oauth_config(&config.auth) {
        tracing::info!(client_id = %google_config.client_id, "Google sign-in enabled");
        b.add_value(google_config);
        b.add::<OAuthGoogle>();
    } else {
        tracing::info!("Google sign-in disabled, no client credentials configured");
    }

    explorify_accounts_services::register_dependencies(&mut b);

    Ok(b)
}

/// Runs one-off startup jobs, such as seeding predefined accounts
pub async fn initialize_components(catalog: &Catalog) -> Result<(), InternalError> {
    let registrator = catalog
        .get_one::<PredefinedAccountsRegistrator>()
        .map_err(InternalError::new)?;

    registrator.run_initialization().await
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

fn session_config(auth: &AuthConfig) -> Result<SessionConfig, CLIError> {
    let maybe_jwt_secret = auth
        .jwt_secret
        .clone()
        .or_else(|| std::env::var(ENV_VAR_EXPLORIFY_JWT_SECRET).ok());

    if maybe_jwt_secret.is_none() {
        tracing::warn!("No JWT secret configured, sessions will not survive a restart");
    }

    let session_ttl = match auth.session_ttl {
        Some(ttl) => chrono::Duration::from_std(ttl.into()).map_err(CLIError::usage_error_from)?,
        None => SessionConfig::default_session_ttl(),
    };

    Ok(SessionConfig::new(maybe_jwt_secret, session_ttl))
}

fn portal_config(paths: &PortalPathsConfig) -> PortalConfig {
    let defaults = PortalConfig::default();

    PortalConfig {
        sign_in_path: paths.sign_in_path.clone().unwrap_or(defaults.sign_in_path),
        settings_path: paths
            .settings_path
            .clone()
            .unwrap_or(defaults.settings_path),
        user_site_url: paths
            .user_site_url
            .clone()
            .unwrap_or(defaults.user_site_url),
    }
}

fn google_oauth_config(auth: &AuthConfig) -> Option<GoogleOAuthConfig> {
    let google = auth.google.clone().unwrap_or_default();

    GoogleOAuthConfig::resolve(
        google.client_id,
        google.client_secret,
        google
            .redirect_uri
            .unwrap_or_else(|| DEFAULT_GOOGLE_REDIRECT_URI.to_string()),
    )
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
