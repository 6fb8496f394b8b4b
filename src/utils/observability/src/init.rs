// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use serde::{Deserialize, Serialize};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const DEFAULT_LOGGING_CONFIG: &str = "info,tower_http=info";
pub const VERBOSE_LOGGING_CONFIG: &str = "debug,sqlx=info,hyper=info,h2=info";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LogFormat {
    /// Human-readable output for terminals
    #[default]
    Pretty,
    /// Bunyan-compatible JSON lines
    Json,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Installs the global subscriber. `RUST_LOG` always wins over the verbosity
/// flag. Must be called once, before anything logs.
pub fn init(service_name: &str, format: LogFormat, verbose: bool) {
    use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};

    // Redirect all standard logging to tracing events
    tracing_log::LogTracer::init().expect("Failed to set LogTracer");

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new(VERBOSE_LOGGING_CONFIG)
        } else {
            EnvFilter::new(DEFAULT_LOGGING_CONFIG)
        }
    });

    match format {
        LogFormat::Pretty => {
            let subscriber = tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_span_events(if verbose {
                    FmtSpan::NEW | FmtSpan::CLOSE
                } else {
                    FmtSpan::NONE
                })
                .with_writer(std::io::stderr)
                .finish();

            tracing::subscriber::set_global_default(subscriber)
                .expect("Failed to set global tracing subscriber");
        }
        LogFormat::Json => {
            let subscriber = tracing_subscriber::registry()
                .with(env_filter)
                .with(JsonStorageLayer)
                .with(BunyanFormattingLayer::new(
                    service_name.to_string(),
                    std::io::stdout,
                ));

            tracing::subscriber::set_global_default(subscriber)
                .expect("Failed to set global tracing subscriber");
        }
    }
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
