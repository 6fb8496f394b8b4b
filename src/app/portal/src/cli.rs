// Copyright Kamu Data, Inc. and contributors. All rights reserved.
//
// Use of this software is governed by the Business Source License
// included in the LICENSE file.
//
// As of the Change Date specified in that file, in accordance with
// the Business Source License, use of this software will be governed
// by the Apache License, Version 2.0.

use std::net::IpAddr;
use std::path::PathBuf;

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

pub const ENV_VAR_EXPLORIFY_PORTAL_CONFIG: &str = "EXPLORIFY_PORTAL_CONFIG";

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////

/// Vendor portal of Explorify Trips
#[derive(Debug, clap::Parser)]
#[command(name = "explorify-portal", version, about)]
pub struct Cli {
    /// Path to the YAML configuration file
    #[arg(long, global = true, env = ENV_VAR_EXPLORIFY_PORTAL_CONFIG)]
    pub config: Option<PathBuf>,

    /// Sets the level of verbosity
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, clap::Subcommand)]
pub enum Command {
    /// Runs the portal HTTP server
    Serve(Serve),

    /// Inspects the effective configuration
    Config(Config),
}

#[derive(Debug, clap::Args)]
pub struct Serve {
    /// Bind to a specific network interface
    #[arg(long)]
    pub address: Option<IpAddr>,

    /// Expose HTTP server on specific port
    #[arg(long)]
    pub port: Option<u16>,
}

#[derive(Debug, clap::Args)]
pub struct Config {
    #[command(subcommand)]
    pub subcommand: ConfigSubCommand,
}

#[derive(Debug, clap::Subcommand)]
pub enum ConfigSubCommand {
    /// Prints the configuration merged with defaults, secrets masked
    Show,
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
