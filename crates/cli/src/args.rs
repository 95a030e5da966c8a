//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load configuration (see `config_context` module).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use toolchain_config::DeploymentContext;
use toolchain_config::constants::ENV_CONFIG_PATH;

#[derive(Parser)]
#[command(name = "toolchain")]
#[command(about = "Inspect and scaffold smart-contract toolchain configuration", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  toolchain init\n  toolchain check\n  toolchain --network rinkeby --context live check\n  toolchain show -o json\n  toolchain --config-path ./deploy/toolchain.json networks\n"
)]
pub struct Cli {
    /// Path to a custom configuration file (overrides default location).
    ///
    /// Can also be set via TOOLCHAIN_CONFIG_PATH environment variable.
    #[arg(long, global = true, env = ENV_CONFIG_PATH, value_name = "FILE")]
    pub config_path: Option<PathBuf>,

    /// Network the command targets; it must be configured and have accounts
    #[arg(long, global = true, value_name = "NAME")]
    pub network: Option<String>,

    /// Deployment context (development, live)
    #[arg(long, global = true, value_parser = parse_context)]
    pub context: Option<DeploymentContext>,

    /// Compiler version override (e.g. 0.8.25)
    #[arg(long, global = true, value_name = "VERSION")]
    pub solidity: Option<String>,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Load and validate the configuration
    Check,

    /// Print the loaded configuration with secrets redacted
    Show,

    /// List configured network names
    Networks,

    /// Write a configuration template
    Init {
        /// Destination file (defaults to --config-path or ./toolchain.json)
        #[arg(long, value_name = "FILE")]
        path: Option<PathBuf>,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print the resolved configuration file path
    Path,
}

fn parse_context(value: &str) -> Result<DeploymentContext, String> {
    value.parse().map_err(|e: toolchain_config::ConfigError| e.to_string())
}
