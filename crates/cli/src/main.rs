//! Toolchain CLI - inspect and scaffold smart-contract toolchain configuration.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Load the shared `ToolchainConfiguration` and hand it to command handlers.
//! - Report failures with structured exit codes.
//!
//! Does NOT handle:
//! - Configuration rules or file formats (see `crates/config`).
//! - Compiling or deploying contracts.
//!
//! Invariants:
//! - The tracing subscriber is installed before anything else runs.
//! - `load_dotenv()` is called BEFORE CLI parsing to allow `.env` to provide clap defaults.
//! - Logs go to stderr; stdout carries only command output.

mod args;
mod commands;
mod config_context;
mod dispatch;
mod error;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use toolchain_config::ConfigLoader;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    // Logging first so `.env` loading is traced; RUST_LOG must come from the
    // real environment, not from `.env`.
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load .env file BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::from(&e).as_i32());
    }

    let cli = Cli::parse();

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
