//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//! - Load the configuration once for commands that operate on it.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Exit code mapping (see `error` module).
//!
//! Invariants:
//! - Configuration errors surface before any handler runs.

use anyhow::Result;
use std::path::PathBuf;
use toolchain_config::constants::CONFIG_FILE_NAME;

use crate::args::{Cli, Commands};
use crate::commands;
use crate::config_context;

/// Dispatch CLI commands to their respective handlers.
///
/// Commands that operate on the configuration load it here, once, and
/// receive it by reference.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Check => commands::check::run(&config_context::load(&cli)?, cli.output),
        Commands::Show => commands::show::run(&config_context::load(&cli)?, cli.output),
        Commands::Networks => commands::networks::run(&config_context::load(&cli)?, cli.output),
        Commands::Init { ref path, force } => {
            let target = path
                .clone()
                .or_else(|| {
                    cli.config_path
                        .clone()
                        .filter(|p| !p.to_string_lossy().trim().is_empty())
                })
                .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME));
            commands::init::run(&target, force)
        }
        Commands::Path => {
            let location = config_context::loader_for(&cli).config_location()?;
            commands::path::run(&location, cli.output)
        }
    }
}
