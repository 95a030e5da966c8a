//! Configuration loading for CLI commands.
//!
//! Responsibilities:
//! - Build a `ConfigLoader` from global flags, the config file, and environment.
//! - Capture where the configuration came from for display.
//!
//! Does NOT handle:
//! - `.env` loading (done in `main()` before CLI parsing).
//! - Validation rules (owned by `toolchain_config`).
//!
//! Invariants:
//! - Precedence: CLI flags > environment variables > config file.
//! - The configuration is built once and passed by reference to handlers.

use std::path::PathBuf;

use toolchain_config::constants::ENV_CONFIG_PATH;
use toolchain_config::{
    ConfigError, ConfigLoader, DeploymentContext, ToolchainConfiguration, env_var_or_none,
};

use crate::args::Cli;

/// A validated configuration plus the facts commands report about it.
pub struct LoadedConfig {
    pub config: ToolchainConfiguration,
    pub context: DeploymentContext,
    pub source: Option<PathBuf>,
}

/// Create a loader with the config path flag applied.
///
/// A path that clap filled in from `TOOLCHAIN_CONFIG_PATH` is left for the
/// loader to resolve so it is reported as coming from the environment.
/// Blank values are ignored.
pub fn loader_for(cli: &Cli) -> ConfigLoader {
    let loader = ConfigLoader::new();

    let Some(path) = cli.config_path.as_ref() else {
        return loader;
    };
    let path_str = path.to_string_lossy();
    if path_str.trim().is_empty() {
        return loader;
    }
    if env_var_or_none(ENV_CONFIG_PATH).as_deref() == Some(&*path_str) {
        return loader;
    }
    loader.with_config_path(path.clone())
}

/// Load and validate the configuration for a command.
pub fn load(cli: &Cli) -> Result<LoadedConfig, ConfigError> {
    let mut loader = loader_for(cli).from_file()?.from_env()?;

    if let Some(version) = cli.solidity.as_ref() {
        loader = loader.with_compiler_version(version.clone());
    }
    if let Some(context) = cli.context {
        loader = loader.with_context(context);
    }
    if let Some(network) = cli.network.as_ref() {
        loader = loader.with_network(network.clone());
    }

    let context = loader.context();
    let source = loader.loaded_path().cloned();
    let config = loader.build()?;

    Ok(LoadedConfig {
        config,
        context,
        source,
    })
}
