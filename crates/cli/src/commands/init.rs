//! Init command implementation.

use anyhow::{Context, Result};
use std::path::Path;
use toolchain_config::ConfigError;
use toolchain_config::constants::TEMPLATE_ACCOUNT_ENV;
use toolchain_config::persistence::{ConfigFile, write_config_file};

pub fn run(path: &Path, force: bool) -> Result<()> {
    write_config_file(path, &ConfigFile::template(), force)
        .map_err(ConfigError::from)
        .with_context(|| format!("Failed to write template to {}", path.display()))?;

    println!("Wrote configuration template to {}", path.display());
    eprintln!(
        "Set INFURA_PROJECT_ID and {} before loading it.",
        TEMPLATE_ACCOUNT_ENV
    );

    Ok(())
}
