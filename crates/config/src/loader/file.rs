//! Config file discovery and loading.
//!
//! Responsibilities:
//! - Decide which configuration file to read.
//! - Apply the file's values to a ConfigLoader instance.
//!
//! Does NOT handle:
//! - Environment variable parsing (see env.rs).
//! - Building the final configuration (see builder.rs).
//! - File parsing or writing (see `persistence`).
//!
//! Invariants:
//! - Location precedence: builder path, `TOOLCHAIN_CONFIG_PATH`, `./toolchain.json`
//!   (only if it exists), then the per-user config directory.
//! - An explicitly chosen file that does not exist is an error; an implicit one is skipped.
//! - File values are applied before environment variables (env vars take precedence).

use std::fmt;
use std::path::{Path, PathBuf};

use super::builder::ConfigLoader;
use super::env::env_var_or_none;
use super::error::ConfigError;
use crate::constants::ENV_CONFIG_PATH;
use crate::persistence::{ConfigFile, default_config_path, local_config_path, read_config_file};

/// Why a configuration file location was chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPathSource {
    /// Given to the loader directly (e.g. `--config-path`).
    Explicit,
    /// Taken from `TOOLCHAIN_CONFIG_PATH`.
    Env,
    /// `toolchain.json` in the working directory.
    Local,
    /// The per-user configuration directory.
    Default,
}

impl ConfigPathSource {
    /// Explicit locations must exist.
    pub fn is_explicit(self) -> bool {
        matches!(self, Self::Explicit | Self::Env)
    }
}

impl fmt::Display for ConfigPathSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Explicit => "command line",
            Self::Env => ENV_CONFIG_PATH,
            Self::Local => "working directory",
            Self::Default => "user config directory",
        };
        f.write_str(label)
    }
}

/// A resolved configuration file location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub path: PathBuf,
    pub source: ConfigPathSource,
}

/// Resolve where the configuration file lives.
pub fn resolve_config_path(explicit: Option<&Path>) -> Result<ConfigLocation, ConfigError> {
    if let Some(path) = explicit.filter(|p| !p.as_os_str().is_empty()) {
        return Ok(ConfigLocation {
            path: path.to_path_buf(),
            source: ConfigPathSource::Explicit,
        });
    }

    if let Some(path) = env_var_or_none(ENV_CONFIG_PATH) {
        return Ok(ConfigLocation {
            path: PathBuf::from(path),
            source: ConfigPathSource::Env,
        });
    }

    let local = local_config_path().map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()))?;
    if local.exists() {
        return Ok(ConfigLocation {
            path: local,
            source: ConfigPathSource::Local,
        });
    }

    let path = default_config_path().map_err(|e| ConfigError::ConfigDirUnavailable(e.to_string()))?;
    Ok(ConfigLocation {
        path,
        source: ConfigPathSource::Default,
    })
}

/// Apply the configuration file's values to the loader.
pub fn apply_file(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    let location = resolve_config_path(loader.config_path().map(PathBuf::as_path))?;

    if !location.path.exists() {
        if location.source.is_explicit() {
            return Err(ConfigError::ConfigFileNotFound {
                path: location.path,
            });
        }
        tracing::debug!(
            path = %location.path.display(),
            "No config file found, skipping"
        );
        return Ok(());
    }

    let file = read_config_file(&location.path)?;
    tracing::debug!(
        path = %location.path.display(),
        source = %location.source,
        networks = file.networks.len(),
        "Loaded config file"
    );

    apply_config_file(loader, file);
    loader.set_loaded_path(Some(location.path));
    Ok(())
}

/// Apply parsed file values to the loader.
fn apply_config_file(loader: &mut ConfigLoader, file: ConfigFile) {
    if let Some(version) = file.solidity {
        loader.set_compiler_version(Some(version));
    }
    for (name, profile) in file.networks {
        loader.set_network_profile(name, profile);
    }
}
