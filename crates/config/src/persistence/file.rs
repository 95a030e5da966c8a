//! On-disk configuration file format.
//!
//! Responsibilities:
//! - Define the persisted layout (`ConfigFile`): `solidity` plus `networks`.
//! - Read and parse configuration files.
//! - Write configuration files atomically, including the starter template.
//!
//! Does NOT handle:
//! - Resolving secret references or validation (see `loader`).
//! - Deciding which file to read (see `loader::file`).
//!
//! Invariants:
//! - Parse errors carry only the line and column, never file contents.
//! - Writes are atomic (temp file persisted in place) and never replace an existing
//!   file unless explicitly asked to.

use std::collections::BTreeMap;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::constants::{
    TEMPLATE_ACCOUNT_ENV, TEMPLATE_COMPILER_VERSION, TEMPLATE_NETWORK, TEMPLATE_URL,
};
use crate::types::{NetworkProfile, SecureValue};

/// The configuration file as stored on disk.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    /// Compiler version.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solidity: Option<String>,
    /// Network entries keyed by name.
    pub networks: BTreeMap<String, NetworkProfile>,
}

impl ConfigFile {
    /// Starter configuration with secret references instead of inline credentials.
    pub fn template() -> Self {
        let mut networks = BTreeMap::new();
        networks.insert(
            TEMPLATE_NETWORK.to_string(),
            NetworkProfile::new(TEMPLATE_URL, vec![SecureValue::env(TEMPLATE_ACCOUNT_ENV)]),
        );
        Self {
            solidity: Some(TEMPLATE_COMPILER_VERSION.to_string()),
            networks,
        }
    }
}

/// Errors that can occur when reading or writing the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Failed to read config file at {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path} (line {line}, column {column})")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
    },

    #[error("Failed to write config file at {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Config file already exists at {path}")]
    Exists { path: PathBuf },
}

/// Reads and parses the config file from disk.
pub fn read_config_file(path: &Path) -> Result<ConfigFile, ConfigFileError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;

    serde_json::from_str::<ConfigFile>(&content).map_err(|e| ConfigFileError::Parse {
        path: path.to_path_buf(),
        line: e.line(),
        column: e.column(),
    })
}

/// Atomically writes `file` to `path`.
///
/// The content goes to a temporary file in the target directory, which is
/// then persisted over the target, so the config file is never left partially
/// written and a failed write leaves no temporary file behind. Without
/// `overwrite` the final step refuses to clobber, failing with
/// `ConfigFileError::Exists` even if the file appeared meanwhile.
pub fn write_config_file(
    path: &Path,
    file: &ConfigFile,
    overwrite: bool,
) -> Result<(), ConfigFileError> {
    let write_err = |source: std::io::Error| ConfigFileError::Write {
        path: path.to_path_buf(),
        source,
    };

    let parent = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    std::fs::create_dir_all(parent).map_err(write_err)?;

    let content = serde_json::to_string_pretty(file)
        .map_err(|e| write_err(std::io::Error::other(e)))?;

    let mut temp = NamedTempFile::new_in(parent).map_err(write_err)?;
    writeln!(temp, "{content}").map_err(write_err)?;
    temp.as_file().sync_all().map_err(write_err)?;

    let persisted = if overwrite {
        temp.persist(path)
    } else {
        temp.persist_noclobber(path)
    };
    persisted.map_err(|e| {
        if !overwrite && e.error.kind() == ErrorKind::AlreadyExists {
            ConfigFileError::Exists {
                path: path.to_path_buf(),
            }
        } else {
            write_err(e.error)
        }
    })?;

    tracing::debug!(
        path = %path.display(),
        networks = file.networks.len(),
        "Config file written atomically"
    );

    Ok(())
}
