//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//! - Provide conversion from lower-level errors (e.g., ConfigFileError).
//!
//! Does NOT handle:
//! - Error handling for CLI exit codes (see the CLI crate).
//!
//! Invariants:
//! - All error variants include context for debugging (variable names, network names, paths).
//! - No variant carries a secret: account keys, URLs, and raw `.env` or config
//!   file contents are never included.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

use crate::persistence::ConfigFileError;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Compiler version is required. Set \"solidity\" in the config file or TOOLCHAIN_SOLIDITY.")]
    MissingCompilerVersion,

    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Network '{network}' is missing an RPC url")]
    MissingUrl { network: String },

    #[error("Invalid RPC url for network '{network}': {message}")]
    InvalidUrl { network: String, message: String },

    #[error("Network '{network}' has no accounts configured")]
    EmptyAccounts { network: String },

    #[error("Invalid account #{index} for network '{network}': {message}")]
    InvalidAccount {
        network: String,
        index: usize,
        message: String,
    },

    #[error(
        "Network '{network}' uses a placeholder {field}; provide a real value or use the development context"
    )]
    PlaceholderCredential { network: String, field: String },

    #[error("Network '{0}' is not configured")]
    UnknownNetwork(String),

    #[error("Unable to determine config directory: {0}")]
    ConfigDirUnavailable(String),

    #[error("Config file not found at {path}")]
    ConfigFileNotFound { path: PathBuf },

    #[error("Failed to read config file at {path}")]
    ConfigFileRead { path: PathBuf },

    #[error("Failed to parse config file at {path} (line {line}, column {column})")]
    ConfigFileParse {
        path: PathBuf,
        line: usize,
        column: usize,
    },

    #[error("Failed to write config file at {path}")]
    ConfigFileWrite { path: PathBuf },

    #[error("Config file already exists at {path}. Hint: pass --force to overwrite")]
    ConfigFileExists { path: PathBuf },

    #[error("Keyring error: {0}")]
    Keyring(#[from] keyring::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl From<ConfigFileError> for ConfigError {
    fn from(error: ConfigFileError) -> Self {
        match error {
            ConfigFileError::Read { path, source } if source.kind() == ErrorKind::NotFound => {
                ConfigError::ConfigFileNotFound { path }
            }
            ConfigFileError::Read { path, .. } => ConfigError::ConfigFileRead { path },
            ConfigFileError::Parse { path, line, column } => {
                ConfigError::ConfigFileParse { path, line, column }
            }
            ConfigFileError::Write { path, .. } => ConfigError::ConfigFileWrite { path },
            ConfigFileError::Exists { path } => ConfigError::ConfigFileExists { path },
        }
    }
}
