//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ConfigError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Any configuration the toolchain could not accept exits with 5.

use toolchain_config::ConfigError;

/// Structured exit codes for the toolchain CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - I/O, keyring, or other failures unrelated to the
    /// configuration's content.
    GeneralError = 1,

    /// Not found - an explicitly requested config file does not exist.
    NotFound = 4,

    /// Validation error - the configuration is missing or malformed.
    ///
    /// Scripts should fix the configuration and not retry.
    ValidationError = 5,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::ConfigFileNotFound { .. } => ExitCode::NotFound,

            // A keyring reference with no stored secret is a missing credential,
            // same as an unset `{ "env": ... }` reference.
            ConfigError::Keyring(keyring::Error::NoEntry) => ExitCode::ValidationError,

            ConfigError::ConfigDirUnavailable(_)
            | ConfigError::ConfigFileRead { .. }
            | ConfigError::ConfigFileWrite { .. }
            | ConfigError::ConfigFileExists { .. }
            | ConfigError::Keyring(_)
            | ConfigError::Io(_)
            | ConfigError::DotenvIo { .. } => ExitCode::GeneralError,

            ConfigError::MissingCompilerVersion
            | ConfigError::MissingEnvVar(_)
            | ConfigError::InvalidValue { .. }
            | ConfigError::MissingUrl { .. }
            | ConfigError::InvalidUrl { .. }
            | ConfigError::EmptyAccounts { .. }
            | ConfigError::InvalidAccount { .. }
            | ConfigError::PlaceholderCredential { .. }
            | ConfigError::UnknownNetwork(_)
            | ConfigError::ConfigFileParse { .. }
            | ConfigError::DotenvParse { .. }
            | ConfigError::DotenvUnknown => ExitCode::ValidationError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no ConfigError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| cause.downcast_ref::<ConfigError>())
            .map(ExitCode::from)
            .unwrap_or(ExitCode::GeneralError)
    }
}
