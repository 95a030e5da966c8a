//! Configuration management for the smart-contract toolchain.
//!
//! This crate produces the single `ToolchainConfiguration` (compiler version
//! plus network endpoints and signing accounts) consumed by compile and deploy
//! tooling, loaded from a JSON file, environment variables, and `.env`.

pub mod constants;
mod loader;
pub mod persistence;
pub mod types;

pub use loader::{
    ConfigError, ConfigLoader, ConfigLocation, ConfigPathSource, env_var_or_none,
    network_env_key, resolve_config_path,
};
pub use persistence::{ConfigFile, ConfigFileError};
pub use types::{
    DeploymentContext, KEYRING_SERVICE, NetworkEndpoint, NetworkProfile, SecureValue,
    ToolchainConfiguration,
};
