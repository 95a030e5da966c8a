//! Configuration loader for environment variables and files.
//!
//! Responsibilities:
//! - Load configuration from `.env` files, environment variables, and the JSON config file.
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Resolve secret references and validate before handing out a configuration.
//! - Enforce `DOTENV_DISABLED` gate to prevent accidental dotenv loading in tests.
//!
//! Does NOT handle:
//! - Writing configuration files (see `persistence`).
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over config file values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

mod builder;
mod env;
mod error;
mod file;
mod interpolate;
mod validate;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use env::{env_var_or_none, network_env_key};
pub use error::ConfigError;
pub use file::{ConfigLocation, ConfigPathSource, resolve_config_path};
