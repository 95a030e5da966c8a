//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` for layered configuration merging.
//! - Support loading from the config file, environment variables, and direct builder methods.
//! - Build the final `ToolchainConfiguration`, resolving secret references and validating.
//!
//! Does NOT handle:
//! - Direct environment variable parsing logic (delegated to env.rs).
//! - Config file discovery and reading (delegated to file.rs).
//! - Individual field checks (delegated to validate.rs).
//!
//! Invariants / Assumptions:
//! - Sources are applied in call order and the last one applied wins; the
//!   canonical chain is file, then environment, then builder methods.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.
//! - `build()` either returns a fully validated configuration or an error;
//!   nothing partial is ever handed out.

use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use secrecy::{ExposeSecret, SecretString};

use super::env::apply_env;
use super::error::ConfigError;
use super::file::{ConfigLocation, apply_file, resolve_config_path};
use super::interpolate::interpolate_env;
use super::validate::{check_placeholder, looks_like_semver, validate_account, validate_url};
use crate::constants::ENV_DOTENV_DISABLED;
use crate::types::{
    DeploymentContext, NetworkEndpoint, NetworkProfile, SecureValue, ToolchainConfiguration,
};

/// Configuration loader that builds a toolchain configuration from files and environment.
#[derive(Debug, Default)]
pub struct ConfigLoader {
    compiler_version: Option<String>,
    networks: BTreeMap<String, NetworkProfile>,
    context: Option<DeploymentContext>,
    referenced_networks: BTreeSet<String>,
    config_path: Option<PathBuf>,
    loaded_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(ENV_DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// If `DOTENV_DISABLED` environment variable is set to "true" or "1",
    /// the .env file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Use a specific config file; it must exist when `from_file()` runs.
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Read configuration from the config file.
    ///
    /// A missing file is only an error when its path was given explicitly
    /// (builder or `TOOLCHAIN_CONFIG_PATH`).
    pub fn from_file(mut self) -> Result<Self, ConfigError> {
        apply_file(&mut self)?;
        Ok(self)
    }

    /// Read configuration from environment variables.
    ///
    /// Environment variables take precedence over file settings.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        apply_env(&mut self)?;
        Ok(self)
    }

    /// Set the compiler version.
    pub fn with_compiler_version(mut self, version: String) -> Self {
        self.compiler_version = Some(version);
        self
    }

    /// Set the deployment context.
    pub fn with_context(mut self, context: DeploymentContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Mark a network as one the caller will sign against; it must be configured.
    pub fn with_network(mut self, name: String) -> Self {
        self.referenced_networks.insert(name);
        self
    }

    /// Replace a network entry.
    pub fn with_network_profile(mut self, name: String, profile: NetworkProfile) -> Self {
        self.networks.insert(name, profile);
        self
    }

    /// Set the RPC url of a network, creating the entry if needed.
    pub fn with_network_url(mut self, name: String, url: String) -> Self {
        self.set_network_url(&name, url);
        self
    }

    /// Set the signing keys of a network, creating the entry if needed.
    pub fn with_network_accounts(mut self, name: String, accounts: Vec<String>) -> Self {
        self.set_network_accounts(&name, accounts.into_iter().map(SecureValue::plain).collect());
        self
    }

    /// Where `from_file()` reads from, and why that location was chosen.
    pub fn config_location(&self) -> Result<ConfigLocation, ConfigError> {
        resolve_config_path(self.config_path.as_deref())
    }

    /// The config file actually read by `from_file()`, if any.
    pub fn loaded_path(&self) -> Option<&PathBuf> {
        self.loaded_path.as_ref()
    }

    /// The deployment context that `build()` will use.
    pub fn context(&self) -> DeploymentContext {
        self.context.unwrap_or_default()
    }

    /// Build the final configuration.
    ///
    /// Checks run in this order and stop at the first failure:
    /// 1. compiler version present
    /// 2. every referenced network is configured
    /// 3. every network has a valid url and at least one valid account
    pub fn build(self) -> Result<ToolchainConfiguration, ConfigError> {
        let context = self.context();

        let compiler_version = self
            .compiler_version
            .clone()
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::MissingCompilerVersion)?;
        if !looks_like_semver(&compiler_version) {
            tracing::warn!(
                compiler_version = %compiler_version,
                "Compiler version is not MAJOR.MINOR.PATCH; passing it to the compiler unchanged"
            );
        }

        if let Some(unknown) = self
            .referenced_networks
            .iter()
            .find(|name| !self.networks.contains_key(*name))
        {
            return Err(ConfigError::UnknownNetwork(unknown.clone()));
        }

        // Referenced networks first so their errors win over unrelated entries.
        let (referenced, others): (Vec<_>, Vec<_>) = self
            .networks
            .into_iter()
            .partition(|(name, _)| self.referenced_networks.contains(name));

        let mut networks = BTreeMap::new();
        for (name, profile) in referenced.into_iter().chain(others) {
            let endpoint = resolve_network(&name, profile, context)?;
            networks.insert(name, endpoint);
        }

        tracing::debug!(
            compiler_version = %compiler_version,
            networks = networks.len(),
            context = %context,
            "Toolchain configuration built"
        );

        Ok(ToolchainConfiguration {
            compiler_version,
            networks,
        })
    }

    // Internal accessor methods for use by other loader modules

    pub(crate) fn config_path(&self) -> Option<&PathBuf> {
        self.config_path.as_ref()
    }

    pub(crate) fn network_names(&self) -> impl Iterator<Item = &String> {
        self.networks.keys()
    }

    pub(crate) fn set_loaded_path(&mut self, path: Option<PathBuf>) {
        self.loaded_path = path;
    }

    pub(crate) fn set_compiler_version(&mut self, version: Option<String>) {
        self.compiler_version = version;
    }

    pub(crate) fn set_context(&mut self, context: Option<DeploymentContext>) {
        self.context = context;
    }

    pub(crate) fn add_referenced_network(&mut self, name: String) {
        self.referenced_networks.insert(name);
    }

    pub(crate) fn set_network_profile(&mut self, name: String, profile: NetworkProfile) {
        self.networks.insert(name, profile);
    }

    pub(crate) fn set_network_url(&mut self, name: &str, url: String) {
        self.networks.entry(name.to_string()).or_default().url = Some(url);
    }

    pub(crate) fn set_network_accounts(&mut self, name: &str, accounts: Vec<SecureValue>) {
        self.networks.entry(name.to_string()).or_default().accounts = accounts;
    }
}

/// Resolve secret references of one network entry and validate the result.
fn resolve_network(
    name: &str,
    profile: NetworkProfile,
    context: DeploymentContext,
) -> Result<NetworkEndpoint, ConfigError> {
    let raw_url = profile
        .url
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ConfigError::MissingUrl {
            network: name.to_string(),
        })?;

    let url = interpolate_env(raw_url, name)?;
    validate_url(name, &url)?;
    check_placeholder(name, "url", &url, context)?;

    if profile.accounts.is_empty() {
        return Err(ConfigError::EmptyAccounts {
            network: name.to_string(),
        });
    }

    let accounts = profile
        .accounts
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let resolved = value.resolve()?;
            let secret = SecretString::new(resolved.expose_secret().trim().into());
            validate_account(name, index, &secret, context)?;
            Ok(secret)
        })
        .collect::<Result<Vec<_>, ConfigError>>()?;

    Ok(NetworkEndpoint::new(url, accounts))
}
