//! Resolved toolchain configuration types.
//!
//! Responsibilities:
//! - Define `ToolchainConfiguration`, the single value handed to the compiler
//!   and deploy consumers, and its `NetworkEndpoint` entries.
//! - Define `DeploymentContext`, which decides how strictly credentials are checked.
//! - Provide redacted rendering of endpoints for logs and terminal output.
//!
//! Does NOT handle:
//! - Loading or validating values (see `loader` module).
//! - The on-disk file form with unresolved secret references (see `types::network`).
//!
//! Invariants:
//! - Values are immutable after `ConfigLoader::build()`; there are no setters.
//! - Account keys are `SecretString`s and never appear in `Debug` output.
//! - Endpoint URLs are kept exactly as configured; only rendering redacts them.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::loader::{ConfigError, ConfigLoader};
use crate::types::secret::secret_list;

/// Where the configuration is going to be used.
///
/// A live context rejects stand-in credentials and requires well-formed
/// private keys; development tolerates both.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeploymentContext {
    /// Local development and tests.
    #[default]
    Development,
    /// A real network where transactions will be signed.
    Live,
}

impl DeploymentContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Live => "live",
        }
    }
}

impl fmt::Display for DeploymentContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DeploymentContext {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "live" | "production" | "prod" => Ok(Self::Live),
            _ => Err(ConfigError::InvalidValue {
                var: crate::constants::ENV_CONTEXT.to_string(),
                message: "must be development or live".to_string(),
            }),
        }
    }
}

/// RPC endpoint and signing accounts for one network.
#[derive(Clone, Serialize, Deserialize)]
pub struct NetworkEndpoint {
    /// HTTP(S) RPC endpoint, usually carrying a provider project id.
    pub url: String,
    /// Signing keys, in configured order.
    #[serde(with = "secret_list")]
    pub accounts: Vec<SecretString>,
}

impl NetworkEndpoint {
    pub fn new(url: impl Into<String>, accounts: Vec<SecretString>) -> Self {
        Self {
            url: url.into(),
            accounts,
        }
    }

    /// The endpoint with path and query hidden (e.g. `https://rinkeby.infura.io/…`).
    ///
    /// Provider project ids live in the path, so only scheme, host and port are shown.
    pub fn redacted_url(&self) -> String {
        redact_url(&self.url)
    }
}

impl fmt::Debug for NetworkEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NetworkEndpoint")
            .field("url", &self.redacted_url())
            .field("accounts", &self.accounts)
            .finish()
    }
}

impl PartialEq for NetworkEndpoint {
    fn eq(&self, other: &Self) -> bool {
        self.url == other.url
            && self.accounts.len() == other.accounts.len()
            && self
                .accounts
                .iter()
                .zip(&other.accounts)
                .all(|(a, b)| a.expose_secret() == b.expose_secret())
    }
}

impl Eq for NetworkEndpoint {}

/// The complete configuration consumed by the compiler and deploy tooling.
///
/// Serializes to the persisted layout: `{ "solidity": ..., "networks": {...} }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolchainConfiguration {
    /// Compiler release to invoke (e.g. `0.8.25`).
    #[serde(rename = "solidity")]
    pub compiler_version: String,
    /// Endpoints keyed by network name.
    #[serde(default)]
    pub networks: BTreeMap<String, NetworkEndpoint>,
}

impl ToolchainConfiguration {
    /// Load the configuration from `.env`, the config file, and environment variables.
    ///
    /// Equivalent to:
    ///
    /// ```rust,ignore
    /// ConfigLoader::new().load_dotenv()?.from_file()?.from_env()?.build()
    /// ```
    pub fn load() -> Result<Self, ConfigError> {
        ConfigLoader::new()
            .load_dotenv()?
            .from_file()?
            .from_env()?
            .build()
    }

    /// Look up a network endpoint by name.
    pub fn network(&self, name: &str) -> Option<&NetworkEndpoint> {
        self.networks.get(name)
    }

    /// Configured network names in sorted order.
    pub fn network_names(&self) -> impl Iterator<Item = &str> {
        self.networks.keys().map(String::as_str)
    }
}

/// Hide everything after the authority of a URL.
fn redact_url(raw: &str) -> String {
    match url::Url::parse(raw) {
        Ok(parsed) => {
            let host = parsed.host_str().unwrap_or_default();
            let authority = match parsed.port() {
                Some(port) => format!("{host}:{port}"),
                None => host.to_string(),
            };
            let hidden = parsed.path() != "/" || parsed.query().is_some();
            format!(
                "{}://{}{}",
                parsed.scheme(),
                authority,
                if hidden { "/…" } else { "" }
            )
        }
        Err(_) => "<redacted>".to_string(),
    }
}
