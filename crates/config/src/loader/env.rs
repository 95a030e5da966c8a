//! Environment variable parsing for configuration.
//!
//! Responsibilities:
//! - Read and parse `TOOLCHAIN_*` environment variables.
//! - Apply environment variable values to a ConfigLoader instance.
//! - Provide helper functions for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Loading the config file (see file.rs).
//! - Building the final configuration (see builder.rs).
//! - .env file loading (handled by ConfigLoader::load_dotenv).
//!
//! Invariants:
//! - Environment variables take precedence over config file settings.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).
//! - Per-network variables are applied in sorted key order.

use std::collections::BTreeMap;

use super::builder::ConfigLoader;
use super::error::ConfigError;
use crate::constants::{
    ENV_CONTEXT, ENV_NETWORK, ENV_NETWORK_ACCOUNTS_SUFFIX, ENV_NETWORK_PREFIX,
    ENV_NETWORK_URL_SUFFIX, ENV_SOLIDITY,
};
use crate::types::SecureValue;

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value (leading/trailing whitespace removed) if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// The environment-variable segment for a network name (`arbitrum-one` → `ARBITRUM_ONE`).
pub fn network_env_key(name: &str) -> String {
    name.to_ascii_uppercase().replace('-', "_")
}

/// Apply environment variable configuration to the loader.
///
/// Environment variables take precedence over config file settings.
pub fn apply_env(loader: &mut ConfigLoader) -> Result<(), ConfigError> {
    if let Some(version) = env_var_or_none(ENV_SOLIDITY) {
        loader.set_compiler_version(Some(version));
    }
    if let Some(context) = env_var_or_none(ENV_CONTEXT) {
        loader.set_context(Some(context.parse()?));
    }
    if let Some(network) = env_var_or_none(ENV_NETWORK) {
        loader.add_referenced_network(network);
    }

    for (segment, overrides) in collect_network_overrides() {
        let name = network_name_for(loader, &segment);

        if let Some(url) = overrides.url {
            tracing::debug!(network = %name, "Applying RPC url from environment");
            loader.set_network_url(&name, url);
        }
        if let Some(accounts) = overrides.accounts {
            let accounts: Vec<SecureValue> = accounts
                .split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(SecureValue::plain)
                .collect();
            tracing::debug!(
                network = %name,
                count = accounts.len(),
                "Applying accounts from environment"
            );
            loader.set_network_accounts(&name, accounts);
        }
    }

    Ok(())
}

#[derive(Default)]
struct NetworkOverrides {
    url: Option<String>,
    accounts: Option<String>,
}

/// Gather `TOOLCHAIN_NETWORK_<NAME>_URL` / `_ACCOUNTS` values keyed by `<NAME>`.
fn collect_network_overrides() -> BTreeMap<String, NetworkOverrides> {
    let mut found: BTreeMap<String, NetworkOverrides> = BTreeMap::new();

    for (key, _) in std::env::vars_os() {
        let Some(key) = key.to_str() else { continue };
        let Some(rest) = key.strip_prefix(ENV_NETWORK_PREFIX) else {
            continue;
        };

        if let Some(segment) = rest.strip_suffix(ENV_NETWORK_URL_SUFFIX)
            && !segment.is_empty()
            && let Some(value) = env_var_or_none(key)
        {
            found.entry(segment.to_string()).or_default().url = Some(value);
        } else if let Some(segment) = rest.strip_suffix(ENV_NETWORK_ACCOUNTS_SUFFIX)
            && !segment.is_empty()
            && let Some(value) = env_var_or_none(key)
        {
            found.entry(segment.to_string()).or_default().accounts = Some(value);
        }
    }

    found
}

/// Map an env segment back to a configured network, or derive a new lower-case name.
fn network_name_for(loader: &ConfigLoader, segment: &str) -> String {
    loader
        .network_names()
        .find(|name| network_env_key(name) == segment)
        .cloned()
        .unwrap_or_else(|| segment.to_ascii_lowercase())
}
