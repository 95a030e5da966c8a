//! Network entry types as they appear in the configuration file.
//!
//! Responsibilities:
//! - Define `NetworkProfile`, the unresolved form of a network entry.
//! - Support partial entries (all fields optional) so env vars can complete them.
//!
//! Does NOT handle:
//! - Resolving secret references (see `SecureValue::resolve`).
//! - Validation of URLs or keys (see `loader::validate`).
//!
//! Invariants:
//! - Missing fields deserialize to empty values; `build()` reports them as
//!   validation errors rather than parse errors.
//! - Account order is preserved.

use serde::{Deserialize, Serialize};

use crate::types::secret::SecureValue;

/// A network entry before secret references are resolved.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkProfile {
    /// RPC endpoint; may contain `${VAR}` references.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    /// Signing keys or references to them.
    pub accounts: Vec<SecureValue>,
}

impl NetworkProfile {
    pub fn new(url: impl Into<String>, accounts: Vec<SecureValue>) -> Self {
        Self {
            url: Some(url.into()),
            accounts,
        }
    }
}
