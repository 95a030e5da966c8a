//! Secret value types for toolchain configuration.
//!
//! Responsibilities:
//! - Define where a credential is stored (inline, environment, or keyring).
//! - Resolve a stored credential into a `SecretString` at load time.
//! - Handle serialization of secret values.
//!
//! Does NOT handle:
//! - Validating the resolved value (see `loader::validate`).
//! - Keyring entry creation/management (only retrieval).
//!
//! Invariants:
//! - All resolved secrets use `secrecy::SecretString` to prevent accidental logging.
//! - Serialization includes inline secrets for config file persistence; secrecy is for runtime safety.
//! - `KEYRING_SERVICE` is the canonical service name for all keyring operations.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::constants::APP_NAME;
use crate::loader::{ConfigError, env_var_or_none};

/// Module for serializing SecretString as strings.
pub(crate) mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// Module for serializing a list of SecretString as a list of strings.
pub(crate) mod secret_list {
    use secrecy::{ExposeSecret, SecretString};
    use serde::ser::SerializeSeq;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(secrets: &[SecretString], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(secrets.len()))?;
        for secret in secrets {
            seq.serialize_element(secret.expose_secret())?;
        }
        seq.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<SecretString>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Vec::<String>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .map(|s| SecretString::new(s.into()))
            .collect())
    }
}

/// Service name used for keyring storage.
pub const KEYRING_SERVICE: &str = APP_NAME;

/// A credential stored inline, in an environment variable, or in the system keyring.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SecureValue {
    /// Value read from an environment variable at load time.
    Env {
        /// Name of the environment variable.
        env: String,
    },
    /// Value stored in the system keyring.
    Keyring {
        /// The account name in the keyring.
        keyring_account: String,
    },
    /// Value stored in plain text (as a SecretString).
    #[serde(with = "secret_string")]
    Plain(SecretString),
}

impl SecureValue {
    /// Create an inline secret.
    pub fn plain(value: impl Into<String>) -> Self {
        Self::Plain(SecretString::new(value.into().into()))
    }

    /// Create a reference to an environment variable.
    pub fn env(var: impl Into<String>) -> Self {
        Self::Env { env: var.into() }
    }

    /// Resolve the secure value to a SecretString.
    ///
    /// Environment references that are unset (or blank) fail with
    /// `ConfigError::MissingEnvVar`. Keyring references are fetched.
    pub fn resolve(&self) -> Result<SecretString, ConfigError> {
        match self {
            Self::Plain(secret) => Ok(secret.clone()),
            Self::Env { env } => env_var_or_none(env)
                .map(|value| SecretString::new(value.into()))
                .ok_or_else(|| ConfigError::MissingEnvVar(env.clone())),
            Self::Keyring { keyring_account } => {
                let entry = keyring::Entry::new(KEYRING_SERVICE, keyring_account)?;
                let password = entry.get_password()?;
                Ok(SecretString::new(password.into()))
            }
        }
    }
}
