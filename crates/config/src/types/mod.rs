//! Configuration type definitions for the toolchain.
//!
//! Responsibilities:
//! - Define the resolved configuration (`ToolchainConfiguration`, `NetworkEndpoint`).
//! - Define the file form of network entries and their secret references.
//! - Provide serialization helpers for sensitive types.
//!
//! Does NOT handle:
//! - Configuration loading from files or environment variables (see `loader` module).
//! - Reading or writing the configuration file (see `persistence` module).
//!
//! Invariants:
//! - All secret types use `secrecy::SecretString` to prevent accidental logging.
//! - `KEYRING_SERVICE` is the canonical service name for all keyring operations.

mod network;
pub(crate) mod secret;
mod toolchain;

pub use network::NetworkProfile;
pub use secret::{KEYRING_SERVICE, SecureValue};
pub use toolchain::{DeploymentContext, NetworkEndpoint, ToolchainConfiguration};
