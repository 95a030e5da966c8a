//! Centralized constants for the toolchain configuration workspace.
//!
//! This module contains names and default values used across crates to avoid
//! string duplication between the library and the CLI.

// =============================================================================
// Environment Variables
// =============================================================================

/// Overrides the compiler version from the configuration file.
pub const ENV_SOLIDITY: &str = "TOOLCHAIN_SOLIDITY";

/// Selects the deployment context (`development` or `live`).
pub const ENV_CONTEXT: &str = "TOOLCHAIN_CONTEXT";

/// Names the network a consumer intends to sign against.
pub const ENV_NETWORK: &str = "TOOLCHAIN_NETWORK";

/// Overrides the configuration file location.
pub const ENV_CONFIG_PATH: &str = "TOOLCHAIN_CONFIG_PATH";

/// Prefix for per-network overrides (`TOOLCHAIN_NETWORK_<NAME>_URL`, `..._ACCOUNTS`).
pub const ENV_NETWORK_PREFIX: &str = "TOOLCHAIN_NETWORK_";

/// Suffix for per-network URL overrides.
pub const ENV_NETWORK_URL_SUFFIX: &str = "_URL";

/// Suffix for per-network account overrides (comma-separated).
pub const ENV_NETWORK_ACCOUNTS_SUFFIX: &str = "_ACCOUNTS";

/// Disables `.env` loading when set to `1` or `true`.
pub const ENV_DOTENV_DISABLED: &str = "DOTENV_DISABLED";

// =============================================================================
// File Locations
// =============================================================================

/// File name of the configuration file, both project-local and per-user.
pub const CONFIG_FILE_NAME: &str = "toolchain.json";

/// Application name used for platform config directories and keyring entries.
pub const APP_NAME: &str = "toolchain-config";

// =============================================================================
// Template Defaults
// =============================================================================

/// Compiler release written by `init`.
pub const TEMPLATE_COMPILER_VERSION: &str = "0.8.25";

/// Network written by `init`.
pub const TEMPLATE_NETWORK: &str = "rinkeby";

/// RPC endpoint written by `init`; the project id is resolved from the environment.
pub const TEMPLATE_URL: &str = "https://rinkeby.infura.io/v3/${INFURA_PROJECT_ID}";

/// Environment variable holding the template network's signing key.
pub const TEMPLATE_ACCOUNT_ENV: &str = "RINKEBY_PRIVATE_KEY";

// =============================================================================
// Credential Checks
// =============================================================================

/// Marker shared by stand-in credentials such as `YOUR_PRIVATE_KEY`.
pub const PLACEHOLDER_MARKER: &str = "YOUR_";

/// Length in bytes of a signing key accepted in a live context.
pub const PRIVATE_KEY_BYTES: usize = 32;
