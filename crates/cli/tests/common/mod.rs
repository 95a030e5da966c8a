//! Shared test utilities for toolchain CLI integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Provide config file fixtures in temporary directories.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - Commands run inside a temp directory so `./toolchain.json` and the
//!   per-user config directory never come from the host.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A 32-byte hex key accepted in the live context.
pub const LIVE_KEY: &str = "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

/// Returns a hermetic `toolchain` command running in `dir`.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - `TOOLCHAIN_*` variables from the host are cleared.
/// - `HOME`/`XDG_CONFIG_HOME` point into `dir`, so the user config file is absent.
pub fn toolchain_cmd(dir: &Path) -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("toolchain");

    // Hermeticity: prevent loading local .env
    cmd.env("DOTENV_DISABLED", "1");

    // Clear potential host leakage
    for (key, _) in std::env::vars_os() {
        if key.to_string_lossy().starts_with("TOOLCHAIN_") {
            cmd.env_remove(&key);
        }
    }
    cmd.env_remove("RUST_LOG");

    cmd.env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .current_dir(dir);

    cmd
}

/// Writes `content` as `toolchain.json` in a fresh temp directory.
pub fn config_fixture(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("toolchain.json");
    std::fs::write(&path, content).unwrap();
    (dir, path)
}

/// The rinkeby layout with an inline development key.
pub fn rinkeby_config() -> String {
    serde_json::json!({
        "solidity": "0.8.25",
        "networks": {
            "rinkeby": {
                "url": "https://rinkeby.infura.io/v3/ABC123",
                "accounts": ["0xKEY"]
            }
        }
    })
    .to_string()
}
