//! Tests for the configuration loader builder.
//!
//! Responsibilities:
//! - Test builder methods and the final `build()` checks.
//! - Test config file loading and location precedence.
//! - Test environment variable handling and precedence.
//! - Test deployment-context validation.
//!
//! Invariants:
//! - Tests that touch process environment use `serial_test` to prevent pollution.
//! - Tests that change the working directory also hold `global_test_lock()`.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::sync::Mutex;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Run `f` with every `TOOLCHAIN_*` variable unset, plus the given overrides.
///
/// Variables are restored afterwards by `temp_env`.
pub fn with_clean_toolchain_env<R>(vars: &[(&str, &str)], f: impl FnOnce() -> R) -> R {
    let mut all: Vec<(String, Option<String>)> = std::env::vars_os()
        .filter_map(|(k, _)| k.into_string().ok())
        .filter(|k| k.starts_with("TOOLCHAIN_") && !vars.iter().any(|(v, _)| *v == k.as_str()))
        .map(|k| (k, None))
        .collect();
    all.extend(vars.iter().map(|(k, v)| (k.to_string(), Some(v.to_string()))));
    temp_env::with_vars(all, f)
}
