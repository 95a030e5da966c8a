//! Path helpers for configuration file locations.
//!
//! Responsibilities:
//! - Determine the per-user and project-local configuration file paths.
//! - Use `directories` crate for platform-appropriate paths.
//!
//! Does NOT handle:
//! - File I/O operations.
//! - Choosing between locations (see `loader::file`).

use std::path::PathBuf;

use anyhow::Context;

use crate::constants::{APP_NAME, CONFIG_FILE_NAME};

/// Returns the per-user path to the configuration file.
///
/// - Linux: `~/.config/toolchain-config/toolchain.json`
/// - macOS: `~/Library/Application Support/toolchain-config/toolchain.json`
/// - Windows: `%AppData%\toolchain-config\config\toolchain.json`
pub(crate) fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    let proj_dirs = directories::ProjectDirs::from("", "", APP_NAME)
        .context("Failed to determine project directories")?;

    Ok(proj_dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Returns `toolchain.json` in the current working directory.
///
/// A project-local file takes precedence over the per-user file so that every
/// entry point run from the project root shares one definition.
pub(crate) fn local_config_path() -> Result<PathBuf, anyhow::Error> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;
    Ok(cwd.join(CONFIG_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_path_matches_expected_project_dirs() {
        let expected = directories::ProjectDirs::from("", "", APP_NAME)
            .unwrap()
            .config_dir()
            .join(CONFIG_FILE_NAME);

        let actual = default_config_path().unwrap();
        assert_eq!(actual, expected);
        assert!(actual.ends_with(CONFIG_FILE_NAME));
    }

    #[test]
    fn test_local_config_path_is_in_cwd() {
        let _lock = crate::test_util::global_test_lock().lock().unwrap();
        let path = local_config_path().unwrap();
        assert_eq!(path.parent().unwrap(), std::env::current_dir().unwrap());
    }
}
