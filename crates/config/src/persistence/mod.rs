//! Configuration file persistence.
//!
//! Responsibilities:
//! - Locate the per-user and project-local configuration files.
//! - Read and atomically write the JSON configuration file.
//! - Produce the starter template.
//!
//! Does NOT handle:
//! - Loading environment variables (see `loader`).
//! - Merging sources or validation (see `loader`).
//!
//! Invariants:
//! - Writes never leave a partially written file behind.
//! - Existing files are only replaced when the caller asks for it.

mod file;
mod path;

pub use file::{ConfigFile, ConfigFileError, read_config_file, write_config_file};

pub(crate) use path::{default_config_path, local_config_path};
