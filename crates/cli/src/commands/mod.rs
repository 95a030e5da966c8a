//! Command handlers.

pub mod check;
pub mod init;
pub mod networks;
pub mod path;
pub mod show;
