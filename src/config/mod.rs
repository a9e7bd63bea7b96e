//! Config module.
//! Runtime settings are built from CLI flags only; nothing is persisted.

pub mod paths;
pub mod types;

pub use paths::path_has_symlink_ancestor;
pub use types::{Config, LogLevel};

/// Title shown on prompts and notices.
pub const APP_TITLE: &str = "Move to New Folder";
