//! Core library for `move_to_folder`.
//!
//! Takes the items a file manager hands over, asks for a folder name, and moves
//! every item into `<common parent>/<name>`. The run logic in [`flow`] talks to the
//! user only through the [`interaction::Interaction`] trait, so it can be driven
//! from a terminal, a dialog, or a test script.

pub mod cli;
pub mod config;
pub mod errors;
pub mod flow;
pub mod fs_ops;
pub mod interaction;
pub mod output;
pub mod platform;

pub use config::{path_has_symlink_ancestor, Config, LogLevel};
pub use errors::MoveToFolderError;
pub use flow::{run, CancelReason, RunOutcome};
pub use fs_ops::{
    common_parent, ensure_target_directory, move_all, MoveOutcome, TargetDirectory, TargetStatus,
};
pub use interaction::{ConsoleInteraction, Interaction, NoticeKind};
