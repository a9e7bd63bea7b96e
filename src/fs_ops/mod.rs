//! Filesystem operations: common parent lookup, target folder, and the move loop.

mod common_parent;
mod dir_move;
mod file_move;
mod helpers;
mod move_all;
mod target;

pub use common_parent::common_parent;
pub use dir_move::move_dir;
pub use file_move::move_file;
pub use helpers::io_error_with_help_io;
pub use move_all::{move_all, MoveOutcome};
pub use target::{ensure_target_directory, TargetDirectory, TargetStatus};
