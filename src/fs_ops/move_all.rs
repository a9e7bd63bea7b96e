//! The move loop: each selected item goes into the target folder, in input
//! order, stopping at the first failure.

use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::errors::MoveToFolderError;

use super::dir_move::move_dir;
use super::file_move::move_file;

/// Tally of one move loop.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MoveOutcome {
    pub moved: usize,
    /// Entries passed over without error (vanished, unnamed, or already in place).
    pub skipped: usize,
}

/// Move every path into `target`.
///
/// Missing entries and entries without a final name are skipped, as is a
/// directory whose destination is itself. The first failed move aborts the
/// loop; items moved before it stay where they went.
pub fn move_all<P: AsRef<Path>>(
    paths: &[P],
    target: &Path,
    config: &Config,
) -> Result<MoveOutcome, MoveToFolderError> {
    let mut outcome = MoveOutcome::default();

    for p in paths {
        let src: &Path = p.as_ref();
        let Some(name) = src.file_name() else {
            debug!(path = %src.display(), "Skipping entry without a final name");
            outcome.skipped += 1;
            continue;
        };
        let dest = target.join(name);

        // Follows symlinks: a link is moved as whatever it points at.
        let meta = match fs::metadata(src) {
            Ok(m) => m,
            Err(e) => {
                warn!(path = %src.display(), error = %e, "Skipping entry that no longer exists");
                outcome.skipped += 1;
                continue;
            }
        };

        let result = if meta.is_dir() {
            if dest.as_path() == src {
                debug!(path = %src.display(), "Folder is already in place; skipping");
                outcome.skipped += 1;
                continue;
            }
            if config.dry_run {
                info!(src = %src.display(), dest = %dest.display(), "dry-run: would move folder");
                Ok(())
            } else {
                move_dir(src, &dest)
            }
        } else if meta.is_file() {
            if config.dry_run {
                info!(src = %src.display(), dest = %dest.display(), "dry-run: would move file");
                Ok(())
            } else {
                move_file(src, &dest)
            }
        } else {
            debug!(path = %src.display(), "Skipping entry that is neither file nor folder");
            outcome.skipped += 1;
            continue;
        };

        if let Err(source) = result {
            return Err(MoveToFolderError::MoveFailed {
                src: src.to_path_buf(),
                dest,
                moved_before: outcome.moved,
                source,
            });
        }
        outcome.moved += 1;
    }

    Ok(outcome)
}
