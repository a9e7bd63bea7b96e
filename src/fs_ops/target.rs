//! Target folder policy: reuse an existing folder only after confirmation,
//! otherwise create it.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::config::Config;
use crate::errors::MoveToFolderError;
use crate::flow::CancelReason;
use crate::interaction::Interaction;

use super::helpers::io_error_with_help_io;

/// The folder items will be moved into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetDirectory {
    pub path: PathBuf,
    /// False when an existing folder is reused.
    pub created: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetStatus {
    Ready(TargetDirectory),
    Cancelled(CancelReason),
}

/// Resolve `parent/folder_name` and make sure it exists as a directory.
///
/// A blank name cancels the run. An existing directory is reused only if the
/// user agrees (or `assume_yes` is set). Creation failures are fatal.
pub fn ensure_target_directory<I: Interaction + ?Sized>(
    parent: &Path,
    folder_name: &str,
    config: &Config,
    interaction: &mut I,
) -> Result<TargetStatus, MoveToFolderError> {
    let trimmed = folder_name.trim();
    if trimmed.is_empty() {
        return Ok(TargetStatus::Cancelled(CancelReason::EmptyName));
    }
    let name = if config.trim_name { trimmed } else { folder_name };
    let path = parent.join(name);

    if path.is_dir() {
        debug!(target_dir = %path.display(), "Target folder already exists");
        let reuse = config.assume_yes
            || interaction.confirm(&format!(
                "Folder '{name}' already exists. Move files into it?"
            ))?;
        if !reuse {
            return Ok(TargetStatus::Cancelled(CancelReason::Declined));
        }
        return Ok(TargetStatus::Ready(TargetDirectory {
            path,
            created: false,
        }));
    }

    if config.dry_run {
        info!(action = "mkdir -p", path = %path.display(), "dry-run");
    } else {
        fs::create_dir_all(&path)
            .map_err(io_error_with_help_io("create folder", &path))
            .map_err(|source| MoveToFolderError::CreateDirectory {
                path: path.clone(),
                source,
            })?;
        info!(target_dir = %path.display(), "Created target folder");
    }

    Ok(TargetStatus::Ready(TargetDirectory {
        path,
        created: true,
    }))
}
