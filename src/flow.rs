//! One run of the tool, start to finish.
//!
//! Start → name prompted → parent validated → folder ready → moving →
//! completed, or stop early. Cancellations are outcomes; failures are errors.

use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::{Config, APP_TITLE};
use crate::errors::MoveToFolderError;
use crate::fs_ops::{common_parent, ensure_target_directory, move_all, MoveOutcome, TargetStatus};
use crate::interaction::{Interaction, NoticeKind};

/// Why a run stopped without moving anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelReason {
    /// The name prompt was dismissed or left blank.
    EmptyName,
    /// The user chose not to reuse an existing folder.
    Declined,
}

impl CancelReason {
    pub fn code(self) -> i32 {
        match self {
            CancelReason::EmptyName => 10,
            CancelReason::Declined => 11,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// No paths were given; usage text should be shown.
    Usage,
    Cancelled(CancelReason),
    Completed {
        target: PathBuf,
        created: bool,
        outcome: MoveOutcome,
    },
}

impl RunOutcome {
    /// Process exit code for this outcome.
    pub fn code(&self) -> i32 {
        match self {
            RunOutcome::Usage | RunOutcome::Completed { .. } => 0,
            RunOutcome::Cancelled(reason) => reason.code(),
        }
    }

    /// What to tell the user about this outcome. Cancellations stay silent.
    pub fn notice(&self, dry_run: bool) -> Option<(String, NoticeKind)> {
        match self {
            RunOutcome::Usage => Some((USAGE_TEXT.to_string(), NoticeKind::Info)),
            RunOutcome::Cancelled(_) => None,
            RunOutcome::Completed { outcome, .. } if dry_run => Some((
                format!("Dry-run: would move {} files", outcome.moved),
                NoticeKind::Info,
            )),
            RunOutcome::Completed { outcome, .. } => {
                Some((format!("Moved {} files", outcome.moved), NoticeKind::Success))
            }
        }
    }
}

pub const USAGE_TEXT: &str = "This application is designed to be used from SendTo.\n\n\
Usage:\n\
1. Select one or more files/folders\n\
2. Right-click → Send To → Move to New Folder";

/// Run the whole flow for `paths`, asking `interaction` for anything not in `config`.
pub fn run<P, I>(
    paths: &[P],
    config: &Config,
    interaction: &mut I,
) -> Result<RunOutcome, MoveToFolderError>
where
    P: AsRef<Path>,
    I: Interaction + ?Sized,
{
    if paths.is_empty() {
        return Ok(RunOutcome::Usage);
    }

    let folder_name = match &config.folder_name {
        Some(name) => Some(name.clone()),
        None => interaction.prompt_text(APP_TITLE, "New folder name")?,
    };
    let Some(folder_name) = folder_name.filter(|n| !n.trim().is_empty()) else {
        debug!("Folder name prompt cancelled");
        return Ok(RunOutcome::Cancelled(CancelReason::EmptyName));
    };
    debug!(folder_name = %folder_name, "Folder name entered");

    let parent = common_parent(paths).ok_or(MoveToFolderError::NoCommonParent)?;
    debug!(parent = %parent.display(), "Common parent validated");

    let target = match ensure_target_directory(&parent, &folder_name, config, interaction)? {
        TargetStatus::Ready(target) => target,
        TargetStatus::Cancelled(reason) => return Ok(RunOutcome::Cancelled(reason)),
    };
    debug!(target_dir = %target.path.display(), created = target.created, "Target folder ready");

    let outcome = move_all(paths, &target.path, config)?;
    debug!(moved = outcome.moved, skipped = outcome.skipped, "Move loop finished");

    Ok(RunOutcome::Completed {
        target: target.path,
        created: target.created,
        outcome,
    })
}
