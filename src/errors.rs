//! Typed error definitions for move_to_folder.
//! Each variant maps to a distinct process exit code so callers can script against it.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MoveToFolderError {
    #[error("Selected files must share the same parent folder.")]
    NoCommonParent,

    #[error("{source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A move failed mid-loop; `moved_before` items were already moved and stay moved.
    #[error("{source}")]
    MoveFailed {
        src: PathBuf,
        dest: PathBuf,
        moved_before: usize,
        #[source]
        source: io::Error,
    },

    #[error("Prompt failed: {0}")]
    Prompt(String),
}

impl MoveToFolderError {
    /// Process exit code for this failure.
    pub fn code(&self) -> i32 {
        match self {
            MoveToFolderError::NoCommonParent => 12,
            MoveToFolderError::CreateDirectory { .. } => 13,
            MoveToFolderError::MoveFailed { .. } => 14,
            MoveToFolderError::Prompt(_) => 15,
        }
    }

    /// Text shown to the user when the run stops on this error.
    pub fn user_message(&self) -> String {
        match self {
            MoveToFolderError::NoCommonParent => self.to_string(),
            _ => format!("Error: {self}"),
        }
    }

    /// Short machine-friendly label used in structured logs.
    pub fn kind(&self) -> &'static str {
        match self {
            MoveToFolderError::NoCommonParent => "no_common_parent",
            MoveToFolderError::CreateDirectory { .. } => "create_directory",
            MoveToFolderError::MoveFailed { .. } => "move_failed",
            MoveToFolderError::Prompt(_) => "prompt",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_distinct_and_nonzero() {
        let errs = [
            MoveToFolderError::NoCommonParent,
            MoveToFolderError::CreateDirectory {
                path: PathBuf::from("/x"),
                source: io::Error::from(io::ErrorKind::PermissionDenied),
            },
            MoveToFolderError::MoveFailed {
                src: PathBuf::from("/a"),
                dest: PathBuf::from("/b"),
                moved_before: 0,
                source: io::Error::from(io::ErrorKind::NotFound),
            },
            MoveToFolderError::Prompt("eof".into()),
        ];
        let mut codes: Vec<i32> = errs.iter().map(|e| e.code()).collect();
        assert!(codes.iter().all(|c| *c != 0));
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errs.len());
    }

    #[test]
    fn no_common_parent_message_matches_user_text() {
        let msg = MoveToFolderError::NoCommonParent.to_string();
        assert_eq!(msg, "Selected files must share the same parent folder.");
        assert_eq!(MoveToFolderError::NoCommonParent.user_message(), msg);
    }

    #[test]
    fn move_failure_message_carries_io_detail() {
        let e = MoveToFolderError::MoveFailed {
            src: PathBuf::from("/a/x"),
            dest: PathBuf::from("/a/New/x"),
            moved_before: 1,
            source: io::Error::other("move file '/a/x': disk on fire"),
        };
        assert_eq!(e.user_message(), "Error: move file '/a/x': disk on fire");
    }
}
