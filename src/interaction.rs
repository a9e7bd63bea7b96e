//! User interaction seam.
//!
//! The run logic only talks to the [`Interaction`] trait: one blocking text
//! prompt, one blocking yes/no question and a notice sink. The console
//! implementation uses dialoguer; tests plug in scripted implementations.

use std::io;

use dialoguer::{Confirm, Input};

use crate::errors::MoveToFolderError;
use crate::output as out;

/// Severity of a user-facing notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

pub trait Interaction {
    /// Ask for one line of text. `Ok(None)` means the user dismissed the prompt.
    fn prompt_text(
        &mut self,
        title: &str,
        placeholder: &str,
    ) -> Result<Option<String>, MoveToFolderError>;

    /// Ask a yes/no question. Dismissal counts as "no".
    fn confirm(&mut self, message: &str) -> Result<bool, MoveToFolderError>;

    /// Show a message to the user.
    fn notify(&mut self, message: &str, kind: NoticeKind);
}

/// Terminal prompts via dialoguer; notices via the colored output helpers.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleInteraction;

impl ConsoleInteraction {
    pub fn new() -> Self {
        Self
    }
}

impl Interaction for ConsoleInteraction {
    fn prompt_text(
        &mut self,
        title: &str,
        placeholder: &str,
    ) -> Result<Option<String>, MoveToFolderError> {
        out::print_user(title);
        let answer = Input::<String>::new()
            .with_prompt(placeholder)
            .allow_empty(true)
            .interact_text();

        match answer {
            Ok(text) => Ok(Some(text)),
            Err(dialoguer::Error::IO(e)) if is_dismissal(&e) => Ok(None),
            Err(err) => Err(MoveToFolderError::Prompt(err.to_string())),
        }
    }

    fn confirm(&mut self, message: &str) -> Result<bool, MoveToFolderError> {
        Confirm::new()
            .with_prompt(message)
            .default(false)
            .interact_opt()
            .map(|answer| answer.unwrap_or(false))
            .map_err(|err| MoveToFolderError::Prompt(err.to_string()))
    }

    fn notify(&mut self, message: &str, kind: NoticeKind) {
        match kind {
            NoticeKind::Info => out::print_info(message),
            NoticeKind::Success => out::print_success(message),
            NoticeKind::Error => out::print_error(console_error_text(message)),
        }
    }
}

/// The console already prefixes errors with `error:`, so a leading
/// `Error: ` in the notice text is dropped there.
fn console_error_text(message: &str) -> &str {
    message.strip_prefix("Error: ").unwrap_or(message)
}

/// Closing stdin or interrupting the prompt is a cancellation, not a failure.
fn is_dismissal(e: &io::Error) -> bool {
    matches!(
        e.kind(),
        io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted
    )
}
