//! Application shell.
//! Builds the config from CLI flags, initializes logging, runs the flow with
//! console prompts, reports the result once, and turns it into an exit code.

use std::process::ExitCode;
use tracing::{debug, error, info};

use move_to_folder::cli::Args;
use move_to_folder::output as out;
use move_to_folder::{
    run as run_flow, ConsoleInteraction, Interaction, MoveToFolderError, NoticeKind, RunOutcome,
};

use crate::logging::init_tracing;

/// Run the CLI application.
pub fn run(args: Args) -> ExitCode {
    let cfg = args.to_config();

    // Held until the end of the run so file logs are flushed.
    let guard = match init_tracing(&cfg.log_level, cfg.log_file.as_deref(), cfg.json) {
        Ok(g) => g,
        Err(e) => {
            out::print_error(&format!("Failed to initialize logging: {e}"));
            return ExitCode::FAILURE;
        }
    };

    debug!("Starting move_to_folder: {:?}", args);

    let paths = args.input_paths();
    let mut ui = ConsoleInteraction::new();

    let code = match run_flow(&paths, &cfg, &mut ui) {
        Ok(outcome) => {
            match &outcome {
                RunOutcome::Cancelled(reason) => info!(?reason, "Run cancelled"),
                RunOutcome::Completed {
                    target,
                    created,
                    outcome: tally,
                } => info!(
                    target_dir = %target.display(),
                    created,
                    moved = tally.moved,
                    skipped = tally.skipped,
                    "Run completed"
                ),
                RunOutcome::Usage => {}
            }
            if let Some((message, kind)) = outcome.notice(cfg.dry_run) {
                ui.notify(&message, kind);
            }
            outcome.code()
        }
        Err(e) => {
            log_failure(&e);
            ui.notify(&e.user_message(), NoticeKind::Error);
            e.code()
        }
    };

    drop(guard);
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

fn log_failure(e: &MoveToFolderError) {
    let code = e.code();
    let kind = e.kind();
    match e {
        MoveToFolderError::NoCommonParent => {
            error!(code, kind, "Selected paths do not share one parent folder")
        }
        MoveToFolderError::CreateDirectory { path, source } => {
            error!(
                code,
                kind,
                path = %path.display(),
                error = %source,
                "Could not create target folder"
            )
        }
        MoveToFolderError::MoveFailed {
            src,
            dest,
            moved_before,
            source,
        } => {
            error!(
                code,
                kind,
                src = %src.display(),
                dest = %dest.display(),
                moved_before = *moved_before,
                error = %source,
                "Move failed; remaining items left in place"
            )
        }
        MoveToFolderError::Prompt(msg) => {
            error!(code, kind, error = %msg, "Prompt failed")
        }
    }
}
