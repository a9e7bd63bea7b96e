mod common;

use common::Scripted;
use move_to_folder::flow::USAGE_TEXT;
use move_to_folder::{
    run, CancelReason, Config, MoveOutcome, MoveToFolderError, NoticeKind, RunOutcome,
};
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

#[test]
fn no_paths_is_usage_without_prompting() {
    let mut ui = Scripted::default();
    let none: Vec<PathBuf> = Vec::new();
    let outcome = run(&none, &Config::default(), &mut ui).unwrap();
    assert_eq!(outcome, RunOutcome::Usage);
    assert_eq!(outcome.code(), 0);
    assert_eq!(ui.prompts_seen, 0);
    assert_eq!(
        outcome.notice(false),
        Some((USAGE_TEXT.to_string(), NoticeKind::Info))
    );
}

#[test]
fn dismissed_prompt_cancels_before_validation() {
    let td = tempdir().unwrap();
    let a = td.path().join("a.txt");
    fs::write(&a, "a").unwrap();
    // Paths from different folders: a cancelled prompt must win over validation.
    let paths = vec![a.clone(), PathBuf::from("/elsewhere/b.txt")];

    let mut ui = Scripted::default();
    ui.names.push_back(None);
    let outcome = run(&paths, &Config::default(), &mut ui).unwrap();
    assert_eq!(outcome, RunOutcome::Cancelled(CancelReason::EmptyName));
    assert_eq!(outcome.code(), 10);
    assert_eq!(outcome.notice(false), None);
    assert!(a.exists());
}

#[test]
fn whitespace_name_cancels() {
    let td = tempdir().unwrap();
    let a = td.path().join("a.txt");
    fs::write(&a, "a").unwrap();
    let mut ui = Scripted::with_name("  \t ");
    let outcome = run(&[&a], &Config::default(), &mut ui).unwrap();
    assert_eq!(outcome, RunOutcome::Cancelled(CancelReason::EmptyName));
    assert_eq!(fs::read_dir(td.path()).unwrap().count(), 1);
}

#[test]
fn paths_from_two_folders_are_rejected() {
    let td = tempdir().unwrap();
    let left = td.path().join("left");
    let right = td.path().join("right");
    fs::create_dir_all(&left).unwrap();
    fs::create_dir_all(&right).unwrap();
    let a = left.join("a.txt");
    let b = right.join("b.txt");
    fs::write(&a, "a").unwrap();
    fs::write(&b, "b").unwrap();

    let mut ui = Scripted::with_name("New");
    let err = run(&[&a, &b], &Config::default(), &mut ui).unwrap_err();
    assert!(matches!(err, MoveToFolderError::NoCommonParent));
    assert_eq!(err.code(), 12);
    assert!(!left.join("New").exists());
    assert!(!right.join("New").exists());
}

#[test]
fn full_run_moves_everything() {
    let td = tempdir().unwrap();
    let f1 = td.path().join("f1.txt");
    let sub = td.path().join("sub");
    fs::write(&f1, "1").unwrap();
    fs::create_dir(&sub).unwrap();

    let mut ui = Scripted::with_name("New");
    let outcome = run(&[&f1, &sub], &Config::default(), &mut ui).unwrap();
    let target = td.path().join("New");
    assert_eq!(
        outcome,
        RunOutcome::Completed {
            target: target.clone(),
            created: true,
            outcome: MoveOutcome { moved: 2, skipped: 0 },
        }
    );
    assert_eq!(
        outcome.notice(false),
        Some(("Moved 2 files".to_string(), NoticeKind::Success))
    );
    assert!(target.join("f1.txt").is_file());
    assert!(target.join("sub").is_dir());
}

#[test]
fn preset_name_skips_prompt() {
    let td = tempdir().unwrap();
    let f1 = td.path().join("f1.txt");
    fs::write(&f1, "1").unwrap();
    let mut ui = Scripted::default();
    let outcome = run(&[&f1], &Config::with_folder_name("Box"), &mut ui).unwrap();
    assert!(matches!(outcome, RunOutcome::Completed { .. }));
    assert_eq!(ui.prompts_seen, 0);
    assert!(td.path().join("Box/f1.txt").exists());
}

#[test]
fn second_run_with_same_name_asks_before_reuse() {
    let td = tempdir().unwrap();
    let a = td.path().join("a.txt");
    let b = td.path().join("b.txt");
    fs::write(&a, "a").unwrap();
    fs::write(&b, "b").unwrap();

    let mut first = Scripted::with_name("New");
    let outcome = run(&[&a], &Config::default(), &mut first).unwrap();
    assert!(matches!(outcome, RunOutcome::Completed { created: true, .. }));
    assert!(first.confirms_seen.is_empty());

    let mut second = Scripted::with_name("New").answering(true);
    let outcome = run(&[&b], &Config::default(), &mut second).unwrap();
    assert!(matches!(outcome, RunOutcome::Completed { created: false, .. }));
    assert_eq!(second.confirms_seen.len(), 1);
    assert!(td.path().join("New/a.txt").exists());
    assert!(td.path().join("New/b.txt").exists());
}

#[test]
fn declining_reuse_moves_nothing() {
    let td = tempdir().unwrap();
    fs::create_dir(td.path().join("New")).unwrap();
    let a = td.path().join("a.txt");
    fs::write(&a, "a").unwrap();

    let mut ui = Scripted::with_name("New").answering(false);
    let outcome = run(&[&a], &Config::default(), &mut ui).unwrap();
    assert_eq!(outcome, RunOutcome::Cancelled(CancelReason::Declined));
    assert_eq!(outcome.code(), 11);
    assert!(a.exists());
}

#[test]
fn dry_run_notice_mentions_would_move() {
    let td = tempdir().unwrap();
    let a = td.path().join("a.txt");
    fs::write(&a, "a").unwrap();
    let cfg = Config {
        dry_run: true,
        ..Config::with_folder_name("New")
    };
    let mut ui = Scripted::default();
    let outcome = run(&[&a], &cfg, &mut ui).unwrap();
    assert_eq!(
        outcome.notice(true),
        Some(("Dry-run: would move 1 files".to_string(), NoticeKind::Info))
    );
    assert!(a.exists());
    assert!(!td.path().join("New").exists());
}
