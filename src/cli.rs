//! CLI definition and parsing.
//! Defines Args and provides parse() for command-line handling.
//!
//! Notes:
//! - PATHS are the items handed over by SendTo or a file manager; zero paths prints usage.
//! - --debug is a shorthand for --log-level debug.

use clap::{Parser, ValueHint};
use std::path::PathBuf;

use crate::config::types::{Config, LogLevel};

/// Move the selected files and folders into a new folder next to them.
#[derive(Parser, Debug, Clone)]
#[command(
    author,
    version,
    about = "Move selected files/folders into a new sibling folder"
)]
pub struct Args {
    /// Files and folders to move; they must all live in the same folder.
    #[arg(value_name = "PATHS", value_hint = ValueHint::AnyPath)]
    pub paths: Vec<PathBuf>,

    /// Name of the folder to create (skips the name prompt).
    #[arg(short = 'n', long, value_name = "NAME")]
    pub name: Option<String>,

    /// Reuse an existing folder without asking.
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Trim surrounding whitespace from the folder name before creating it.
    #[arg(long)]
    pub trim_name: bool,

    /// Dry-run: log actions but do not modify the filesystem.
    #[arg(
        long,
        help = "Show what would be done, but do not modify files/directories"
    )]
    pub dry_run: bool,

    /// Enable debug logging (equivalent to `--log-level debug`).
    #[arg(
        short = 'd',
        long,
        help = "Enable debug logging (shorthand for --log-level debug)"
    )]
    pub debug: bool,

    /// Set log level. One of: quiet, normal, info, debug.
    #[arg(long, help = "Set log level: quiet, normal, info, debug")]
    pub log_level: Option<String>,

    /// Also append logs to this file.
    #[arg(long, value_name = "PATH", value_hint = ValueHint::FilePath)]
    pub log_file: Option<PathBuf>,

    /// Emit logs in structured JSON (includes timestamp, level, and structured fields).
    #[arg(long, help = "Emit logs in structured JSON")]
    pub json: bool,
}

impl Args {
    /// Input paths with stray shell quoting removed, in the order given.
    pub fn input_paths(&self) -> Vec<PathBuf> {
        self.paths.iter().map(|p| Self::sanitize_path(p)).collect()
    }

    #[inline]
    fn sanitize_path(p: &std::path::Path) -> PathBuf {
        match p.to_str() {
            Some(s) => Self::sanitize_str(s),
            // Non-UTF-8 paths cannot carry shell quotes we know how to strip.
            None => p.to_path_buf(),
        }
    }

    #[inline]
    fn sanitize_str(s: &str) -> PathBuf {
        // Strip one pair of surrounding quotes left behind by cmd/PowerShell quoting.
        let unquoted = if s.len() >= 2
            && ((s.starts_with('"') && s.ends_with('"'))
                || (s.starts_with('\'') && s.ends_with('\'')))
        {
            &s[1..s.len() - 1]
        } else {
            s
        };
        PathBuf::from(unquoted)
    }

    /// Effective log level derived from flags.
    /// Precedence: --debug > --log-level value > None (use config default).
    pub fn effective_log_level(&self) -> Option<LogLevel> {
        if self.debug {
            return Some(LogLevel::Debug);
        }
        self.log_level.as_deref().and_then(LogLevel::parse)
    }

    /// Apply CLI overrides to a Config (in-place). No-ops for unset flags.
    pub fn apply_overrides(&self, cfg: &mut Config) {
        if let Some(name) = &self.name {
            cfg.folder_name = Some(name.clone());
        }
        if let Some(level) = self.effective_log_level() {
            cfg.log_level = level;
        }
        if let Some(path) = &self.log_file {
            cfg.log_file = Some(path.clone());
        }
        if self.yes {
            cfg.assume_yes = true;
        }
        if self.trim_name {
            cfg.trim_name = true;
        }
        if self.dry_run {
            cfg.dry_run = true;
        }
        if self.json {
            cfg.json = true;
        }
    }

    /// Build a Config from defaults plus these flags.
    pub fn to_config(&self) -> Config {
        let mut cfg = Config::default();
        self.apply_overrides(&mut cfg);
        cfg
    }
}

pub fn parse() -> Args {
    Args::parse()
}
