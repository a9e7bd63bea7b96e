//! Core configuration types.
//! - Config holds runtime settings with sensible defaults.
//! - LogLevel represents verbosity with simple parsing helpers.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Program-defined verbosity levels exposed to users.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Only errors (default; user-facing messages go through notices)
    #[default]
    Quiet,
    /// Informational output
    Normal,
    /// More info (like verbose)
    Info,
    /// Debug/trace
    Debug,
}

impl LogLevel {
    /// Parse common string names into our LogLevel (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "quiet" | "error" | "none" => Some(LogLevel::Quiet),
            "normal" => Some(LogLevel::Normal),
            "info" | "verbose" | "detailed" => Some(LogLevel::Info),
            "debug" | "trace" => Some(LogLevel::Debug),
            _ => None,
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LogLevel::Quiet => "quiet",
            LogLevel::Normal => "normal",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
        };
        f.write_str(s)
    }
}

impl FromStr for LogLevel {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("invalid log level: '{s}'"))
    }
}

/// Runtime configuration for one run.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Folder name supplied up front; when None the user is prompted
    pub folder_name: Option<String>,
    /// Reuse an existing target folder without asking
    pub assume_yes: bool,
    /// Join the trimmed folder name instead of the raw input
    pub trim_name: bool,
    /// If true, report actions but do not modify the filesystem
    pub dry_run: bool,
    /// Diagnostic verbosity
    pub log_level: LogLevel,
    /// Optional path to a log file
    pub log_file: Option<PathBuf>,
    /// Emit structured JSON log lines
    pub json: bool,
}

impl Config {
    /// Construct a Config with a preset folder name; other fields use defaults.
    pub fn with_folder_name(name: impl Into<String>) -> Self {
        Self {
            folder_name: Some(name.into()),
            ..Default::default()
        }
    }
}
