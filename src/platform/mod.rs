//! Platform-specific helpers.
//! Hides OS differences behind a uniform API; today that is only how the log file is opened.

#[cfg(unix)]
mod unix;
#[cfg(not(unix))]
mod windows;

#[cfg(unix)]
pub use unix::open_log_file_secure_append;

#[cfg(not(unix))]
pub use windows::open_log_file_secure_append;
