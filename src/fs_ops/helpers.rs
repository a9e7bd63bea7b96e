//! I/O helper utilities.
//!
//! Enriches io::Error with the operation, the path and a platform-aware hint
//! while preserving the original ErrorKind, so callers can still branch on it.
//!
//! Usage:
//!   fs::rename(src, dest).map_err(io_error_with_help_io("move file", src))?;

use std::io;
use std::path::Path;

/// Format a human-friendly message with op/path plus platform-aware hints.
fn build_message(op: &str, path: &Path, e: &io::Error) -> String {
    let mut msg = format!("{} '{}': {}", op, path.display(), e);

    if let Some(code) = e.raw_os_error() {
        #[cfg(unix)]
        {
            match code {
                libc::EACCES | libc::EPERM => {
                    msg.push_str(" — permission denied; check ownership and write permissions.");
                }
                libc::EXDEV => {
                    msg.push_str(" — cross-filesystem; the item cannot be renamed across devices.");
                }
                libc::EBUSY => {
                    msg.push_str(" — resource busy; close programs using this item.");
                }
                libc::ENOENT => {
                    msg.push_str(" — path not found; verify it exists.");
                }
                libc::EEXIST | libc::ENOTEMPTY => {
                    msg.push_str(" — destination already exists and cannot be replaced.");
                }
                libc::ENOTDIR => {
                    msg.push_str(" — a file is in the way where a folder is expected.");
                }
                libc::EISDIR => {
                    msg.push_str(" — a folder is in the way where a file is expected.");
                }
                libc::EINVAL => {
                    msg.push_str(" — invalid move; a folder cannot be moved into itself.");
                }
                libc::ENOSPC => {
                    msg.push_str(" — insufficient space on device.");
                }
                libc::EROFS => {
                    msg.push_str(" — read-only filesystem; cannot write here.");
                }
                libc::ENAMETOOLONG => {
                    msg.push_str(" — filename or path too long; shorten the folder name.");
                }
                _ => {}
            }
        }
        #[cfg(windows)]
        {
            match code {
                5 => msg.push_str(" — access denied; check permissions."),
                17 => msg.push_str(" — not same device; cross-filesystem move."),
                32 => msg.push_str(" — sharing violation; file is in use."),
                2 | 3 => msg.push_str(" — path not found; verify it exists."),
                80 | 183 => msg.push_str(" — destination already exists and cannot be replaced."),
                112 => msg.push_str(" — insufficient disk space."),
                19 => msg.push_str(" — write protected / read-only media."),
                123 => msg.push_str(" — folder name contains invalid characters."),
                206 => msg.push_str(" — filename or path too long (MAX_PATH exceeded)."),
                _ => {}
            }
        }
        msg.push_str(&format!(" [os code: {}]", code));
    } else {
        match e.kind() {
            io::ErrorKind::PermissionDenied => {
                msg.push_str(" — permission denied; check ownership and write permissions.");
            }
            io::ErrorKind::NotFound => {
                msg.push_str(" — path not found; verify it exists.");
            }
            io::ErrorKind::AlreadyExists => {
                msg.push_str(" — already exists and is not a folder.");
            }
            io::ErrorKind::CrossesDevices => {
                msg.push_str(" — cross-filesystem; the item cannot be renamed across devices.");
            }
            _ => {}
        }
    }

    msg
}

/// Returns a closure suitable for `.map_err(...)` that converts io::Error -> io::Error
/// with enriched context in the message while preserving the original ErrorKind.
pub fn io_error_with_help_io<'a>(
    op: &'a str,
    path: &'a Path,
) -> impl FnOnce(io::Error) -> io::Error + 'a {
    move |e: io::Error| io::Error::new(e.kind(), build_message(op, path, &e))
}

/// True when a rename failed only because source and destination live on different devices.
pub(crate) fn is_cross_device(e: &io::Error) -> bool {
    if e.kind() == io::ErrorKind::CrossesDevices {
        return true;
    }
    #[cfg(unix)]
    {
        e.raw_os_error() == Some(libc::EXDEV)
    }
    #[cfg(windows)]
    {
        // ERROR_NOT_SAME_DEVICE
        e.raw_os_error() == Some(17)
    }
    #[cfg(not(any(unix, windows)))]
    {
        false
    }
}
