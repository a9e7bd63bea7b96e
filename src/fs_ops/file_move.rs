//! File move implementation.
//! Renames onto the destination (replacing an existing file there); when the
//! rename crosses devices it falls back to copy + remove of the original.

use std::fs;
use std::io;
use std::path::Path;
use tracing::{info, warn};

use super::helpers::{io_error_with_help_io, is_cross_device};

/// Move a single file to `dest`, overwriting any file already there.
pub fn move_file(src: &Path, dest: &Path) -> io::Result<()> {
    match fs::rename(src, dest) {
        Ok(()) => {
            info!(src = %src.display(), dest = %dest.display(), "Renamed file");
            Ok(())
        }
        Err(e) if is_cross_device(&e) => {
            warn!(
                error = %e,
                src = %src.display(),
                "Rename crossed filesystems, using copy+remove"
            );
            fs::copy(src, dest).map_err(io_error_with_help_io("copy file to destination", dest))?;
            fs::remove_file(src).map_err(io_error_with_help_io("remove original file", src))?;
            info!(src = %src.display(), dest = %dest.display(), "Copied file and removed source");
            Ok(())
        }
        Err(e) => Err(io_error_with_help_io("move file", src)(e)),
    }
}
