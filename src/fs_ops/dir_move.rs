//! Directory move implementation.
//! A plain rename; cross-device directory moves are not supported and fail.

use std::fs;
use std::io;
use std::path::Path;
use tracing::info;

use super::helpers::io_error_with_help_io;

/// Move directory `src` to `dest` as a single rename.
pub fn move_dir(src: &Path, dest: &Path) -> io::Result<()> {
    fs::rename(src, dest).map_err(io_error_with_help_io("move folder", src))?;
    info!(src = %src.display(), dest = %dest.display(), "Renamed directory");
    Ok(())
}
