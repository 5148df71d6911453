//! File move with an explicit policy for a pre-existing destination.
//! Attempts an atomic rename; on cross-filesystem errors falls back to
//! copy + remove. After a successful move the source no longer exists.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::errors::{FileKitError, Result};
use crate::helpers::{ensure_exists, file_len, io_step};

/// How `move_file` treats a destination that already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MovePolicy {
    /// Fail with `DestinationConflict`.
    #[default]
    ThrowOnExists,
    /// Replace the existing destination unconditionally.
    OverwriteOnExists,
    /// Replace the destination only when the source is strictly larger,
    /// otherwise fail with `SourceNotLarger` leaving both files as found.
    OverwriteIfSourceLarger,
}

/// Move `src` to `dst`, resolving an existing destination per `policy`.
/// Returns the path of the resulting destination file.
pub fn move_file(src: &Path, dst: &Path, policy: MovePolicy) -> Result<PathBuf> {
    ensure_exists(src)?;

    if dst.exists() {
        match policy {
            MovePolicy::ThrowOnExists => {
                return Err(FileKitError::DestinationConflict(dst.to_path_buf()));
            }
            MovePolicy::OverwriteOnExists => {
                fs::remove_file(dst).map_err(io_step("remove existing destination", dst))?;
            }
            MovePolicy::OverwriteIfSourceLarger => {
                let source_len = file_len(src)?;
                let destination_len = file_len(dst)?;
                if source_len <= destination_len {
                    return Err(FileKitError::SourceNotLarger {
                        source_path: src.to_path_buf(),
                        source_len,
                        destination_path: dst.to_path_buf(),
                        destination_len,
                    });
                }
                debug!(source_len, destination_len, "source is larger, overwriting destination");
                fs::remove_file(dst).map_err(io_step("remove existing destination", dst))?;
            }
        }
    }

    rename_or_copy(src, dst)?;
    info!(src = %src.display(), dst = %dst.display(), "Moved file");
    Ok(dst.to_path_buf())
}

/// Rename first; a cross-device rename cannot succeed, so fall back to
/// copy + remove for that case only.
fn rename_or_copy(src: &Path, dst: &Path) -> Result<()> {
    match fs::rename(src, dst) {
        Ok(()) => Ok(()),
        Err(e) if is_cross_device(&e) => {
            warn!(error = %e, "rename crossed filesystems, using copy+remove");
            fs::copy(src, dst).map_err(io_step("copy file to", dst))?;
            fs::remove_file(src).map_err(io_step("remove original file", src))?;
            Ok(())
        }
        Err(e) => Err(io_step("rename file to", dst)(e)),
    }
}

fn is_cross_device(e: &io::Error) -> bool {
    // std::io::ErrorKind has no stable CrossDeviceLink variant, so detect
    // EXDEV / ERROR_NOT_SAME_DEVICE via raw OS error codes.
    match e.raw_os_error() {
        #[cfg(unix)]
        Some(code) => code == 18,
        #[cfg(windows)]
        Some(code) => code == 17,
        #[cfg(not(any(unix, windows)))]
        Some(_) => false,
        None => false,
    }
}
