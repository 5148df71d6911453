//! File copy with an explicit policy for a pre-existing destination.
//!
//! Whatever the outcome, the source file is left untouched. The destination
//! check runs before any mutating call, so a conflicting policy never leaves
//! a partial write behind.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::errors::{FileKitError, Result};
use crate::helpers::{ensure_exists, io_step};

/// How `copy_file` treats a destination that already exists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CopyPolicy {
    /// Fail with `DestinationConflict`.
    #[default]
    ThrowOnExists,
    /// Replace the existing destination unconditionally.
    OverwriteOnExists,
    /// Perform no I/O and report the existing destination as the result.
    DoNothingOnExists,
}

/// Copy `src` to `dst`, resolving an existing destination per `policy`.
/// Returns the path of the resulting destination file.
pub fn copy_file(src: &Path, dst: &Path, policy: CopyPolicy) -> Result<PathBuf> {
    ensure_exists(src)?;

    if dst.exists() {
        match policy {
            CopyPolicy::ThrowOnExists => {
                return Err(FileKitError::DestinationConflict(dst.to_path_buf()));
            }
            CopyPolicy::DoNothingOnExists => {
                debug!(dst = %dst.display(), "destination exists, leaving it untouched");
                return Ok(dst.to_path_buf());
            }
            CopyPolicy::OverwriteOnExists => {
                fs::remove_file(dst).map_err(io_step("remove existing destination", dst))?;
            }
        }
    }

    fs::copy(src, dst).map_err(io_step("copy file to", dst))?;
    info!(src = %src.display(), dst = %dst.display(), "Copied file");
    Ok(dst.to_path_buf())
}
