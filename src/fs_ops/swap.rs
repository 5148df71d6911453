//! Exchange two files' names on disk.
//!
//! Three renames through a temporary name in the first file's directory.
//! The sequence is not transactional: a failure mid-way leaves whatever
//! partial state the underlying rename left, and the returned `Io` error
//! names the failing step so the caller can reconcile manually.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::errors::Result;
use crate::helpers::{ensure_exists, io_step};

use super::next_name::next_available_name;

/// Swap the on-disk positions of `a` and `b`. Both must exist.
pub fn swap_names(a: &Path, b: &Path) -> Result<()> {
    ensure_exists(a)?;
    ensure_exists(b)?;

    let tmp = swap_temp_name(a);

    fs::rename(a, &tmp).map_err(io_step("rename first file to temporary name", &tmp))?;
    fs::rename(b, a).map_err(io_step("rename second file to first file's name", a))?;
    fs::rename(&tmp, b).map_err(io_step("rename temporary file to second file's name", b))?;

    info!(a = %a.display(), b = %b.display(), "Swapped file names");
    Ok(())
}

/// Collision-free temporary name next to `a`; the probe guards against a
/// sibling already carrying the ".swap" marker.
fn swap_temp_name(a: &Path) -> PathBuf {
    let mut name = a
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("swap"));
    name.push(".swap");
    next_available_name(&a.with_file_name(name))
}
