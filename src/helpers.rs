//! Precondition probes and io::Error adapters shared by the command modules.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::errors::{FileKitError, Result};

/// Adapter for `.map_err(...)`: tags an io::Error with the failing step and path.
pub(crate) fn io_step(op: &'static str, path: &Path) -> impl FnOnce(io::Error) -> FileKitError {
    let path = path.to_path_buf();
    move |source| FileKitError::Io { op, path, source }
}

/// Every command checks its source files before any mutating call.
pub(crate) fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(FileKitError::NotFound(path.to_path_buf()))
    }
}

pub(crate) fn file_len(path: &Path) -> Result<u64> {
    fs::metadata(path)
        .map(|m| m.len())
        .map_err(io_step("read metadata of", path))
}

/// Path equality by fully resolved path (falls back to the literal path when
/// canonicalization fails, e.g. the path does not exist yet).
pub(crate) fn same_file(a: &Path, b: &Path) -> bool {
    let a_real = fs::canonicalize(a).unwrap_or_else(|_| a.to_path_buf());
    let b_real = fs::canonicalize(b).unwrap_or_else(|_| b.to_path_buf());
    a_real == b_real
}
