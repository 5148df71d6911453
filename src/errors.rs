//! Typed error definitions for filekit.
//! Callers branch on the variant; `Io` names the failing step so that
//! non-atomic sequences (the file name swap) can be reconciled manually.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, FileKitError>;

#[derive(Debug, Error)]
pub enum FileKitError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),

    #[error("Destination already exists: {0}")]
    DestinationConflict(PathBuf),

    #[error(
        "Source '{source_path}' ({source_len} bytes) is not larger than destination '{destination_path}' ({destination_len} bytes)"
    )]
    SourceNotLarger {
        source_path: PathBuf,
        source_len: u64,
        destination_path: PathBuf,
        destination_len: u64,
    },

    #[error("{op} '{path}': {source}")]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
