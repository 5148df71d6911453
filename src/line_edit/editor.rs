//! Line deletion and replacement.
//!
//! The transformed content is buffered in full, then written through a
//! temporary file in the destination's directory and atomically renamed into
//! place, so editing a file onto itself is safe. When no selected line exists
//! in the source, a same-path call leaves the file untouched and a
//! different-path call writes a byte-identical copy.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::errors::{FileKitError, Result};
use crate::helpers::{ensure_exists, io_step, same_file};

use super::lines::{LineReader, PhysicalLine, Terminator};

/// Action applied to one selected line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineEdit {
    /// Remove the line's content and its terminator.
    Delete,
    /// Substitute the line's content, keeping the line's original terminator.
    /// Terminator characters in the replacement are stripped first, so
    /// `Replace("")` leaves an empty line where `Delete` leaves nothing.
    Replace(String),
}

/// Apply `edits` (keyed by 1-based physical line number) to `src` in a single
/// pass, writing the result to `dst`. Returns the written path.
pub fn edit_lines(src: &Path, edits: &BTreeMap<u64, LineEdit>, dst: &Path) -> Result<PathBuf> {
    ensure_exists(src)?;

    let mut out: Vec<u8> = Vec::new();
    let mut applied: u64 = 0;
    let mut number: u64 = 0;

    for line in LineReader::open(src)? {
        let line = line.map_err(io_step("read line from", src))?;
        number += 1;
        match edits.get(&number) {
            None => emit(&mut out, &line),
            Some(LineEdit::Delete) => applied += 1,
            Some(LineEdit::Replace(text)) => {
                applied += 1;
                out.extend_from_slice(strip_terminators(text).as_bytes());
                out.extend_from_slice(line.terminator.as_bytes());
            }
        }
    }

    if applied == 0 && same_file(src, dst) {
        debug!(src = %src.display(), "no selected line exists, leaving file untouched");
        return Ok(dst.to_path_buf());
    }

    write_output(&out, dst)?;
    info!(src = %src.display(), dst = %dst.display(), lines = number, applied, "Edited lines");
    Ok(dst.to_path_buf())
}

/// Delete one line (content and terminator).
pub fn delete_line(src: &Path, line: u64, dst: &Path) -> Result<PathBuf> {
    let edits = BTreeMap::from([(line, LineEdit::Delete)]);
    edit_lines(src, &edits, dst)
}

/// Delete several lines in one pass. Order is irrelevant and duplicates
/// collapse; numbers beyond the end of the file are ignored.
pub fn delete_lines(src: &Path, lines: &[u64], dst: &Path) -> Result<PathBuf> {
    let edits: BTreeMap<u64, LineEdit> = lines.iter().map(|&n| (n, LineEdit::Delete)).collect();
    edit_lines(src, &edits, dst)
}

/// Replace one line's content, keeping its original terminator.
pub fn replace_line(src: &Path, line: u64, text: &str, dst: &Path) -> Result<PathBuf> {
    let edits = BTreeMap::from([(line, LineEdit::Replace(text.to_owned()))]);
    edit_lines(src, &edits, dst)
}

/// Bulk form of `replace_line`; the mapping may mix `Replace` and `Delete`.
pub fn replace_lines(src: &Path, edits: &BTreeMap<u64, LineEdit>, dst: &Path) -> Result<PathBuf> {
    edit_lines(src, edits, dst)
}

/// Remove the final physical line.
///
/// A file ending in a terminator counts that terminator as ending the file's
/// last (empty) segment, so only the terminator is removed:
/// "a\nb\n" becomes "a\nb". A file with an unterminated final line loses that
/// line's content while the previous line keeps its terminator: "a\nb"
/// becomes "a\n". A one-line file yields an empty file.
pub fn delete_last_line(src: &Path, dst: &Path) -> Result<PathBuf> {
    ensure_exists(src)?;

    let mut lines: Vec<PhysicalLine> = LineReader::open(src)?
        .collect::<std::io::Result<_>>()
        .map_err(io_step("read line from", src))?;

    let mut out: Vec<u8> = Vec::new();
    let ends_terminated = lines.last().map(|l| l.terminator != Terminator::None);
    match ends_terminated {
        None => {} // empty file stays empty
        Some(true) => {
            let last_idx = lines.len() - 1;
            for (i, line) in lines.iter().enumerate() {
                out.extend_from_slice(&line.content);
                if i != last_idx {
                    out.extend_from_slice(line.terminator.as_bytes());
                }
            }
        }
        Some(false) => {
            lines.pop();
            for line in &lines {
                emit(&mut out, line);
            }
        }
    }

    write_output(&out, dst)?;
    info!(src = %src.display(), dst = %dst.display(), "Deleted last line");
    Ok(dst.to_path_buf())
}

fn emit(out: &mut Vec<u8>, line: &PhysicalLine) {
    out.extend_from_slice(&line.content);
    out.extend_from_slice(line.terminator.as_bytes());
}

fn strip_terminators(text: &str) -> String {
    text.replace(['\r', '\n'], "")
}

/// Write the buffered content through a temp file in `dst`'s directory, then
/// atomically rename into place. Keeps `dst` intact if anything fails.
fn write_output(bytes: &[u8], dst: &Path) -> Result<()> {
    let dir = match dst.parent() {
        Some(p) if !p.as_os_str().is_empty() => p.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let mut tmp = NamedTempFile::new_in(&dir).map_err(io_step("create temporary file in", &dir))?;
    let tmp_path = tmp.path().to_path_buf();
    tmp.write_all(bytes)
        .map_err(io_step("write transformed content to", &tmp_path))?;
    tmp.as_file()
        .sync_all()
        .map_err(io_step("sync temporary file", &tmp_path))?;
    tmp.persist(dst).map_err(|e| FileKitError::Io {
        op: "rename temporary file to",
        path: dst.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}
