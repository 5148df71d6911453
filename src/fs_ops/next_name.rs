//! Collision-free file name computation.
//!
//! Policy:
//! - An absent path is returned unchanged.
//! - Otherwise candidates "<stem> (n)[.ext]" are probed until one is free.
//! - A trailing space-preceded " (k)" on the stem continues the count from
//!   k + 1; without one the count starts at 2 (an unsuffixed name counts as
//!   "(1)"). "Test(1).txt" has no space before the bracket, so the whole stem
//!   is kept verbatim: the first candidate is "Test(1) (2).txt".
//!
//! This only computes a name from current filesystem state; it never mutates
//! anything. Callers racing other writers should be prepared for the returned
//! name to be taken by the time they use it.

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::trace;

/// Return `path` if free, otherwise the first numbered variant that is.
pub fn next_available_name(path: &Path) -> PathBuf {
    if !path.exists() {
        return path.to_path_buf();
    }

    let stem = path
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_default();
    let ext = path.extension().map(|e| e.to_os_string());

    let parsed = stem
        .to_str()
        .and_then(parse_counter)
        .map(|(base, k)| (OsString::from(base), k));
    let (base, start) = match parsed {
        Some((base, k)) => (base, k + 1),
        None => (stem, 2),
    };

    let mut n: u64 = start;
    loop {
        let mut name = base.clone();
        name.push(format!(" ({n})"));
        if let Some(ref e) = ext {
            name.push(".");
            name.push(e);
        }
        let candidate = path.with_file_name(&name);
        if !candidate.exists() {
            return candidate;
        }
        trace!(candidate = %candidate.display(), "candidate taken, continuing probe");
        n += 1;
    }
}

/// Split an exact, space-preceded trailing " (k)" counter off a stem.
fn parse_counter(stem: &str) -> Option<(&str, u64)> {
    let body = stem.strip_suffix(')')?;
    let open = body.rfind(" (")?;
    let digits = &body[open + 2..];
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let k = digits.parse().ok()?;
    Some((&body[..open], k))
}
