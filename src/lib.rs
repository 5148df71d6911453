//! Core library for `filekit`.
//!
//! File manipulation primitives with explicit conflict-resolution semantics:
//! copy and move commands where the caller picks the policy for an existing
//! destination, an atomic-as-possible two-file name swap, collision-free
//! name computation, and a line editor that deletes or replaces specific
//! lines while preserving each line's original terminator bytes.
//!
//! Every operation is a stateless free function: synchronous, re-entrant and
//! side-effect-bounded to the paths it is given. Failures surface as
//! [`FileKitError`] variants that callers branch on.

pub mod errors;
pub mod fs_ops;
mod helpers;
pub mod line_edit;

pub use errors::{FileKitError, Result};
pub use fs_ops::{CopyPolicy, MovePolicy, copy_file, move_file, next_available_name, swap_names};
pub use line_edit::{
    LineEdit, Terminator, delete_last_line, delete_line, delete_lines, edit_lines, replace_line,
    replace_lines,
};
