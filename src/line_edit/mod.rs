//! Line-oriented text file editing.
//!
//! Targets 1-based physical line numbers and preserves each line's original
//! end-of-line bytes (LF vs CRLF, or none on an unterminated final line),
//! regardless of what a replacement value carries.

mod editor;
mod lines;

pub use editor::{
    LineEdit, delete_last_line, delete_line, delete_lines, edit_lines, replace_line,
    replace_lines,
};
pub use lines::Terminator;
