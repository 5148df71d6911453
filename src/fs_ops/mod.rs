//! Filesystem command operations: conflict-policied copy/move, file name
//! swapping and collision-free name computation.

mod copy;
mod file_move;
mod next_name;
mod swap;

pub use copy::{CopyPolicy, copy_file};
pub use file_move::{MovePolicy, move_file};
pub use next_name::next_available_name;
pub use swap::swap_names;
