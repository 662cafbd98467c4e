//! The rules of a crossed Wordle puzzle: a 5x5 grid where every row and every column is a hidden
//! word.
//!
//! The player fills in one line at a time and submits it with [`GameState::submit_line`]. Each
//! cell is then marked correct, misplaced along its row, its column or both, or absent, and each
//! row and column accumulates the letters known to be misplaced in or absent from its word.

mod data;
mod daily;
mod engine;
mod grid;
mod knowledge;
mod records;
mod results;
mod state;

pub use data::*;
pub use daily::*;
pub use engine::submit_line;
pub use grid::*;
pub use knowledge::*;
pub use records::*;
pub use results::*;
pub use state::*;
