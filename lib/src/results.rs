use crate::grid::Coord;
use std::io;
use thiserror::Error;

/// Why a submitted line was rejected. Neither case changes the game state.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum SubmitError {
    /// At least one cell in the line has no letter yet.
    #[error("the line is not filled in")]
    Incomplete,
    /// The line spells a word that is not in the word list.
    #[error("the line is not a known word")]
    Invalid,
}

/// Indicates that puzzle data could not be loaded or a letter could not be used.
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// A word had the given length instead of [`GRID_SIZE`](crate::GRID_SIZE).
    #[error("words must have {} letters, found one with {0}", crate::GRID_SIZE)]
    WordLength(usize),
    /// A puzzle line had the given number of words instead of [`GRID_SIZE`](crate::GRID_SIZE).
    #[error("puzzles must have {} rows, found one with {0}", crate::GRID_SIZE)]
    GridSize(usize),
    /// The character is not an ASCII letter.
    #[error("unsupported character {0:?}")]
    UnsupportedCharacter(char),
    /// No puzzle is available at the requested index.
    #[error("there is no puzzle number {0}")]
    NoSuchPuzzle(usize),
    /// The text is not a valid `YYYY-MM-DD` date.
    #[error("invalid date {0:?}, expected YYYY-MM-DD")]
    InvalidDate(String),
    /// A saved game breaks a rule that every played game keeps.
    #[error("invalid saved game: {0}")]
    InvalidState(&'static str),
    /// Reading the puzzle data failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// The outcome of a line that passed validation and was evaluated.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct LineOutcome {
    /// Cells that became [`CellState::Correct`](crate::CellState::Correct) with this submission,
    /// in line order.
    pub newly_correct: Vec<Coord>,
    /// Every cell in the submitted line is correct.
    pub line_complete: bool,
    /// Every cell in the grid is correct.
    pub puzzle_complete: bool,
}
