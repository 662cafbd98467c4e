#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The number of rows and columns in a puzzle, and the length of every word.
pub const GRID_SIZE: usize = 5;

/// A zero-based location in the grid.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Coord {
    pub row: usize,
    pub col: usize,
}

impl Coord {
    pub fn new(row: usize, col: usize) -> Coord {
        Coord { row, col }
    }

    pub(crate) fn assert_in_bounds(&self) {
        assert!(
            self.row < GRID_SIZE && self.col < GRID_SIZE,
            "coordinate ({}, {}) is outside the {}x{} grid",
            self.row,
            self.col,
            GRID_SIZE,
            GRID_SIZE
        );
    }
}

/// Which line through the cursor is being guessed.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Mode {
    #[default]
    Row,
    Col,
}

impl Mode {
    /// Returns the other orientation.
    pub fn toggle(self) -> Mode {
        match self {
            Mode::Row => Mode::Col,
            Mode::Col => Mode::Row,
        }
    }

    /// The index of the line through `coord` in this orientation.
    pub fn line_index(self, coord: Coord) -> usize {
        match self {
            Mode::Row => coord.row,
            Mode::Col => coord.col,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// What is known about the letter in a single cell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CellState {
    /// Not evaluated yet.
    #[default]
    Empty,
    /// The letter matches the solution here. Correct cells are locked.
    Correct,
    /// The letter is elsewhere in both this cell's row and its column.
    MisplacedBoth,
    /// The letter is elsewhere in this cell's row only.
    MisplacedRow,
    /// The letter is elsewhere in this cell's column only.
    MisplacedCol,
    /// The letter is in neither this cell's row nor its column.
    Absent,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    pub letter: Option<char>,
    pub state: CellState,
}

impl Cell {
    pub fn is_correct(&self) -> bool {
        self.state == CellState::Correct
    }
}

/// Returns the coordinates of the line through `cursor`, left to right for rows and top to bottom
/// for columns.
pub fn line_coords(mode: Mode, cursor: Coord) -> [Coord; GRID_SIZE] {
    let mut coords = [Coord::default(); GRID_SIZE];
    for (index, coord) in coords.iter_mut().enumerate() {
        *coord = match mode {
            Mode::Row => Coord::new(cursor.row, index),
            Mode::Col => Coord::new(index, cursor.col),
        };
    }
    coords
}
