use crate::data::PuzzleSource;
use crate::engine;
use crate::grid::*;
use crate::knowledge::Knowledge;
use crate::results::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// How many times each row and column has been submitted.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Tries {
    rows: [u32; GRID_SIZE],
    cols: [u32; GRID_SIZE],
}

impl Tries {
    pub fn row(&self, index: usize) -> u32 {
        self.rows[index]
    }

    pub fn col(&self, index: usize) -> u32 {
        self.cols[index]
    }

    /// The number of submissions across all rows and columns.
    pub fn total(&self) -> u32 {
        self.rows.iter().chain(self.cols.iter()).sum()
    }

    pub(crate) fn increment(&mut self, mode: Mode, index: usize) {
        match mode {
            Mode::Row => self.rows[index] += 1,
            Mode::Col => self.cols[index] += 1,
        }
    }
}

/// Everything about one attempt at one puzzle.
///
/// Coordinates passed to any method must be inside the grid; anything else panics.
///
/// A deserialized state is checked in the same way: the cursor must be inside the grid, letters
/// must be uppercase ASCII, correct cells must hold a letter, and no line may list a letter as
/// both misplaced and absent.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SavedGame"))]
pub struct GameState {
    mode: Mode,
    cursor: Coord,
    pub(crate) grid: [[Cell; GRID_SIZE]; GRID_SIZE],
    pub(crate) knowledge: Knowledge,
    pub(crate) tries: Tries,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct SavedGame {
    mode: Mode,
    cursor: Coord,
    grid: [[Cell; GRID_SIZE]; GRID_SIZE],
    knowledge: Knowledge,
    tries: Tries,
}

#[cfg(feature = "serde")]
impl TryFrom<SavedGame> for GameState {
    type Error = PuzzleError;

    fn try_from(saved: SavedGame) -> Result<Self, Self::Error> {
        if saved.cursor.row >= GRID_SIZE || saved.cursor.col >= GRID_SIZE {
            return Err(PuzzleError::InvalidState("the cursor is outside the grid"));
        }
        for cell in saved.grid.iter().flatten() {
            match cell.letter {
                Some(letter) if !letter.is_ascii_uppercase() => {
                    return Err(PuzzleError::InvalidState("a cell holds a non-letter"));
                }
                None if cell.state != CellState::Empty => {
                    return Err(PuzzleError::InvalidState("an empty cell has been evaluated"));
                }
                _ => {}
            }
        }
        let lines = (0..GRID_SIZE).flat_map(|index| {
            [saved.knowledge.row(index), saved.knowledge.col(index)]
        });
        for line in lines {
            if !line.misplaced().is_disjoint(line.absent()) {
                return Err(PuzzleError::InvalidState(
                    "a letter is both misplaced and absent in one line",
                ));
            }
        }
        Ok(GameState {
            mode: saved.mode,
            cursor: saved.cursor,
            grid: saved.grid,
            knowledge: saved.knowledge,
            tries: saved.tries,
        })
    }
}

impl GameState {
    /// Creates an empty grid with the cursor in the top-left corner, guessing rows.
    pub fn new() -> GameState {
        GameState {
            mode: Mode::Row,
            cursor: Coord::new(0, 0),
            grid: [[Cell::default(); GRID_SIZE]; GRID_SIZE],
            knowledge: Knowledge::default(),
            tries: Tries::default(),
        }
    }

    /// Starts over in place, so that existing references to this state stay valid.
    pub fn reset(&mut self) {
        *self = GameState::new();
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn cursor(&self) -> Coord {
        self.cursor
    }

    pub fn knowledge(&self) -> &Knowledge {
        &self.knowledge
    }

    pub fn tries(&self) -> &Tries {
        &self.tries
    }

    pub fn grid(&self) -> &[[Cell; GRID_SIZE]; GRID_SIZE] {
        &self.grid
    }

    pub fn cell(&self, coord: Coord) -> &Cell {
        coord.assert_in_bounds();
        &self.grid[coord.row][coord.col]
    }

    /// The cells of the line being guessed, in reading order.
    pub fn active_line(&self) -> [Cell; GRID_SIZE] {
        line_coords(self.mode, self.cursor).map(|coord| *self.cell(coord))
    }

    /// The letters typed so far in the given line. Empty cells are skipped, so the result is
    /// shorter than [`GRID_SIZE`] until the line is full.
    pub fn line_word(&self, mode: Mode, index: usize) -> String {
        let through = match mode {
            Mode::Row => Coord::new(index, 0),
            Mode::Col => Coord::new(0, index),
        };
        line_coords(mode, through)
            .iter()
            .filter_map(|coord| self.cell(*coord).letter)
            .collect()
    }

    /// Returns `true` iff every cell is correct.
    pub fn is_solved(&self) -> bool {
        self.grid.iter().flatten().all(Cell::is_correct)
    }

    /// Evaluates the active line against the puzzle. See [`engine::submit_line`].
    pub fn submit_line<S: PuzzleSource + ?Sized>(
        &mut self,
        puzzle: &S,
    ) -> Result<LineOutcome, SubmitError> {
        engine::submit_line(self, puzzle)
    }

    /// Sets the letter in a cell, unless that cell is already correct.
    ///
    /// Returns whether the letter was written.
    pub fn set_letter(&mut self, coord: Coord, letter: char) -> Result<bool, PuzzleError> {
        coord.assert_in_bounds();
        if !letter.is_ascii_alphabetic() {
            return Err(PuzzleError::UnsupportedCharacter(letter));
        }
        let cell = &mut self.grid[coord.row][coord.col];
        if cell.is_correct() {
            return Ok(false);
        }
        cell.letter = Some(letter.to_ascii_uppercase());
        Ok(true)
    }

    /// Empties a cell, unless that cell is already correct.
    pub fn clear_cell(&mut self, coord: Coord) -> bool {
        coord.assert_in_bounds();
        let cell = &mut self.grid[coord.row][coord.col];
        if cell.is_correct() {
            return false;
        }
        *cell = Cell::default();
        true
    }

    /// Types a letter at the cursor and steps forward along the active line, stopping at its end.
    ///
    /// The cursor stays put on a correct cell.
    pub fn type_letter(&mut self, letter: char) -> Result<(), PuzzleError> {
        if self.set_letter(self.cursor, letter)? {
            self.step(1);
        }
        Ok(())
    }

    /// Clears the cell at the cursor and steps back along the active line, stopping at its start.
    pub fn backspace(&mut self) {
        self.clear_cell(self.cursor);
        self.step(-1);
    }

    /// Moves the cursor by one cell, wrapping around the edges.
    pub fn move_cursor(&mut self, direction: Direction) {
        let back = GRID_SIZE - 1;
        match direction {
            Direction::Up => self.cursor.row = (self.cursor.row + back) % GRID_SIZE,
            Direction::Down => self.cursor.row = (self.cursor.row + 1) % GRID_SIZE,
            Direction::Left => self.cursor.col = (self.cursor.col + back) % GRID_SIZE,
            Direction::Right => self.cursor.col = (self.cursor.col + 1) % GRID_SIZE,
        }
    }

    pub fn set_cursor(&mut self, coord: Coord) {
        coord.assert_in_bounds();
        self.cursor = coord;
    }

    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggle();
    }

    pub fn set_mode(&mut self, mode: Mode) {
        self.mode = mode;
    }

    // Clamped, unlike `move_cursor`.
    fn step(&mut self, delta: isize) {
        let position = match self.mode {
            Mode::Row => &mut self.cursor.col,
            Mode::Col => &mut self.cursor.row,
        };
        *position = position
            .saturating_add_signed(delta)
            .min(GRID_SIZE - 1);
    }
}
