use crate::grid::*;
use crate::state::GameState;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Letters deduced about the solution word of a single row or column.
///
/// A letter is never both misplaced and absent for the same line: marking it as one removes it
/// from the other.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LineKnowledge {
    misplaced: BTreeSet<char>,
    absent: BTreeSet<char>,
}

impl LineKnowledge {
    /// Letters in this line's word that have not been placed yet, in alphabetical order.
    pub fn misplaced(&self) -> &BTreeSet<char> {
        &self.misplaced
    }

    /// Letters not in this line's word, in alphabetical order.
    pub fn absent(&self) -> &BTreeSet<char> {
        &self.absent
    }

    pub fn is_misplaced(&self, letter: char) -> bool {
        self.misplaced.contains(&letter)
    }

    pub fn is_absent(&self, letter: char) -> bool {
        self.absent.contains(&letter)
    }

    pub fn is_empty(&self) -> bool {
        self.misplaced.is_empty() && self.absent.is_empty()
    }

    pub fn mark_misplaced(&mut self, letter: char) {
        self.absent.remove(&letter);
        self.misplaced.insert(letter);
    }

    pub fn mark_absent(&mut self, letter: char) {
        self.misplaced.remove(&letter);
        self.absent.insert(letter);
    }

    pub fn forget_misplaced(&mut self, letter: char) {
        self.misplaced.remove(&letter);
    }

    /// Removes everything known about the letter.
    pub fn forget(&mut self, letter: char) {
        self.misplaced.remove(&letter);
        self.absent.remove(&letter);
    }
}

/// Row and column knowledge. The two axes are independent.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Knowledge {
    rows: [LineKnowledge; GRID_SIZE],
    cols: [LineKnowledge; GRID_SIZE],
}

impl Knowledge {
    pub fn row(&self, index: usize) -> &LineKnowledge {
        &self.rows[index]
    }

    pub fn col(&self, index: usize) -> &LineKnowledge {
        &self.cols[index]
    }

    pub fn row_mut(&mut self, index: usize) -> &mut LineKnowledge {
        &mut self.rows[index]
    }

    pub fn col_mut(&mut self, index: usize) -> &mut LineKnowledge {
        &mut self.cols[index]
    }

    /// The knowledge for the line of the given orientation.
    pub fn line(&self, mode: Mode, index: usize) -> &LineKnowledge {
        match mode {
            Mode::Row => self.row(index),
            Mode::Col => self.col(index),
        }
    }

    /// Removes everything known about `letter` from both lines through `coord`.
    pub(crate) fn forget_at(&mut self, coord: Coord, letter: char) {
        self.rows[coord.row].forget(letter);
        self.cols[coord.col].forget(letter);
    }

    pub(crate) fn forget_misplaced_at(&mut self, coord: Coord, letter: char) {
        self.rows[coord.row].forget_misplaced(letter);
        self.cols[coord.col].forget_misplaced(letter);
    }
}

/// How a letter key should be shown while the given line is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyStatus {
    /// The letter is misplaced along the active line, whose orientation is given.
    Misplaced(Mode),
    Absent,
}

/// Keyboard hint for a single letter, relative to the active line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct KeyHint {
    /// The letter is locked into a correct cell of the active line.
    pub locked: bool,
    pub status: Option<KeyStatus>,
}

/// Builds the hints for every letter `A` to `Z` from the active line's cells and knowledge.
///
/// A letter can be both locked and misplaced, when the word holds it more than once.
pub fn keyboard_hints(state: &GameState) -> BTreeMap<char, KeyHint> {
    let mode = state.mode();
    let knowledge = state
        .knowledge()
        .line(mode, mode.line_index(state.cursor()));
    let locked_letters: BTreeSet<char> = state
        .active_line()
        .iter()
        .filter(|cell| cell.is_correct())
        .filter_map(|cell| cell.letter)
        .collect();

    ('A'..='Z')
        .map(|letter| {
            let status = if knowledge.is_misplaced(letter) {
                Some(KeyStatus::Misplaced(mode))
            } else if knowledge.is_absent(letter) {
                Some(KeyStatus::Absent)
            } else {
                None
            };
            (
                letter,
                KeyHint {
                    locked: locked_letters.contains(&letter),
                    status,
                },
            )
        })
        .collect()
}
