use crate::grid::*;
use crate::results::PuzzleError;
use rayon::prelude::*;
use std::collections::HashSet;
use std::fmt;
use std::io::BufRead;
use std::result::Result;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Provides the puzzle being played.
///
/// The solution must not change while a game is in progress.
pub trait PuzzleSource {
    /// The letters the player is trying to find.
    fn solution(&self) -> &Solution;

    /// Returns `true` iff the word may be submitted. Case-insensitive.
    fn is_valid_word(&self, word: &str) -> bool;
}

/// The completed grid for one puzzle, in upper case.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    letters: [[char; GRID_SIZE]; GRID_SIZE],
}

impl Solution {
    /// Builds a solution from its row words, top to bottom.
    pub fn from_rows<I, S>(rows: I) -> Result<Solution, PuzzleError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut letters = [[' '; GRID_SIZE]; GRID_SIZE];
        let mut num_rows = 0;
        for (index, row) in rows.into_iter().enumerate() {
            let row = to_grid_word(row.as_ref())?;
            if let Some(slot) = letters.get_mut(index) {
                *slot = row;
            }
            num_rows += 1;
        }
        if num_rows != GRID_SIZE {
            return Err(PuzzleError::GridSize(num_rows));
        }
        Ok(Solution { letters })
    }

    pub fn letter(&self, coord: Coord) -> char {
        self.letters[coord.row][coord.col]
    }

    pub fn row(&self, index: usize) -> &[char; GRID_SIZE] {
        &self.letters[index]
    }

    pub fn row_word(&self, index: usize) -> String {
        self.letters[index].iter().collect()
    }

    pub fn col_word(&self, index: usize) -> String {
        self.letters.iter().map(|row| row[index]).collect()
    }

    /// The word along the given line.
    pub fn line_word(&self, mode: Mode, index: usize) -> String {
        match mode {
            Mode::Row => self.row_word(index),
            Mode::Col => self.col_word(index),
        }
    }
}

impl FromStr for Solution {
    type Err = PuzzleError;

    /// Parses a solution written as its row words separated by whitespace, e.g.
    /// `"MONEL ABIDE ..."`.
    fn from_str(line: &str) -> Result<Self, Self::Err> {
        Solution::from_rows(line.split_whitespace())
    }
}

impl fmt::Display for Solution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in 0..GRID_SIZE {
            if index > 0 {
                f.write_str(" ")?;
            }
            f.write_str(&self.row_word(index))?;
        }
        Ok(())
    }
}

fn to_grid_word(word: &str) -> Result<[char; GRID_SIZE], PuzzleError> {
    let word = word.trim();
    let length = word.chars().count();
    if length != GRID_SIZE {
        return Err(PuzzleError::WordLength(length));
    }
    let mut letters = [' '; GRID_SIZE];
    for (slot, letter) in letters.iter_mut().zip(word.chars()) {
        if !letter.is_ascii_alphabetic() {
            return Err(PuzzleError::UnsupportedCharacter(letter));
        }
        *slot = letter.to_ascii_uppercase();
    }
    Ok(letters)
}

/// The words that may be submitted.
#[derive(Debug, Default, Clone)]
pub struct WordList {
    words: HashSet<Box<str>>,
}

impl WordList {
    /// Reads words from the given reader, one per line.
    ///
    /// Each word is trimmed and converted to upper case. Lines that are not exactly
    /// [`GRID_SIZE`] ASCII letters can never be typed into the grid, so they are skipped. Only
    /// I/O errors fail the load.
    pub fn from_reader<R: BufRead>(word_reader: &mut R) -> Result<Self, PuzzleError> {
        let mut words = HashSet::new();
        for maybe_word in word_reader.lines() {
            if let Ok(word) = to_grid_word(&maybe_word?) {
                words.insert(to_list_word(word));
            }
        }
        Ok(WordList { words })
    }

    /// Constructs a word list from the given words, skipping the same entries as
    /// [`WordList::from_reader`].
    pub fn from_iterator<S, I>(iter: I) -> Self
    where
        S: AsRef<str>,
        I: IntoIterator<Item = S>,
    {
        let words = iter
            .into_iter()
            .filter_map(|word| to_grid_word(word.as_ref()).ok())
            .map(to_list_word)
            .collect();
        WordList { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word.to_ascii_uppercase().as_str())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn to_list_word(letters: [char; GRID_SIZE]) -> Box<str> {
    letters.iter().collect::<String>().into_boxed_str()
}

/// A word in a puzzle's solution that the word list does not accept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownWord {
    pub puzzle: usize,
    pub mode: Mode,
    pub index: usize,
    pub word: String,
}

/// All the puzzles for one language, in release order.
#[derive(Debug, Default, Clone)]
pub struct PuzzleBook {
    puzzles: Vec<Solution>,
}

impl PuzzleBook {
    /// Reads one puzzle per non-blank line. See [`Solution::from_str`].
    pub fn from_reader<R: BufRead>(puzzle_reader: &mut R) -> Result<Self, PuzzleError> {
        let mut puzzles = Vec::new();
        for maybe_line in puzzle_reader.lines() {
            let line = maybe_line?;
            if line.trim().is_empty() {
                continue;
            }
            puzzles.push(line.parse()?);
        }
        Ok(PuzzleBook { puzzles })
    }

    pub fn from_solutions(puzzles: Vec<Solution>) -> Self {
        PuzzleBook { puzzles }
    }

    pub fn len(&self) -> usize {
        self.puzzles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.puzzles.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Solution> {
        self.puzzles.get(index)
    }

    /// Pairs the puzzle at `index` with the word list, ready to be played.
    pub fn puzzle<'a>(
        &'a self,
        index: usize,
        words: &'a WordList,
    ) -> Result<Puzzle<'a>, PuzzleError> {
        self.get(index)
            .map(|solution| Puzzle::new(solution, words))
            .ok_or(PuzzleError::NoSuchPuzzle(index))
    }

    /// Finds every row and column word, across all puzzles, that could never be submitted
    /// because the word list lacks it.
    pub fn unknown_words(&self, words: &WordList) -> Vec<UnknownWord> {
        self.puzzles
            .par_iter()
            .enumerate()
            .flat_map_iter(|(puzzle, solution)| {
                [Mode::Row, Mode::Col].into_iter().flat_map(move |mode| {
                    (0..GRID_SIZE).filter_map(move |index| {
                        let word = solution.line_word(mode, index);
                        if words.contains(&word) {
                            return None;
                        }
                        Some(UnknownWord {
                            puzzle,
                            mode,
                            index,
                            word,
                        })
                    })
                })
            })
            .collect()
    }
}

/// A solution together with the words that may be guessed against it.
#[derive(Debug, Clone, Copy)]
pub struct Puzzle<'a> {
    solution: &'a Solution,
    words: &'a WordList,
}

impl<'a> Puzzle<'a> {
    pub fn new(solution: &'a Solution, words: &'a WordList) -> Puzzle<'a> {
        Puzzle { solution, words }
    }
}

impl<'a> PuzzleSource for Puzzle<'a> {
    fn solution(&self) -> &Solution {
        self.solution
    }

    fn is_valid_word(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}
