use crate::daily::*;
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::BTreeMap;
use std::collections::BTreeSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Which puzzles have been solved, and when, for each language.
///
/// This only describes the records. Storing them is up to the caller.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolvedRecords {
    solved: BTreeMap<String, BTreeMap<usize, CalendarDate>>,
    has_played: bool,
}

impl SolvedRecords {
    pub fn new() -> SolvedRecords {
        SolvedRecords::default()
    }

    /// Records that the puzzle was solved on `today`. Solving it again keeps the first date.
    ///
    /// Returns `true` iff the puzzle had not been solved before.
    pub fn mark_solved(&mut self, language: &str, index: usize, today: CalendarDate) -> bool {
        let by_index = self.solved.entry(language.to_string()).or_default();
        if by_index.contains_key(&index) {
            return false;
        }
        by_index.insert(index, today);
        true
    }

    pub fn is_solved(&self, language: &str, index: usize) -> bool {
        self.solve_date(language, index).is_some()
    }

    pub fn solve_date(&self, language: &str, index: usize) -> Option<CalendarDate> {
        self.solved
            .get(language)
            .and_then(|by_index| by_index.get(&index))
            .copied()
    }

    pub fn solved_indices(&self, language: &str) -> BTreeSet<usize> {
        self.solved
            .get(language)
            .map(|by_index| by_index.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Returns `true` iff the puzzle was solved on the day it came out.
    pub fn solved_on_release_day(
        &self,
        language: &str,
        index: usize,
        schedule: &DailySchedule,
    ) -> bool {
        self.solve_date(language, index)
            .map_or(false, |date| schedule.was_solved_on_release_day(index, date))
    }

    pub fn has_played(&self) -> bool {
        self.has_played
    }

    pub fn mark_played(&mut self) {
        self.has_played = true;
    }
}

/// The puzzle to play next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleChoice {
    Puzzle(usize),
    /// Pick one with [`random_puzzle`].
    Random,
}

impl PuzzleChoice {
    /// Today's puzzle, or a random one once the book has run out.
    pub fn today(today_index: usize, puzzle_count: usize) -> PuzzleChoice {
        if today_index < puzzle_count {
            PuzzleChoice::Puzzle(today_index)
        } else {
            PuzzleChoice::Random
        }
    }
}

/// Finds the first released puzzle after `current` that has not been solved, wrapping around to
/// the start of the book. Falls back to today's puzzle, and then to a random one.
pub fn next_unsolved(
    current: usize,
    today_index: usize,
    puzzle_count: usize,
    solved: &BTreeSet<usize>,
) -> PuzzleChoice {
    if puzzle_count == 0 {
        return PuzzleChoice::Random;
    }
    let last_released = today_index.min(puzzle_count - 1);
    let after = current.saturating_add(1)..=last_released;
    let before = 0..current.min(last_released + 1);
    if let Some(index) = after.chain(before).find(|index| !solved.contains(index)) {
        return PuzzleChoice::Puzzle(index);
    }
    if today_index != current && today_index < puzzle_count {
        return PuzzleChoice::Puzzle(today_index);
    }
    PuzzleChoice::Random
}

/// Picks a released puzzle at random, preferring ones that have not been solved.
///
/// Returns `None` only if there are no puzzles.
pub fn random_puzzle<R: Rng + ?Sized>(
    rng: &mut R,
    today_index: usize,
    puzzle_count: usize,
    solved: &BTreeSet<usize>,
) -> Option<usize> {
    if puzzle_count == 0 {
        return None;
    }
    let last_released = today_index.min(puzzle_count - 1);
    let unsolved: Vec<usize> = (0..=last_released)
        .filter(|index| !solved.contains(index))
        .collect();
    match unsolved.choose(rng) {
        Some(index) => Some(*index),
        None => Some(rng.gen_range(0..=last_released)),
    }
}
