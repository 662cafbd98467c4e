use crate::data::*;
use crate::grid::*;
use crate::results::*;
use crate::state::GameState;

/// Submits the active line as a guess and updates the grid, the knowledge and the try counter.
///
/// The line is rejected with [`SubmitError::Incomplete`] if any of its cells is empty, or with
/// [`SubmitError::Invalid`] if its word is not accepted by `puzzle`. A rejected line leaves
/// `state` untouched.
///
/// Otherwise the line is evaluated in two passes:
///
///  1. Cells whose letter matches the solution become [`CellState::Correct`]. Every letter in the
///     line stops being misplaced for both of its cell's lines.
///  2. Each remaining cell is classified by whether its letter is still available, i.e. appears
///     at a cell that is not yet correct, in the solution of its row and of its column.
///
/// The first pass has to finish before the second starts, otherwise a cell would be classified
/// against letters that are about to be locked later in the same line.
pub fn submit_line<S: PuzzleSource + ?Sized>(
    state: &mut GameState,
    puzzle: &S,
) -> Result<LineOutcome, SubmitError> {
    let mode = state.mode();
    let cursor = state.cursor();
    let coords = line_coords(mode, cursor);

    let word: String = coords
        .iter()
        .filter_map(|coord| state.cell(*coord).letter)
        .collect();
    if word.chars().count() < GRID_SIZE {
        return Err(SubmitError::Incomplete);
    }
    if !puzzle.is_valid_word(&word.to_ascii_uppercase()) {
        return Err(SubmitError::Invalid);
    }

    let solution = puzzle.solution();
    let mut newly_correct = Vec::new();
    for coord in coords {
        let cell = &mut state.grid[coord.row][coord.col];
        let Some(letter) = cell.letter else {
            continue;
        };
        if letter == solution.letter(coord) {
            if !cell.is_correct() {
                newly_correct.push(coord);
            }
            cell.state = CellState::Correct;
        }
        state.knowledge.forget_misplaced_at(coord, letter);
    }

    for coord in coords {
        let cell = state.grid[coord.row][coord.col];
        if cell.is_correct() {
            continue;
        }
        let Some(letter) = cell.letter else {
            continue;
        };
        state.knowledge.forget_at(coord, letter);
        let classified = classify(state, solution, coord, letter);
        state.grid[coord.row][coord.col].state = classified;
    }

    state.tries.increment(mode, mode.line_index(cursor));

    Ok(LineOutcome {
        newly_correct,
        line_complete: coords.iter().all(|coord| state.cell(*coord).is_correct()),
        puzzle_complete: state.is_solved(),
    })
}

/// Classifies a letter that is not correct at `coord`, and records what that says about its row
/// and column.
fn classify(
    state: &mut GameState,
    solution: &Solution,
    coord: Coord,
    letter: char,
) -> CellState {
    let in_row = (0..GRID_SIZE)
        .map(|col| Coord::new(coord.row, col))
        .any(|other| is_available(state, solution, other, letter));
    let in_col = (0..GRID_SIZE)
        .map(|row| Coord::new(row, coord.col))
        .any(|other| is_available(state, solution, other, letter));

    let knowledge = &mut state.knowledge;
    match (in_row, in_col) {
        (true, true) => {
            knowledge.row_mut(coord.row).mark_misplaced(letter);
            knowledge.col_mut(coord.col).mark_misplaced(letter);
            CellState::MisplacedBoth
        }
        (true, false) => {
            knowledge.row_mut(coord.row).mark_misplaced(letter);
            knowledge.col_mut(coord.col).mark_absent(letter);
            CellState::MisplacedRow
        }
        (false, true) => {
            knowledge.row_mut(coord.row).mark_absent(letter);
            knowledge.col_mut(coord.col).mark_misplaced(letter);
            CellState::MisplacedCol
        }
        (false, false) => {
            knowledge.row_mut(coord.row).mark_absent(letter);
            knowledge.col_mut(coord.col).mark_absent(letter);
            CellState::Absent
        }
    }
}

// Letters already locked in a correct cell are used up.
fn is_available(state: &GameState, solution: &Solution, coord: Coord, letter: char) -> bool {
    solution.letter(coord) == letter && !state.cell(coord).is_correct()
}
