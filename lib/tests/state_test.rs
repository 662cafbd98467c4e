#[macro_use]
extern crate assert_matches;

use crossed_wordle::*;

fn puzzle_words() -> (Solution, WordList) {
    let solution = Solution::from_rows(["MONEL", "ABIDE", "RAVEN", "STORK", "HUMPY"]).unwrap();
    let words = WordList::from_iterator(["MONEL", "ABIDE", "LONEX"]);
    (solution, words)
}

#[test]
fn new_state_is_empty() {
    let state = GameState::new();

    assert_eq!(state.mode(), Mode::Row);
    assert_eq!(state.cursor(), Coord::new(0, 0));
    assert!(state
        .grid()
        .iter()
        .flatten()
        .all(|cell| *cell == Cell::default() && cell.state == CellState::Empty));
    for index in 0..GRID_SIZE {
        assert!(state.knowledge().row(index).is_empty());
        assert!(state.knowledge().col(index).is_empty());
    }
    assert_eq!(state.tries().total(), 0);
    assert!(!state.is_solved());
}

#[test]
fn default_matches_new() {
    assert_eq!(GameState::default(), GameState::new());
}

#[test]
fn reset_restores_initial_state() {
    let (solution, words) = puzzle_words();
    let puzzle = Puzzle::new(&solution, &words);
    let mut state = GameState::new();
    for letter in "LONEX".chars() {
        state.type_letter(letter).unwrap();
    }
    state.submit_line(&puzzle).unwrap();
    state.toggle_mode();
    state.set_cursor(Coord::new(3, 2));
    assert_ne!(state, GameState::new());

    state.reset();

    assert_eq!(state, GameState::new());
}

#[test]
fn type_letter_advances_along_row_and_stops_at_end() {
    let mut state = GameState::new();

    for letter in "abcdefg".chars() {
        state.type_letter(letter).unwrap();
    }

    assert_eq!(state.cursor(), Coord::new(0, GRID_SIZE - 1));
    assert_eq!(state.line_word(Mode::Row, 0), "ABCDG");
}

#[test]
fn type_letter_advances_along_column() {
    let mut state = GameState::new();
    state.set_cursor(Coord::new(0, 2));
    state.toggle_mode();

    state.type_letter('x').unwrap();
    state.type_letter('y').unwrap();

    assert_eq!(state.cursor(), Coord::new(2, 2));
    assert_eq!(state.cell(Coord::new(0, 2)).letter, Some('X'));
    assert_eq!(state.cell(Coord::new(1, 2)).letter, Some('Y'));
    assert_eq!(state.line_word(Mode::Col, 2), "XY");
}

#[test]
fn type_letter_rejects_non_letters() {
    let mut state = GameState::new();

    assert_matches!(
        state.type_letter('3'),
        Err(PuzzleError::UnsupportedCharacter('3'))
    );
    assert_matches!(
        state.type_letter('é'),
        Err(PuzzleError::UnsupportedCharacter('é'))
    );
    assert_eq!(state, GameState::new());
}

#[test]
fn type_letter_skips_correct_cell_without_moving() {
    let (solution, words) = puzzle_words();
    let puzzle = Puzzle::new(&solution, &words);
    let mut state = GameState::new();
    for letter in "MONEL".chars() {
        state.type_letter(letter).unwrap();
    }
    state.submit_line(&puzzle).unwrap();
    state.set_cursor(Coord::new(0, 1));

    state.type_letter('z').unwrap();

    assert_eq!(state.cursor(), Coord::new(0, 1));
    assert_eq!(state.cell(Coord::new(0, 1)).letter, Some('O'));
}

#[test]
fn correct_cells_cannot_be_edited() {
    let (solution, words) = puzzle_words();
    let puzzle = Puzzle::new(&solution, &words);
    let mut state = GameState::new();
    for letter in "MONEL".chars() {
        state.type_letter(letter).unwrap();
    }
    state.submit_line(&puzzle).unwrap();

    assert_matches!(state.set_letter(Coord::new(0, 0), 'Q'), Ok(false));
    assert!(!state.clear_cell(Coord::new(0, 0)));
    state.set_cursor(Coord::new(0, 3));
    state.backspace();

    assert_eq!(state.line_word(Mode::Row, 0), "MONEL");
    assert!(state.grid()[0].iter().all(Cell::is_correct));
    assert_eq!(state.cursor(), Coord::new(0, 2));
}

#[test]
fn backspace_clears_cell_and_steps_back() {
    let mut state = GameState::new();
    state.type_letter('a').unwrap();
    state.type_letter('b').unwrap();

    state.backspace();
    assert_eq!(state.cursor(), Coord::new(0, 1));
    assert_eq!(state.line_word(Mode::Row, 0), "AB");

    state.backspace();
    assert_eq!(state.cursor(), Coord::new(0, 0));
    assert_eq!(state.line_word(Mode::Row, 0), "A");

    state.backspace();
    assert_eq!(state.cursor(), Coord::new(0, 0));
    assert_eq!(*state.cell(Coord::new(0, 0)), Cell::default());
}

#[test]
fn backspace_resets_evaluated_cell() {
    let (solution, words) = puzzle_words();
    let puzzle = Puzzle::new(&solution, &words);
    let mut state = GameState::new();
    for letter in "LONEX".chars() {
        state.type_letter(letter).unwrap();
    }
    state.submit_line(&puzzle).unwrap();
    assert_eq!(state.cell(Coord::new(0, 4)).state, CellState::Absent);

    state.backspace();

    assert_eq!(*state.cell(Coord::new(0, 4)), Cell::default());
    // Knowledge is only ever changed by submitting.
    assert!(state.knowledge().row(0).is_absent('X'));
}

#[test]
fn move_cursor_wraps_around() {
    let mut state = GameState::new();

    state.move_cursor(Direction::Up);
    assert_eq!(state.cursor(), Coord::new(GRID_SIZE - 1, 0));
    state.move_cursor(Direction::Left);
    assert_eq!(state.cursor(), Coord::new(GRID_SIZE - 1, GRID_SIZE - 1));
    state.move_cursor(Direction::Down);
    assert_eq!(state.cursor(), Coord::new(0, GRID_SIZE - 1));
    state.move_cursor(Direction::Right);
    assert_eq!(state.cursor(), Coord::new(0, 0));
}

#[test]
fn active_line_follows_mode() {
    let mut state = GameState::new();
    state.set_cursor(Coord::new(1, 3));
    state.type_letter('q').unwrap();

    assert_eq!(state.active_line()[3].letter, Some('Q'));

    state.set_cursor(Coord::new(1, 3));
    state.toggle_mode();
    assert_eq!(state.mode(), Mode::Col);
    assert_eq!(state.active_line()[1].letter, Some('Q'));
    assert_eq!(state.active_line()[3].letter, None);
}

#[test]
#[should_panic]
fn set_cursor_out_of_range_panics() {
    let mut state = GameState::new();
    state.set_cursor(Coord::new(0, GRID_SIZE));
}

#[test]
fn keyboard_hints_describe_active_line() {
    let (solution, words) = puzzle_words();
    let puzzle = Puzzle::new(&solution, &words);
    let mut state = GameState::new();
    for letter in "LONEX".chars() {
        state.type_letter(letter).unwrap();
    }
    state.submit_line(&puzzle).unwrap();

    let hints = keyboard_hints(&state);

    assert_eq!(hints.len(), 26);
    assert_eq!(
        hints[&'L'],
        KeyHint {
            locked: false,
            status: Some(KeyStatus::Misplaced(Mode::Row)),
        }
    );
    assert_eq!(
        hints[&'O'],
        KeyHint {
            locked: true,
            status: None,
        }
    );
    assert_eq!(hints[&'X'].status, Some(KeyStatus::Absent));
    assert_eq!(hints[&'A'], KeyHint::default());

    // Column 0 only knows that L is not in MARSH.
    state.set_cursor(Coord::new(0, 0));
    state.toggle_mode();
    let hints = keyboard_hints(&state);
    assert_eq!(hints[&'L'].status, Some(KeyStatus::Absent));
    assert!(!hints[&'O'].locked);
    assert_eq!(hints[&'X'].status, None);
}
