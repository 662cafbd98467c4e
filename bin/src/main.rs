use clap::{Parser, Subcommand};
use crossed_wordle::*;
use std::collections::BTreeSet;
use std::error::Error;
use std::fs;
use std::fs::File;
use std::io;
use std::io::BufRead;
use std::path::Path;
use std::path::PathBuf;
use std::time::Instant;

/// Play a crossed Wordle puzzle in the terminal, where every row and every column is a word.
#[derive(Parser, Debug)]
#[clap(author, version, about)]
struct Args {
    /// Directory that holds `puzzles/<language>.txt` and `words/<language>.txt`.
    #[clap(short = 'd', long, default_value = "data")]
    data_dir: PathBuf,

    /// Language of the puzzles and the word list.
    #[clap(short = 'l', long, default_value = "en")]
    language: String,

    /// File in which solved puzzles are recorded.
    #[clap(short = 'r', long, default_value = "solved.ron")]
    records: PathBuf,

    /// Use this date (YYYY-MM-DD) instead of today's date.
    #[clap(long)]
    today: Option<CalendarDate>,

    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play a puzzle. Defaults to today's puzzle.
    Play {
        /// Play this puzzle instead, if it has been released.
        #[clap(short, long)]
        puzzle: Option<usize>,
        /// Play a random released puzzle, preferring unsolved ones.
        #[clap(long, conflicts_with = "puzzle")]
        random: bool,
    },
    /// Check that every row and column of every puzzle is in the word list.
    Check,
    /// Show today's puzzle number and release date.
    Today,
    /// List the solved puzzles.
    Stats,
}

struct Game {
    language: String,
    schedule: DailySchedule,
    today: CalendarDate,
    book: PuzzleBook,
    words: WordList,
    records_path: PathBuf,
    records: SolvedRecords,
}

fn main() -> Result<(), Box<dyn Error>> {
    let start_time = Instant::now();
    let args = Args::parse();

    let puzzles_path = args
        .data_dir
        .join("puzzles")
        .join(format!("{}.txt", args.language));
    let words_path = args
        .data_dir
        .join("words")
        .join(format!("{}.txt", args.language));
    let book = PuzzleBook::from_reader(&mut io::BufReader::new(File::open(&puzzles_path)?))?;
    let words = WordList::from_reader(&mut io::BufReader::new(File::open(&words_path)?))?;
    println!(
        "Loaded {} puzzles and {} words from {}.",
        book.len(),
        words.len(),
        args.data_dir.display()
    );

    let mut game = Game {
        language: args.language,
        schedule: DailySchedule::default(),
        today: args.today.unwrap_or_else(CalendarDate::today),
        book,
        words,
        records: load_records(&args.records)?,
        records_path: args.records,
    };

    match args.command {
        Command::Play { puzzle, random } => {
            let choice = match puzzle {
                Some(index) => PuzzleChoice::Puzzle(index),
                None if random => PuzzleChoice::Random,
                None => PuzzleChoice::today(game.todays_index(), game.book.len()),
            };
            play(&mut game, choice)?
        }
        Command::Check => {
            let check_start = Instant::now();
            if !check_book(&game) {
                std::process::exit(1);
            }
            println!(
                "Checked in {:.3}s.",
                check_start.elapsed().as_secs_f64()
            );
        }
        Command::Today => show_today(&game),
        Command::Stats => show_stats(&game),
    }

    println!(
        "Command executed in {:.3}s.",
        start_time.elapsed().as_secs_f64()
    );

    Ok(())
}

impl Game {
    fn todays_index(&self) -> usize {
        self.schedule.todays_index(self.today)
    }

    fn save_records(&self) -> Result<(), Box<dyn Error>> {
        let ser = ron::ser::to_string_pretty(&self.records, ron::ser::PrettyConfig::default())?;
        fs::write(&self.records_path, ser)?;
        Ok(())
    }
}

fn load_records(path: &Path) -> Result<SolvedRecords, Box<dyn Error>> {
    if !path.exists() {
        return Ok(SolvedRecords::new());
    }
    let text = fs::read_to_string(path)?;
    Ok(ron::from_str(&text)?)
}

fn check_book(game: &Game) -> bool {
    let unknown = game.book.unknown_words(&game.words);
    for word in unknown.iter() {
        let axis = match word.mode {
            Mode::Row => "row",
            Mode::Col => "column",
        };
        eprintln!(
            "Puzzle {}: {} {} is {}, which is not in the word list.",
            word.puzzle, axis, word.index, word.word
        );
    }
    if unknown.is_empty() {
        println!("All {} puzzles only use known words.", game.book.len());
    }
    unknown.is_empty()
}

fn show_today(game: &Game) {
    let index = game.todays_index();
    println!("Today is {}.", game.today);
    if index < game.book.len() {
        println!(
            "Today's puzzle is number {}, released on {}.",
            index,
            game.schedule.puzzle_date(index)
        );
    } else {
        println!(
            "There are no new puzzles. The last one came out on {}.",
            game.schedule.puzzle_date(game.book.len().saturating_sub(1))
        );
    }
    if game.records.is_solved(&game.language, index) {
        println!("You have already solved it.");
    }
}

fn show_stats(game: &Game) {
    let solved = game.records.solved_indices(&game.language);
    let released = game.todays_index().min(game.book.len().saturating_sub(1)) + 1;
    println!("Solved {} of {} released puzzles.", solved.len(), released);

    println!("|Puzzle|Released|Solved|");
    println!("|------|--------|------|");
    for index in solved.iter() {
        let solve_date = match game.records.solve_date(&game.language, *index) {
            Some(date) => date.to_string(),
            None => continue,
        };
        let on_time = if game
            .records
            .solved_on_release_day(&game.language, *index, &game.schedule)
        {
            " (on the day)"
        } else {
            ""
        };
        println!(
            "|{}|{}|{}{}|",
            index,
            game.schedule.puzzle_date(*index),
            solve_date,
            on_time
        );
    }
}

fn play(game: &mut Game, choice: PuzzleChoice) -> Result<(), Box<dyn Error>> {
    let mut choice = choice;
    loop {
        let index = match choice {
            PuzzleChoice::Puzzle(index) => index,
            PuzzleChoice::Random => {
                let solved = game.records.solved_indices(&game.language);
                match random_puzzle(
                    &mut rand::thread_rng(),
                    game.todays_index(),
                    game.book.len(),
                    &solved,
                ) {
                    Some(index) => index,
                    None => {
                        eprintln!("Error: there are no puzzles to play.");
                        std::process::exit(1);
                    }
                }
            }
        };
        if let Err(reason) = check_playable(game, index) {
            eprintln!("Error: {}", reason);
            std::process::exit(1);
        }

        if !game.records.has_played() {
            print_help();
            game.records.mark_played();
            game.save_records()?;
        }

        if !play_puzzle(game, index)? {
            return Ok(());
        }

        let solved = game.records.solved_indices(&game.language);
        choice = next_unsolved(index, game.todays_index(), game.book.len(), &solved);
        println!("Play the next one? [y/N]");
        let mut buffer = String::new();
        io::stdin().read_line(&mut buffer)?;
        if !buffer.trim().eq_ignore_ascii_case("y") {
            return Ok(());
        }
    }
}

/// Fails with a message for the player if puzzle `index` is missing or not released yet.
fn check_playable(game: &Game, index: usize) -> Result<(), String> {
    if index >= game.book.len() {
        return Err(format!(
            "there is no puzzle {}. The book has {} puzzles.",
            index,
            game.book.len()
        ));
    }
    if !game.schedule.is_accessible(index, game.today) {
        return Err(format!(
            "puzzle {} is not out until {}.",
            index,
            game.schedule.puzzle_date(index)
        ));
    }
    Ok(())
}

fn print_help() {
    println!(
        "Fill in the grid one row or column at a time. Each row and each column is a word.\n\n\
         Type letters to fill the active line from the cursor, '<' to erase, and '.' or an empty\n\
         line to submit it. Commands start with ':'\n\n\
           * ':mode' switches between guessing rows and columns\n\
           * ':up', ':down', ':left', ':right' move the cursor\n\
           * ':go ROW COL' jumps to a cell\n\
           * ':help' shows this again, ':quit' gives up\n\n\
         After a submission each cell is marked:\n\n\
           * '=' correct\n\
           * '+' in both its row and its column, somewhere else\n\
           * '-' somewhere else in its row only\n\
           * '|' somewhere else in its column only\n\
           * 'x' in neither its row nor its column\n"
    );
}

/// Plays one puzzle until it is solved or the player quits. Returns whether it was solved.
fn play_puzzle(game: &mut Game, index: usize) -> Result<bool, Box<dyn Error>> {
    let puzzle = game.book.puzzle(index, &game.words)?;
    let mut state = GameState::new();
    println!(
        "Puzzle {} ({}).",
        index,
        game.schedule.puzzle_date(index)
    );

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();
    loop {
        print_state(&state);
        let line = match lines.next() {
            Some(line) => line?,
            None => return Ok(false),
        };
        let input = line.trim();

        if let Some(command) = input.strip_prefix(':') {
            if !run_command(&mut state, command) {
                println!("Gave up after {} tries.", state.tries().total());
                return Ok(false);
            }
            continue;
        }

        let mut submit = input.is_empty();
        for key in input.chars() {
            match key {
                '<' => state.backspace(),
                '.' => submit = true,
                key if key.is_whitespace() => {}
                key => {
                    if let Err(error) = state.type_letter(key) {
                        println!("{}. Try again.", error);
                    }
                }
            }
        }
        if !submit {
            continue;
        }

        match state.submit_line(&puzzle) {
            Ok(outcome) => {
                if outcome.puzzle_complete {
                    print_state(&state);
                    println!("Solved it in {} tries!", state.tries().total());
                    if game.records.mark_solved(&game.language, index, game.today) {
                        game.save_records()?;
                    }
                    return Ok(true);
                }
                if outcome.line_complete {
                    println!("That line is done.");
                } else if !outcome.newly_correct.is_empty() {
                    println!("{} new correct letters.", outcome.newly_correct.len());
                }
            }
            Err(SubmitError::Incomplete) => println!("Fill in the whole line first."),
            Err(SubmitError::Invalid) => println!(
                "{} is not in the word list.",
                state.line_word(state.mode(), state.mode().line_index(state.cursor()))
            ),
        }
    }
}

/// Runs a ':' command. Returns `false` if the player quits.
fn run_command(state: &mut GameState, command: &str) -> bool {
    let mut parts = command.split_whitespace();
    match parts.next() {
        Some("mode") => state.toggle_mode(),
        Some("up") => state.move_cursor(Direction::Up),
        Some("down") => state.move_cursor(Direction::Down),
        Some("left") => state.move_cursor(Direction::Left),
        Some("right") => state.move_cursor(Direction::Right),
        Some("go") => {
            let row = parts.next().and_then(|row| row.parse::<usize>().ok());
            let col = parts.next().and_then(|col| col.parse::<usize>().ok());
            match (row, col) {
                (Some(row), Some(col)) if row < GRID_SIZE && col < GRID_SIZE => {
                    state.set_cursor(Coord::new(row, col))
                }
                _ => println!(
                    "Usage: :go ROW COL, with both between 0 and {}.",
                    GRID_SIZE - 1
                ),
            }
        }
        Some("help") => print_help(),
        Some("quit") => return false,
        _ => println!("Unknown command. Type ':help' for help."),
    }
    true
}

fn cell_marker(state: CellState) -> char {
    match state {
        CellState::Empty => ' ',
        CellState::Correct => '=',
        CellState::MisplacedBoth => '+',
        CellState::MisplacedRow => '-',
        CellState::MisplacedCol => '|',
        CellState::Absent => 'x',
    }
}

fn letters(set: &BTreeSet<char>) -> String {
    set.iter().collect()
}

fn print_state(state: &GameState) {
    let cursor = state.cursor();
    let active = line_coords(state.mode(), cursor);
    println!();
    for row in 0..GRID_SIZE {
        let mut line = String::new();
        for col in 0..GRID_SIZE {
            let coord = Coord::new(row, col);
            let cell = state.cell(coord);
            let (open, close) = if coord == cursor {
                ('>', '<')
            } else if active.contains(&coord) {
                ('(', ')')
            } else {
                (' ', ' ')
            };
            line.push(open);
            line.push(cell.letter.unwrap_or('_'));
            line.push(cell_marker(cell.state));
            line.push(close);
        }
        let knowledge = state.knowledge().row(row);
        println!(
            "{}   misplaced: {:<5} absent: {}",
            line,
            letters(knowledge.misplaced()),
            letters(knowledge.absent())
        );
    }
    for col in 0..GRID_SIZE {
        let knowledge = state.knowledge().col(col);
        if knowledge.is_empty() {
            continue;
        }
        println!(
            "column {}: misplaced: {:<5} absent: {}",
            col,
            letters(knowledge.misplaced()),
            letters(knowledge.absent())
        );
    }

    let keys: String = keyboard_hints(state)
        .iter()
        .map(|(letter, hint)| match hint.status {
            Some(KeyStatus::Absent) => '.',
            Some(KeyStatus::Misplaced(_)) => letter.to_ascii_lowercase(),
            None if hint.locked => '=',
            None => *letter,
        })
        .collect();
    let axis = match state.mode() {
        Mode::Row => "row",
        Mode::Col => "column",
    };
    println!(
        "Guessing {} {}. Keys: {}   Tries: {}",
        axis,
        state.mode().line_index(cursor),
        keys,
        state.tries().total()
    );
}
