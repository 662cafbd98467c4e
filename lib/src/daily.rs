use crate::results::PuzzleError;
use chrono::{DateTime, Datelike, Duration, Local, NaiveDate, TimeZone};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A day in the proleptic Gregorian calendar, with no time zone attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub fn new(year: i32, month: u32, day: u32) -> Result<CalendarDate, PuzzleError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(CalendarDate)
            .ok_or_else(|| {
                PuzzleError::InvalidDate(format!("{:04}-{:02}-{:02}", year, month, day))
            })
    }

    /// Today's date in the local time zone, so a new day starts at the player's midnight.
    pub fn today() -> CalendarDate {
        CalendarDate::of(&Local::now())
    }

    /// The date of `instant` as seen in its own time zone.
    pub fn of<Tz: TimeZone>(instant: &DateTime<Tz>) -> CalendarDate {
        CalendarDate(instant.date_naive())
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    pub fn add_days(self, days: i64) -> CalendarDate {
        CalendarDate(self.0 + Duration::days(days))
    }

    /// The number of days from `self` to `other`, negative if `other` is earlier.
    pub fn days_until(self, other: CalendarDate) -> i64 {
        other.0.signed_duration_since(self.0).num_days()
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate(date)
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = PuzzleError;

    /// Parses an ISO 8601 calendar date, `YYYY-MM-DD`.
    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let invalid = || PuzzleError::InvalidDate(text.to_string());
        let mut parts = text.trim().splitn(3, '-');
        let mut next_number = || -> Result<i64, PuzzleError> {
            parts
                .next()
                .filter(|part| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit()))
                .and_then(|part| part.parse().ok())
                .ok_or_else(|| invalid())
        };
        let year = next_number()?;
        let month = next_number()?;
        let day = next_number()?;
        let year = i32::try_from(year).map_err(|_| invalid())?;
        let month = u32::try_from(month).map_err(|_| invalid())?;
        let day = u32::try_from(day).map_err(|_| invalid())?;
        CalendarDate::new(year, month, day).map_err(|_| invalid())
    }
}

/// Releases one puzzle per day, starting with puzzle 0 on the start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DailySchedule {
    start: CalendarDate,
}

impl Default for DailySchedule {
    /// Puzzle 0 is released on 2026-02-01.
    fn default() -> Self {
        DailySchedule {
            start: CalendarDate(
                NaiveDate::from_ymd_opt(2026, 2, 1).expect("2026-02-01 is a valid date"),
            ),
        }
    }
}

impl DailySchedule {
    pub fn new(start: CalendarDate) -> DailySchedule {
        DailySchedule { start }
    }

    pub fn start(&self) -> CalendarDate {
        self.start
    }

    /// The puzzle released on `today`. Dates before the start map to puzzle 0.
    pub fn todays_index(&self, today: CalendarDate) -> usize {
        usize::try_from(self.start.days_until(today)).unwrap_or(0)
    }

    pub fn puzzle_date(&self, index: usize) -> CalendarDate {
        self.start.add_days(index as i64)
    }

    /// Returns `true` iff the puzzle has been released by `today`.
    pub fn is_accessible(&self, index: usize, today: CalendarDate) -> bool {
        self.puzzle_date(index) <= today
    }

    pub fn is_release_day(&self, index: usize, today: CalendarDate) -> bool {
        self.puzzle_date(index) == today
    }

    /// The puzzle released on `date`, if the book has one for that day.
    pub fn index_for_date(&self, date: CalendarDate, puzzle_count: usize) -> Option<usize> {
        usize::try_from(self.start.days_until(date))
            .ok()
            .filter(|index| *index < puzzle_count)
    }

    pub fn was_solved_on_release_day(&self, index: usize, solve_date: CalendarDate) -> bool {
        self.puzzle_date(index) == solve_date
    }
}
