#[macro_use]
extern crate assert_matches;

use crossed_wordle::*;

use chrono::{FixedOffset, Local, TimeZone, Utc};

fn date(text: &str) -> CalendarDate {
    text.parse().unwrap()
}

#[test]
fn calendar_date_parses_and_prints_iso() {
    let parsed = date("2026-02-09");

    assert_eq!(parsed.year(), 2026);
    assert_eq!(parsed.month(), 2);
    assert_eq!(parsed.day(), 9);
    assert_eq!(parsed.to_string(), "2026-02-09");
}

#[test]
fn calendar_date_rejects_bad_text() {
    for text in ["", "2026", "2026-02", "2026-02-30", "2026-2x-01", "-2026-02-01", "today"] {
        assert_matches!(
            text.parse::<CalendarDate>(),
            Err(PuzzleError::InvalidDate(_)),
            "{}",
            text
        );
    }
}

#[test]
fn calendar_date_uses_the_local_day() {
    // 20:00 on 2026-02-01 at UTC-5 is already 01:00 on 2026-02-02 in UTC.
    let evening = FixedOffset::west_opt(5 * 3600)
        .unwrap()
        .with_ymd_and_hms(2026, 2, 1, 20, 0, 0)
        .unwrap();
    let schedule = DailySchedule::default();

    let today = CalendarDate::of(&evening);

    assert_eq!(today, date("2026-02-01"));
    assert_eq!(CalendarDate::of(&evening.with_timezone(&Utc)), date("2026-02-02"));
    assert_eq!(schedule.todays_index(today), 0);
    assert!(!schedule.is_accessible(1, today));
    assert!(schedule.was_solved_on_release_day(0, today));
}

#[test]
fn today_matches_the_local_clock() {
    let before = Local::now().date_naive();
    let today = CalendarDate::today();
    let after = Local::now().date_naive();

    assert!(today == CalendarDate::from(before) || today == CalendarDate::from(after));
}

#[test]
fn calendar_date_day_arithmetic() {
    let start = date("2026-02-01");

    assert_eq!(start.add_days(28), date("2026-03-01"));
    assert_eq!(start.add_days(-1), date("2026-01-31"));
    assert_eq!(start.days_until(date("2027-02-01")), 365);
    assert_eq!(date("2027-02-01").days_until(start), -365);
}

#[test]
fn default_schedule_starts_on_first_of_february() {
    let schedule = DailySchedule::default();

    assert_eq!(schedule.start(), date("2026-02-01"));
    assert_eq!(schedule.puzzle_date(0), date("2026-02-01"));
    assert_eq!(schedule.puzzle_date(9), date("2026-02-10"));
}

#[test]
fn todays_index_counts_days_since_start() {
    let schedule = DailySchedule::default();

    assert_eq!(schedule.todays_index(date("2026-02-01")), 0);
    assert_eq!(schedule.todays_index(date("2026-03-03")), 30);
    assert_eq!(schedule.todays_index(date("2025-12-25")), 0);
}

#[test]
fn accessibility_follows_release_dates() {
    let schedule = DailySchedule::default();
    let today = date("2026-02-05");

    assert!(schedule.is_accessible(0, today));
    assert!(schedule.is_accessible(4, today));
    assert!(!schedule.is_accessible(5, today));
    assert!(schedule.is_release_day(4, today));
    assert!(!schedule.is_release_day(3, today));
}

#[test]
fn index_for_date_needs_a_puzzle() {
    let schedule = DailySchedule::new(date("2026-03-01"));

    assert_eq!(schedule.index_for_date(date("2026-03-01"), 10), Some(0));
    assert_eq!(schedule.index_for_date(date("2026-03-10"), 10), Some(9));
    assert_eq!(schedule.index_for_date(date("2026-03-11"), 10), None);
    assert_eq!(schedule.index_for_date(date("2026-02-28"), 10), None);
}

#[test]
fn solved_on_release_day_compares_dates() {
    let schedule = DailySchedule::default();

    assert!(schedule.was_solved_on_release_day(2, date("2026-02-03")));
    assert!(!schedule.was_solved_on_release_day(2, date("2026-02-04")));
}
