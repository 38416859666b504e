//! Tests for the cross-date aggregator.

use availability_engine::aggregate::aggregate;
use availability_engine::day::{build_date, DateAvailability, SelectionData};
use availability_engine::period::Period;
use availability_engine::store::PersonId;
use availability_engine::timetable::WeeklyTimetable;
use availability_engine::weekday::SchoolDay;
use chrono::NaiveDate;

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn p(n: u8) -> Period {
    Period::new(n).unwrap()
}

fn periods(ns: &[u8]) -> Vec<Period> {
    ns.iter().map(|&n| p(n)).collect()
}

fn build(dates: &[&str], people: &[PersonId], data: &SelectionData) -> Vec<DateAvailability> {
    dates.iter().map(|d| build_date(date(d), people, data)).collect()
}

fn people() -> Vec<PersonId> {
    vec![PersonId::from("a"), PersonId::from("b")]
}

#[test]
fn everything_free_is_exact_common() {
    let days = build(&["2026-03-16", "2026-03-17"], &people(), &SelectionData::default());
    let best = aggregate(&days, 2);

    assert_eq!(best.exact_common, periods(&[1, 2, 3, 4, 5, 6, 7]));
    assert_eq!(best.fallback_best, best.exact_common);
    assert!(best.free_dates.values().all(|&n| n == 2));
}

#[test]
fn period_busy_on_one_day_drops_to_fallback() {
    // b teaches every period on Monday except 4, and every period on Tuesday.
    let mut tt = WeeklyTimetable::new();
    for n in [1, 2, 3, 5, 6, 7] {
        tt.set(SchoolDay::Monday, p(n), "Class");
    }
    for n in 1..=7 {
        tt.set(SchoolDay::Tuesday, p(n), "Class");
    }
    let mut data = SelectionData::default();
    data.timetables.insert(PersonId::from("b"), tt);

    let days = build(&["2026-03-16", "2026-03-17"], &people(), &data);
    let best = aggregate(&days, 2);

    assert!(best.exact_common.is_empty());
    assert_eq!(best.fallback_best, periods(&[4]));
    assert_eq!(best.free_dates[&p(4)], 1);
}

#[test]
fn fallback_returns_all_ties() {
    let mut tt = WeeklyTimetable::new();
    for n in 1..=7 {
        tt.set(SchoolDay::Monday, p(n), "Class");
    }
    tt.set(SchoolDay::Tuesday, p(1), "Class");
    tt.set(SchoolDay::Tuesday, p(2), "Class");
    let mut data = SelectionData::default();
    data.timetables.insert(PersonId::from("a"), tt);

    let days = build(&["2026-03-16", "2026-03-17"], &people(), &data);
    let best = aggregate(&days, 2);

    assert!(best.exact_common.is_empty());
    assert_eq!(best.fallback_best, periods(&[3, 4, 5, 6, 7]));
}

#[test]
fn never_free_returns_every_period_as_fallback() {
    let mut tt = WeeklyTimetable::new();
    for n in 1..=7 {
        tt.set(SchoolDay::Monday, p(n), "Class");
    }
    let mut data = SelectionData::default();
    data.timetables.insert(PersonId::from("a"), tt);

    let days = build(&["2026-03-16"], &people(), &data);
    let best = aggregate(&days, 2);

    assert!(best.exact_common.is_empty());
    assert_eq!(best.fallback_best, periods(&[1, 2, 3, 4, 5, 6, 7]));
    assert!(best.free_dates.values().all(|&n| n == 0));
}

#[test]
fn single_person_fully_booked_ties_all_periods() {
    let mut tt = WeeklyTimetable::new();
    for n in 1..=7 {
        tt.set(SchoolDay::Monday, p(n), "Class");
    }
    let mut data = SelectionData::default();
    data.timetables.insert(PersonId::from("a"), tt);

    let days = build(&["2026-03-16"], &[PersonId::from("a")], &data);
    let best = aggregate(&days, 1);

    assert_eq!(best.fallback_best.len(), 7);
}

#[test]
fn zero_people_is_an_explicit_empty_result() {
    let days = build(&["2026-03-16"], &[], &SelectionData::default());
    let best = aggregate(&days, 0);

    assert!(best.exact_common.is_empty());
    assert!(best.fallback_best.is_empty());
    assert!(best.free_dates.is_empty());
}

#[test]
fn rest_day_entries_do_not_count() {
    let days = build(&["2026-03-21", "2026-03-22"], &people(), &SelectionData::default());
    let best = aggregate(&days, 2);

    assert_eq!(best.exact_common.len(), 7);
    assert!(best.free_dates.values().all(|&n| n == 1));

    let only_rest = build(&["2026-03-22"], &people(), &SelectionData::default());
    assert!(aggregate(&only_rest, 2).exact_common.is_empty());
}

#[test]
fn periods_compare_by_number_across_day_patterns() {
    // Friday and Monday have different period-5 times; both free counts as 2 dates.
    let days = build(&["2026-03-16", "2026-03-20"], &people(), &SelectionData::default());
    let best = aggregate(&days, 2);

    assert_eq!(best.free_dates[&p(5)], 2);
    assert!(best.exact_common.contains(&p(5)));
}
