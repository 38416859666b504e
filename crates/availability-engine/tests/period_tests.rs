//! Tests for the period tables and the weekday resolver.

use availability_engine::period::{periods_for, Period, ABBREVIATED_PERIODS, STANDARD_PERIODS};
use availability_engine::weekday::{school_day, school_days, SchoolDay, REST_DAY};
use chrono::{NaiveDate, NaiveTime, Weekday};

fn date(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

fn t(h: u32, m: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, m, 0).unwrap()
}

#[test]
fn standard_table_matches_reference_times() {
    let expected = [
        (t(9, 0), t(9, 50)),
        (t(9, 50), t(10, 40)),
        (t(10, 50), t(11, 40)),
        (t(11, 40), t(12, 30)),
        (t(13, 20), t(14, 10)),
        (t(14, 20), t(15, 10)),
        (t(15, 10), t(16, 0)),
    ];
    let table = periods_for(Weekday::Mon);
    assert_eq!(table.len(), 7);
    for (i, slot) in table.iter().enumerate() {
        assert_eq!(slot.period.number() as usize, i + 1);
        assert_eq!((slot.start, slot.end), expected[i], "period {}", i + 1);
    }
}

#[test]
fn friday_differs_only_from_period_five() {
    let fri = periods_for(Weekday::Fri);
    assert_eq!(fri, &ABBREVIATED_PERIODS[..]);
    assert_eq!(&fri[..4], &STANDARD_PERIODS[..4]);
    assert_eq!((fri[4].start, fri[4].end), (t(13, 50), t(14, 30)));
    assert_eq!((fri[5].start, fri[5].end), (t(14, 40), t(15, 20)));
    assert_eq!((fri[6].start, fri[6].end), (t(15, 20), t(16, 0)));
}

#[test]
fn every_other_weekday_uses_standard_table() {
    for day in [Weekday::Mon, Weekday::Tue, Weekday::Wed, Weekday::Thu, Weekday::Sat, Weekday::Sun] {
        assert_eq!(periods_for(day), &STANDARD_PERIODS[..], "{day}");
    }
}

#[test]
fn period_rejects_out_of_range_numbers() {
    assert!(Period::new(0).is_none());
    assert!(Period::new(8).is_none());
    assert_eq!(Period::new(7).map(Period::index), Some(6));
    assert_eq!(Period::from_index(0), Period::new(1));
    assert!(Period::from_index(7).is_none());
}

#[test]
fn resolves_weekday_keys() {
    assert_eq!(school_day(date("2026-03-16")), Some(SchoolDay::Monday));
    assert_eq!(school_day(date("2026-03-20")), Some(SchoolDay::Friday));
    assert_eq!(school_day(date("2026-03-21")).map(SchoolDay::key), Some("saturday"));
}

#[test]
fn sunday_is_the_rest_day() {
    assert_eq!(REST_DAY, Weekday::Sun);
    assert_eq!(school_day(date("2026-03-22")), None);
    assert_eq!(SchoolDay::from_weekday(REST_DAY), None);
}

#[test]
fn every_school_day_round_trips_through_its_weekday() {
    for day in SchoolDay::ALL {
        assert_eq!(SchoolDay::from_weekday(day.weekday()), Some(day));
    }
}

#[test]
fn school_days_skip_sunday_inclusive_bounds() {
    let days = school_days(date("2026-03-20"), date("2026-03-23"));
    let dates: Vec<String> = days.iter().map(|(d, _)| d.to_string()).collect();
    assert_eq!(dates, ["2026-03-20", "2026-03-21", "2026-03-23"]);
}

#[test]
fn inverted_range_has_no_school_days() {
    assert!(school_days(date("2026-03-18"), date("2026-03-16")).is_empty());
}
