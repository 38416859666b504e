//! Calendar date → school-day resolution.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The weekday with no teaching periods.
pub const REST_DAY: Weekday = Weekday::Sun;

/// A weekday that has a period table and a timetable column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchoolDay {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl SchoolDay {
    pub const ALL: [SchoolDay; 6] = [
        SchoolDay::Monday,
        SchoolDay::Tuesday,
        SchoolDay::Wednesday,
        SchoolDay::Thursday,
        SchoolDay::Friday,
        SchoolDay::Saturday,
    ];

    /// Lowercase key used by stored timetable rows.
    pub fn key(self) -> &'static str {
        match self {
            SchoolDay::Monday => "monday",
            SchoolDay::Tuesday => "tuesday",
            SchoolDay::Wednesday => "wednesday",
            SchoolDay::Thursday => "thursday",
            SchoolDay::Friday => "friday",
            SchoolDay::Saturday => "saturday",
        }
    }

    pub fn weekday(self) -> Weekday {
        match self {
            SchoolDay::Monday => Weekday::Mon,
            SchoolDay::Tuesday => Weekday::Tue,
            SchoolDay::Wednesday => Weekday::Wed,
            SchoolDay::Thursday => Weekday::Thu,
            SchoolDay::Friday => Weekday::Fri,
            SchoolDay::Saturday => Weekday::Sat,
        }
    }

    /// `None` for the rest day.
    pub fn from_weekday(day: Weekday) -> Option<Self> {
        if day == REST_DAY {
            return None;
        }
        SchoolDay::ALL.into_iter().find(|sd| sd.weekday() == day)
    }
}

impl fmt::Display for SchoolDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Resolve a date to its school day, or `None` on the rest day.
pub fn school_day(date: NaiveDate) -> Option<SchoolDay> {
    SchoolDay::from_weekday(date.weekday())
}

/// Every non-rest date in `start..=end`, ascending. Empty when `start > end`.
pub fn school_days(start: NaiveDate, end: NaiveDate) -> Vec<(NaiveDate, SchoolDay)> {
    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter_map(|d| school_day(d).map(|sd| (d, sd)))
        .collect()
}
