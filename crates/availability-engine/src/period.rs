//! Fixed teaching-period tables.
//!
//! Every school day has seven periods. Friday runs an abbreviated afternoon, so
//! periods 5..=7 start and end earlier there; the morning is identical.

use chrono::{NaiveTime, Weekday};
use serde::Serialize;
use std::fmt;

/// A teaching period number, always within `1..=7`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Period(u8);

impl Period {
    pub const COUNT: usize = 7;

    /// Every period in ascending order.
    pub const ALL: [Period; Period::COUNT] = [
        Period(1),
        Period(2),
        Period(3),
        Period(4),
        Period(5),
        Period(6),
        Period(7),
    ];

    /// Returns `None` outside `1..=7`.
    pub fn new(number: u8) -> Option<Self> {
        (1..=Self::COUNT as u8).contains(&number).then_some(Period(number))
    }

    /// Build from a 0-based storage position (timetable array index).
    pub fn from_index(index: usize) -> Option<Self> {
        index
            .checked_add(1)
            .and_then(|n| u8::try_from(n).ok())
            .and_then(Self::new)
    }

    pub fn number(self) -> u8 {
        self.0
    }

    /// 0-based position in stored per-day slot arrays.
    pub fn index(self) -> usize {
        usize::from(self.0 - 1)
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.0)
    }
}

/// One period with its local wall-clock bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodSlot {
    pub period: Period,
    pub start: NaiveTime,
    pub end: NaiveTime,
}

const fn hm(hour: u32, minute: u32) -> NaiveTime {
    match NaiveTime::from_hms_opt(hour, minute, 0) {
        Some(t) => t,
        None => panic!("period table holds an invalid time"),
    }
}

const fn slot(period: u8, start: NaiveTime, end: NaiveTime) -> PeriodSlot {
    PeriodSlot {
        period: Period(period),
        start,
        end,
    }
}

/// Monday to Thursday and Saturday.
pub static STANDARD_PERIODS: [PeriodSlot; Period::COUNT] = [
    slot(1, hm(9, 0), hm(9, 50)),
    slot(2, hm(9, 50), hm(10, 40)),
    slot(3, hm(10, 50), hm(11, 40)),
    slot(4, hm(11, 40), hm(12, 30)),
    slot(5, hm(13, 20), hm(14, 10)),
    slot(6, hm(14, 20), hm(15, 10)),
    slot(7, hm(15, 10), hm(16, 0)),
];

/// Friday.
pub static ABBREVIATED_PERIODS: [PeriodSlot; Period::COUNT] = [
    slot(1, hm(9, 0), hm(9, 50)),
    slot(2, hm(9, 50), hm(10, 40)),
    slot(3, hm(10, 50), hm(11, 40)),
    slot(4, hm(11, 40), hm(12, 30)),
    slot(5, hm(13, 50), hm(14, 30)),
    slot(6, hm(14, 40), hm(15, 20)),
    slot(7, hm(15, 20), hm(16, 0)),
];

/// The weekday that runs the abbreviated pattern.
pub const ABBREVIATED_DAY: Weekday = Weekday::Fri;

/// Period table for a weekday, ordered by period number.
///
/// Sunday falls back to the standard table; callers exclude the rest day
/// themselves via [`crate::weekday::school_day`].
pub fn periods_for(day: Weekday) -> &'static [PeriodSlot] {
    if day == ABBREVIATED_DAY {
        &ABBREVIATED_PERIODS
    } else {
        &STANDARD_PERIODS
    }
}
