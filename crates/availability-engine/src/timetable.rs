//! Weekly class timetables and the per-day busy-set extractor.

use std::collections::BTreeMap;

use crate::period::Period;
use crate::store::TimetableRecord;
use crate::weekday::SchoolDay;

/// A person's recurring weekly classes, keyed by `(day, period)`.
///
/// Only occupied slots are stored, so a label is never blank.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyTimetable {
    slots: BTreeMap<(SchoolDay, Period), String>,
}

impl WeeklyTimetable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`WeeklyTimetable::set`].
    pub fn with(mut self, day: SchoolDay, period: Period, label: impl Into<String>) -> Self {
        self.set(day, period, label);
        self
    }

    /// Occupy a slot. A label that is blank after trimming clears the slot instead.
    pub fn set(&mut self, day: SchoolDay, period: Period, label: impl Into<String>) {
        let label = label.into();
        if label.trim().is_empty() {
            self.slots.remove(&(day, period));
        } else {
            self.slots.insert((day, period), label);
        }
    }

    pub fn label(&self, day: SchoolDay, period: Period) -> Option<&str> {
        self.slots.get(&(day, period)).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl From<&TimetableRecord> for WeeklyTimetable {
    /// Array position `i` maps to period `i + 1`; entries past the seventh are ignored.
    fn from(record: &TimetableRecord) -> Self {
        let mut timetable = WeeklyTimetable::new();
        for day in SchoolDay::ALL {
            let Some(column) = record.column(day) else {
                continue;
            };
            for (index, cell) in column.iter().enumerate().take(Period::COUNT) {
                if let (Some(period), Some(label)) = (Period::from_index(index), cell) {
                    timetable.set(day, period, label.as_str());
                }
            }
        }
        timetable
    }
}

/// Periods occupied by classes on `day`, with their labels verbatim.
///
/// A person with no timetable at all is assumed free.
pub fn busy_periods(timetable: Option<&WeeklyTimetable>, day: SchoolDay) -> BTreeMap<Period, String> {
    let Some(timetable) = timetable else {
        return BTreeMap::new();
    };
    Period::ALL
        .iter()
        .filter_map(|&p| timetable.label(day, p).map(|l| (p, l.to_string())))
        .collect()
}
