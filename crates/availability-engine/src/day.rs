//! Per-date availability: merges class and meeting busy sources into one grid.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::meeting::Meeting;
use crate::period::{periods_for, Period, PeriodSlot};
use crate::status::{BusySource, SlotStatus};
use crate::store::PersonId;
use crate::timetable::{busy_periods, WeeklyTimetable};
use crate::weekday::{school_day, SchoolDay};

static FREE: SlotStatus = SlotStatus::Free;

/// Everything read from the store for one selection, keyed by person.
#[derive(Debug, Clone, Default)]
pub struct SelectionData {
    pub timetables: HashMap<PersonId, WeeklyTimetable>,
    /// Each person's meetings in fetch order.
    pub meetings: HashMap<PersonId, Vec<Meeting>>,
}

/// The busy grid for one date.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DateAvailability {
    pub date: NaiveDate,
    /// `None` on the rest day, in which case there are no periods.
    pub day: Option<SchoolDay>,
    pub periods: Vec<PeriodSlot>,
    pub people_count: usize,
    /// Number of selected people free in each period.
    pub free_count: BTreeMap<Period, usize>,
    /// Busy people per period. A person absent from a period's map is free.
    pub details: BTreeMap<Period, BTreeMap<PersonId, SlotStatus>>,
}

impl DateAvailability {
    fn rest_day(date: NaiveDate, people_count: usize) -> Self {
        DateAvailability {
            date,
            day: None,
            periods: Vec::new(),
            people_count,
            free_count: BTreeMap::new(),
            details: BTreeMap::new(),
        }
    }

    pub fn status(&self, person: &PersonId, period: Period) -> &SlotStatus {
        self.details
            .get(&period)
            .and_then(|busy| busy.get(person))
            .unwrap_or(&FREE)
    }

    /// The person's busy set on this date.
    pub fn busy_periods(&self, person: &PersonId) -> BTreeSet<Period> {
        self.details
            .iter()
            .filter(|(_, busy)| busy.contains_key(person))
            .map(|(period, _)| *period)
            .collect()
    }

    /// True when `period` exists on this date and nobody selected is busy in it.
    pub fn is_free_for_all(&self, period: Period) -> bool {
        self.people_count > 0 && self.free_count.get(&period) == Some(&self.people_count)
    }
}

/// Build the availability grid for `date` over `people`.
///
/// Class entries are recorded first, then each meeting in the order it appears
/// in `data.meetings`; a second source on an occupied period upgrades it to
/// [`SlotStatus::Mixed`]. Every period of the day's table appears in
/// `free_count`, even when nobody is busy in it.
pub fn build_date(date: NaiveDate, people: &[PersonId], data: &SelectionData) -> DateAvailability {
    let Some(day) = school_day(date) else {
        return DateAvailability::rest_day(date, people.len());
    };
    let slots = periods_for(day.weekday());

    let mut details: BTreeMap<Period, BTreeMap<PersonId, SlotStatus>> = BTreeMap::new();
    let mut record = |period: Period, person: &PersonId, source: BusySource| {
        let entry = details
            .entry(period)
            .or_default()
            .entry(person.clone())
            .or_default();
        *entry = std::mem::take(entry).with(source);
    };

    for person in people {
        for (period, label) in busy_periods(data.timetables.get(person), day) {
            record(period, person, BusySource::Class { label });
        }

        let meetings = data.meetings.get(person).map(Vec::as_slice).unwrap_or_default();
        for meeting in meetings.iter().filter(|m| m.date == date) {
            for slot in slots.iter().filter(|s| meeting.overlaps_slot(date, s)) {
                record(slot.period, person, BusySource::Meeting(meeting.reference()));
            }
        }
    }

    let free_count = slots
        .iter()
        .map(|slot| {
            let busy = details.get(&slot.period);
            let free = people
                .iter()
                .filter(|p| busy.is_none_or(|b| !b.contains_key(*p)))
                .count();
            (slot.period, free)
        })
        .collect();

    tracing::debug!(%date, %day, people = people.len(), "built date availability");

    DateAvailability {
        date,
        day: Some(day),
        periods: slots.to_vec(),
        people_count: people.len(),
        free_count,
        details,
    }
}
