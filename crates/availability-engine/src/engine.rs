//! The analysis entry point: reads a selection's records, then builds and
//! aggregates per-date grids over a date range.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use tracing::{debug, info, warn};

use crate::aggregate::{aggregate, BestPeriods};
use crate::day::{build_date, DateAvailability, SelectionData};
use crate::error::Result;
use crate::meeting::Meeting;
use crate::store::{MeetingRecord, PersonId, RecordStore};
use crate::timetable::WeeklyTimetable;
use crate::weekday::school_days;

/// Who to analyze and over which inclusive date range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityRequest {
    pub people: Vec<PersonId>,
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// Output of one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RangeResult {
    /// The de-duplicated selection, in request order.
    pub people: Vec<PersonId>,
    /// One entry per non-rest date in the range, ascending.
    pub dates: Vec<DateAvailability>,
    #[serde(flatten)]
    pub best: BestPeriods,
}

impl RangeResult {
    pub fn empty(people: Vec<PersonId>) -> Self {
        RangeResult {
            people,
            dates: Vec::new(),
            best: BestPeriods::default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Analyze availability for `request.people` over `request.start..=request.end`.
///
/// An empty selection, an inverted range, or a range holding only rest days
/// yields [`RangeResult::empty`] without touching the store. Otherwise the
/// store is read in a fixed order (timetables, participant links, hosted
/// meetings, participant meetings) and nothing is built until every read has
/// succeeded. A failed read aborts the run with [`EngineError::Store`].
///
/// [`EngineError::Store`]: crate::error::EngineError::Store
#[tracing::instrument(
    skip_all,
    fields(people = request.people.len(), start = %request.start, end = %request.end)
)]
pub async fn analyze_availability<S>(store: &S, request: &AvailabilityRequest) -> Result<RangeResult>
where
    S: RecordStore + ?Sized,
{
    let people = distinct(&request.people);
    if people.is_empty() {
        info!("empty selection, nothing to analyze");
        return Ok(RangeResult::empty(people));
    }

    let days = school_days(request.start, request.end);
    if days.is_empty() {
        info!("no school days in range");
        return Ok(RangeResult::empty(people));
    }

    let data = load_selection(store, &people, request.start, request.end).await?;

    let dates: Vec<DateAvailability> = days
        .iter()
        .map(|&(date, _)| build_date(date, &people, &data))
        .collect();
    let best = aggregate(&dates, people.len());

    info!(
        dates = dates.len(),
        exact_common = best.exact_common.len(),
        fallback_best = best.fallback_best.len(),
        "availability analysis complete"
    );

    Ok(RangeResult {
        people,
        dates,
        best,
    })
}

fn distinct(people: &[PersonId]) -> Vec<PersonId> {
    let mut seen = HashSet::new();
    people
        .iter()
        .filter(|p| seen.insert(*p))
        .cloned()
        .collect()
}

async fn load_selection<S>(
    store: &S,
    people: &[PersonId],
    start: NaiveDate,
    end: NaiveDate,
) -> Result<SelectionData>
where
    S: RecordStore + ?Sized,
{
    let rows = store.timetables(people).await?;
    let links = store.participant_links(people).await?;
    let mut records = store.meetings_hosted_by(people, start, end).await?;

    let mut linked_ids: Vec<String> = Vec::new();
    for link in &links {
        if !linked_ids.contains(&link.meeting_id) {
            linked_ids.push(link.meeting_id.clone());
        }
    }
    if !linked_ids.is_empty() {
        records.extend(store.meetings_by_id(&linked_ids, start, end).await?);
    }

    let mut timetables = HashMap::new();
    for row in &rows {
        timetables.insert(row.person_id.clone(), WeeklyTimetable::from(row));
    }
    for person in people.iter().filter(|p| !timetables.contains_key(*p)) {
        debug!(%person, "no timetable row, assuming free");
    }

    let meetings = parse_meetings(&records);
    let mut by_person: HashMap<PersonId, Vec<Meeting>> =
        people.iter().map(|p| (p.clone(), Vec::new())).collect();

    for meeting in &meetings {
        if let Some(list) = by_person.get_mut(&meeting.host) {
            list.push(meeting.clone());
        }
    }
    for link in &links {
        let Some(meeting) = meetings.iter().find(|m| m.id == link.meeting_id) else {
            continue;
        };
        if let Some(list) = by_person.get_mut(&link.person_id) {
            if !list.iter().any(|m| m.id == meeting.id) {
                list.push(meeting.clone());
            }
        }
    }

    Ok(SelectionData {
        timetables,
        meetings: by_person,
    })
}

/// De-duplicate by id (first wins) and drop records that fail to parse.
fn parse_meetings(records: &[MeetingRecord]) -> Vec<Meeting> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert(r.id.as_str()))
        .filter_map(|r| match Meeting::try_from(r) {
            Ok(m) => Some(m),
            Err(e) => {
                warn!(meeting = %r.id, error = %e, "skipping malformed meeting");
                None
            }
        })
        .collect()
}
