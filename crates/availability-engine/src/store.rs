//! Record-store port and raw record shapes.
//!
//! The engine never writes. It reads people, timetable rows, meetings and
//! participant links through [`RecordStore`], an outbound port implemented by
//! whatever backend hosts the data. [`MemoryStore`] is the in-process backend
//! used by the CLI and the tests.

use async_trait::async_trait;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::error::StoreError;
use crate::weekday::SchoolDay;

/// Opaque person identifier as issued by the record store.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub String);

impl From<&str> for PersonId {
    fn from(s: &str) -> Self {
        PersonId(s.to_string())
    }
}

impl From<String> for PersonId {
    fn from(s: String) -> Self {
        PersonId(s)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    #[serde(default, alias = "dept")]
    pub department: String,
    #[serde(default)]
    pub designation: Option<String>,
}

/// One stored timetable row: up to seven optional labels per school day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimetableRecord {
    pub person_id: PersonId,
    #[serde(default)]
    pub monday: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub tuesday: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub wednesday: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub thursday: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub friday: Option<Vec<Option<String>>>,
    #[serde(default)]
    pub saturday: Option<Vec<Option<String>>>,
}

impl TimetableRecord {
    pub fn column(&self, day: SchoolDay) -> Option<&[Option<String>]> {
        let col = match day {
            SchoolDay::Monday => &self.monday,
            SchoolDay::Tuesday => &self.tuesday,
            SchoolDay::Wednesday => &self.wednesday,
            SchoolDay::Thursday => &self.thursday,
            SchoolDay::Friday => &self.friday,
            SchoolDay::Saturday => &self.saturday,
        };
        col.as_deref()
    }
}

/// A meeting exactly as stored. Date and times are unvalidated text; see
/// [`crate::meeting::Meeting`] for the parsed form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingRecord {
    pub id: String,
    pub host_person_id: PersonId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub location: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParticipantLink {
    pub meeting_id: String,
    pub person_id: PersonId,
}

/// Read-only access to the hosted records. Date bounds are inclusive.
#[async_trait]
pub trait RecordStore: Send + Sync {
    async fn people(&self) -> Result<Vec<Person>, StoreError>;

    /// Timetable rows for the given people. People without a row are simply absent.
    async fn timetables(&self, people: &[PersonId]) -> Result<Vec<TimetableRecord>, StoreError>;

    /// Participant links whose `person_id` is in `people`.
    async fn participant_links(
        &self,
        people: &[PersonId],
    ) -> Result<Vec<ParticipantLink>, StoreError>;

    /// Meetings hosted by any of `hosts` dated within `start..=end`.
    async fn meetings_hosted_by(
        &self,
        hosts: &[PersonId],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<MeetingRecord>, StoreError>;

    /// Meetings with an id in `ids` dated within `start..=end`.
    async fn meetings_by_id(
        &self,
        ids: &[String],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<MeetingRecord>, StoreError>;
}

/// Every record a [`MemoryStore`] serves.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub people: Vec<Person>,
    #[serde(default)]
    pub timetables: Vec<TimetableRecord>,
    #[serde(default)]
    pub meetings: Vec<MeetingRecord>,
    #[serde(default)]
    pub participants: Vec<ParticipantLink>,
}

impl Dataset {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// In-memory [`RecordStore`] over a [`Dataset`].
///
/// Meeting dates are compared as ISO-8601 text, the same way the hosted store
/// filters its `date` column, so a malformed date never matches a range.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    data: Dataset,
}

impl MemoryStore {
    pub fn new(data: Dataset) -> Self {
        Self { data }
    }
}

fn within(date: &str, start: NaiveDate, end: NaiveDate) -> bool {
    let (start, end) = (start.to_string(), end.to_string());
    date >= start.as_str() && date <= end.as_str()
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn people(&self) -> Result<Vec<Person>, StoreError> {
        Ok(self.data.people.clone())
    }

    async fn timetables(&self, people: &[PersonId]) -> Result<Vec<TimetableRecord>, StoreError> {
        let wanted: HashSet<&PersonId> = people.iter().collect();
        Ok(self
            .data
            .timetables
            .iter()
            .filter(|t| wanted.contains(&t.person_id))
            .cloned()
            .collect())
    }

    async fn participant_links(
        &self,
        people: &[PersonId],
    ) -> Result<Vec<ParticipantLink>, StoreError> {
        let wanted: HashSet<&PersonId> = people.iter().collect();
        Ok(self
            .data
            .participants
            .iter()
            .filter(|l| wanted.contains(&l.person_id))
            .cloned()
            .collect())
    }

    async fn meetings_hosted_by(
        &self,
        hosts: &[PersonId],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<MeetingRecord>, StoreError> {
        let wanted: HashSet<&PersonId> = hosts.iter().collect();
        Ok(self
            .data
            .meetings
            .iter()
            .filter(|m| wanted.contains(&m.host_person_id) && within(&m.date, start, end))
            .cloned()
            .collect())
    }

    async fn meetings_by_id(
        &self,
        ids: &[String],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<MeetingRecord>, StoreError> {
        let wanted: HashSet<&str> = ids.iter().map(String::as_str).collect();
        Ok(self
            .data
            .meetings
            .iter()
            .filter(|m| wanted.contains(m.id.as_str()) && within(&m.date, start, end))
            .cloned()
            .collect())
    }
}
