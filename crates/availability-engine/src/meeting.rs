//! Validated meetings and the meeting/period overlap rule.
//!
//! Raw meeting rows carry their date and times as text. They are parsed once,
//! at the boundary, into [`Meeting`]; nothing downstream sees unparsed times.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::error::{EngineError, Result};
use crate::period::PeriodSlot;
use crate::store::{MeetingRecord, PersonId};

/// Parse a local time of day, `HH:MM:SS` or `HH:MM`.
pub fn parse_time(s: &str) -> Result<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M"))
        .map_err(|_| EngineError::InvalidTime(s.to_string()))
}

/// Parse an ISO calendar date, `YYYY-MM-DD`.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| EngineError::InvalidDate(s.to_string()))
}

/// Two intervals overlap iff `meeting_start < period_end && meeting_end > period_start`.
///
/// Touching endpoints do not overlap: a meeting ending exactly when a period
/// starts, or starting exactly when it ends, leaves that period free.
pub fn overlaps(
    meeting_start: NaiveDateTime,
    meeting_end: NaiveDateTime,
    period_start: NaiveDateTime,
    period_end: NaiveDateTime,
) -> bool {
    meeting_start < period_end && meeting_end > period_start
}

/// The part of a meeting that busy-period details expose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeetingRef {
    pub id: String,
    pub title: String,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: Option<String>,
}

/// A meeting with a parsed, same-day time window.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Meeting {
    pub id: String,
    pub host: PersonId,
    pub title: String,
    pub date: NaiveDate,
    pub start: NaiveTime,
    pub end: NaiveTime,
    pub location: Option<String>,
}

impl Meeting {
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.start)
    }

    pub fn ends_at(&self) -> NaiveDateTime {
        self.date.and_time(self.end)
    }

    /// Whether this meeting occupies `slot` on `date`. Meetings on other dates never do.
    pub fn overlaps_slot(&self, date: NaiveDate, slot: &PeriodSlot) -> bool {
        self.date == date
            && overlaps(
                self.starts_at(),
                self.ends_at(),
                date.and_time(slot.start),
                date.and_time(slot.end),
            )
    }

    pub fn reference(&self) -> MeetingRef {
        MeetingRef {
            id: self.id.clone(),
            title: self.title.clone(),
            start_time: self.start,
            end_time: self.end,
            location: self.location.clone(),
        }
    }
}

impl TryFrom<&MeetingRecord> for Meeting {
    type Error = EngineError;

    fn try_from(record: &MeetingRecord) -> Result<Self> {
        let invalid = |reason: String| EngineError::InvalidMeeting {
            id: record.id.clone(),
            reason,
        };
        let date = parse_date(&record.date).map_err(|e| invalid(e.to_string()))?;
        let start = parse_time(&record.start_time).map_err(|e| invalid(e.to_string()))?;
        let end = parse_time(&record.end_time).map_err(|e| invalid(e.to_string()))?;
        if end < start {
            return Err(invalid(format!("ends at {end} before it starts at {start}")));
        }
        Ok(Meeting {
            id: record.id.clone(),
            host: record.host_person_id.clone(),
            title: record.title.clone(),
            date,
            start,
            end,
            location: record.location.clone(),
        })
    }
}
