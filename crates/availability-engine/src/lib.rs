//! # availability-engine
//!
//! Period-grid availability analysis for staff with weekly class timetables
//! and ad-hoc meetings.
//!
//! Given a selection of people and a date range, the engine works out which
//! teaching periods each person is busy in on each date (from their timetable,
//! their meetings, or both), then finds the periods free for everyone on every
//! date, falling back to the periods free on the most dates.
//!
//! ## Modules
//!
//! - [`period`] — Fixed period time tables (standard and abbreviated)
//! - [`weekday`] — Date → school day, rest-day exclusion
//! - [`timetable`] — Weekly timetables and class busy sets
//! - [`meeting`] — Validated meetings and the strict overlap rule
//! - [`status`] — Tagged per-period busy state
//! - [`day`] — Per-date availability grid
//! - [`aggregate`] — Cross-date exact/fallback period search
//! - [`store`] — Record-store port and in-memory backend
//! - [`engine`] — `analyze_availability` entry point
//! - [`error`] — Error types

pub mod aggregate;
pub mod day;
pub mod engine;
pub mod error;
pub mod meeting;
pub mod period;
pub mod status;
pub mod store;
pub mod timetable;
pub mod weekday;

pub use aggregate::{aggregate, BestPeriods};
pub use day::{build_date, DateAvailability, SelectionData};
pub use engine::{analyze_availability, AvailabilityRequest, RangeResult};
pub use error::{EngineError, StoreError};
pub use meeting::{overlaps, Meeting, MeetingRef};
pub use period::{periods_for, Period, PeriodSlot};
pub use status::{BusySource, SlotStatus};
pub use store::{Dataset, MemoryStore, Person, PersonId, RecordStore};
pub use timetable::{busy_periods, WeeklyTimetable};
pub use weekday::{school_day, school_days, SchoolDay};
