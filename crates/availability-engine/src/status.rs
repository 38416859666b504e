//! Per-person, per-period busy state.

use serde::Serialize;

use crate::meeting::MeetingRef;

/// One reason a person is occupied during a period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BusySource {
    Class { label: String },
    Meeting(MeetingRef),
}

/// What a person is doing during one period on one date.
///
/// `Mixed` always holds at least two sources, in the order they were found:
/// the class first, then meetings in fetch order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SlotStatus {
    #[default]
    Free,
    Class {
        label: String,
    },
    Meeting {
        meeting: MeetingRef,
    },
    Mixed {
        sources: Vec<BusySource>,
    },
}

impl SlotStatus {
    pub fn is_busy(&self) -> bool {
        !matches!(self, SlotStatus::Free)
    }

    /// Add a source. An already-busy slot becomes `Mixed`, keeping every prior detail.
    pub fn with(self, source: BusySource) -> SlotStatus {
        match self {
            SlotStatus::Free => match source {
                BusySource::Class { label } => SlotStatus::Class { label },
                BusySource::Meeting(meeting) => SlotStatus::Meeting { meeting },
            },
            SlotStatus::Mixed { mut sources } => {
                sources.push(source);
                SlotStatus::Mixed { sources }
            }
            single => {
                let mut sources = single.into_sources();
                sources.push(source);
                SlotStatus::Mixed { sources }
            }
        }
    }

    /// Underlying sources in accumulation order. Empty for `Free`.
    pub fn sources(&self) -> Vec<BusySource> {
        self.clone().into_sources()
    }

    fn into_sources(self) -> Vec<BusySource> {
        match self {
            SlotStatus::Free => Vec::new(),
            SlotStatus::Class { label } => vec![BusySource::Class { label }],
            SlotStatus::Meeting { meeting } => vec![BusySource::Meeting(meeting)],
            SlotStatus::Mixed { sources } => sources,
        }
    }
}
