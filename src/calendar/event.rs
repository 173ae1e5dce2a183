use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    pub status: EventStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventStatus {
    #[default]
    Pending,
    #[serde(rename = "In Progress")]
    InProgress,
    Complete,
}

impl EventStatus {
    pub fn label(self) -> &'static str {
        match self {
            EventStatus::Pending => "Pending",
            EventStatus::InProgress => "In Progress",
            EventStatus::Complete => "Complete",
        }
    }

    /// Next status in form-cycling order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            EventStatus::Pending => EventStatus::InProgress,
            EventStatus::InProgress => EventStatus::Complete,
            EventStatus::Complete => EventStatus::Pending,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            EventStatus::Pending => EventStatus::Complete,
            EventStatus::InProgress => EventStatus::Pending,
            EventStatus::Complete => EventStatus::InProgress,
        }
    }
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Event {
    /// End of the event, falling back to its start for open-ended events.
    pub fn effective_end(&self) -> NaiveDateTime {
        self.end.unwrap_or(self.start)
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.effective_end() - self.start).num_minutes()
    }

    /// True when the event's calendar span covers `date`.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        self.start.date() <= date && date <= self.effective_end().date()
    }

    pub fn has_valid_range(&self) -> bool {
        self.end.is_none_or(|end| end >= self.start)
    }
}
