use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::calendar::EventStatus;

/// Staging area for one event that has not been committed yet.
///
/// Every component is optional so a partially filled form can be held
/// without inventing values; `EventStore::commit` decides whether it is
/// complete enough to become an event.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub title: String,
    pub start_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_date: Option<NaiveDate>,
    pub end_time: Option<NaiveTime>,
    pub status: EventStatus,
}

impl Draft {
    /// Draft pre-filled from a selected range. A missing end mirrors the start.
    pub fn for_range(start: NaiveDateTime, end: Option<NaiveDateTime>) -> Self {
        let end = end.unwrap_or(start);
        Self {
            title: String::new(),
            start_date: Some(start.date()),
            start_time: Some(start.time()),
            end_date: Some(end.date()),
            end_time: Some(end.time()),
            status: EventStatus::Pending,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_status(mut self, status: EventStatus) -> Self {
        self.status = status;
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn start(&self) -> Option<NaiveDateTime> {
        Some(self.start_date?.and_time(self.start_time?))
    }

    pub fn end(&self) -> Option<NaiveDateTime> {
        Some(self.end_date?.and_time(self.end_time?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 2, 20)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn default_draft_is_empty_and_pending() {
        let draft = Draft::default();
        assert!(draft.is_empty());
        assert_eq!(draft.status, EventStatus::Pending);
    }

    #[test]
    fn missing_end_defaults_to_start() {
        let draft = Draft::for_range(at(9, 0), None);
        assert_eq!(draft.start(), Some(at(9, 0)));
        assert_eq!(draft.end(), Some(at(9, 0)));
        assert!(draft.title.is_empty());
    }

    #[test]
    fn explicit_end_is_kept() {
        let draft = Draft::for_range(at(9, 0), Some(at(9, 15)));
        assert_eq!(draft.end_time, NaiveTime::from_hms_opt(9, 15, 0));
    }

    #[test]
    fn combined_timestamp_requires_both_parts() {
        let mut draft = Draft::for_range(at(9, 0), None);
        draft.end_time = None;
        assert!(draft.start().is_some());
        assert!(draft.end().is_none());
    }

    #[test]
    fn clear_resets_every_field() {
        let mut draft = Draft::for_range(at(9, 0), None)
            .with_title("Standup")
            .with_status(EventStatus::Complete);

        draft.clear();

        assert!(draft.is_empty());
    }
}
