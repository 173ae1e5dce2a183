use chrono::NaiveDateTime;
use serde::Serialize;

use crate::calendar::{Event, EventStatus};

/// Block fill for an event. Pending and InProgress share the attention fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Fill {
    #[serde(rename = "#2ecc71")]
    Success,
    #[serde(rename = "#e74c3c")]
    Attention,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Border {
    Green,
    Orange,
    Red,
}

impl Fill {
    pub fn for_status(status: EventStatus) -> Self {
        match status {
            EventStatus::Complete => Fill::Success,
            EventStatus::Pending | EventStatus::InProgress => Fill::Attention,
        }
    }
}

impl Border {
    pub fn for_status(status: EventStatus) -> Self {
        match status {
            EventStatus::Complete => Border::Green,
            EventStatus::InProgress => Border::Orange,
            EventStatus::Pending => Border::Red,
        }
    }
}

/// Render-ready view of one event. Built fresh for every frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayEvent {
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: Option<NaiveDateTime>,
    pub status: EventStatus,
    pub fill_color: Fill,
    pub border_color: Border,
}

impl From<&Event> for DisplayEvent {
    fn from(event: &Event) -> Self {
        Self {
            id: event.id.clone(),
            title: event.title.clone(),
            start: event.start,
            end: event.end,
            status: event.status,
            fill_color: Fill::for_status(event.status),
            border_color: Border::for_status(event.status),
        }
    }
}

pub fn display_model<'a>(events: impl IntoIterator<Item = &'a Event>) -> Vec<DisplayEvent> {
    events.into_iter().map(DisplayEvent::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pretty_assertions::assert_eq;

    fn meeting(status: EventStatus) -> Event {
        let day = NaiveDate::from_ymd_opt(2025, 2, 18).unwrap();
        Event {
            id: "1".to_string(),
            title: "Meeting".to_string(),
            start: day.and_hms_opt(10, 0, 0).unwrap(),
            end: day.and_hms_opt(12, 0, 0),
            status,
        }
    }

    #[test]
    fn complete_gets_success_fill_and_green_border() {
        let display = DisplayEvent::from(&meeting(EventStatus::Complete));
        assert_eq!(display.fill_color, Fill::Success);
        assert_eq!(display.border_color, Border::Green);
    }

    #[test]
    fn pending_and_in_progress_share_fill_but_not_border() {
        let pending = DisplayEvent::from(&meeting(EventStatus::Pending));
        let in_progress = DisplayEvent::from(&meeting(EventStatus::InProgress));

        assert_eq!(pending.fill_color, Fill::Attention);
        assert_eq!(in_progress.fill_color, Fill::Attention);
        assert_eq!(pending.border_color, Border::Red);
        assert_eq!(in_progress.border_color, Border::Orange);
    }

    #[test]
    fn display_event_serializes_for_calendar_widgets() {
        let display = DisplayEvent::from(&meeting(EventStatus::InProgress));

        let json = serde_json::to_value(&display).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "1",
                "title": "Meeting",
                "start": "2025-02-18T10:00:00",
                "end": "2025-02-18T12:00:00",
                "status": "In Progress",
                "fillColor": "#e74c3c",
                "borderColor": "orange",
            })
        );
    }

    #[test]
    fn fills_serialize_as_hex_strings() {
        assert_eq!(serde_json::to_string(&Fill::Success).unwrap(), "\"#2ecc71\"");
        assert_eq!(serde_json::to_string(&Fill::Attention).unwrap(), "\"#e74c3c\"");
    }

    #[test]
    fn display_model_keeps_collection_order() {
        let mut second = meeting(EventStatus::Complete);
        second.id = "2".to_string();
        let events = vec![meeting(EventStatus::Pending), second];

        let model = display_model(&events);

        let ids: Vec<_> = model.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "2"]);
    }
}
