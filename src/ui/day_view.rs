use chrono::{NaiveDate, Timelike};
use crate::app::AppState;
use crate::calendar::{DisplayEvent, EventStatus, Fill, Border};

#[derive(Debug, Clone, PartialEq)]
pub struct DayLayout {
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_disabled: bool,
    pub hours: Vec<HourBlock>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HourBlock {
    pub hour: u32,
    pub events: Vec<EventEntry>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventEntry {
    pub event_id: String,
    pub title: String,
    pub start_minute: u32,
    pub duration_minutes: i64,
    pub status: EventStatus,
    pub fill: Fill,
    pub border: Border,
}

pub fn calculate_layout(state: &AppState) -> DayLayout {
    let date = state.selected_date;
    let events = state.display_events_on(date);

    DayLayout {
        date,
        is_today: date == state.today,
        is_disabled: state.is_disabled(date),
        hours: build_hour_blocks(date, &events, state),
    }
}

fn build_hour_blocks(date: NaiveDate, events: &[DisplayEvent], state: &AppState) -> Vec<HourBlock> {
    let hours = state.visible_hours();
    let first = hours.start;
    let last = hours.end.saturating_sub(1);

    let mut blocks = Vec::new();

    for hour in hours {
        let hour_events: Vec<EventEntry> = events
            .iter()
            .filter(|e| {
                let start_hour = if e.start.date() < date { first } else { e.start.hour() };
                start_hour.clamp(first, last) == hour
            })
            .map(|e| EventEntry {
                event_id: e.id.clone(),
                title: e.title.clone(),
                start_minute: e.start.minute(),
                duration_minutes: e.end.map_or(0, |end| (end - e.start).num_minutes()),
                status: e.status,
                fill: e.fill_color,
                border: e.border_color,
            })
            .collect();

        blocks.push(HourBlock {
            hour,
            events: hour_events,
        });
    }

    blocks
}
