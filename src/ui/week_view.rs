use chrono::{Datelike, NaiveDate, Timelike};
use crate::app::AppState;
use crate::ui::month_view::is_weekend;
use crate::calendar::{Border, DisplayEvent, EventStatus, Fill};

#[derive(Debug, Clone, PartialEq)]
pub struct WeekLayout {
    pub week_start: NaiveDate,
    pub days: Vec<DayColumn>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayColumn {
    pub date: NaiveDate,
    pub is_selected: bool,
    pub is_today: bool,
    pub is_disabled: bool,
    pub slots: Vec<TimeSlot>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimeSlot {
    pub hour: u32,
    pub events: Vec<EventBlock>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventBlock {
    pub event_id: String,
    pub title: String,
    pub start_minute: u32,
    pub status: EventStatus,
    pub fill: Fill,
    pub border: Border,
}

impl WeekLayout {
    pub fn week_of_date(date: NaiveDate) -> NaiveDate {
        let days_from_monday = date.weekday().num_days_from_monday() as u64;
        date.checked_sub_days(chrono::Days::new(days_from_monday))
            .unwrap_or(date)
    }
}

pub fn calculate_layout(state: &AppState) -> WeekLayout {
    let week_start = WeekLayout::week_of_date(state.selected_date);

    let mut days = Vec::new();

    for day_offset in 0..7u64 {
        let Some(date) = week_start.checked_add_days(chrono::Days::new(day_offset)) else {
            continue;
        };
        if !state.show_weekends && is_weekend(date) {
            continue;
        }

        let events = state.display_events_on(date);

        days.push(DayColumn {
            date,
            is_selected: date == state.selected_date,
            is_today: date == state.today,
            is_disabled: state.is_disabled(date),
            slots: build_time_slots(date, &events, state),
        });
    }

    WeekLayout { week_start, days }
}

/// Buckets a day's events into the visible hours. Events that started on an
/// earlier day, or before the first visible hour, land in the first slot.
fn build_time_slots(date: NaiveDate, events: &[DisplayEvent], state: &AppState) -> Vec<TimeSlot> {
    let hours = state.visible_hours();
    let first = hours.start;
    let last = hours.end.saturating_sub(1);

    hours
        .map(|hour| {
            let events = events
                .iter()
                .filter(|e| {
                    let start_hour = if e.start.date() < date { first } else { e.start.hour() };
                    start_hour.clamp(first, last) == hour
                })
                .map(|e| EventBlock {
                    event_id: e.id.clone(),
                    title: e.title.clone(),
                    start_minute: e.start.minute(),
                    status: e.status,
                    fill: e.fill_color,
                    border: e.border_color,
                })
                .collect();
            TimeSlot { hour, events }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{Event, EventStore, WeekdayPolicy};
    use chrono::Weekday;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn create_event(id: &str, title: &str, day: NaiveDate, hour: u32, duration_hours: i64) -> Event {
        let start = day.and_hms_opt(hour, 0, 0).unwrap();
        Event {
            id: id.to_string(),
            title: title.to_string(),
            start,
            end: Some(start + chrono::Duration::hours(duration_hours)),
            status: EventStatus::InProgress,
        }
    }

    fn state_with(events: Vec<Event>) -> AppState {
        let mut state = AppState::new(date(2025, 1, 13));
        state.selected_date = date(2025, 1, 15);
        state.store = EventStore::seeded(WeekdayPolicy::default(), events).unwrap();
        state
    }

    #[test]
    fn week_of_date_returns_monday() {
        let monday = WeekLayout::week_of_date(date(2025, 1, 15));
        assert_eq!(monday, date(2025, 1, 13));
        assert_eq!(monday.weekday(), Weekday::Mon);
    }

    #[test]
    fn week_layout_has_seven_days_with_weekends() {
        let layout = calculate_layout(&state_with(vec![]));
        assert_eq!(layout.days.len(), 7);
    }

    #[test]
    fn hiding_weekends_drops_saturday_and_sunday() {
        let mut state = state_with(vec![]);
        state.show_weekends = false;

        let layout = calculate_layout(&state);

        assert_eq!(layout.days.len(), 5);
        assert!(layout.days.iter().all(|d| !is_weekend(d.date)));
    }

    #[test]
    fn slots_cover_only_visible_hours() {
        let layout = calculate_layout(&state_with(vec![]));
        let hours: Vec<_> = layout.days[0].slots.iter().map(|s| s.hour).collect();
        assert_eq!(hours, (8..20).collect::<Vec<_>>());
    }

    #[test]
    fn event_lands_in_its_hour_with_palette() {
        let state = state_with(vec![create_event("e1", "Review", date(2025, 1, 15), 14, 1)]);

        let layout = calculate_layout(&state);

        let wednesday = layout.days.iter().find(|d| d.date == date(2025, 1, 15)).unwrap();
        let slot = wednesday.slots.iter().find(|s| s.hour == 14).unwrap();
        assert_eq!(slot.events.len(), 1);
        assert_eq!(slot.events[0].title, "Review");
        assert_eq!(slot.events[0].fill, Fill::Attention);
        assert_eq!(slot.events[0].border, Border::Orange);
    }

    #[test]
    fn early_event_is_clamped_to_first_slot() {
        let state = state_with(vec![create_event("e1", "Gym", date(2025, 1, 14), 6, 1)]);

        let layout = calculate_layout(&state);

        let tuesday = layout.days.iter().find(|d| d.date == date(2025, 1, 14)).unwrap();
        assert_eq!(tuesday.slots[0].events.len(), 1);
    }

    #[test]
    fn multi_day_event_shows_on_each_day() {
        let state = state_with(vec![create_event("e1", "Workshop", date(2025, 1, 14), 14, 48)]);

        let layout = calculate_layout(&state);

        let days_with_event = layout
            .days
            .iter()
            .filter(|d| d.slots.iter().any(|s| !s.events.is_empty()))
            .count();
        assert_eq!(days_with_event, 3);
    }

    #[test]
    fn sunday_column_is_disabled() {
        let layout = calculate_layout(&state_with(vec![]));
        let disabled: Vec<_> = layout.days.iter().filter(|d| d.is_disabled).map(|d| d.date).collect();
        assert_eq!(disabled, vec![date(2025, 1, 19)]);
    }
}
