use chrono::{Datelike, NaiveDate, Weekday};
use crate::app::AppState;
use crate::calendar::DisplayEvent;

#[derive(Debug, Clone, PartialEq)]
pub struct MonthLayout {
    pub year: i32,
    pub month: u32,
    pub weeks: Vec<Week>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Week {
    pub days: Vec<DayCell>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_selected: bool,
    pub is_today: bool,
    pub is_disabled: bool,
    pub is_current_month: bool,
    pub events: Vec<DisplayEvent>,
}

impl DayCell {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            is_selected: false,
            is_today: false,
            is_disabled: false,
            is_current_month: true,
            events: Vec::new(),
        }
    }

    pub fn with_selected(mut self, selected: bool) -> Self {
        self.is_selected = selected;
        self
    }

    pub fn with_today(mut self, today: bool) -> Self {
        self.is_today = today;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.is_disabled = disabled;
        self
    }

    pub fn with_events(mut self, events: Vec<DisplayEvent>) -> Self {
        self.events = events;
        self
    }

    pub fn with_current_month(mut self, current_month: bool) -> Self {
        self.is_current_month = current_month;
        self
    }

    pub fn has_events(&self) -> bool {
        !self.events.is_empty()
    }
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Monday-first grid of the selected month. With weekends hidden every row
/// holds Monday to Friday only.
pub fn calculate_layout(state: &AppState) -> MonthLayout {
    let year = state.selected_date.year();
    let month = state.selected_date.month();

    let Some(first_day) = NaiveDate::from_ymd_opt(year, month, 1) else {
        return MonthLayout { year, month, weeks: Vec::new() };
    };
    let grid_start = first_day
        .checked_sub_days(chrono::Days::new(u64::from(first_day.weekday().num_days_from_monday())))
        .unwrap_or(first_day);

    let mut weeks = Vec::new();
    let mut current_week = Week { days: Vec::new() };
    let mut current_date = grid_start;

    loop {
        let in_month = current_date.month() == month && current_date.year() == year;
        if !in_month && current_date > first_day && current_date.weekday() == Weekday::Mon {
            break;
        }

        if state.show_weekends || !is_weekend(current_date) {
            let cell = DayCell::new(current_date)
                .with_selected(current_date == state.selected_date)
                .with_today(current_date == state.today)
                .with_disabled(state.is_disabled(current_date))
                .with_events(state.display_events_on(current_date))
                .with_current_month(in_month);
            current_week.days.push(cell);
        }

        if current_date.weekday() == Weekday::Sun {
            weeks.push(std::mem::replace(&mut current_week, Week { days: Vec::new() }));
        }

        let Some(next) = current_date.succ_opt() else { break };
        current_date = next;
    }

    if !current_week.days.is_empty() {
        weeks.push(current_week);
    }

    MonthLayout { year, month, weeks }
}
