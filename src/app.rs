use std::ops::Range;

use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

use crate::calendar::{DisplayEvent, Draft, Event, EventStore, StoreError, WeekdayPolicy};
use crate::storage::config::{Config, ConfigError};
use crate::ui::theme::Theme;

#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    Normal,
    Insert,
    Visual,
    Command,
    Move,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewType {
    Month,
    Week,
    Day,
}

impl ViewType {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "month" => Some(ViewType::Month),
            "week" => Some(ViewType::Week),
            "day" => Some(ViewType::Day),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ViewType::Month => "Month",
            ViewType::Week => "Week",
            ViewType::Day => "Day",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// One-line message shown to the user, replaced by the next one.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }
}

/// An event being dragged to another day. The store is untouched until
/// the move is finished.
#[derive(Debug, Clone, PartialEq)]
pub struct MovePreview {
    pub event_id: String,
    pub offset_days: i64,
}

pub struct AppState {
    pub mode: Mode,
    pub view: ViewType,
    pub selected_date: NaiveDate,
    pub today: NaiveDate,
    pub store: EventStore,
    pub command_buffer: String,
    pub show_help: bool,
    pub help_scroll: usize,
    pub theme: Theme,
    pub event_form: Option<EventForm>,
    pub selected_event_index: usize,
    pub delete_confirmation_event_id: Option<String>,
    pub move_preview: Option<MovePreview>,
    pub visual_selection_start: Option<NaiveDate>,
    pub notice: Option<Notice>,
    pub show_weekends: bool,
    pub slot_min_hour: u32,
    pub slot_max_hour: u32,
    pub date_format: String,
}

#[derive(Debug, Clone)]
pub struct EventForm {
    pub draft: Draft,
    pub active_field: FormField,
    pub start_date_input: String,
    pub start_time_input: String,
    pub end_date_input: String,
    pub end_time_input: String,
    pub input_touched: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FormField {
    Title,
    StartDate,
    StartTime,
    EndDate,
    EndTime,
    Status,
}

impl FormField {
    const ORDER: [FormField; 6] = [
        FormField::Title,
        FormField::StartDate,
        FormField::StartTime,
        FormField::EndDate,
        FormField::EndTime,
        FormField::Status,
    ];

    fn position(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }
}

impl EventForm {
    pub fn from_draft(draft: Draft) -> Self {
        Self {
            start_date_input: format_date(draft.start_date),
            start_time_input: format_time(draft.start_time),
            end_date_input: format_date(draft.end_date),
            end_time_input: format_time(draft.end_time),
            draft,
            active_field: FormField::Title,
            input_touched: false,
        }
    }

    pub fn next_field(&mut self) {
        self.leave_field();
        let next = (self.active_field.position() + 1) % FormField::ORDER.len();
        self.active_field = FormField::ORDER[next];
    }

    pub fn prev_field(&mut self) {
        self.leave_field();
        let len = FormField::ORDER.len();
        let prev = (self.active_field.position() + len - 1) % len;
        self.active_field = FormField::ORDER[prev];
    }

    /// Text buffer behind the active field, if it is a date or time field.
    pub fn active_input_mut(&mut self) -> Option<&mut String> {
        match self.active_field {
            FormField::StartDate => Some(&mut self.start_date_input),
            FormField::StartTime => Some(&mut self.start_time_input),
            FormField::EndDate => Some(&mut self.end_date_input),
            FormField::EndTime => Some(&mut self.end_time_input),
            FormField::Title | FormField::Status => None,
        }
    }

    pub fn input_for(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.draft.title,
            FormField::StartDate => &self.start_date_input,
            FormField::StartTime => &self.start_time_input,
            FormField::EndDate => &self.end_date_input,
            FormField::EndTime => &self.end_time_input,
            FormField::Status => self.draft.status.label(),
        }
    }

    /// Parses every date/time buffer into the draft. Unparseable input
    /// leaves that component empty.
    pub fn sync_inputs(&mut self) {
        self.draft.start_date = parse_date_input(&self.start_date_input);
        self.draft.start_time = parse_time_input(&self.start_time_input);
        self.draft.end_date = parse_date_input(&self.end_date_input);
        self.draft.end_time = parse_time_input(&self.end_time_input);
    }

    fn leave_field(&mut self) {
        self.sync_inputs();
        match self.active_field {
            FormField::StartDate if self.draft.start_date.is_some() => {
                self.start_date_input = format_date(self.draft.start_date);
            }
            FormField::StartTime if self.draft.start_time.is_some() => {
                self.start_time_input = format_time(self.draft.start_time);
            }
            FormField::EndDate if self.draft.end_date.is_some() => {
                self.end_date_input = format_date(self.draft.end_date);
            }
            FormField::EndTime if self.draft.end_time.is_some() => {
                self.end_time_input = format_time(self.draft.end_time);
            }
            _ => {}
        }
        self.input_touched = false;
    }
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m-%d").to_string()).unwrap_or_default()
}

fn format_time(time: Option<NaiveTime>) -> String {
    time.map(|t| format!("{:02}:{:02}", t.hour(), t.minute())).unwrap_or_default()
}

pub fn parse_date_input(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").ok()
}

/// Accepts `HH:MM`, `HHMM`, `HMM` or a bare hour; out-of-range values are
/// clamped to the last valid hour/minute.
pub fn parse_time_input(input: &str) -> Option<NaiveTime> {
    let digits = input.trim().replace(':', "");
    let num = digits.parse::<u32>().ok()?;
    let (hour, minute) = match digits.len() {
        1 | 2 => (num, 0),
        3 | 4 => (num / 100, num % 100),
        _ => return None,
    };
    NaiveTime::from_hms_opt(hour.min(23), minute.min(59), 0)
}

impl AppState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            mode: Mode::Normal,
            view: ViewType::Month,
            selected_date: today,
            today,
            store: EventStore::default(),
            command_buffer: String::new(),
            show_help: false,
            help_scroll: 0,
            theme: Theme::default(),
            event_form: None,
            selected_event_index: 0,
            delete_confirmation_event_id: None,
            move_preview: None,
            visual_selection_start: None,
            notice: None,
            show_weekends: true,
            slot_min_hour: 8,
            slot_max_hour: 20,
            date_format: "%Y-%m-%d".to_string(),
        }
    }

    pub fn from_config(config: &Config, today: NaiveDate) -> Result<Self, ConfigError> {
        config.validate()?;
        let policy = WeekdayPolicy::new(config.disabled_weekday()?);

        let mut app = Self::new(today)
            .with_theme(Theme::get_by_name(&config.ui.theme))
            .with_store(EventStore::new(policy));
        app.view = config.default_view()?;
        app.show_weekends = config.ui.show_weekends;
        app.slot_min_hour = config.calendar.slot_min_hour;
        app.slot_max_hour = config.calendar.slot_max_hour;
        app.date_format = config.ui.date_format.clone();
        Ok(app)
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_store(mut self, store: EventStore) -> Self {
        self.store = store;
        self
    }

    pub fn refresh_today(&mut self) {
        self.today = Local::now().date_naive();
    }

    pub fn visible_hours(&self) -> Range<u32> {
        self.slot_min_hour..self.slot_max_hour
    }

    pub fn is_disabled(&self, date: NaiveDate) -> bool {
        self.store.policy().is_disabled(date)
    }

    pub fn get_events_for_date(&self, date: NaiveDate) -> Vec<&Event> {
        self.store.events_on(date)
    }

    /// Display model for one day, with any in-flight move already applied.
    pub fn display_events_on(&self, date: NaiveDate) -> Vec<DisplayEvent> {
        let mut events: Vec<DisplayEvent> = self
            .store
            .events()
            .iter()
            .map(|event| {
                let mut display = DisplayEvent::from(event);
                if let Some(preview) = &self.move_preview
                    && preview.event_id == event.id
                {
                    let shift = Duration::days(preview.offset_days);
                    display.start += shift;
                    display.end = display.end.map(|end| end + shift);
                }
                display
            })
            .filter(|display| {
                let end = display.end.unwrap_or(display.start);
                display.start.date() <= date && date <= end.date()
            })
            .collect();
        events.sort_by_key(|display| display.start);
        events
    }

    pub fn get_selected_event(&self) -> Option<&Event> {
        let events = self.get_events_for_date(self.selected_date);
        events.get(self.selected_event_index).copied()
    }

    pub fn move_event_selection_down(&mut self) {
        let event_count = self.get_events_for_date(self.selected_date).len();
        if event_count > 0 && self.selected_event_index < event_count - 1 {
            self.selected_event_index += 1;
        }
    }

    pub fn move_event_selection_up(&mut self) {
        if self.selected_event_index > 0 {
            self.selected_event_index -= 1;
        }
    }

    pub fn reset_event_selection(&mut self) {
        self.selected_event_index = 0;
    }

    pub fn get_visual_selection_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        self.visual_selection_start.map(|start| {
            let end = self.selected_date;
            if start <= end {
                (start, end)
            } else {
                (end, start)
            }
        })
    }

    pub fn is_date_in_visual_selection(&self, date: NaiveDate) -> bool {
        if let Some((start, end)) = self.get_visual_selection_range() {
            date >= start && date <= end
        } else {
            false
        }
    }

    /// First visible slot of `date`, where selections start.
    pub fn first_slot(&self, date: NaiveDate) -> NaiveDateTime {
        date.and_time(NaiveTime::MIN) + Duration::hours(i64::from(self.slot_min_hour))
    }

    /// Stages a new event for the given range and opens the form, or posts
    /// the rejection as a notice.
    pub fn begin_creation(&mut self, start: NaiveDateTime, end: Option<NaiveDateTime>) -> bool {
        match self.store.propose_creation(start, end, self.today) {
            Ok(draft) => {
                self.event_form = Some(EventForm::from_draft(draft));
                self.notice = None;
                self.mode = Mode::Insert;
                true
            }
            Err(err) => {
                let message = match err {
                    StoreError::PastDate => "You cannot add events on past dates!".to_string(),
                    other => other.to_string(),
                };
                self.notice = Some(Notice::error(message));
                self.event_form = None;
                self.mode = Mode::Normal;
                false
            }
        }
    }

    /// Selection of whole days, from the first visible slot of `first`
    /// to one hour later on `last`.
    pub fn begin_creation_for_days(&mut self, first: NaiveDate, last: NaiveDate) -> bool {
        let start = self.first_slot(first);
        let end = self.first_slot(last) + Duration::hours(1);
        self.begin_creation(start, Some(end))
    }

    pub fn submit_form(&mut self) {
        let Some(form) = self.event_form.as_mut() else {
            return;
        };
        form.sync_inputs();

        let result = self
            .store
            .commit(&mut form.draft)
            .map(|event| (event.title.clone(), event.start.date()));

        match result {
            Ok((title, date)) => {
                self.event_form = None;
                self.mode = Mode::Normal;
                self.selected_date = date;
                self.notice = Some(Notice::info(format!("Added event: {}", title)));
            }
            Err(err) => {
                self.notice = Some(Notice::error(err.to_string()));
            }
        }
    }

    pub fn cancel_form(&mut self) {
        self.event_form = None;
        self.mode = Mode::Normal;
    }

    pub fn request_delete(&mut self) {
        if let Some(event) = self.get_selected_event() {
            self.delete_confirmation_event_id = Some(event.id.clone());
        }
    }

    /// Resolves the pending delete with the user's answer.
    pub fn answer_delete(&mut self, confirmed: bool) {
        let Some(event_id) = self.delete_confirmation_event_id.take() else {
            return;
        };

        if let Some(removed) = self.store.remove(&event_id, &mut |_: &Event| confirmed) {
            self.notice = Some(Notice::info(format!("Deleted event: {}", removed.title)));
            if self.selected_event_index > 0 {
                self.selected_event_index -= 1;
            }
        }
    }

    pub fn begin_move(&mut self) {
        if let Some(event) = self.get_selected_event() {
            self.move_preview = Some(MovePreview { event_id: event.id.clone(), offset_days: 0 });
            self.mode = Mode::Move;
        }
    }

    pub fn shift_move(&mut self, days: i64) {
        if let Some(preview) = self.move_preview.as_mut() {
            preview.offset_days += days;
            self.selected_date += Duration::days(days);
        }
    }

    /// Commits the previewed move. A rejected move drops the preview, which
    /// puts the event back where the store still has it.
    pub fn finish_move(&mut self) {
        self.mode = Mode::Normal;
        let Some(preview) = self.move_preview.take() else {
            return;
        };
        let Some(event) = self.store.get(&preview.event_id) else {
            self.notice = Some(Notice::error(
                StoreError::NotFound(preview.event_id).to_string(),
            ));
            return;
        };
        if preview.offset_days == 0 {
            return;
        }

        let shift = Duration::days(preview.offset_days);
        let new_start = event.start + shift;
        let new_end = event.end.map(|end| end + shift);

        match self.store.move_event(&preview.event_id, new_start, new_end, self.today) {
            Ok(moved) => {
                self.notice = Some(Notice::info(format!(
                    "Moved {} to {}",
                    moved.title,
                    moved.start.format("%Y-%m-%d %H:%M")
                )));
                self.selected_date = new_start.date();
            }
            Err(StoreError::PastDate) => {
                self.notice = Some(Notice::error("You cannot move events to past dates!"));
                self.selected_date = event_start_date(&self.store, &preview.event_id)
                    .unwrap_or(self.selected_date);
            }
            Err(err) => {
                self.notice = Some(Notice::error(err.to_string()));
            }
        }
        self.reset_event_selection();
    }

    pub fn cancel_move(&mut self) {
        if let Some(preview) = self.move_preview.take() {
            self.selected_date -= Duration::days(preview.offset_days);
        }
        self.mode = Mode::Normal;
    }

    pub fn toggle_weekends(&mut self) {
        self.show_weekends = !self.show_weekends;
    }
}

fn event_start_date(store: &EventStore, id: &str) -> Option<NaiveDate> {
    store.get(id).map(|event| event.start.date())
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Local::now().date_naive())
    }
}
