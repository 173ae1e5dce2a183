use chrono::{Datelike, Days, Months, NaiveDate};
use crossterm::event::KeyCode;

use crate::app::{AppState, Mode, ViewType};

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    if state.delete_confirmation_event_id.is_some() {
        handle_confirmation_key(key, state);
        return;
    }

    match key {
        KeyCode::Char('h') => move_previous_day(state),
        KeyCode::Char('j') => {
            if state.view == ViewType::Day || has_events_on_selected_date(state) {
                state.move_event_selection_down();
            } else {
                move_down_week(state);
            }
        }
        KeyCode::Char('k') => {
            if state.view == ViewType::Day || has_events_on_selected_date(state) {
                state.move_event_selection_up();
            } else {
                move_up_week(state);
            }
        }
        KeyCode::Char('l') => move_next_day(state),
        KeyCode::Char('t') => jump_to_today(state),
        KeyCode::Char('m') => state.view = ViewType::Month,
        KeyCode::Char('w') => state.view = ViewType::Week,
        KeyCode::Char('d') => state.view = ViewType::Day,
        KeyCode::Char('a') => add_event_on_selected_date(state),
        KeyCode::Char('x') => state.request_delete(),
        KeyCode::Char('M') => state.begin_move(),
        KeyCode::Char('v') => enter_visual_mode(state),
        KeyCode::Enter => handle_enter_key(state),
        KeyCode::Char(':') => enter_command_mode(state),
        KeyCode::Char('?') => state.show_help = true,
        KeyCode::Char('g') => move_to_start_of_month(state),
        KeyCode::Char('G') => move_to_end_of_month(state),
        KeyCode::Char('{') => shift_month(state, -1),
        KeyCode::Char('}') => shift_month(state, 1),
        KeyCode::Esc => state.notice = None,
        _ => {}
    }
}

/// Keys while the "Delete event?" dialog is open.
pub fn handle_confirmation_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Char('y') | KeyCode::Char('Y') => state.answer_delete(true),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => state.answer_delete(false),
        _ => {}
    }
}

fn has_events_on_selected_date(state: &AppState) -> bool {
    !state.get_events_for_date(state.selected_date).is_empty()
}

fn move_previous_day(state: &mut AppState) {
    if let Some(new_date) = state.selected_date.checked_sub_days(Days::new(1)) {
        state.selected_date = new_date;
        state.reset_event_selection();
    }
}

fn move_next_day(state: &mut AppState) {
    if let Some(new_date) = state.selected_date.checked_add_days(Days::new(1)) {
        state.selected_date = new_date;
        state.reset_event_selection();
    }
}

fn move_down_week(state: &mut AppState) {
    if let Some(new_date) = state.selected_date.checked_add_days(Days::new(7)) {
        state.selected_date = new_date;
    }
}

fn move_up_week(state: &mut AppState) {
    if let Some(new_date) = state.selected_date.checked_sub_days(Days::new(7)) {
        state.selected_date = new_date;
    }
}

fn jump_to_today(state: &mut AppState) {
    state.selected_date = state.today;
    state.reset_event_selection();
}

fn add_event_on_selected_date(state: &mut AppState) {
    let date = state.selected_date;
    state.begin_creation_for_days(date, date);
}

fn enter_visual_mode(state: &mut AppState) {
    state.visual_selection_start = Some(state.selected_date);
    state.mode = Mode::Visual;
}

fn handle_enter_key(state: &mut AppState) {
    if matches!(state.view, ViewType::Month | ViewType::Week) {
        state.view = ViewType::Day;
    }
}

fn enter_command_mode(state: &mut AppState) {
    state.mode = Mode::Command;
    state.command_buffer = ":".to_string();
}

fn move_to_start_of_month(state: &mut AppState) {
    if let Some(first) = state.selected_date.with_day(1) {
        state.selected_date = first;
    }
}

fn move_to_end_of_month(state: &mut AppState) {
    let Some(first) = state.selected_date.with_day(1) else { return };
    if let Some(last_day) = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
    {
        state.selected_date = last_day;
    }
}

/// Moves by whole months, clamping the day to the target month's length.
fn shift_month(state: &mut AppState, months: i32) {
    let date = state.selected_date;
    let shifted: Option<NaiveDate> = if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    if let Some(new_date) = shifted {
        state.selected_date = new_date;
        state.reset_event_selection();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{Event, EventStatus, EventStore, WeekdayPolicy};

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn state_on(selected: NaiveDate) -> AppState {
        let mut state = AppState::new(date(2025, 1, 13));
        state.selected_date = selected;
        state
    }

    fn state_with_event_on(day: NaiveDate) -> AppState {
        let start = day.and_hms_opt(10, 0, 0).unwrap();
        let event = Event {
            id: "1".to_string(),
            title: "Meeting".to_string(),
            start,
            end: Some(start + chrono::Duration::hours(2)),
            status: EventStatus::Pending,
        };
        let mut state = state_on(day);
        state.store = EventStore::seeded(WeekdayPolicy::default(), vec![event]).unwrap();
        state
    }

    #[test]
    fn h_key_moves_to_previous_day() {
        let mut state = state_on(date(2025, 1, 15));
        handle_key(KeyCode::Char('h'), &mut state);
        assert_eq!(state.selected_date, date(2025, 1, 14));
    }

    #[test]
    fn l_key_moves_to_next_day() {
        let mut state = state_on(date(2025, 1, 15));
        handle_key(KeyCode::Char('l'), &mut state);
        assert_eq!(state.selected_date, date(2025, 1, 16));
    }

    #[test]
    fn j_and_k_move_by_week_when_no_events() {
        let mut state = state_on(date(2025, 1, 15));

        handle_key(KeyCode::Char('j'), &mut state);
        assert_eq!(state.selected_date, date(2025, 1, 22));

        handle_key(KeyCode::Char('k'), &mut state);
        handle_key(KeyCode::Char('k'), &mut state);
        assert_eq!(state.selected_date, date(2025, 1, 8));
    }

    #[test]
    fn t_key_jumps_to_today() {
        let mut state = state_on(date(2025, 3, 1));
        handle_key(KeyCode::Char('t'), &mut state);
        assert_eq!(state.selected_date, date(2025, 1, 13));
    }

    #[test]
    fn g_and_shift_g_move_to_month_bounds() {
        let mut state = state_on(date(2024, 2, 15));

        handle_key(KeyCode::Char('G'), &mut state);
        assert_eq!(state.selected_date, date(2024, 2, 29));

        handle_key(KeyCode::Char('g'), &mut state);
        assert_eq!(state.selected_date, date(2024, 2, 1));
    }

    #[test]
    fn braces_move_by_month_and_clamp_day() {
        let mut state = state_on(date(2025, 1, 31));

        handle_key(KeyCode::Char('}'), &mut state);
        assert_eq!(state.selected_date, date(2025, 2, 28));

        handle_key(KeyCode::Char('{'), &mut state);
        assert_eq!(state.selected_date, date(2025, 1, 28));
    }

    #[test]
    fn view_keys_switch_views() {
        let mut state = state_on(date(2025, 1, 15));

        handle_key(KeyCode::Char('w'), &mut state);
        assert_eq!(state.view, ViewType::Week);
        handle_key(KeyCode::Char('d'), &mut state);
        assert_eq!(state.view, ViewType::Day);
        handle_key(KeyCode::Char('m'), &mut state);
        assert_eq!(state.view, ViewType::Month);
    }

    #[test]
    fn a_key_enters_insert_mode_with_draft_for_selected_day() {
        let mut state = state_on(date(2025, 1, 15));

        handle_key(KeyCode::Char('a'), &mut state);

        assert_eq!(state.mode, Mode::Insert);
        let form = state.event_form.as_ref().unwrap();
        assert_eq!(form.draft.start_date, Some(date(2025, 1, 15)));
    }

    #[test]
    fn a_key_on_past_day_stays_in_normal_mode() {
        let mut state = state_on(date(2025, 1, 10));

        handle_key(KeyCode::Char('a'), &mut state);

        assert_eq!(state.mode, Mode::Normal);
        assert!(state.event_form.is_none());
        assert!(state.notice.is_some());
    }

    #[test]
    fn x_then_y_deletes_selected_event() {
        let mut state = state_with_event_on(date(2025, 1, 15));

        handle_key(KeyCode::Char('x'), &mut state);
        assert!(state.delete_confirmation_event_id.is_some());
        handle_key(KeyCode::Char('y'), &mut state);

        assert!(state.store.is_empty());
    }

    #[test]
    fn x_then_esc_keeps_event() {
        let mut state = state_with_event_on(date(2025, 1, 15));

        handle_key(KeyCode::Char('x'), &mut state);
        handle_key(KeyCode::Esc, &mut state);

        assert_eq!(state.store.len(), 1);
        assert!(state.delete_confirmation_event_id.is_none());
    }

    #[test]
    fn x_without_events_does_nothing() {
        let mut state = state_on(date(2025, 1, 15));
        handle_key(KeyCode::Char('x'), &mut state);
        assert!(state.delete_confirmation_event_id.is_none());
    }

    #[test]
    fn shift_m_starts_move_preview() {
        let mut state = state_with_event_on(date(2025, 1, 15));

        handle_key(KeyCode::Char('M'), &mut state);

        assert_eq!(state.mode, Mode::Move);
        assert_eq!(state.move_preview.as_ref().unwrap().event_id, "1");
    }

    #[test]
    fn colon_enters_command_mode() {
        let mut state = state_on(date(2025, 1, 15));

        handle_key(KeyCode::Char(':'), &mut state);

        assert_eq!(state.mode, Mode::Command);
        assert_eq!(state.command_buffer, ":");
    }
}
