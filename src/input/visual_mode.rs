use chrono::Days;
use crossterm::event::KeyCode;

use crate::app::{AppState, Mode};

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Char('h') => {
            if let Some(new_date) = state.selected_date.checked_sub_days(Days::new(1)) {
                state.selected_date = new_date;
            }
        }
        KeyCode::Char('l') => {
            if let Some(new_date) = state.selected_date.checked_add_days(Days::new(1)) {
                state.selected_date = new_date;
            }
        }
        KeyCode::Char('j') => {
            if let Some(new_date) = state.selected_date.checked_add_days(Days::new(7)) {
                state.selected_date = new_date;
            }
        }
        KeyCode::Char('k') => {
            if let Some(new_date) = state.selected_date.checked_sub_days(Days::new(7)) {
                state.selected_date = new_date;
            }
        }
        KeyCode::Char('a') | KeyCode::Enter => {
            if let Some((start, end)) = state.get_visual_selection_range() {
                state.visual_selection_start = None;
                state.begin_creation_for_days(start, end);
            }
        }
        KeyCode::Esc => {
            state.visual_selection_start = None;
            state.mode = Mode::Normal;
        }
        _ => {}
    }
}
