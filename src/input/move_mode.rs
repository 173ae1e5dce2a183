use crossterm::event::KeyCode;

use crate::app::AppState;

/// Keys while an event is being dragged to another day.
pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Char('h') => state.shift_move(-1),
        KeyCode::Char('l') => state.shift_move(1),
        KeyCode::Char('j') => state.shift_move(7),
        KeyCode::Char('k') => state.shift_move(-7),
        KeyCode::Enter => state.finish_move(),
        KeyCode::Esc => state.cancel_move(),
        _ => {}
    }
}
