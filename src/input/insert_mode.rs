use crossterm::event::KeyCode;
use crate::app::{AppState, EventForm, FormField};

const DATE_INPUT_LEN: usize = 10;
const TIME_INPUT_LEN: usize = 5;

pub fn handle_key(key: KeyCode, state: &mut AppState) {
    match key {
        KeyCode::Enter => {
            state.submit_form();
            return;
        }
        KeyCode::Esc => {
            state.cancel_form();
            return;
        }
        _ => {}
    }

    let Some(form) = state.event_form.as_mut() else {
        return;
    };

    match key {
        KeyCode::Tab => form.next_field(),
        KeyCode::BackTab => form.prev_field(),
        KeyCode::Backspace => match form.active_field {
            FormField::Title => {
                form.draft.title.pop();
            }
            FormField::Status => {}
            _ => {
                if let Some(input) = form.active_input_mut() {
                    input.pop();
                }
                form.input_touched = true;
            }
        },
        KeyCode::Char(c) => match form.active_field {
            FormField::Title => form.draft.title.push(c),
            FormField::Status => match c {
                ' ' | 'l' => form.draft.status = form.draft.status.next(),
                'h' => form.draft.status = form.draft.status.prev(),
                _ => {}
            },
            FormField::StartDate | FormField::EndDate => push_input(form, c, '-', DATE_INPUT_LEN),
            FormField::StartTime | FormField::EndTime => push_input(form, c, ':', TIME_INPUT_LEN),
        },
        _ => {}
    }
}

/// The first keystroke in a prefilled field replaces its contents.
fn push_input(form: &mut EventForm, c: char, separator: char, max_len: usize) {
    if !(c.is_ascii_digit() || c == separator) {
        return;
    }
    let touched = form.input_touched;
    let Some(input) = form.active_input_mut() else {
        return;
    };
    if !touched {
        input.clear();
    }
    if input.len() < max_len {
        input.push(c);
    }
    form.input_touched = true;
}
