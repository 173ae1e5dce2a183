use chrono::NaiveDate;
use crossterm::event::KeyCode;

use crate::app::{AppState, Mode, Notice};
use crate::ui::theme::Theme;

#[derive(Debug, PartialEq)]
pub enum Command {
    Quit,
    Goto(NaiveDate),
    NewEvent(Option<String>),
    Theme(String),
    Weekends,
    Help,
    Error(String),
}

pub fn parse_command(input: &str) -> Command {
    let trimmed = input.trim();

    let Some(command_text) = trimmed.strip_prefix(':') else {
        return Command::Error("Commands must start with ':'".to_string());
    };

    let parts: Vec<&str> = command_text.split_whitespace().collect();

    let Some(name) = parts.first() else {
        return Command::Error("Empty command".to_string());
    };

    match *name {
        "q" | "quit" => Command::Quit,
        "help" => Command::Help,
        "weekends" => Command::Weekends,
        "goto" => match parts.get(1) {
            None => Command::Error("goto requires a date argument".to_string()),
            Some(arg) => match NaiveDate::parse_from_str(arg, "%Y-%m-%d") {
                Ok(date) => Command::Goto(date),
                Err(_) => Command::Error(format!("Invalid date format: {}", arg)),
            },
        },
        "new" => {
            if parts.len() < 2 {
                Command::NewEvent(None)
            } else {
                Command::NewEvent(Some(parts[1..].join(" ")))
            }
        }
        "theme" => match parts.get(1) {
            None => Command::Error("theme requires a theme name".to_string()),
            Some(theme) => Command::Theme(theme.to_string()),
        },
        _ => Command::Error(format!("Unknown command: {}", name)),
    }
}

/// Applies a parsed command. Returns `true` when the app should quit.
pub fn execute(command: Command, state: &mut AppState) -> bool {
    state.mode = Mode::Normal;

    match command {
        Command::Quit => return true,
        Command::Goto(date) => {
            state.selected_date = date;
            state.reset_event_selection();
        }
        Command::NewEvent(title) => {
            let date = state.selected_date;
            if state.begin_creation_for_days(date, date)
                && let (Some(title), Some(form)) = (title, state.event_form.as_mut())
            {
                form.draft.title = title;
            }
        }
        Command::Theme(name) => {
            if Theme::available_themes().contains(&name.to_lowercase().as_str()) {
                state.theme = Theme::get_by_name(&name);
            } else {
                state.notice = Some(Notice::error(format!("Unknown theme: {}", name)));
            }
        }
        Command::Weekends => state.toggle_weekends(),
        Command::Help => state.show_help = true,
        Command::Error(message) => state.notice = Some(Notice::error(message)),
    }
    false
}

/// Edits the `:` line. Returns `true` when the submitted command asks to quit.
pub fn handle_key(key: KeyCode, state: &mut AppState) -> bool {
    match key {
        KeyCode::Esc => {
            state.command_buffer.clear();
            state.mode = Mode::Normal;
        }
        KeyCode::Enter => {
            let command = parse_command(&state.command_buffer);
            state.command_buffer.clear();
            return execute(command, state);
        }
        KeyCode::Backspace => {
            state.command_buffer.pop();
            if state.command_buffer.is_empty() {
                state.mode = Mode::Normal;
            }
        }
        KeyCode::Char(c) => state.command_buffer.push(c),
        _ => {}
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::NoticeKind;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn command_state() -> AppState {
        let mut state = AppState::new(date(2025, 2, 18));
        state.mode = Mode::Command;
        state
    }

    #[test]
    fn parse_quit_command() {
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(":quit"), Command::Quit);
    }

    #[test]
    fn parse_goto_command_with_date() {
        let cmd = parse_command(":goto 2025-01-15");
        assert_eq!(cmd, Command::Goto(date(2025, 1, 15)));
    }

    #[test]
    fn parse_goto_command_with_invalid_date_returns_error() {
        assert!(matches!(parse_command(":goto invalid"), Command::Error(_)));
        assert!(matches!(parse_command(":goto"), Command::Error(_)));
    }

    #[test]
    fn parse_new_event_with_multiple_words() {
        let cmd = parse_command(":new Sprint planning session");
        assert_eq!(cmd, Command::NewEvent(Some("Sprint planning session".to_string())));
        assert_eq!(parse_command(":new"), Command::NewEvent(None));
    }

    #[test]
    fn parse_theme_and_weekends() {
        assert_eq!(parse_command(":theme nord"), Command::Theme("nord".to_string()));
        assert_eq!(parse_command(":weekends"), Command::Weekends);
        assert_eq!(parse_command(":help"), Command::Help);
    }

    #[test]
    fn parse_malformed_commands_return_error() {
        assert!(matches!(parse_command(":unknown"), Command::Error(_)));
        assert!(matches!(parse_command("quit"), Command::Error(_)));
        assert!(matches!(parse_command(":"), Command::Error(_)));
    }

    #[test]
    fn typing_and_enter_executes_goto() {
        let mut state = command_state();
        state.command_buffer = ":".to_string();

        for c in "goto 2025-03-04".chars() {
            handle_key(KeyCode::Char(c), &mut state);
        }
        let quit = handle_key(KeyCode::Enter, &mut state);

        assert!(!quit);
        assert_eq!(state.selected_date, date(2025, 3, 4));
        assert_eq!(state.mode, Mode::Normal);
        assert!(state.command_buffer.is_empty());
    }

    #[test]
    fn quit_command_requests_exit() {
        let mut state = command_state();
        state.command_buffer = ":q".to_string();

        assert!(handle_key(KeyCode::Enter, &mut state));
    }

    #[test]
    fn backspace_past_colon_leaves_command_mode() {
        let mut state = command_state();
        state.command_buffer = ":".to_string();

        handle_key(KeyCode::Backspace, &mut state);

        assert_eq!(state.mode, Mode::Normal);
    }

    #[test]
    fn new_with_title_prefills_form() {
        let mut state = command_state();

        execute(Command::NewEvent(Some("Lunch".to_string())), &mut state);

        assert_eq!(state.mode, Mode::Insert);
        assert_eq!(state.event_form.as_ref().unwrap().draft.title, "Lunch");
    }

    #[test]
    fn new_on_disabled_day_posts_notice() {
        let mut state = command_state();
        state.selected_date = date(2025, 2, 23);

        execute(Command::NewEvent(None), &mut state);

        assert!(state.event_form.is_none());
        assert_eq!(
            state.notice.as_ref().map(|n| n.message.as_str()),
            Some("Events cannot be scheduled on a Sunday")
        );
    }

    #[test]
    fn theme_command_switches_known_theme() {
        let mut state = command_state();

        execute(Command::Theme("Gruvbox".to_string()), &mut state);
        assert_eq!(state.theme.name, "gruvbox");

        execute(Command::Theme("neon".to_string()), &mut state);
        assert_eq!(state.theme.name, "gruvbox");
        assert_eq!(state.notice.as_ref().map(|n| &n.kind), Some(&NoticeKind::Error));
    }

    #[test]
    fn weekends_and_help_commands() {
        let mut state = command_state();

        execute(Command::Weekends, &mut state);
        execute(Command::Help, &mut state);

        assert!(!state.show_weekends);
        assert!(state.show_help);
    }
}
