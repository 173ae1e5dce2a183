use std::io;
use chrono::Local;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    Terminal,
};
use eventcal::{
    app::{AppState, Mode},
    storage::config::Config,
    input::{normal_mode, command_mode, insert_mode, visual_mode, move_mode},
};
use crate::tui::{
    presentation::ui,
    sample_events::sample_store,
};

pub fn run_tui(config: Config, sample: bool) -> Result<(), io::Error> {
    let today = Local::now().date_naive();
    let mut app = AppState::from_config(&config, today)
        .map_err(|e| io::Error::other(e.to_string()))?;

    if sample {
        let store = sample_store(app.store.policy(), today)
            .map_err(|e| io::Error::other(e.to_string()))?;
        app = app.with_store(store);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    tracing::info!("Session started with {} events", app.store.len());
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("Session ended with error: {}", err);
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> io::Result<()> {
    loop {
        app.refresh_today();
        terminal.draw(|f| ui(f, app))?;

        if let TermEvent::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && handle_key(key.code, app)
        {
            tracing::info!("Session closed");
            return Ok(());
        }
    }
}

/// Routes one key press to the handler of the current mode. Returns `true`
/// when the session should end.
fn handle_key(code: KeyCode, app: &mut AppState) -> bool {
    match app.mode {
        Mode::Normal => {
            if app.show_help {
                handle_help_keys(code, app);
            } else if app.delete_confirmation_event_id.is_some() {
                normal_mode::handle_confirmation_key(code, app);
            } else if code == KeyCode::Char('q') {
                return true;
            } else {
                normal_mode::handle_key(code, app);
            }
        }
        Mode::Command => return command_mode::handle_key(code, app),
        Mode::Insert => insert_mode::handle_key(code, app),
        Mode::Visual => visual_mode::handle_key(code, app),
        Mode::Move => move_mode::handle_key(code, app),
    }
    false
}

fn handle_help_keys(code: KeyCode, app: &mut AppState) {
    match code {
        KeyCode::Char('j') => {
            app.help_scroll = app.help_scroll.saturating_add(1);
        }
        KeyCode::Char('k') => {
            app.help_scroll = app.help_scroll.saturating_sub(1);
        }
        KeyCode::Char('q') | KeyCode::Esc => {
            app.show_help = false;
            app.help_scroll = 0;
        }
        _ => {}
    }
}
