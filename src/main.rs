use std::io;

mod cli;
use cli::{CliMode, parse_cli_mode, run_agenda_mode, run_json_mode, usage};
mod tui;
use tui::run_tui;

use eventcal::storage::config::Config;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), io::Error> {
    let config = Config::load_or_create().map_err(|e| io::Error::other(e.to_string()))?;
    setup_logging(&config);

    let cli_mode = match parse_cli_mode() {
        Ok(mode) => mode,
        Err(err) => {
            eprintln!("Error: {}", err);
            println!("{}", usage());
            return Ok(());
        }
    };

    match cli_mode {
        CliMode::Agenda { date, sample } => run_agenda_mode(&config, date, sample),
        CliMode::Json { sample } => run_json_mode(&config, sample),
        CliMode::Default { sample } => run_tui(config, sample),
    }
}

fn setup_logging(config: &Config) {
    let log_dir = Config::config_dir();

    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "eventcal.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(_guard);

    tracing::info!("eventcal started");
}
