use std::{
    env,
    io::{self, Write},
    process::{Command, ExitStatus, Stdio},
};

use chrono::{Local, NaiveDate};

use eventcal::{
    calendar::{Event as CalendarEvent, EventStore, WeekdayPolicy},
    storage::config::Config,
};

use crate::tui::sample_store;

const USAGE: &str = "Usage: eventcal [--sample] [--agenda [YYYY-MM-DD]] [--json]";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CliMode {
    Default { sample: bool },
    Agenda { date: NaiveDate, sample: bool },
    Json { sample: bool },
}

pub fn usage() -> &'static str {
    USAGE
}

pub fn parse_cli_mode() -> Result<CliMode, String> {
    parse_args(env::args().skip(1), Local::now().date_naive())
}

fn parse_args<I>(args: I, today: NaiveDate) -> Result<CliMode, String>
where
    I: IntoIterator<Item = String>,
{
    let mut sample = false;
    let mut json = false;
    let mut agenda_date = None;
    let mut args = args.into_iter().peekable();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--sample" => {
                sample = true;
            }
            "--json" => {
                json = true;
            }
            "--agenda" => {
                let target_date = match args.next_if(|next| !next.starts_with("--")) {
                    Some(date_str) => NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
                        .map_err(|_| format!("Invalid date '{}'. Use YYYY-MM-DD.", date_str))?,
                    None => today,
                };
                agenda_date = Some(target_date);
            }
            "--help" => {
                println!("{}", USAGE);
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown argument: {}", arg)),
        }
    }

    if let Some(date) = agenda_date {
        Ok(CliMode::Agenda { date, sample })
    } else if json {
        Ok(CliMode::Json { sample })
    } else {
        Ok(CliMode::Default { sample })
    }
}

fn load_store(config: &Config, sample: bool) -> Result<EventStore, io::Error> {
    let policy = WeekdayPolicy::new(
        config
            .disabled_weekday()
            .map_err(|e| io::Error::other(e.to_string()))?,
    );

    if sample {
        sample_store(policy, Local::now().date_naive()).map_err(|e| io::Error::other(e.to_string()))
    } else {
        Ok(EventStore::new(policy))
    }
}

pub fn run_agenda_mode(config: &Config, date: NaiveDate, sample: bool) -> Result<(), io::Error> {
    let store = load_store(config, sample)?;
    let agenda = format_agenda_text(date, &store.events_on(date));
    display_with_pager(&agenda)
}

pub fn run_json_mode(config: &Config, sample: bool) -> Result<(), io::Error> {
    let store = load_store(config, sample)?;
    let json = serde_json::to_string_pretty(&store.display_model())
        .map_err(|e| io::Error::other(e.to_string()))?;
    println!("{}", json);
    Ok(())
}

fn format_agenda_text(date: NaiveDate, events: &[&CalendarEvent]) -> String {
    let mut lines = Vec::new();
    lines.push(format!("Agenda - {}", date.format("%A, %B %d, %Y")));
    lines.push(String::new());

    if events.is_empty() {
        lines.push("No events scheduled.".to_string());
    } else {
        for event in events {
            lines.push(format!("- {}", build_agenda_line(event, date)));
        }
    }

    lines.join("\n")
}

/// Times outside `date` are shown with their own date, so a multi-day event
/// reads as a span.
fn build_agenda_line(event: &CalendarEvent, date: NaiveDate) -> String {
    let end = event.effective_end();
    let fmt_on = |t: chrono::NaiveDateTime| {
        if t.date() == date {
            t.format("%H:%M").to_string()
        } else {
            t.format("%m-%d %H:%M").to_string()
        }
    };
    let time_label = format!("{}-{}", fmt_on(event.start), fmt_on(end));

    format!("{:<13} {} [{}]", time_label, event.title, event.status)
}

fn display_with_pager(text: &str) -> Result<(), io::Error> {
    let pager_value = env::var("PAGER").unwrap_or_else(|_| "less".to_string());
    let mut parts = pager_value.split_whitespace();
    let cmd = match parts.next() {
        Some(c) => c,
        None => {
            println!("{text}");
            return Ok(());
        }
    };
    let args: Vec<&str> = parts.collect();

    match Command::new(cmd)
        .args(&args)
        .stdin(Stdio::piped())
        .spawn()
    {
        Ok(mut child) => {
            if let Some(stdin) = child.stdin.as_mut() {
                stdin.write_all(text.as_bytes())?;
            }
            if let Some(warning) = pager_exit_warning(cmd, child.wait()) {
                tracing::warn!("{}", warning);
            }
        }
        Err(e) => {
            tracing::warn!("Could not start pager '{}': {}", cmd, e);
            println!("{text}");
        }
    }

    Ok(())
}

fn pager_exit_warning(cmd: &str, outcome: io::Result<ExitStatus>) -> Option<String> {
    match outcome {
        Ok(status) if status.success() => None,
        Ok(status) => Some(format!("Pager '{cmd}' exited with {status}")),
        Err(e) => Some(format!("Failed to wait for pager '{cmd}': {e}")),
    }
}
