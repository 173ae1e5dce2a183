use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use eventcal::{
    app::AppState,
    calendar::{Border, Event, Fill},
};
use crate::tui::dialogs::centered_rect;

/// Time span of the event, with the end date only when it differs.
fn span_label(event: &Event) -> String {
    let end = event.effective_end();
    let end_fmt = if end.date() == event.start.date() { "%H:%M" } else { "%a %b %d, %H:%M" };
    format!("{} - {}", event.start.format("%a %b %d, %H:%M"), end.format(end_fmt))
}

fn event_summary<'a>(app: &AppState, event: &'a Event) -> Vec<Line<'a>> {
    let fill = app.theme.fill(Fill::for_status(event.status));
    let border = app.theme.border(Border::for_status(event.status));

    vec![
        Line::from(vec![
            Span::styled("▌", Style::default().fg(border)),
            Span::styled(event.title.as_str(), Style::default().fg(fill).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(vec![Span::styled(span_label(event), Style::default().fg(Color::DarkGray))]),
        Line::from(vec![
            Span::raw("Status: "),
            Span::styled(event.status.label(), Style::default().fg(border)),
        ]),
    ]
}

pub fn render(f: &mut Frame, app: &AppState) {
    let Some(event_id) = &app.delete_confirmation_event_id else {
        return;
    };

    let dialog_area = centered_rect(f.size(), 60, 11);
    f.render_widget(Clear, dialog_area);

    let mut dialog_text = vec![
        Line::from(vec![Span::styled("Delete Event?", Style::default().fg(app.theme.error).add_modifier(Modifier::BOLD))]),
        Line::from(""),
    ];

    match app.store.get(event_id) {
        Some(event) => dialog_text.extend(event_summary(app, event)),
        None => dialog_text.push(Line::from(vec![
            Span::styled(format!("Event {} no longer exists", event_id), Style::default().fg(Color::DarkGray)),
        ])),
    }

    dialog_text.extend([
        Line::from(""),
        Line::from("This action cannot be undone."),
        Line::from(""),
        Line::from(vec![
            Span::styled("y", Style::default().fg(app.theme.success)),
            Span::raw(" = Yes, delete | "),
            Span::styled("n/Esc", Style::default().fg(app.theme.error)),
            Span::raw(" = No, cancel"),
        ]),
    ]);

    let dialog_paragraph = Paragraph::new(dialog_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(" Confirm Delete ")
            .style(Style::default().bg(Color::Black)))
        .alignment(Alignment::Center);

    f.render_widget(dialog_paragraph, dialog_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::dialogs::buffer_text;
    use chrono::NaiveDate;
    use eventcal::calendar::{EventStatus, EventStore, WeekdayPolicy};
    use ratatui::{backend::TestBackend, Terminal};

    fn workshop() -> Event {
        let day = NaiveDate::from_ymd_opt(2025, 2, 19).unwrap();
        Event {
            id: "2".to_string(),
            title: "Workshop".to_string(),
            start: day.and_hms_opt(14, 0, 0).unwrap(),
            end: NaiveDate::from_ymd_opt(2025, 2, 21).unwrap().and_hms_opt(16, 0, 0),
            status: EventStatus::InProgress,
        }
    }

    fn pending_delete() -> AppState {
        let store = EventStore::seeded(WeekdayPolicy::default(), vec![workshop()]).unwrap();
        let mut app = AppState::new(NaiveDate::from_ymd_opt(2025, 2, 18).unwrap()).with_store(store);
        app.delete_confirmation_event_id = Some("2".to_string());
        app
    }

    #[test]
    fn multi_day_span_shows_end_date() {
        assert_eq!(span_label(&workshop()), "Wed Feb 19, 14:00 - Fri Feb 21, 16:00");
    }

    #[test]
    fn dialog_shows_status_of_event() {
        let app = pending_delete();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        terminal.draw(|f| render(f, &app)).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Workshop"));
        assert!(text.contains("Status: In Progress"));
    }

    #[test]
    fn dialog_renders_in_tiny_terminal() {
        let app = pending_delete();
        let mut terminal = Terminal::new(TestBackend::new(30, 6)).unwrap();

        terminal.draw(|f| render(f, &app)).unwrap();

        assert!(buffer_text(terminal.backend().buffer()).contains("Delete"));
    }
}
