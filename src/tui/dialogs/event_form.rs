use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use crate::tui::dialogs::centered_rect;
use eventcal::{
    app::{AppState, EventForm, FormField, NoticeKind},
    calendar::{Border, Fill},
};

fn field_line<'a>(app: &AppState, form: &'a EventForm, field: FormField, label: &'a str, hint: &'a str) -> Line<'a> {
    let is_active = form.active_field == field;
    let label_color = if is_active { app.theme.selected_bg } else { Color::DarkGray };

    let hint = if !is_active || hint.is_empty() {
        ""
    } else if form.input_touched {
        hint
    } else {
        " [type to replace]"
    };

    Line::from(vec![
        Span::styled(label, Style::default().fg(label_color)),
        Span::raw(form.input_for(field)),
        Span::styled(hint, Style::default().fg(Color::DarkGray)),
    ])
}

pub fn render(f: &mut Frame, app: &AppState) {
    let Some(form) = &app.event_form else {
        return;
    };

    let form_area = centered_rect(f.size(), 70, 20);

    f.render_widget(Clear, form_area);

    let status = form.draft.status;
    let status_active = form.active_field == FormField::Status;

    let mut form_text = vec![
        Line::from(vec![Span::styled("Create New Event", Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Title: ", Style::default().fg(if form.active_field == FormField::Title { app.theme.selected_bg } else { Color::DarkGray })),
            Span::raw(&form.draft.title),
        ]),
        Line::from(""),
        field_line(app, form, FormField::StartDate, "Start Date: ", " (YYYY-MM-DD)"),
        field_line(app, form, FormField::StartTime, "Start Time: ", " (HH:MM or HHMM)"),
        Line::from(""),
        field_line(app, form, FormField::EndDate, "End Date:   ", " (YYYY-MM-DD)"),
        field_line(app, form, FormField::EndTime, "End Time:   ", " (HH:MM or HHMM)"),
        Line::from(""),
        Line::from(vec![
            Span::styled("Status: ", Style::default().fg(if status_active { app.theme.selected_bg } else { Color::DarkGray })),
            Span::styled("▌", Style::default().fg(app.theme.border(Border::for_status(status)))),
            Span::styled(status.label(), Style::default().fg(app.theme.fill(Fill::for_status(status)))),
            Span::styled(if status_active { "  (h/l or Space to change)" } else { "" }, Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
    ];

    if let Some(notice) = &app.notice
        && notice.kind == NoticeKind::Error
    {
        form_text.push(Line::from(vec![
            Span::styled(notice.message.as_str(), Style::default().fg(app.theme.error).add_modifier(Modifier::BOLD)),
        ]));
        form_text.push(Line::from(""));
    }

    form_text.push(Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(" = Next field | "),
        Span::styled("Enter", Style::default().fg(Color::Green)),
        Span::raw(" = Save | "),
        Span::styled("Esc", Style::default().fg(Color::Red)),
        Span::raw(" = Cancel"),
    ]));

    let form_paragraph = Paragraph::new(form_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(" New Event ")
            .style(Style::default().bg(Color::Black)))
        .alignment(Alignment::Left);

    f.render_widget(form_paragraph, form_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::dialogs::buffer_text;
    use chrono::NaiveDate;
    use ratatui::{backend::TestBackend, Terminal};

    fn app_with_form() -> AppState {
        let mut app = AppState::new(NaiveDate::from_ymd_opt(2025, 2, 18).unwrap());
        let day = NaiveDate::from_ymd_opt(2025, 2, 20).unwrap();
        app.begin_creation_for_days(day, day);
        app
    }

    #[test]
    fn form_renders_in_terminal_smaller_than_dialog() {
        let app = app_with_form();
        let mut terminal = Terminal::new(TestBackend::new(60, 15)).unwrap();

        terminal.draw(|f| render(f, &app)).unwrap();

        assert!(buffer_text(terminal.backend().buffer()).contains("Create New Event"));
    }

    #[test]
    fn form_shows_prefilled_range() {
        let app = app_with_form();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();

        terminal.draw(|f| render(f, &app)).unwrap();

        let text = buffer_text(terminal.backend().buffer());
        assert!(text.contains("Start Date: 2025-02-20"));
        assert!(text.contains("End Time:   09:00"));
        assert!(text.contains("Pending"));
    }
}
