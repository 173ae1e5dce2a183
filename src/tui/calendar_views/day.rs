use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use eventcal::{
    app::AppState,
    ui::day_view,
};

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let layout = day_view::calculate_layout(app);

    let day_title = format!("{}", layout.date.format("%A, %B %d, %Y"));
    let title_style = if layout.is_disabled {
        Style::default().fg(app.theme.disabled_day).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)
    };

    let mut lines = vec![
        Line::from(vec![Span::styled(day_title, title_style)]),
        Line::from(""),
    ];

    if layout.is_disabled {
        lines.push(Line::from(vec![
            Span::styled("No scheduling on this day", Style::default().fg(app.theme.disabled_day).add_modifier(Modifier::DIM)),
        ]));
        lines.push(Line::from(""));
    }

    for hour_block in &layout.hours {
        let time_label = format!("{:02}:00", hour_block.hour);
        if hour_block.events.is_empty() {
            lines.push(Line::from(vec![
                Span::styled(time_label, Style::default().fg(app.theme.inactive_day)),
            ]));
            continue;
        }

        lines.push(Line::from(vec![
            Span::styled(time_label, Style::default().fg(app.theme.weekday_header).add_modifier(Modifier::BOLD)),
        ]));

        for event in &hour_block.events {
            let time_str = format!("  {:02}:{:02}", hour_block.hour, event.start_minute);
            let mut title_style = Style::default().fg(app.theme.fill(event.fill));
            if app.move_preview.as_ref().is_some_and(|p| p.event_id == event.event_id) {
                title_style = title_style.add_modifier(Modifier::REVERSED);
            }
            lines.push(Line::from(vec![
                Span::styled(time_str, Style::default().fg(Color::Green)),
                Span::raw(" "),
                Span::styled("▌", Style::default().fg(app.theme.border(event.border))),
                Span::styled(&event.title, title_style),
                Span::styled(format!(" ({}m, {})", event.duration_minutes, event.status), Style::default().fg(Color::DarkGray)),
            ]));
        }
    }

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}
