use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use chrono::{Datelike, NaiveDate};
use eventcal::{
    app::{AppState, Mode},
    ui::month_view::{self, DayCell},
};

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let layout = month_view::calculate_layout(app);

    let month_name = NaiveDate::from_ymd_opt(layout.year, layout.month, 1)
        .map(|d| d.format("%B %Y").to_string())
        .unwrap_or_else(|| format!("{}-{:02}", layout.year, layout.month));

    let day_names: &[&str] = if app.show_weekends {
        &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]
    } else {
        &["Mon", "Tue", "Wed", "Thu", "Fri"]
    };
    let header = day_names
        .iter()
        .map(|name| Span::styled(format!(" {}  ", name), Style::default().fg(app.theme.weekday_header)))
        .collect::<Vec<_>>();

    let mut lines = vec![
        Line::from(vec![
            Span::styled(month_name, Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
        Line::from(header),
    ];

    for week in &layout.weeks {
        let mut day_spans = Vec::new();

        for day_cell in &week.days {
            day_spans.push(Span::styled(format!(" {:>2}", day_cell.date.day()), day_style(app, day_cell)));
            day_spans.extend(event_marker(app, day_cell));
        }

        lines.push(Line::from(day_spans));
    }

    lines.push(Line::from(""));

    if app.mode == Mode::Visual && app.visual_selection_start.is_some() {
        if let Some((start, end)) = app.get_visual_selection_range() {
            let days = (end - start).num_days() + 1;
            lines.push(Line::from(vec![
                Span::styled("VISUAL ", Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)),
                Span::styled(format!("({} day{})", days, if days == 1 { "" } else { "s" }), Style::default().fg(Color::Yellow)),
                Span::raw(" | "),
                Span::styled("Enter", Style::default().fg(Color::Green)),
                Span::raw(" = Create event | "),
                Span::styled("Esc", Style::default().fg(Color::Red)),
                Span::raw(" = Cancel"),
            ]));
        }
    } else if app.mode == Mode::Move {
        lines.push(move_hint());
    } else {
        lines.push(Line::from(vec![
            Span::styled("hjkl", Style::default().fg(Color::Cyan)),
            Span::raw(" = Navigate | "),
            Span::styled("a", Style::default().fg(Color::Green)),
            Span::raw(" = Add event | "),
            Span::styled("Enter", Style::default().fg(Color::Green)),
            Span::raw(" = Day view | "),
            Span::styled("v", Style::default().fg(Color::Magenta)),
            Span::raw(" = Visual | "),
            Span::styled("m/w/d", Style::default().fg(Color::Cyan)),
            Span::raw(" = Views"),
        ]));
    }

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}

fn day_style(app: &AppState, day_cell: &DayCell) -> Style {
    let style = if day_cell.has_events() {
        Style::default().add_modifier(Modifier::UNDERLINED)
    } else {
        Style::default()
    };

    if app.is_date_in_visual_selection(day_cell.date) {
        style.bg(Color::DarkGray).fg(Color::White).add_modifier(Modifier::BOLD)
    } else if day_cell.is_selected {
        style.bg(app.theme.selected_bg).fg(app.theme.selected_fg).add_modifier(Modifier::BOLD)
    } else if day_cell.is_disabled {
        style.fg(app.theme.disabled_day).add_modifier(Modifier::DIM)
    } else if !day_cell.is_current_month {
        style.fg(app.theme.inactive_day)
    } else if day_cell.is_today {
        style.fg(app.theme.today).add_modifier(Modifier::BOLD)
    } else {
        style
    }
}

/// Two-column swatch for the first event of the day: border then fill.
fn event_marker<'a>(app: &AppState, day_cell: &DayCell) -> [Span<'a>; 3] {
    let Some(first) = day_cell.events.first() else {
        return [Span::raw(" "), Span::raw(" "), Span::raw(" ")];
    };
    let more = if day_cell.events.len() > 1 { "+" } else { " " };
    [
        Span::styled("▌", Style::default().fg(app.theme.border(first.border_color))),
        Span::styled("●", Style::default().fg(app.theme.fill(first.fill_color))),
        Span::styled(more, Style::default().fg(app.theme.inactive_day)),
    ]
}

pub fn move_hint<'a>() -> Line<'a> {
    Line::from(vec![
        Span::styled("MOVE ", Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)),
        Span::styled("h/l", Style::default().fg(Color::Cyan)),
        Span::raw(" = Day | "),
        Span::styled("j/k", Style::default().fg(Color::Cyan)),
        Span::raw(" = Week | "),
        Span::styled("Enter", Style::default().fg(Color::Green)),
        Span::raw(" = Drop | "),
        Span::styled("Esc", Style::default().fg(Color::Red)),
        Span::raw(" = Cancel"),
    ])
}
