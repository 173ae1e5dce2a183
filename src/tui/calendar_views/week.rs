use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use chrono::Datelike;
use eventcal::{
    app::AppState,
    ui::week_view::{self, EventBlock},
};

const CELL_WIDTH: usize = 10;

pub fn render(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let layout = week_view::calculate_layout(app);

    let week_range = match (layout.days.first(), layout.days.last()) {
        (Some(first), Some(last)) => format!("{} - {}",
            first.date.format("%b %d"),
            last.date.format("%b %d, %Y")),
        _ => layout.week_start.format("%b %d, %Y").to_string(),
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled(week_range, Style::default().fg(app.theme.title).add_modifier(Modifier::BOLD)),
        ]),
        Line::from(""),
    ];

    let mut header_spans = vec![Span::styled("      ", Style::default())];

    for day in &layout.days {
        let day_str = format!(" {:>3} {:<2}   ",
            day.date.format("%a"),
            day.date.day()
        );

        let style = if app.is_date_in_visual_selection(day.date) {
            Style::default().bg(Color::DarkGray).fg(Color::White).add_modifier(Modifier::BOLD)
        } else if day.is_selected {
            Style::default().bg(app.theme.selected_bg).fg(app.theme.selected_fg)
        } else if day.is_disabled {
            Style::default().fg(app.theme.disabled_day).add_modifier(Modifier::DIM)
        } else if day.is_today {
            Style::default().fg(app.theme.today).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.weekday_header)
        };

        header_spans.push(Span::styled(day_str, style));
    }

    lines.push(Line::from(header_spans));
    lines.push(Line::from(""));

    for hour in app.visible_hours() {
        let time_str = format!("{:02}:00 ", hour);
        let mut line_spans = vec![Span::styled(time_str, Style::default().fg(Color::Gray))];

        for day in &layout.days {
            let hour_events: Vec<&EventBlock> = day.slots.iter()
                .filter(|slot| slot.hour == hour)
                .flat_map(|slot| &slot.events)
                .collect();

            line_spans.push(event_cell(app, &hour_events, day.is_disabled));
        }

        lines.push(Line::from(line_spans));
    }

    let content = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(content, area);
}

fn event_cell<'a>(app: &AppState, events: &[&EventBlock], disabled: bool) -> Span<'a> {
    let Some(first) = events.first() else {
        let style = if disabled {
            Style::default().fg(app.theme.disabled_day).add_modifier(Modifier::DIM)
        } else {
            Style::default()
        };
        return Span::styled(format!("{:<width$}", if disabled { " ·" } else { "" }, width = CELL_WIDTH), style);
    };

    let mut label: String = first.title.chars().take(CELL_WIDTH - 3).collect();
    if events.len() > 1 {
        label.push('+');
    }

    let mut style = Style::default()
        .bg(app.theme.fill(first.fill))
        .fg(app.theme.border(first.border));
    if app.move_preview.as_ref().is_some_and(|p| p.event_id == first.event_id) {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(format!(" {:<width$} ", label, width = CELL_WIDTH - 2), style)
}
