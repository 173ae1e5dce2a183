use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use eventcal::app::AppState;
use crate::tui::dialogs::centered_rect;

pub fn render(f: &mut Frame, app: &AppState) {
    let help_area = centered_rect(f.size(), 60, 23);

    f.render_widget(Clear, help_area);

    let help_text = vec![
        Line::from(vec![Span::styled("eventcal Help", Style::default().fg(app.theme.help_title).add_modifier(Modifier::BOLD))]),
        Line::from(""),
        Line::from(vec![Span::styled("Navigation:", Style::default().fg(app.theme.help_section))]),
        Line::from("  h/l      - Previous/next day"),
        Line::from("  j/k      - Navigate events (or week if no events)"),
        Line::from("  t        - Jump to today"),
        Line::from("  g/G      - First/last day of month"),
        Line::from("  { / }    - Previous/next month"),
        Line::from(""),
        Line::from(vec![Span::styled("Views:", Style::default().fg(app.theme.help_section))]),
        Line::from("  m/w/d    - Month/Week/Day view"),
        Line::from("  Enter    - Day view (from Month/Week)"),
        Line::from(""),
        Line::from(vec![Span::styled("Event Management:", Style::default().fg(app.theme.help_section))]),
        Line::from("  a        - Add event on the selected day"),
        Line::from("  v        - Visual mode (select date range)"),
        Line::from("  x        - Delete selected event (y/n)"),
        Line::from("  M        - Move selected event"),
        Line::from(""),
        Line::from(vec![Span::styled("Event Form:", Style::default().fg(app.theme.help_section))]),
        Line::from("  Tab      - Next field (Shift-Tab back)"),
        Line::from("  h/l      - Change status on the status field"),
        Line::from("  Enter    - Save event"),
        Line::from("  Esc      - Discard"),
        Line::from(""),
        Line::from(vec![Span::styled("Move Mode:", Style::default().fg(app.theme.help_section))]),
        Line::from("  h/l      - One day earlier/later"),
        Line::from("  j/k      - One week later/earlier"),
        Line::from("  Enter    - Drop event here"),
        Line::from("  Esc      - Cancel move"),
        Line::from(""),
        Line::from(vec![Span::styled("Commands:", Style::default().fg(app.theme.help_section))]),
        Line::from("  :q       - Quit"),
        Line::from("  :goto    - Jump to date (:goto 2025-12-25)"),
        Line::from("  :new     - Create event (:new [Meeting title])"),
        Line::from("  :theme   - Change theme (:theme gruvbox)"),
        Line::from("  :weekends - Show/hide weekends in week view"),
        Line::from("  :help    - Show this help"),
        Line::from(""),
    ];

    let visible_lines = help_area.height.saturating_sub(3) as usize;
    let total_lines = help_text.len();
    let max_scroll = total_lines.saturating_sub(visible_lines);
    let scroll = app.help_scroll.min(max_scroll);

    let scrolled_text: Vec<Line> = help_text
        .into_iter()
        .skip(scroll)
        .take(visible_lines)
        .collect();

    let help_paragraph = Paragraph::new(scrolled_text)
        .block(Block::default()
            .borders(Borders::ALL)
            .title(format!(" Help (j/k to scroll, q to close) [{}/{}] ", scroll + 1, total_lines))
            .style(Style::default().bg(Color::Black)))
        .alignment(Alignment::Left);

    f.render_widget(help_paragraph, help_area);
}
