//! Notice log shown beside every tab

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let visible = area.height.saturating_sub(2) as usize;
    let end = app.log.len().saturating_sub(app.log_scroll);
    let start = end.saturating_sub(visible);

    let lines: Vec<Line> = app.log[start..end]
        .iter()
        .map(|entry| {
            let color = if entry.starts_with("[chat]") {
                Color::Cyan
            } else if entry.starts_with('!') {
                Color::Red
            } else {
                Color::White
            };
            Line::from(Span::styled(entry.clone(), Style::default().fg(color)))
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Log "))
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
