//! Trade tab view - resource hand and market conversion

use super::header;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use swash_core::prelude::*;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let converter = &app.converter;
    let mut lines = vec![header("Hand")];

    let hand = app.hands.get(&app.active).cloned().unwrap_or_default();
    let tally = ResourceTally::from_cards(&hand);
    for resource in Resource::tradeable() {
        let count = tally.get(*resource);
        let style = if count > 0 {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        lines.push(Line::from(Span::styled(
            format!("  {:8} {count}   (value {})", resource.name(), resource.value()),
            style,
        )));
    }
    lines.push(Line::from(Span::styled(
        "  [g] draw a resource card",
        Style::default().fg(Color::DarkGray),
    )));

    lines.push(Line::from(""));
    lines.push(header("Trade"));
    lines.push(Line::from(format!(
        "  Give {} {}  for  {} {}",
        converter.input_amount(),
        converter.input,
        converter.output_amount(),
        converter.output
    )));
    lines.push(Line::from(format!(
        "  Rate {:.2}, {} transaction(s)",
        converter.conversion_rate(),
        converter.transactions()
    )));
    let (status, color) = if converter.is_valid() {
        ("whole cards, ready to trade", Color::Green)
    } else {
        ("not a whole number of cards", Color::Red)
    };
    lines.push(Line::from(Span::styled(format!("  {status}"), Style::default().fg(color))));

    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Trade ")),
        area,
    );
}
