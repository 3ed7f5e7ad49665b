//! Help tab view

use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let delay = app.table.constants().timing.upgrade_debounce_secs;
    let lines = vec![
        section("Navigation"),
        key_line("1-5", "Jump to tab (Captain/Ship/Market/Trade/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Navigate lists"),
        key_line("PgUp / PgDn", "Scroll the log"),
        key_line("p", "Switch the active player"),
        key_line("q / Ctrl+C", "Quit"),
        Line::from(""),
        section("Captain & Ship"),
        key_line("Enter", "Play a card of the selected upgrade"),
        key_line("u", "Pick that card back up"),
        key_line("←/→", "Select an ability (Captain)"),
        key_line("s / S", "Snap ability face up / face down"),
        key_line("f / x / e", "Flip, remove or exhaust the ability"),
        key_line("d", "Crewmember from upkeep to defense"),
        key_line("r", "Return a crewmember to upkeep"),
        Line::from(""),
        section("Market"),
        key_line("Enter", "Claim the selected ship"),
        key_line("a / x", "Place / lift a damage cube"),
        key_line("b", "Board the selected ship with a crewmember"),
        key_line("n", "Discard the market and deal again"),
        Line::from(""),
        section("Table"),
        key_line("g", "Draw a resource card"),
        key_line("t", "Advance time by 1 second"),
        key_line("R", "End the round"),
        Line::from(""),
        Line::from(Span::styled("Settling:", Style::default().fg(Color::Yellow))),
        Line::from(format!(
            "  Upgrade zones settle {delay:.1}s after the last card moves."
        )),
        Line::from("  Cards that do not fit are left out and announced."),
    ];

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Help "));

    f.render_widget(paragraph, area);
}

fn section(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        format!("═══ {title} ═══"),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(
            format!("  {:20}", key),
            Style::default().fg(Color::Yellow),
        ),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
