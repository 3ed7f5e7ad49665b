//! UI rendering

mod captain_view;
mod help_view;
mod log_view;
mod market_view;
mod ship_view;
mod trade_view;

use crate::app::{App, Tab};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Keybindings footer
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
        .split(chunks[1]);

    match app.current_tab {
        Tab::Captain => captain_view::draw(f, app, body[0]),
        Tab::Ship => ship_view::draw(f, app, body[0]),
        Tab::Market => market_view::draw(f, app, body[0]),
        Tab::Trade => trade_view::draw(f, app, body[0]),
        Tab::Help => help_view::draw(f, app, body[0]),
    }
    log_view::draw(f, app, body[1]);

    draw_keybindings(f, app, chunks[2]);
}

fn draw_keybindings(f: &mut Frame, app: &App, area: Rect) {
    let common_keys = vec![("p", "Switch player"), ("Tab", "Next tab"), ("q", "Quit")];

    let tab_keys: Vec<(&str, &str)> = match app.current_tab {
        Tab::Captain => vec![
            ("Enter/u", "Play/lift"),
            ("←/→", "Ability"),
            ("s/S", "Snap"),
            ("f", "Flip"),
            ("d/r", "Crew"),
        ],
        Tab::Ship => vec![("Enter/u", "Play/lift"), ("d/r", "Crew")],
        Tab::Market => vec![
            ("Enter", "Claim"),
            ("a/x", "Cube"),
            ("b", "Board"),
            ("n", "Redraw"),
        ],
        Tab::Trade => vec![("←/→", "Give"), ("o", "Get"), ("↑/↓", "Amount"), ("Enter", "Trade")],
        Tab::Help => vec![],
    };

    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, desc)) in tab_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::White),
        ));
    }

    if !tab_keys.is_empty() {
        spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
    }

    for (i, (key, desc)) in common_keys.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled("  │  ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(
            format!("[{}]", key),
            Style::default().fg(Color::Cyan),
        ));
        spans.push(Span::styled(
            format!(" {}", desc),
            Style::default().fg(Color::Gray),
        ));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line)
        .block(Block::default().borders(Borders::ALL).title(" Keys "))
        .alignment(ratatui::layout::Alignment::Center);

    f.render_widget(paragraph, area);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Tab::all()
        .iter()
        .map(|t| {
            let style = if *t == app.current_tab {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(t.name(), style))
        })
        .collect();

    let title = format!(
        " Swash - {} at the helm ({:.1}s) ",
        app.player_name(app.active),
        app.time_elapsed
    );
    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Style::default().fg(Color::Yellow))
        .divider("|");

    f.render_widget(tabs, area);
}

/// Selectable list row with a `> ` cursor
pub(crate) fn list_row<'a>(selected: bool, label: String, detail: String) -> Line<'a> {
    let (prefix, style) = if selected {
        ("> ", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
    } else {
        ("  ", Style::default().fg(Color::White))
    };
    Line::from(vec![
        Span::styled(prefix, style),
        Span::styled(format!("{:14}", label), style),
        Span::styled(detail, Style::default().fg(Color::DarkGray)),
    ])
}

pub(crate) fn header<'a>(text: &str) -> Line<'a> {
    Line::from(Span::styled(
        format!("═══ {text} ═══"),
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))
}

pub(crate) fn stat_line<'a>(label: &str, value: i32) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {:14}", label), Style::default().fg(Color::Gray)),
        Span::styled(value.to_string(), Style::default().fg(Color::Green)),
    ])
}
