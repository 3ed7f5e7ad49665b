//! Ship tab view

use super::{header, list_row, stat_line};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use swash_core::prelude::*;

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    let mut lines: Vec<Line> = vec![header("Ship Upgrades")];
    for (i, upgrade) in app.upgrade_choices().iter().enumerate() {
        let detail = format!(
            "CV{:+} DEF{:+} CARGO{:+}",
            upgrade.combat_value,
            upgrade.defense,
            upgrade.cargo()
        );
        lines.push(list_row(i == app.selected_upgrade, upgrade.name.clone(), detail));
    }
    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Cards ")),
        chunks[0],
    );

    draw_ship(f, app, chunks[1]);
}

fn draw_ship(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Ship ");
    let Some(ship) = app.table.player_ship(app.active) else {
        let text = Paragraph::new(Span::styled(
            "  No ship yet. Claim one from the Market tab.",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        f.render_widget(text, area);
        return;
    };

    let stats = ship.ship_stats();
    let mut lines = vec![
        header(&format!("{} ({:?})", ship.name(), ship.spec.size)),
        Line::from(format!("  Health        {}", ship.spec.health)),
        stat_line("Combat Value", stats.combat_value),
        stat_line("Defense", stats.defense),
        stat_line("Cargo", stats.cargo),
        Line::from(format!("  Crew aboard   {}", ship.crew_on_defense())),
    ];

    let pending = app
        .active_player()
        .is_some_and(|p| p.zone(ZoneKind::ShipUpgrades).is_pending());
    if pending {
        lines.push(Line::from(Span::styled(
            "  settling...",
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(header("Equipped"));
    if ship.upgrades().is_empty() {
        lines.push(Line::from(Span::styled("  (none)", Style::default().fg(Color::DarkGray))));
    }
    for upgrade in ship.upgrades() {
        lines.push(Line::from(format!("  {}", upgrade.name)));
    }

    f.render_widget(Paragraph::new(lines).block(block), area);
}
