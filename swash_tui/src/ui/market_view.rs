//! Market tab view - face-up ships and the fight over them

use super::{header, list_row};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(area);

    let market = app.table.market();
    let mut lines: Vec<Line> = vec![header("Market")];
    for (i, card_id) in market.played().iter().enumerate() {
        let Some(ship) = app.table.ship(card_id) else {
            continue;
        };
        let detail = format!(
            "HP {}/{}  CV{} DEF{} CARGO{}",
            ship.remaining_health(),
            ship.spec.health,
            ship.spec.combat_value,
            ship.spec.defense,
            ship.spec.cargo
        );
        lines.push(list_row(i == app.selected_market, ship.name().to_string(), detail));
    }
    lines.push(Line::from(Span::styled(
        format!(
            "  draw pile {}  discard {}",
            market.draw_pile_len(),
            market.discard_pile_len()
        ),
        Style::default().fg(Color::DarkGray),
    )));

    lines.push(Line::from(""));
    lines.push(header("Combat"));
    let selected = app.selected_market_ship();
    if let Some(ship) = selected.as_deref().and_then(|id| app.table.ship(id)) {
        let combat = ship.combat();
        for player in app.table.players() {
            lines.push(Line::from(format!(
                "  {:8} cubes {}  boarders {}",
                player.name,
                combat.damage_cubes(player.slot),
                combat.boarding_crew(player.slot)
            )));
        }
        let leader = combat
            .attack_leader()
            .map(|slot| app.player_name(slot).to_string())
            .unwrap_or_else(|| "nobody".to_string());
        lines.push(Line::from(vec![
            Span::raw("  Leading the attack: "),
            Span::styled(leader, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        ]));
    }

    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Ships For Sale ")),
        chunks[0],
    );

    // Health gauge of the selected ship
    let ratio = selected
        .as_deref()
        .and_then(|id| app.table.ship(id))
        .filter(|ship| ship.spec.health > 0)
        .map(|ship| ship.remaining_health() as f64 / ship.spec.health as f64)
        .unwrap_or(0.0);
    let gauge = Gauge::default()
        .block(Block::default().borders(Borders::ALL).title(" Health "))
        .gauge_style(Style::default().fg(Color::Red))
        .ratio(ratio.clamp(0.0, 1.0));
    f.render_widget(gauge, chunks[1]);
}
