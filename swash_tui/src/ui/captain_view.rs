//! Captain tab view - upgrade list, captain sheet and crew board

use super::{header, list_row, stat_line};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
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

    draw_cards(f, app, chunks[0]);
    draw_sheet(f, app, chunks[1]);
}

fn draw_cards(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = vec![header("Upgrades")];
    for (i, upgrade) in app.upgrade_choices().iter().enumerate() {
        let location = upgrade.location().map(|l| l.display_name()).unwrap_or("");
        let detail = format!(
            "CV{:+} DEF{:+} PREC{:+}  {}",
            upgrade.combat_value,
            upgrade.defense,
            upgrade.precision(),
            location
        );
        lines.push(list_row(i == app.selected_upgrade, upgrade.name.clone(), detail));
    }

    lines.push(Line::from(""));
    lines.push(header("Abilities"));
    for (i, ability) in app.table.catalog().abilities().iter().enumerate() {
        let detail = format!("{:?}{}", ability.socket, if ability.exhaustible { ", exhaustible" } else { "" });
        lines.push(list_row(i == app.selected_ability, ability.name.clone(), detail));
    }

    let paragraph = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Cards "));
    f.render_widget(paragraph, area);
}

fn draw_sheet(f: &mut Frame, app: &App, area: Rect) {
    let Some(player) = app.active_player() else {
        return;
    };
    let captain = &player.captain;
    let stats = captain.captain_stats();

    let mut lines = vec![header("Stats")];
    lines.push(stat_line("Combat Value", stats.combat_value));
    lines.push(stat_line("Defense", stats.defense));
    lines.push(stat_line("Precision", stats.precision));
    if captain.is_sturdy() {
        lines.push(Line::from(Span::styled("  Sturdy", Style::default().fg(Color::Magenta))));
    }
    if player.zone(ZoneKind::CaptainUpgrades).is_pending() {
        lines.push(Line::from(Span::styled(
            "  settling...",
            Style::default().fg(Color::DarkGray),
        )));
    }

    lines.push(Line::from(""));
    lines.push(header("Breakdown"));
    for (id, acc) in captain.breakdown() {
        lines.push(Line::from(format!(
            "  {:10} CV{:+} DEF{:+} PREC{:+}",
            id, acc.combat_value, acc.defense, acc.precision
        )));
    }

    lines.push(Line::from(""));
    lines.push(header("Equipped"));
    if captain.upgrades().is_empty() {
        lines.push(Line::from(Span::styled("  (none)", Style::default().fg(Color::DarkGray))));
    }
    for upgrade in captain.upgrades() {
        let location = upgrade.location().map(|l| l.display_name()).unwrap_or("");
        lines.push(Line::from(vec![
            Span::styled(format!("  {:14}", upgrade.name), Style::default().fg(Color::White)),
            Span::styled(location.to_string(), Style::default().fg(Color::DarkGray)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(header("Sockets"));
    for socket in CaptainSocket::all() {
        let text = match captain.ability(*socket) {
            Some(ability) => format!(
                "{} ({}{})",
                ability.name(),
                if ability.face_up { "face up" } else { "face down" },
                if ability.exhausted { ", exhausted" } else { "" }
            ),
            None => "-".to_string(),
        };
        lines.push(Line::from(format!("  {:6} {}", format!("{socket:?}"), text)));
    }

    lines.push(Line::from(""));
    lines.push(header("Crew"));
    for (i, slot) in captain.crew().upkeep_slots().iter().enumerate() {
        let (text, style) = match &slot.occupant {
            Some(crew) => (crew.clone(), Style::default().fg(Color::White)),
            None if slot.upkeep_required() => (
                format!("empty, pay {}", slot.resource),
                Style::default().fg(Color::Red),
            ),
            None => ("empty".to_string(), Style::default().fg(Color::DarkGray)),
        };
        lines.push(Line::from(vec![
            Span::raw(format!("  {i}. ")),
            Span::styled(text, style),
        ]));
    }
    lines.push(Line::from(format!(
        "  On defense: {}",
        captain.crew().defense_count()
    )));

    lines.push(Line::from(""));
    lines.push(header("Resources"));
    let tally: Vec<String> = Resource::tradeable()
        .iter()
        .filter(|r| player.resources().get(**r) > 0)
        .map(|r| format!("{r} {}", player.resources().get(*r)))
        .collect();
    lines.push(Line::from(format!(
        "  {}",
        if tally.is_empty() { "(none)".to_string() } else { tally.join(", ") }
    )));

    let title = format!(" {}'s Captain ", player.name);
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(title, Style::default().add_modifier(Modifier::BOLD))),
    );
    f.render_widget(paragraph, area);
}
