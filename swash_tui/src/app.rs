//! Application state: a Swash table with two seated players driven by keypresses

use rand::seq::SliceRandom;
use rand::SeedableRng;
use std::collections::BTreeMap;
use swash_core::prelude::*;
use swash_core::ResourceConverter;
use tracing::{debug, warn};

const PLAYER_NAMES: [&str; 2] = ["Anne", "Jack"];
const LOG_CAPACITY: usize = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Captain,
    Ship,
    Market,
    Trade,
    Help,
}

impl Tab {
    pub fn all() -> &'static [Tab] {
        &[Tab::Captain, Tab::Ship, Tab::Market, Tab::Trade, Tab::Help]
    }

    pub fn name(&self) -> &'static str {
        match self {
            Tab::Captain => "Captain",
            Tab::Ship => "Ship",
            Tab::Market => "Market",
            Tab::Trade => "Trade",
            Tab::Help => "Help",
        }
    }
}

/// An upgrade card the active player put down in one of their zones
#[derive(Debug, Clone)]
pub struct PlacedCard {
    pub slot: PlayerSlot,
    pub zone: ZoneKind,
    pub card_id: String,
    pub name: String,
}

/// Crewmember token and where it currently lies
#[derive(Debug, Clone)]
pub struct CrewToken {
    pub slot: PlayerSlot,
    pub id: String,
    pub position: CrewPosition,
}

pub struct App {
    pub current_tab: Tab,
    pub table: Table,
    pub rng: rand::rngs::StdRng,
    pub active: PlayerSlot,
    /// Index into the captain or ship upgrade list, depending on the tab
    pub selected_upgrade: usize,
    pub selected_ability: usize,
    pub selected_market: usize,
    pub converter: ResourceConverter,
    pub placed: Vec<PlacedCard>,
    pub crew: Vec<CrewToken>,
    /// Resource cards held by each player
    pub hands: BTreeMap<PlayerSlot, Vec<Resource>>,
    /// Damage cubes on ships: (ship card id, cube id)
    pub cubes: Vec<(String, String)>,
    pub log: Vec<String>,
    pub log_scroll: usize,
    pub time_elapsed: f64,
    next_card: u32,
}

impl App {
    pub fn new() -> Self {
        let mut app = App {
            current_tab: Tab::Captain,
            table: Table::bundled(),
            rng: rand::rngs::StdRng::seed_from_u64(42),
            active: 0,
            selected_upgrade: 0,
            selected_ability: 0,
            selected_market: 0,
            converter: ResourceConverter::new(Resource::Lumber, Resource::Rum),
            placed: Vec::new(),
            crew: Vec::new(),
            hands: BTreeMap::new(),
            cubes: Vec::new(),
            log: Vec::new(),
            log_scroll: 0,
            time_elapsed: 0.0,
            next_card: 0,
        };
        app.set_up_table();
        app
    }

    /// Seat both players, lay their crew on the upkeep slots and deal the market
    fn set_up_table(&mut self) {
        let crew_count = self.table.constants().captain.crew as usize;
        let upkeep_slots = self.table.constants().captain.upkeep.len();

        for (slot, name) in PLAYER_NAMES.iter().enumerate() {
            let slot = slot as PlayerSlot;
            self.apply(TableEvent::PlayerSeated {
                slot,
                name: name.to_string(),
            });
            for i in 0..crew_count {
                let id = format!("{}-crew-{i}", name.to_lowercase());
                let position = if i < upkeep_slots {
                    CrewPosition::Upkeep(i)
                } else {
                    CrewPosition::Elsewhere
                };
                self.apply(TableEvent::CrewMoved {
                    slot,
                    crew_id: id.clone(),
                    to: position.clone(),
                    silent: true,
                });
                self.crew.push(CrewToken { slot, id, position });
            }
            self.hands.insert(slot, Vec::new());
        }

        let ship_names: Vec<String> = self
            .table
            .catalog()
            .ships()
            .iter()
            .map(|s| s.name.clone())
            .collect();
        for (i, name) in ship_names.into_iter().enumerate() {
            self.apply(TableEvent::ShipRegistered {
                card_id: format!("ship-{i}"),
                name,
            });
        }

        self.table.shuffle_market(&mut self.rng);
        let outputs = self.table.deal_market(&mut self.rng);
        self.record(outputs);
    }

    pub fn next_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(idx + 1) % tabs.len()];
        self.selected_upgrade = 0;
    }

    pub fn prev_tab(&mut self) {
        let tabs = Tab::all();
        let idx = tabs.iter().position(|t| *t == self.current_tab).unwrap_or(0);
        self.current_tab = tabs[(idx + tabs.len() - 1) % tabs.len()];
        self.selected_upgrade = 0;
    }

    pub fn set_tab(&mut self, idx: usize) {
        if let Some(tab) = Tab::all().get(idx) {
            self.current_tab = *tab;
            self.selected_upgrade = 0;
        }
    }

    pub fn toggle_help(&mut self) {
        self.current_tab = if self.current_tab == Tab::Help {
            Tab::Captain
        } else {
            Tab::Help
        };
    }

    pub fn switch_player(&mut self) {
        self.active = (self.active + 1) % PLAYER_NAMES.len() as PlayerSlot;
        debug!(active = self.active, "switched active player");
    }

    pub fn active_player(&self) -> Option<&swash_core::table::Player> {
        self.table.player(self.active)
    }

    pub fn player_name(&self, slot: PlayerSlot) -> &str {
        self.table
            .player(slot)
            .map(|p| p.name.as_str())
            .unwrap_or("?")
    }

    /// Upgrades of the category the current tab plays
    pub fn upgrade_choices(&self) -> Vec<&Upgrade> {
        let category = match self.current_tab {
            Tab::Ship => UpgradeCategory::Ship,
            _ => UpgradeCategory::Captain,
        };
        self.table
            .catalog()
            .upgrades()
            .iter()
            .filter(|u| u.category() == category)
            .collect()
    }

    pub fn on_up(&mut self) {
        match self.current_tab {
            Tab::Captain | Tab::Ship => {
                self.selected_upgrade = self.selected_upgrade.saturating_sub(1);
            }
            Tab::Market => self.selected_market = self.selected_market.saturating_sub(1),
            Tab::Trade => {
                let next = self.converter.transactions() + 1;
                self.converter.set_transactions(next);
            }
            Tab::Help => {}
        }
    }

    pub fn on_down(&mut self) {
        match self.current_tab {
            Tab::Captain | Tab::Ship => {
                let max = self.upgrade_choices().len().saturating_sub(1);
                self.selected_upgrade = (self.selected_upgrade + 1).min(max);
            }
            Tab::Market => {
                let max = self.table.market().played().len().saturating_sub(1);
                self.selected_market = (self.selected_market + 1).min(max);
            }
            Tab::Trade => {
                let next = self.converter.transactions().saturating_sub(1);
                self.converter.set_transactions(next);
            }
            Tab::Help => {}
        }
    }

    /// Scroll back through older notices
    pub fn scroll_log_up(&mut self) {
        self.log_scroll = (self.log_scroll + 1).min(self.log.len().saturating_sub(1));
    }

    pub fn scroll_log_down(&mut self) {
        self.log_scroll = self.log_scroll.saturating_sub(1);
    }

    pub fn on_left(&mut self) {
        match self.current_tab {
            Tab::Captain => self.selected_ability = self.selected_ability.saturating_sub(1),
            Tab::Trade => self.converter.input = cycle_resource(self.converter.input, false),
            _ => {}
        }
    }

    pub fn on_right(&mut self) {
        match self.current_tab {
            Tab::Captain => {
                let max = self.table.catalog().abilities().len().saturating_sub(1);
                self.selected_ability = (self.selected_ability + 1).min(max);
            }
            Tab::Trade => self.converter.input = cycle_resource(self.converter.input, true),
            _ => {}
        }
    }

    pub fn on_enter(&mut self) {
        match self.current_tab {
            Tab::Captain => self.place_upgrade(ZoneKind::CaptainUpgrades),
            Tab::Ship => self.place_upgrade(ZoneKind::ShipUpgrades),
            Tab::Market => self.claim_selected_ship(),
            Tab::Trade => self.trade(),
            Tab::Help => {}
        }
    }

    /// Put a card of the selected upgrade into the zone
    pub fn place_upgrade(&mut self, zone: ZoneKind) {
        let Some(name) = self
            .upgrade_choices()
            .get(self.selected_upgrade)
            .map(|u| u.name.clone())
        else {
            return;
        };
        self.next_card += 1;
        let card_id = format!("card-{}", self.next_card);
        self.placed.push(PlacedCard {
            slot: self.active,
            zone,
            card_id: card_id.clone(),
            name: name.clone(),
        });
        self.apply(TableEvent::UpgradeCardEntered {
            slot: self.active,
            zone,
            card_id,
            identity: name,
        });
    }

    /// Lift the most recently placed card of the selected upgrade
    pub fn lift_upgrade(&mut self, zone: ZoneKind) {
        let Some(name) = self
            .upgrade_choices()
            .get(self.selected_upgrade)
            .map(|u| u.name.clone())
        else {
            return;
        };
        let active = self.active;
        let Some(idx) = self
            .placed
            .iter()
            .rposition(|c| c.slot == active && c.zone == zone && c.name == name)
        else {
            self.push_log(format!("No {name} card to pick up."));
            return;
        };
        let card = self.placed.remove(idx);
        self.apply(TableEvent::UpgradeCardLeft {
            slot: card.slot,
            zone: card.zone,
            card_id: card.card_id,
        });
    }

    pub fn on_lift(&mut self) {
        match self.current_tab {
            Tab::Captain => self.lift_upgrade(ZoneKind::CaptainUpgrades),
            Tab::Ship => self.lift_upgrade(ZoneKind::ShipUpgrades),
            _ => {}
        }
    }

    pub fn selected_ability_name(&self) -> Option<String> {
        self.table
            .catalog()
            .abilities()
            .get(self.selected_ability)
            .map(|a| a.name.clone())
    }

    pub fn snap_ability(&mut self, face_up: bool) {
        if let Some(name) = self.selected_ability_name() {
            self.apply(TableEvent::AbilitySnapped {
                slot: self.active,
                name,
                face_up,
                silent: false,
            });
        }
    }

    pub fn flip_ability(&mut self) {
        let Some(name) = self.selected_ability_name() else {
            return;
        };
        let face_up = self
            .active_player()
            .and_then(|p| p.captain.abilities().iter().flatten().find(|a| a.name() == name))
            .map(|a| !a.face_up);
        match face_up {
            Some(face_up) => self.apply(TableEvent::AbilityFlipped {
                slot: self.active,
                name,
                face_up,
            }),
            None => self.push_log(format!("{name} is not snapped to the captain.")),
        }
    }

    pub fn remove_ability(&mut self) {
        if let Some(name) = self.selected_ability_name() {
            self.apply(TableEvent::AbilityRemoved {
                slot: self.active,
                name,
            });
        }
    }

    pub fn toggle_exhaust(&mut self) {
        if let Some(name) = self.selected_ability_name() {
            self.apply(TableEvent::AbilityExhaustToggled {
                slot: self.active,
                name,
            });
        }
    }

    /// Move the active player's crewmember from the highest upkeep slot
    fn move_crew_from_upkeep(&mut self, to: CrewPosition) {
        let active = self.active;
        let Some(idx) = self
            .crew
            .iter()
            .enumerate()
            .filter(|(_, c)| c.slot == active)
            .filter_map(|(i, c)| match c.position {
                CrewPosition::Upkeep(slot) => Some((i, slot)),
                _ => None,
            })
            .max_by_key(|(_, slot)| *slot)
            .map(|(i, _)| i)
        else {
            self.push_log("No crew left on the upkeep slots.".to_string());
            return;
        };
        self.move_crew(idx, to, false);
    }

    /// The table lifts the crewmember off any ship it is leaving
    fn move_crew(&mut self, idx: usize, to: CrewPosition, silent: bool) {
        let Some(token) = self.crew.get_mut(idx) else {
            return;
        };
        token.position = to.clone();
        let (slot, crew_id) = (token.slot, token.id.clone());
        self.apply(TableEvent::CrewMoved {
            slot,
            crew_id,
            to,
            silent,
        });
    }

    pub fn crew_to_captain_defense(&mut self) {
        self.move_crew_from_upkeep(CrewPosition::CaptainDefense);
    }

    pub fn crew_to_own_ship(&mut self) {
        match self.active_player().and_then(|p| p.ship.clone()) {
            Some(card_id) => self.move_crew_from_upkeep(CrewPosition::Ship(card_id)),
            None => self.push_log("You have no ship yet.".to_string()),
        }
    }

    pub fn board_selected_ship(&mut self) {
        if let Some(card_id) = self.selected_market_ship() {
            self.move_crew_from_upkeep(CrewPosition::Ship(card_id));
        }
    }

    /// Send one of the active player's deployed crewmembers back to the highest empty upkeep slot
    pub fn return_crew(&mut self) {
        let active = self.active;
        let Some(idx) = self.crew.iter().position(|c| {
            c.slot == active && !matches!(c.position, CrewPosition::Upkeep(_))
        }) else {
            return;
        };
        match self
            .active_player()
            .and_then(|p| p.captain.crew().return_slot())
        {
            Some(slot) => self.move_crew(idx, CrewPosition::Upkeep(slot), false),
            None => self.push_log("Every upkeep slot is occupied.".to_string()),
        }
    }

    pub fn selected_market_ship(&self) -> Option<String> {
        self.table
            .market()
            .played()
            .get(self.selected_market)
            .cloned()
    }

    pub fn place_damage_cube(&mut self) {
        let Some(card_id) = self.selected_market_ship() else {
            return;
        };
        self.next_card += 1;
        let cube_id = format!("cube-{}", self.next_card);
        self.cubes.push((card_id.clone(), cube_id.clone()));
        self.apply(TableEvent::DamageCubePlaced {
            slot: self.active,
            card_id,
            cube_id,
        });
    }

    pub fn remove_damage_cube(&mut self) {
        let Some(card_id) = self.selected_market_ship() else {
            return;
        };
        if let Some(idx) = self.cubes.iter().rposition(|(ship, _)| *ship == card_id) {
            let (card_id, object_id) = self.cubes.remove(idx);
            self.apply(TableEvent::ShipObjectRemoved { card_id, object_id });
        }
    }

    pub fn claim_selected_ship(&mut self) {
        let Some(card_id) = self.selected_market_ship() else {
            return;
        };
        // Guards on the ship being given up head home
        if let Some(previous) = self.active_player().and_then(|p| p.ship.clone()) {
            self.recall_crew_from(&previous);
        }
        self.recall_crew_from(&card_id);
        self.cubes.retain(|(ship, _)| *ship != card_id);
        self.apply(TableEvent::ShipClaimed {
            slot: self.active,
            card_id,
            silent: false,
        });
        self.selected_market = 0;
    }

    pub fn redraw_market(&mut self) {
        for card_id in self.table.market().played().to_vec() {
            self.recall_crew_from(&card_id);
            self.cubes.retain(|(ship, _)| *ship != card_id);
        }
        let outputs = self.table.redraw_market(&mut self.rng);
        self.record(outputs);
        self.selected_market = 0;
    }

    /// Put every crewmember lying on a ship card back on its owner's upkeep slots
    fn recall_crew_from(&mut self, card_id: &str) {
        let on_ship: Vec<usize> = self
            .crew
            .iter()
            .enumerate()
            .filter(|(_, c)| matches!(&c.position, CrewPosition::Ship(id) if id == card_id))
            .map(|(i, _)| i)
            .collect();
        for idx in on_ship {
            self.return_token(idx);
        }
    }

    fn return_token(&mut self, idx: usize) {
        let slot = self.crew[idx].slot;
        let target = self
            .table
            .player(slot)
            .and_then(|p| p.captain.crew().return_slot())
            .map(CrewPosition::Upkeep)
            .unwrap_or(CrewPosition::Elsewhere);
        self.move_crew(idx, target, true);
    }

    /// Draw a random resource card into the active player's hand
    pub fn gather_resource(&mut self) {
        let Some(resource) = Resource::tradeable().choose(&mut self.rng).copied() else {
            return;
        };
        if let Some(hand) = self.hands.get_mut(&self.active) {
            hand.push(resource);
        }
        self.count_resources();
    }

    pub fn cycle_trade_output(&mut self) {
        self.converter.output = cycle_resource(self.converter.output, true);
    }

    /// Swap resource cards at the market rate
    pub fn trade(&mut self) {
        if !self.converter.is_valid() {
            self.push_log("That trade does not come out in whole cards.".to_string());
            return;
        }
        let (input, output) = (self.converter.input, self.converter.output);
        let cost = self.converter.input_amount() as usize;
        let gain = self.converter.output_amount() as usize;
        let Some(hand) = self.hands.get_mut(&self.active) else {
            return;
        };
        if hand.iter().filter(|r| **r == input).count() < cost {
            self.push_log(format!("Trading needs {cost} {input}."));
            return;
        }
        for _ in 0..cost {
            if let Some(idx) = hand.iter().position(|r| *r == input) {
                hand.remove(idx);
            }
        }
        hand.extend(std::iter::repeat(output).take(gain));
        self.count_resources();
    }

    fn count_resources(&mut self) {
        let cards = self.hands.get(&self.active).cloned().unwrap_or_default();
        self.apply(TableEvent::ResourcesCounted {
            slot: self.active,
            cards,
            silent: false,
        });
    }

    /// End of round: upgrades go back to the deck and deployed crew return
    pub fn reset_round(&mut self) {
        self.apply(TableEvent::RoundReset);
        self.placed.clear();
        let deployed: Vec<usize> = self
            .crew
            .iter()
            .enumerate()
            .filter(|(_, c)| !matches!(c.position, CrewPosition::Upkeep(_)))
            .map(|(i, _)| i)
            .collect();
        for idx in deployed {
            self.return_token(idx);
        }
    }

    /// Advance the clock; debounced zones settle as their timers run out
    pub fn tick(&mut self, delta: f64) {
        self.time_elapsed += delta;
        let outputs = self.table.tick(delta);
        self.record(outputs);
    }

    fn apply(&mut self, event: TableEvent) {
        match self.table.handle(event) {
            Ok(outputs) => self.record(outputs),
            Err(e) => {
                warn!(error = %e, "table rejected event");
                self.push_log(format!("! {e}"));
            }
        }
    }

    fn record(&mut self, outputs: Vec<TableOutput>) {
        for output in outputs {
            if let TableOutput::Notice { audience, text } = output {
                let line = match audience {
                    Audience::Player(slot) => format!("[to {}] {text}", self.player_name(slot)),
                    Audience::Everyone => format!("[chat] {text}"),
                };
                self.push_log(line);
            }
        }
    }

    fn push_log(&mut self, line: String) {
        self.log.push(line);
        if self.log.len() > LOG_CAPACITY {
            self.log.remove(0);
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

fn cycle_resource(current: Resource, forward: bool) -> Resource {
    let all = Resource::tradeable();
    let idx = all.iter().position(|r| *r == current).unwrap_or(0);
    let next = if forward {
        (idx + 1) % all.len()
    } else {
        (idx + all.len() - 1) % all.len()
    };
    all[next]
}
