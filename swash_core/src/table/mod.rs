//! Table - Routes table events to players, captains and ships
//!
//! The table owns every unit in play. Each event is handled to completion
//! and answered with the records the host should render. Upgrade zones and
//! resource counts settle through debouncers advanced by [`Table::tick`].

mod debounce;
mod event;
mod player;
mod reconcile;

pub use debounce::Debouncer;
pub use event::{Audience, CrewPosition, TableEvent, TableOutput, UnitRef};
pub use player::{Player, UpgradeZone};
pub use reconcile::{apply_diff, diff_zone, ZoneChange, ZoneDiff};

use crate::catalog::Catalog;
use crate::config::GameConstants;
use crate::deck::ShipDeck;
use crate::types::{PlayerSlot, ZoneKind};
use crate::unit::{CrewArrival, Ship, Upgradeable};
use rand::Rng;
use std::collections::BTreeMap;
use thiserror::Error;
use tracing::{debug, info};

/// Table-level lookup failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    #[error("no player seated at slot {0}")]
    UnknownPlayer(PlayerSlot),
    #[error("no ship registered with card id '{0}'")]
    UnknownShip(String),
    #[error("no ship named '{0}' in the catalog")]
    UnknownShipSpec(String),
    #[error("no ability named '{0}' in the catalog")]
    UnknownAbility(String),
}

/// Debounced work that came due
enum Settled {
    Zone(PlayerSlot, ZoneKind, bool),
    Resources(PlayerSlot, bool),
}

fn personal_and_broadcast(slot: PlayerSlot, mine: String, everyone: String) -> [TableOutput; 2] {
    [
        TableOutput::notice(Audience::Player(slot), mine),
        TableOutput::notice(Audience::Everyone, everyone),
    ]
}

/// Stats for an owned ship, combat state for one still in the market
fn ship_update(ship: &Ship) -> TableOutput {
    if ship.is_owned() {
        TableOutput::StatsChanged {
            unit: UnitRef::Ship(ship.card_id.clone()),
            stats: ship.stats(),
        }
    } else {
        TableOutput::CombatChanged {
            card_id: ship.card_id.clone(),
            damage_taken: ship.combat().damage_taken(),
            remaining_health: ship.remaining_health(),
            attack_leader: ship.combat().attack_leader(),
        }
    }
}

#[derive(Debug)]
pub struct Table {
    catalog: Catalog,
    constants: GameConstants,
    players: BTreeMap<PlayerSlot, Player>,
    ships: BTreeMap<String, Ship>,
    market: ShipDeck,
}

impl Table {
    pub fn new(catalog: Catalog, constants: GameConstants) -> Self {
        let market = ShipDeck::new(Vec::new(), constants.market.max_played_ships);
        Table {
            catalog,
            constants,
            players: BTreeMap::new(),
            ships: BTreeMap::new(),
            market,
        }
    }

    /// Table with the bundled content and constants
    pub fn bundled() -> Self {
        Table::new(Catalog::bundled(), GameConstants::bundled())
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn constants(&self) -> &GameConstants {
        &self.constants
    }

    pub fn player(&self, slot: PlayerSlot) -> Option<&Player> {
        self.players.get(&slot)
    }

    pub fn players(&self) -> impl Iterator<Item = &Player> {
        self.players.values()
    }

    pub fn ship(&self, card_id: &str) -> Option<&Ship> {
        self.ships.get(card_id)
    }

    pub fn ships(&self) -> impl Iterator<Item = &Ship> {
        self.ships.values()
    }

    pub fn market(&self) -> &ShipDeck {
        &self.market
    }

    /// Ship a player sails, if any
    pub fn player_ship(&self, slot: PlayerSlot) -> Option<&Ship> {
        let card_id = self.players.get(&slot)?.ship.as_ref()?;
        self.ships.get(card_id)
    }

    /// Whether any zone or resource count is waiting on its debounce
    pub fn has_pending(&self) -> bool {
        self.players.values().any(|p| {
            p.zone(ZoneKind::CaptainUpgrades).is_pending()
                || p.zone(ZoneKind::ShipUpgrades).is_pending()
                || p.resource_debounce.is_pending()
        })
    }

    fn player_mut(&mut self, slot: PlayerSlot) -> Result<&mut Player, TableError> {
        self.players
            .get_mut(&slot)
            .ok_or(TableError::UnknownPlayer(slot))
    }

    fn player_name(&self, slot: PlayerSlot) -> Result<String, TableError> {
        self.players
            .get(&slot)
            .map(|p| p.name.clone())
            .ok_or(TableError::UnknownPlayer(slot))
    }

    fn captain_update(&self, slot: PlayerSlot) -> Option<TableOutput> {
        let player = self.players.get(&slot)?;
        Some(TableOutput::StatsChanged {
            unit: UnitRef::Captain(slot),
            stats: player.captain.stats(),
        })
    }

    /// Apply one event and report what changed
    pub fn handle(&mut self, event: TableEvent) -> Result<Vec<TableOutput>, TableError> {
        debug!(?event, "table event");
        match event {
            TableEvent::PlayerSeated { slot, name } => Ok(self.seat_player(slot, name)),
            TableEvent::PlayerLeft { slot } => {
                self.players
                    .remove(&slot)
                    .ok_or(TableError::UnknownPlayer(slot))?;
                info!(slot, "player left");
                Ok(Vec::new())
            }
            TableEvent::ShipRegistered { card_id, name } => self.register_ship(card_id, &name),
            TableEvent::ShipClaimed {
                slot,
                card_id,
                silent,
            } => self.claim_ship(slot, card_id, silent),
            TableEvent::UpgradeCardEntered {
                slot,
                zone,
                card_id,
                identity,
            } => {
                let zone = self.player_mut(slot)?.zone_mut(zone);
                if zone.insert(&card_id, &identity) {
                    zone.debounce.request(false);
                }
                Ok(Vec::new())
            }
            TableEvent::UpgradeCardLeft {
                slot,
                zone,
                card_id,
            } => {
                let zone = self.player_mut(slot)?.zone_mut(zone);
                if zone.remove(&card_id) {
                    zone.debounce.request(false);
                }
                Ok(Vec::new())
            }
            TableEvent::ZoneSnapshot {
                slot,
                zone,
                cards,
                silent,
            } => {
                let zone = self.player_mut(slot)?.zone_mut(zone);
                zone.replace(cards);
                zone.debounce.request(silent);
                Ok(Vec::new())
            }
            TableEvent::CrewMoved {
                slot,
                crew_id,
                to,
                silent,
            } => self.move_crew(slot, &crew_id, to, silent),
            TableEvent::AbilitySnapped {
                slot,
                name,
                face_up,
                silent,
            } => self.snap_ability(slot, &name, face_up, silent),
            TableEvent::AbilityFlipped {
                slot,
                name,
                face_up,
            } => {
                let player = self.player_mut(slot)?;
                if !player.captain.flip_ability(&name, face_up) {
                    return Ok(Vec::new());
                }
                let action = if face_up { "enabled" } else { "disabled" };
                let mut outputs: Vec<TableOutput> = self.captain_update(slot).into_iter().collect();
                outputs.extend(personal_and_broadcast(
                    slot,
                    format!("You {action} ability: {name}."),
                    format!("{} {action} ability {name}.", self.player_name(slot)?),
                ));
                Ok(outputs)
            }
            TableEvent::AbilityRemoved { slot, name } => {
                let player = self.player_mut(slot)?;
                if player.captain.remove_ability(&name).is_none() {
                    return Ok(Vec::new());
                }
                let mut outputs: Vec<TableOutput> = self.captain_update(slot).into_iter().collect();
                outputs.extend(personal_and_broadcast(
                    slot,
                    format!("You removed ability: {name}."),
                    format!("{} removed ability {name}.", self.player_name(slot)?),
                ));
                Ok(outputs)
            }
            TableEvent::AbilityExhaustToggled { slot, name } => {
                let exhausted = self.player_mut(slot)?.captain.toggle_exhausted(&name);
                debug!(slot, ability = %name, ?exhausted, "exhaust toggled");
                Ok(Vec::new())
            }
            TableEvent::DamageCubePlaced {
                slot,
                card_id,
                cube_id,
            } => {
                let player_name = self.player_name(slot)?;
                let ship = self
                    .ships
                    .get_mut(&card_id)
                    .ok_or_else(|| TableError::UnknownShip(card_id.clone()))?;
                if !ship.add_damage_cube(slot, &cube_id) {
                    return Ok(Vec::new());
                }
                Ok(vec![
                    ship_update(ship),
                    TableOutput::notice(
                        Audience::Everyone,
                        format!("{player_name} added 1 damage to {}.", ship.name()),
                    ),
                ])
            }
            TableEvent::ShipObjectRemoved { card_id, object_id } => {
                let ship = self
                    .ships
                    .get_mut(&card_id)
                    .ok_or_else(|| TableError::UnknownShip(card_id.clone()))?;
                if ship.object_left(&object_id) {
                    Ok(vec![ship_update(ship)])
                } else {
                    Ok(Vec::new())
                }
            }
            TableEvent::ResourcesCounted {
                slot,
                cards,
                silent,
            } => {
                self.player_mut(slot)?.count_resources(&cards, silent);
                Ok(Vec::new())
            }
            TableEvent::RoundReset => Ok(self.reset_round()),
        }
    }

    fn seat_player(&mut self, slot: PlayerSlot, name: String) -> Vec<TableOutput> {
        if let Some(player) = self.players.get_mut(&slot) {
            player.name = name;
        } else {
            info!(slot, name = %name, "player seated");
            self.players
                .insert(slot, Player::new(slot, name, &self.constants));
        }
        self.captain_update(slot).into_iter().collect()
    }

    fn register_ship(&mut self, card_id: String, name: &str) -> Result<Vec<TableOutput>, TableError> {
        if let Some(ship) = self.ships.get(&card_id) {
            return Ok(vec![ship_update(ship)]);
        }
        let spec = self
            .catalog
            .ship(name)
            .cloned()
            .ok_or_else(|| TableError::UnknownShipSpec(name.to_string()))?;
        let ship = Ship::new(card_id.clone(), spec);
        let output = ship_update(&ship);
        if !self.market.contains(&card_id) {
            self.market.push_card(card_id.clone());
        }
        self.ships.insert(card_id, ship);
        Ok(vec![output])
    }

    /// A player takes a ship. Whoever sailed it before loses it, and the
    /// claimant's previous ship is given up to the discard pile.
    fn claim_ship(&mut self, slot: PlayerSlot, card_id: String, silent: bool) -> Result<Vec<TableOutput>, TableError> {
        let player_name = self.player_name(slot)?;
        if !self.ships.contains_key(&card_id) {
            return Err(TableError::UnknownShip(card_id));
        }
        let mut outputs = Vec::new();

        let previous = self
            .players
            .get(&slot)
            .and_then(|p| p.ship.clone())
            .filter(|id| *id != card_id);
        if let Some(previous) = previous {
            if let Some(ship) = self.ships.get_mut(&previous) {
                ship.release();
                outputs.push(ship_update(ship));
            }
            self.market.discard_card(previous.as_str());
            info!(slot, ship = %previous, "ship given up");
        }

        for player in self.players.values_mut() {
            if player.slot != slot && player.ship.as_deref() == Some(card_id.as_str()) {
                player.ship = None;
                info!(slot = player.slot, ship = %card_id, "ship taken by another player");
            }
        }

        let ship = self
            .ships
            .get_mut(&card_id)
            .ok_or_else(|| TableError::UnknownShip(card_id.clone()))?;
        ship.claim(slot);
        let ship_name = ship.name().to_string();
        outputs.push(ship_update(ship));
        self.market.remove(&card_id);

        let player = self.player_mut(slot)?;
        player.ship = Some(card_id);
        // Upgrades already lying in the zone move onto the new ship
        player.zone_mut(ZoneKind::ShipUpgrades).debounce.request(true);
        info!(slot, ship = %ship_name, "ship claimed");

        if !silent {
            outputs.extend(personal_and_broadcast(
                slot,
                format!("You acquired a {ship_name}!"),
                format!("{player_name} acquired a {ship_name}!"),
            ));
        }
        Ok(outputs)
    }

    fn snap_ability(&mut self, slot: PlayerSlot, name: &str, face_up: bool, silent: bool) -> Result<Vec<TableOutput>, TableError> {
        let spec = self
            .catalog
            .ability(name)
            .cloned()
            .ok_or_else(|| TableError::UnknownAbility(name.to_string()))?;
        let player = self.player_mut(slot)?;
        player.captain.snap_ability(spec, face_up);
        let player_name = player.name.clone();

        let mut outputs: Vec<TableOutput> = self.captain_update(slot).into_iter().collect();
        if !silent {
            outputs.extend(personal_and_broadcast(
                slot,
                format!("You acquired ability: {name}."),
                format!("{player_name} acquired ability {name}."),
            ));
        }
        Ok(outputs)
    }

    fn move_crew(&mut self, slot: PlayerSlot, crew_id: &str, to: CrewPosition, silent: bool) -> Result<Vec<TableOutput>, TableError> {
        let player_name = self.player_name(slot)?;
        let target_ship = match &to {
            CrewPosition::Ship(card_id) => {
                if !self.ships.contains_key(card_id) {
                    return Err(TableError::UnknownShip(card_id.clone()));
                }
                Some(card_id.clone())
            }
            _ => None,
        };
        let mut outputs = Vec::new();

        // Leave any other ship the crewmember was counted on
        for (card_id, ship) in self.ships.iter_mut() {
            if target_ship.as_deref() == Some(card_id.as_str()) {
                continue;
            }
            let owned = ship.is_owned();
            if ship.object_left(crew_id) {
                outputs.push(ship_update(ship));
                if owned && !silent {
                    outputs.push(TableOutput::notice(
                        Audience::Everyone,
                        format!("{player_name} removed a crewmember from Ship defense."),
                    ));
                }
            }
        }

        let crew = self.player_mut(slot)?.captain.crew_mut();
        let was_on_defense = crew.is_on_defense(crew_id);
        let mut captain_changed = false;
        match to {
            CrewPosition::Upkeep(index) => {
                match crew.occupy(index, crew_id) {
                    Some(resource) => {
                        if !silent {
                            outputs.push(TableOutput::notice(
                                Audience::Everyone,
                                format!("{player_name} returned a crewmember to {resource} slot."),
                            ));
                        }
                    }
                    None => {
                        debug!(slot, crew = crew_id, index, "upkeep slot unavailable");
                        crew.release(crew_id);
                    }
                }
                captain_changed = was_on_defense;
            }
            CrewPosition::CaptainDefense => {
                if crew.add_defense(crew_id) {
                    captain_changed = true;
                    if !silent {
                        outputs.push(TableOutput::notice(
                            Audience::Everyone,
                            format!("{player_name} added a crewmember to Captain defense."),
                        ));
                    }
                }
            }
            CrewPosition::Ship(card_id) => {
                captain_changed = crew.release(crew_id);
                if let Some(ship) = self.ships.get_mut(&card_id) {
                    let notice = match ship.crew_arrived(slot, crew_id) {
                        CrewArrival::Defense => {
                            Some(format!("{player_name} added a crewmember to Ship defense."))
                        }
                        CrewArrival::Boarding => {
                            Some(format!("{player_name} boarded a {}.", ship.name()))
                        }
                        CrewArrival::Unchanged => None,
                    };
                    if let Some(text) = notice {
                        outputs.push(ship_update(ship));
                        if !silent {
                            outputs.push(TableOutput::notice(Audience::Everyone, text));
                        }
                    }
                }
            }
            CrewPosition::Elsewhere => {
                captain_changed = crew.release(crew_id);
            }
        }

        if captain_changed {
            outputs.extend(self.captain_update(slot));
        }
        Ok(outputs)
    }

    fn reset_round(&mut self) -> Vec<TableOutput> {
        for player in self.players.values_mut() {
            player.captain.reset_round();
            player.zone_mut(ZoneKind::CaptainUpgrades).clear();
            player.zone_mut(ZoneKind::ShipUpgrades).clear();
        }
        for ship in self.ships.values_mut() {
            ship.reset_round();
        }
        info!("round reset");

        let mut outputs: Vec<TableOutput> = self
            .players
            .keys()
            .filter_map(|slot| self.captain_update(*slot))
            .collect();
        outputs.extend(self.ships.values().map(ship_update));
        outputs
    }

    /// Advance debounce timers and settle whatever came due
    pub fn tick(&mut self, delta_time: f64) -> Vec<TableOutput> {
        let mut due = Vec::new();
        for (slot, player) in self.players.iter_mut() {
            for kind in [ZoneKind::CaptainUpgrades, ZoneKind::ShipUpgrades] {
                if let Some(silent) = player.zone_mut(kind).debounce.tick(delta_time) {
                    due.push(Settled::Zone(*slot, kind, silent));
                }
            }
            if let Some(silent) = player.resource_debounce.tick(delta_time) {
                due.push(Settled::Resources(*slot, silent));
            }
        }
        self.settle(due)
    }

    /// Settle every pending debounce immediately
    pub fn flush(&mut self) -> Vec<TableOutput> {
        let mut due = Vec::new();
        for (slot, player) in self.players.iter_mut() {
            for kind in [ZoneKind::CaptainUpgrades, ZoneKind::ShipUpgrades] {
                if let Some(silent) = player.zone_mut(kind).debounce.fire() {
                    due.push(Settled::Zone(*slot, kind, silent));
                }
            }
            if let Some(silent) = player.resource_debounce.fire() {
                due.push(Settled::Resources(*slot, silent));
            }
        }
        self.settle(due)
    }

    fn settle(&mut self, due: Vec<Settled>) -> Vec<TableOutput> {
        let mut outputs = Vec::new();
        for item in due {
            match item {
                Settled::Zone(slot, kind, silent) => match self.reconcile_zone(slot, kind, silent) {
                    Ok(mut out) => outputs.append(&mut out),
                    Err(e) => debug!(slot, error = %e, "zone reconciliation skipped"),
                },
                Settled::Resources(slot, silent) => {
                    outputs.extend(self.settle_resources(slot, silent));
                }
            }
        }
        outputs
    }

    /// Bring a unit's upgrades in line with the cards now in its zone
    pub fn reconcile_zone(&mut self, slot: PlayerSlot, kind: ZoneKind, silent: bool) -> Result<Vec<TableOutput>, TableError> {
        let player = self
            .players
            .get_mut(&slot)
            .ok_or(TableError::UnknownPlayer(slot))?;
        let category = kind.category();

        let (changes, unit) = match kind {
            ZoneKind::CaptainUpgrades => {
                let diff = diff_zone(
                    player.captain.upgrades(),
                    player.zone(kind).identities(),
                    &self.catalog,
                    category,
                );
                (apply_diff(&mut player.captain, diff), UnitRef::Captain(slot))
            }
            ZoneKind::ShipUpgrades => {
                let Some(card_id) = player.ship.clone() else {
                    debug!(slot, "no ship to receive upgrades");
                    return Ok(Vec::new());
                };
                let ship = self
                    .ships
                    .get_mut(&card_id)
                    .ok_or_else(|| TableError::UnknownShip(card_id.clone()))?;
                let diff = diff_zone(
                    ship.upgrades(),
                    player.zone(kind).identities(),
                    &self.catalog,
                    category,
                );
                (apply_diff(ship, diff), UnitRef::Ship(card_id))
            }
        };

        let player_name = player.name.clone();
        let mut outputs = Vec::new();
        let mut stats_changed = false;
        for change in changes {
            match change {
                ZoneChange::Removed(name) => {
                    stats_changed = true;
                    if !silent {
                        outputs.extend(personal_and_broadcast(
                            slot,
                            format!("You removed upgrade: {name}."),
                            format!("{player_name} removed upgrade: {name}."),
                        ));
                    }
                }
                ZoneChange::Added(name) => {
                    stats_changed = true;
                    if !silent {
                        outputs.extend(personal_and_broadcast(
                            slot,
                            format!("You played upgrade: {name}."),
                            format!("{player_name} played upgrade: {name}."),
                        ));
                    }
                }
                ZoneChange::Rejected { name, .. } => {
                    outputs.push(TableOutput::notice(
                        Audience::Player(slot),
                        format!(
                            "You must remove a {name} (either it is duplicate or there is no available slot)."
                        ),
                    ));
                }
            }
        }

        if stats_changed {
            let stats = match &unit {
                UnitRef::Captain(_) => player.captain.stats(),
                UnitRef::Ship(card_id) => match self.ships.get(card_id) {
                    Some(ship) => ship.stats(),
                    None => return Ok(outputs),
                },
            };
            outputs.insert(0, TableOutput::StatsChanged { unit, stats });
        }
        Ok(outputs)
    }

    fn settle_resources(&mut self, slot: PlayerSlot, silent: bool) -> Vec<TableOutput> {
        let Some(player) = self.players.get_mut(&slot) else {
            return Vec::new();
        };
        let changes = player.settle_resources();
        if changes.is_empty() || silent {
            return Vec::new();
        }
        vec![TableOutput::notice(
            Audience::Everyone,
            format!("{}'s resources changed: {}.", player.name, changes.join(", ")),
        )]
    }

    /// Deal ships into the market for the players currently seated
    pub fn deal_market(&mut self, rng: &mut impl Rng) -> Vec<TableOutput> {
        for ship in self.ships.values().filter(|s| s.is_owned()) {
            self.market.remove(&ship.card_id);
        }
        let dealt = self.market.draw(self.players.len(), rng);
        dealt
            .iter()
            .filter_map(|card_id| self.ships.get(card_id))
            .map(ship_update)
            .collect()
    }

    /// Discard the whole market and deal a fresh one
    pub fn redraw_market(&mut self, rng: &mut impl Rng) -> Vec<TableOutput> {
        for card_id in self.market.played() {
            if let Some(ship) = self.ships.get_mut(card_id).filter(|s| !s.is_owned()) {
                ship.reset_round();
            }
        }
        self.market.discard_played();
        self.deal_market(rng)
    }

    pub fn shuffle_market(&mut self, rng: &mut impl Rng) {
        self.market.shuffle(rng);
    }

    /// Scrap a single market ship to the discard pile
    pub fn discard_market_ship(&mut self, card_id: &str) -> bool {
        if !self.market.discard_ship(card_id) {
            return false;
        }
        if let Some(ship) = self.ships.get_mut(card_id).filter(|s| !s.is_owned()) {
            ship.reset_round();
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stat_block::StatSnapshot;

    fn table() -> Table {
        let mut table = Table::bundled();
        table
            .handle(TableEvent::PlayerSeated {
                slot: 0,
                name: "Anne".to_string(),
            })
            .unwrap();
        table
    }

    fn enter(table: &mut Table, card_id: &str, identity: &str) {
        table
            .handle(TableEvent::UpgradeCardEntered {
                slot: 0,
                zone: ZoneKind::CaptainUpgrades,
                card_id: card_id.to_string(),
                identity: identity.to_string(),
            })
            .unwrap();
    }

    #[test]
    fn test_seating_reports_base_stats() {
        let mut table = Table::bundled();
        let out = table
            .handle(TableEvent::PlayerSeated {
                slot: 2,
                name: "Mary".to_string(),
            })
            .unwrap();
        match &out[0] {
            TableOutput::StatsChanged {
                unit: UnitRef::Captain(2),
                stats: StatSnapshot::Captain(stats),
            } => {
                assert_eq!(stats.combat_value, 2);
                assert_eq!(stats.defense, 1);
                assert_eq!(stats.precision, 2);
            }
            other => panic!("unexpected output {other:?}"),
        }
    }

    #[test]
    fn test_upgrade_waits_for_debounce() {
        let mut table = table();
        enter(&mut table, "card-1", "Cutlass");
        assert!(table.tick(0.2).is_empty());
        assert!(table.has_pending());

        let out = table.tick(0.4);
        assert!(out.iter().any(|o| o.text() == Some("You played upgrade: Cutlass.")));
        assert!(out.iter().any(|o| o.text() == Some("Anne played upgrade: Cutlass.")));
        assert!(!table.has_pending());
    }

    #[test]
    fn test_unknown_player_is_an_error() {
        let mut table = table();
        let err = table
            .handle(TableEvent::AbilityRemoved {
                slot: 5,
                name: "Sturdy".to_string(),
            })
            .unwrap_err();
        assert_eq!(err, TableError::UnknownPlayer(5));
    }

    #[test]
    fn test_silent_snapshot_has_no_notices() {
        let mut table = table();
        table
            .handle(TableEvent::ZoneSnapshot {
                slot: 0,
                zone: ZoneKind::CaptainUpgrades,
                cards: vec![("card-1".to_string(), "Cutlass".to_string())],
                silent: true,
            })
            .unwrap();
        let out = table.flush();
        assert_eq!(out.len(), 1);
        assert!(matches!(out[0], TableOutput::StatsChanged { .. }));
    }

    #[test]
    fn test_ship_zone_without_ship_is_ignored() {
        let mut table = table();
        table
            .handle(TableEvent::UpgradeCardEntered {
                slot: 0,
                zone: ZoneKind::ShipUpgrades,
                card_id: "card-9".to_string(),
                identity: "Hold".to_string(),
            })
            .unwrap();
        assert!(table.flush().is_empty());
    }

    #[test]
    fn test_resources_announced_after_debounce() {
        let mut table = table();
        table
            .handle(TableEvent::ResourcesCounted {
                slot: 0,
                cards: vec![crate::resource::Resource::Rum, crate::resource::Resource::Rum],
                silent: false,
            })
            .unwrap();
        assert!(table.tick(0.5).is_empty());
        let out = table.tick(0.5);
        assert_eq!(out[0].text(), Some("Anne's resources changed: Rum: +2."));
    }
}
