//! Ship - A ship card, either in the market or owned by a player

use super::{remove_named, Upgradeable};
use crate::catalog::{ShipSpec, Upgrade};
use crate::combat::ShipCombat;
use crate::slot::{check_ship, EquipError};
use crate::source::{BaseStatsSource, CrewDefenseSource, UpgradeSource};
use crate::stat_block::{accumulate, ShipStats, StatSnapshot};
use crate::types::{PlayerSlot, UpgradeCategory};

/// What a crewmember arriving on a ship did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrewArrival {
    /// Owned ship: the crewmember stands guard
    Defense,
    /// Unowned ship: the crewmember boards it and counts as damage
    Boarding,
    /// Already counted
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct Ship {
    pub card_id: String,
    pub spec: ShipSpec,
    upgrades: Vec<Upgrade>,
    crew_on_defense: Vec<String>,
    owner: Option<PlayerSlot>,
    combat: ShipCombat,
}

impl Ship {
    pub fn new(card_id: impl Into<String>, spec: ShipSpec) -> Self {
        Ship {
            card_id: card_id.into(),
            spec,
            upgrades: Vec::new(),
            crew_on_defense: Vec::new(),
            owner: None,
            combat: ShipCombat::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    pub fn owner(&self) -> Option<PlayerSlot> {
        self.owner
    }

    pub fn is_owned(&self) -> bool {
        self.owner.is_some()
    }

    /// Hand the ship to a player. Combat markers no longer apply, and
    /// upgrades or guards left by a different owner come off.
    pub fn claim(&mut self, slot: PlayerSlot) {
        if self.owner.is_some_and(|owner| owner != slot) {
            self.upgrades.clear();
            self.crew_on_defense.clear();
        }
        self.owner = Some(slot);
        self.combat.clear();
    }

    /// The owner gave the ship up; it goes back to being an empty card
    pub fn release(&mut self) {
        self.owner = None;
        self.reset_round();
    }

    pub fn combat(&self) -> &ShipCombat {
        &self.combat
    }

    pub fn crew_on_defense(&self) -> usize {
        self.crew_on_defense.len()
    }

    pub fn remaining_health(&self) -> u32 {
        self.combat.remaining_health(self.spec.health)
    }

    /// Damage cubes only land on ships nobody owns
    pub fn add_damage_cube(&mut self, slot: PlayerSlot, cube_id: &str) -> bool {
        !self.is_owned() && self.combat.add_damage_cube(slot, cube_id)
    }

    pub fn crew_arrived(&mut self, slot: PlayerSlot, crew_id: &str) -> CrewArrival {
        if self.is_owned() {
            if self.crew_on_defense.iter().any(|c| c == crew_id) {
                return CrewArrival::Unchanged;
            }
            self.crew_on_defense.push(crew_id.to_string());
            CrewArrival::Defense
        } else if self.combat.add_boarding_crew(slot, crew_id) {
            CrewArrival::Boarding
        } else {
            CrewArrival::Unchanged
        }
    }

    /// Take a crewmember or damage cube off the ship. True if it was counted.
    pub fn object_left(&mut self, object_id: &str) -> bool {
        if let Some(idx) = self.crew_on_defense.iter().position(|c| c == object_id) {
            self.crew_on_defense.remove(idx);
            return true;
        }
        self.combat.remove_object(object_id).is_some()
    }

    pub fn ship_stats(&self) -> ShipStats {
        let base = BaseStatsSource::ship(self.spec.combat_value, self.spec.defense, self.spec.cargo);
        let upgrades = UpgradeSource::new(&self.upgrades);
        let crew = CrewDefenseSource::new(self.crew_on_defense.len());
        ShipStats::from(accumulate(&[&base, &upgrades, &crew]))
    }

    pub fn reset_round(&mut self) {
        self.upgrades.clear();
        self.crew_on_defense.clear();
        self.combat.clear();
    }
}

impl Upgradeable for Ship {
    fn category(&self) -> UpgradeCategory {
        UpgradeCategory::Ship
    }

    fn upgrades(&self) -> &[Upgrade] {
        &self.upgrades
    }

    fn equip(&mut self, upgrade: &Upgrade) -> Result<(), EquipError> {
        check_ship(&self.upgrades, upgrade)?;
        self.upgrades.push(upgrade.clone());
        Ok(())
    }

    fn try_unequip(&mut self, name: &str) -> bool {
        remove_named(&mut self.upgrades, name)
    }

    fn clear_upgrades(&mut self) {
        self.upgrades.clear();
    }

    fn stats(&self) -> StatSnapshot {
        StatSnapshot::Ship(self.ship_stats())
    }
}
