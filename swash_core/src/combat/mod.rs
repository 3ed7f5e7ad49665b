//! Combat tracking on unowned ships
//!
//! Players attack a ship in the market by placing damage cubes on it and
//! boarding it with crew. Both count toward damage taken; the leaders
//! decide who claims the ship when it sinks.

use crate::types::PlayerSlot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Objects each player has committed to an unowned ship
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipCombat {
    damage_cubes: BTreeMap<PlayerSlot, Vec<String>>,
    boarding_crew: BTreeMap<PlayerSlot, Vec<String>>,
}

fn add_object(set: &mut BTreeMap<PlayerSlot, Vec<String>>, slot: PlayerSlot, id: &str) -> bool {
    let entry = set.entry(slot).or_default();
    if entry.iter().any(|existing| existing == id) {
        return false;
    }
    entry.push(id.to_string());
    true
}

fn remove_object(set: &mut BTreeMap<PlayerSlot, Vec<String>>, id: &str) -> Option<PlayerSlot> {
    for (slot, ids) in set.iter_mut() {
        if let Some(idx) = ids.iter().position(|existing| existing == id) {
            ids.remove(idx);
            return Some(*slot);
        }
    }
    None
}

/// Slot holding strictly the most objects; earlier slots win ties
fn leader(set: &BTreeMap<PlayerSlot, Vec<String>>) -> Option<PlayerSlot> {
    let mut current: Option<(PlayerSlot, usize)> = None;
    for (slot, ids) in set {
        let best = current.map(|(_, n)| n).unwrap_or(0);
        if ids.len() > best {
            current = Some((*slot, ids.len()));
        }
    }
    current.map(|(slot, _)| slot)
}

impl ShipCombat {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns false when the cube was already counted for that player
    pub fn add_damage_cube(&mut self, slot: PlayerSlot, cube_id: &str) -> bool {
        add_object(&mut self.damage_cubes, slot, cube_id)
    }

    pub fn add_boarding_crew(&mut self, slot: PlayerSlot, crew_id: &str) -> bool {
        add_object(&mut self.boarding_crew, slot, crew_id)
    }

    /// Remove a cube or crewmember, returning the slot it belonged to
    pub fn remove_object(&mut self, object_id: &str) -> Option<PlayerSlot> {
        remove_object(&mut self.damage_cubes, object_id)
            .or_else(|| remove_object(&mut self.boarding_crew, object_id))
    }

    pub fn damage_cubes(&self, slot: PlayerSlot) -> usize {
        self.damage_cubes.get(&slot).map_or(0, Vec::len)
    }

    pub fn boarding_crew(&self, slot: PlayerSlot) -> usize {
        self.boarding_crew.get(&slot).map_or(0, Vec::len)
    }

    /// Every cube and every boarding crewmember counts as one damage
    pub fn damage_taken(&self) -> u32 {
        let cubes: usize = self.damage_cubes.values().map(Vec::len).sum();
        let crew: usize = self.boarding_crew.values().map(Vec::len).sum();
        (cubes + crew) as u32
    }

    pub fn remaining_health(&self, health: u32) -> u32 {
        health.saturating_sub(self.damage_taken())
    }

    pub fn damage_leader(&self) -> Option<PlayerSlot> {
        leader(&self.damage_cubes)
    }

    /// Player with the most boarding crew, falling back to the damage leader
    pub fn attack_leader(&self) -> Option<PlayerSlot> {
        leader(&self.boarding_crew).or_else(|| self.damage_leader())
    }

    pub fn is_empty(&self) -> bool {
        self.damage_taken() == 0
    }

    pub fn clear(&mut self) {
        self.damage_cubes.clear();
        self.boarding_crew.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_damage_counts_cubes_and_crew() {
        let mut combat = ShipCombat::new();
        assert!(combat.add_damage_cube(0, "cube-1"));
        assert!(combat.add_damage_cube(1, "cube-2"));
        assert!(combat.add_boarding_crew(1, "crew-7"));

        assert_eq!(combat.damage_taken(), 3);
        assert_eq!(combat.remaining_health(13), 10);
        assert_eq!(combat.remaining_health(2), 0);
    }

    #[test]
    fn test_same_object_counted_once() {
        let mut combat = ShipCombat::new();
        assert!(combat.add_damage_cube(0, "cube-1"));
        assert!(!combat.add_damage_cube(0, "cube-1"));
        assert_eq!(combat.damage_cubes(0), 1);
    }

    #[test]
    fn test_damage_leader_first_wins_ties() {
        let mut combat = ShipCombat::new();
        assert_eq!(combat.damage_leader(), None);

        combat.add_damage_cube(2, "a");
        combat.add_damage_cube(1, "b");
        assert_eq!(combat.damage_leader(), Some(1));

        combat.add_damage_cube(2, "c");
        assert_eq!(combat.damage_leader(), Some(2));
    }

    #[test]
    fn test_attack_leader_prefers_boarding() {
        let mut combat = ShipCombat::new();
        combat.add_damage_cube(0, "a");
        combat.add_damage_cube(0, "b");
        assert_eq!(combat.attack_leader(), Some(0));

        combat.add_boarding_crew(3, "crew");
        assert_eq!(combat.attack_leader(), Some(3));
    }

    #[test]
    fn test_remove_object() {
        let mut combat = ShipCombat::new();
        combat.add_damage_cube(0, "a");
        combat.add_boarding_crew(1, "crew");

        assert_eq!(combat.remove_object("crew"), Some(1));
        assert_eq!(combat.remove_object("crew"), None);
        assert_eq!(combat.remove_object("a"), Some(0));
        assert!(combat.is_empty());
    }
}
