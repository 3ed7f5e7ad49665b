//! Captain - A player's captain sheet

use super::abilities::{find_socket, AbilitySockets, EquippedAbility};
use super::crew::CrewBoard;
use super::{remove_named, Upgradeable};
use crate::catalog::{AbilitySpec, Upgrade};
use crate::config::GameConstants;
use crate::slot::{EquipError, SlotRules, STURDY};
use crate::source::{AbilitySource, BaseStatsSource, CrewDefenseSource, UpgradeSource};
use crate::stat_block::{accumulate, breakdown, CaptainStats, StatAccumulator, StatSnapshot};
use crate::types::{CaptainSocket, PlayerSlot, UpgradeCategory};
use tracing::{debug, info};

/// Captain sheet with its upgrades, ability sockets and crew
#[derive(Debug, Clone)]
pub struct Captain {
    pub player: PlayerSlot,
    base: CaptainStats,
    upgrades: Vec<Upgrade>,
    abilities: AbilitySockets,
    crew: CrewBoard,
    rules: SlotRules,
}

impl Captain {
    pub fn new(player: PlayerSlot, constants: &GameConstants) -> Self {
        let c = &constants.captain;
        Captain {
            player,
            base: CaptainStats {
                combat_value: c.combat_value,
                defense: c.defense,
                precision: c.precision,
            },
            upgrades: Vec::new(),
            abilities: Default::default(),
            crew: CrewBoard::new(&c.upkeep),
            rules: SlotRules::from(&constants.slots),
        }
    }

    pub fn base(&self) -> CaptainStats {
        self.base
    }

    pub fn abilities(&self) -> &AbilitySockets {
        &self.abilities
    }

    pub fn ability(&self, socket: CaptainSocket) -> Option<&EquippedAbility> {
        self.abilities[socket.index()].as_ref()
    }

    pub fn crew(&self) -> &CrewBoard {
        &self.crew
    }

    pub fn crew_mut(&mut self) -> &mut CrewBoard {
        &mut self.crew
    }

    /// Sturdy comes from an ability card in any socket or an upgrade of that name.
    /// Facing does not matter; the card only has to be on the sheet.
    pub fn is_sturdy(&self) -> bool {
        self.abilities.iter().flatten().any(|a| a.name() == STURDY)
            || self.upgrades.iter().any(|u| u.name == STURDY)
    }

    /// Snap an ability into its socket, returning whatever was displaced
    pub fn snap_ability(&mut self, spec: AbilitySpec, face_up: bool) -> Option<EquippedAbility> {
        if let Some(socket) = find_socket(&self.abilities, &spec.name) {
            self.abilities[socket.index()] = None;
        }
        let index = spec.socket.index();
        info!(player = self.player, ability = %spec.name, face_up, "ability snapped");
        self.abilities[index].replace(EquippedAbility::new(spec, face_up))
    }

    /// Set the facing of an equipped ability. Returns true when it changed.
    pub fn flip_ability(&mut self, name: &str, face_up: bool) -> bool {
        match self.equipped_mut(name) {
            Some(ability) if ability.face_up != face_up => {
                ability.face_up = face_up;
                true
            }
            _ => false,
        }
    }

    pub fn remove_ability(&mut self, name: &str) -> Option<EquippedAbility> {
        let socket = find_socket(&self.abilities, name)?;
        self.abilities[socket.index()].take()
    }

    /// Toggle the exhausted marker, returning the new state.
    ///
    /// `None` when the ability is not equipped or cannot be exhausted.
    pub fn toggle_exhausted(&mut self, name: &str) -> Option<bool> {
        let ability = self.equipped_mut(name)?;
        if !ability.spec.exhaustible {
            debug!(ability = name, "ability cannot be exhausted");
            return None;
        }
        ability.exhausted = !ability.exhausted;
        Some(ability.exhausted)
    }

    fn equipped_mut(&mut self, name: &str) -> Option<&mut EquippedAbility> {
        self.abilities
            .iter_mut()
            .flatten()
            .find(|a| a.name() == name)
    }

    pub fn captain_stats(&self) -> CaptainStats {
        let (base, upgrades, abilities, crew) = self.sources();
        CaptainStats::from(accumulate(&[&base, &upgrades, &abilities, &crew]))
    }

    /// Contribution of each stat source, for detail views
    pub fn breakdown(&self) -> Vec<(String, StatAccumulator)> {
        let (base, upgrades, abilities, crew) = self.sources();
        breakdown(&[&base, &upgrades, &abilities, &crew])
    }

    fn sources(&self) -> (BaseStatsSource, UpgradeSource<'_>, AbilitySource<'_>, CrewDefenseSource) {
        (
            BaseStatsSource::captain(self.base.combat_value, self.base.defense, self.base.precision),
            UpgradeSource::new(&self.upgrades),
            AbilitySource::new(&self.abilities),
            CrewDefenseSource::new(self.crew.defense_count()),
        )
    }

    /// New round: upgrades come off, guards stand down, abilities refresh
    pub fn reset_round(&mut self) {
        self.upgrades.clear();
        self.crew.clear_defense();
        for ability in self.abilities.iter_mut().flatten() {
            ability.exhausted = false;
        }
    }
}

impl Upgradeable for Captain {
    fn category(&self) -> UpgradeCategory {
        UpgradeCategory::Captain
    }

    fn upgrades(&self) -> &[Upgrade] {
        &self.upgrades
    }

    fn equip(&mut self, upgrade: &Upgrade) -> Result<(), EquipError> {
        self.rules
            .check_captain(&self.upgrades, upgrade, self.is_sturdy())?;
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
        StatSnapshot::Captain(self.captain_stats())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AbilityStat;
    use crate::types::SlotLocation;

    fn captain() -> Captain {
        Captain::new(0, &GameConstants::default())
    }

    fn cutlass() -> Upgrade {
        Upgrade::captain("Cutlass", SlotLocation::OneHandWeapon, 2, 0, 0)
    }

    fn dagger() -> Upgrade {
        Upgrade::captain("Dagger", SlotLocation::OneHandWeapon, 1, 0, 1)
    }

    fn crossbow() -> Upgrade {
        Upgrade::captain("Crossbow", SlotLocation::TwoHandWeapon, 2, 0, 1)
    }

    fn sturdy() -> AbilitySpec {
        AbilitySpec::new(STURDY, CaptainSocket::Leg).with_face_down(AbilityStat {
            combat_value: -1,
            ..Default::default()
        })
    }

    #[test]
    fn test_weapon_sequence() {
        let mut captain = captain();
        assert_eq!(captain.captain_stats().combat_value, 2);

        assert!(captain.try_equip(&cutlass()));
        assert_eq!(captain.captain_stats().combat_value, 4);

        assert!(captain.try_equip(&dagger()));
        let stats = captain.captain_stats();
        assert_eq!(stats.combat_value, 5);
        assert_eq!(stats.precision, 3);

        assert!(!captain.try_equip(&crossbow()));
        assert_eq!(captain.captain_stats().combat_value, 5);
        assert_eq!(captain.upgrades().len(), 2);
    }

    #[test]
    fn test_duplicate_leaves_list_unchanged() {
        let mut captain = captain();
        assert!(captain.try_equip(&cutlass()));
        assert_eq!(
            captain.equip(&cutlass()),
            Err(EquipError::Duplicate("Cutlass".to_string()))
        );
        assert_eq!(captain.upgrades().len(), 1);
    }

    #[test]
    fn test_unequip_preserves_order() {
        let mut captain = captain();
        let brain = Upgrade::captain("Navigation", SlotLocation::Brain, 0, 0, 1);
        captain.try_equip(&cutlass());
        captain.try_equip(&brain);
        captain.try_equip(&dagger());

        assert!(captain.try_unequip("Navigation"));
        assert!(!captain.try_unequip("Navigation"));
        let names: Vec<&str> = captain.upgrades().iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Cutlass", "Dagger"]);
    }

    #[test]
    fn test_sturdy_allows_extra_weapon() {
        let mut captain = captain();
        captain.try_equip(&cutlass());
        assert!(!captain.is_sturdy());

        captain.snap_ability(sturdy(), false);
        assert!(captain.is_sturdy());
        assert!(captain.try_equip(&crossbow()));

        let stats = captain.captain_stats();
        assert_eq!(stats.combat_value, 2 + 2 + 2 - 1);
    }

    #[test]
    fn test_sturdy_removal_takes_effect_next_equip() {
        let mut captain = captain();
        captain.snap_ability(sturdy(), true);
        let torso = |name: &str| Upgrade::captain(name, SlotLocation::TorsoArmor, 0, 2, 0);
        assert!(captain.try_equip(&torso("Spaulders")));
        assert!(captain.try_equip(&torso("Cuirass")));

        assert!(captain.remove_ability(STURDY).is_some());
        assert!(!captain.is_sturdy());
        assert_eq!(captain.upgrades().len(), 2);
        assert!(!captain.try_equip(&torso("Breastplate")));
    }

    #[test]
    fn test_crew_on_defense_adds_defense() {
        let mut captain = captain();
        captain.crew_mut().add_defense("crew-1");
        captain.crew_mut().add_defense("crew-2");
        assert_eq!(captain.captain_stats().defense, 3);

        captain.crew_mut().release("crew-1");
        assert_eq!(captain.captain_stats().defense, 2);
    }

    #[test]
    fn test_flip_and_exhaust() {
        let mut captain = captain();
        let steadfast = AbilitySpec::new("Steadfast", CaptainSocket::Hand)
            .exhaustible()
            .with_face_up(AbilityStat {
                defense: 1,
                ..Default::default()
            });
        captain.snap_ability(steadfast, true);
        assert_eq!(captain.captain_stats().defense, 2);

        assert!(captain.flip_ability("Steadfast", false));
        assert!(!captain.flip_ability("Steadfast", false));
        assert_eq!(captain.captain_stats().defense, 1);

        assert_eq!(captain.toggle_exhausted("Steadfast"), Some(true));
        captain.reset_round();
        assert_eq!(
            captain.ability(CaptainSocket::Hand).map(|a| a.exhausted),
            Some(false)
        );
    }

    #[test]
    fn test_breakdown_lists_sources() {
        let captain = captain();
        let ids: Vec<String> = captain.breakdown().into_iter().map(|(id, _)| id).collect();
        assert_eq!(ids, vec!["base_stats", "upgrades", "abilities", "crew_defense"]);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::slot::weapon_hands_used;
    use proptest::prelude::*;

    fn captain_upgrades() -> Vec<Upgrade> {
        Catalog::bundled()
            .upgrades()
            .iter()
            .filter(|u| u.category() == UpgradeCategory::Captain)
            .cloned()
            .collect()
    }

    fn sturdy_spec() -> AbilitySpec {
        AbilitySpec::new(STURDY, CaptainSocket::Leg)
    }

    proptest! {
        /// Property: Equipping never creates duplicate names and never exceeds weapon hands
        #[test]
        fn prop_equip_respects_slots(picks in prop::collection::vec(0usize..17, 0..24), sturdy in any::<bool>()) {
            let pool = captain_upgrades();
            let mut captain = Captain::new(0, &GameConstants::default());
            if sturdy {
                captain.snap_ability(sturdy_spec(), false);
            }
            for idx in picks {
                captain.try_equip(&pool[idx % pool.len()]);
            }

            let mut names: Vec<&str> = captain.upgrades().iter().map(|u| u.name.as_str()).collect();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            prop_assert_eq!(names.len(), total);

            let limit = if sturdy { 4 } else { 2 };
            prop_assert!(weapon_hands_used(captain.upgrades()) <= limit);
        }

        /// Property: A failed equip leaves the captain unchanged
        #[test]
        fn prop_failed_equip_changes_nothing(picks in prop::collection::vec(0usize..17, 1..12), extra in 0usize..17) {
            let pool = captain_upgrades();
            let mut captain = Captain::new(0, &GameConstants::default());
            for idx in picks {
                captain.try_equip(&pool[idx % pool.len()]);
            }
            let before: Vec<Upgrade> = captain.upgrades().to_vec();
            let stats_before = captain.stats();

            if !captain.try_equip(&pool[extra % pool.len()]) {
                prop_assert_eq!(captain.upgrades(), before.as_slice());
                prop_assert_eq!(captain.stats(), stats_before);
            }
        }

        /// Property: Aggregation is idempotent
        #[test]
        fn prop_stats_idempotent(picks in prop::collection::vec(0usize..17, 0..10), crew in 0usize..5) {
            let pool = captain_upgrades();
            let mut captain = Captain::new(0, &GameConstants::default());
            for idx in picks {
                captain.try_equip(&pool[idx % pool.len()]);
            }
            for i in 0..crew {
                captain.crew_mut().add_defense(&format!("crew-{i}"));
            }
            prop_assert_eq!(captain.stats(), captain.stats());
        }

        /// Property: Unequip then re-equip restores membership
        #[test]
        fn prop_unequip_reequip_restores(picks in prop::collection::vec(0usize..17, 1..10), which in 0usize..10) {
            let pool = captain_upgrades();
            let mut captain = Captain::new(0, &GameConstants::default());
            for idx in picks {
                captain.try_equip(&pool[idx % pool.len()]);
            }
            prop_assume!(!captain.upgrades().is_empty());
            let target = captain.upgrades()[which % captain.upgrades().len()].clone();
            let stats_before = captain.stats();

            prop_assert!(captain.try_unequip(&target.name));
            prop_assert!(!captain.has_upgrade(&target.name));
            prop_assert!(captain.try_equip(&target));
            prop_assert!(captain.has_upgrade(&target.name));
            prop_assert_eq!(captain.stats(), stats_before);
        }
    }
}
