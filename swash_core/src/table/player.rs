//! Player seat - Captain, owned ship, upgrade zones and resources

use super::debounce::Debouncer;
use crate::config::GameConstants;
use crate::resource::{Resource, ResourceTally};
use crate::types::{PlayerSlot, ZoneKind};
use crate::unit::Captain;

/// Upgrade cards lying in one of a player's zones, keyed by card id
#[derive(Debug, Clone)]
pub struct UpgradeZone {
    cards: Vec<(String, String)>,
    pub(crate) debounce: Debouncer,
}

impl UpgradeZone {
    pub fn new(delay_secs: f64) -> Self {
        UpgradeZone {
            cards: Vec::new(),
            debounce: Debouncer::new(delay_secs),
        }
    }

    /// Returns false if the card was already in the zone
    pub fn insert(&mut self, card_id: &str, identity: &str) -> bool {
        if self.cards.iter().any(|(id, _)| id == card_id) {
            return false;
        }
        self.cards.push((card_id.to_string(), identity.to_string()));
        true
    }

    pub fn remove(&mut self, card_id: &str) -> bool {
        match self.cards.iter().position(|(id, _)| id == card_id) {
            Some(idx) => {
                self.cards.remove(idx);
                true
            }
            None => false,
        }
    }

    pub fn replace(&mut self, cards: Vec<(String, String)>) {
        self.cards = cards;
    }

    pub fn identities(&self) -> impl Iterator<Item = &str> {
        self.cards.iter().map(|(_, identity)| identity.as_str())
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn is_pending(&self) -> bool {
        self.debounce.is_pending()
    }

    pub fn clear(&mut self) {
        self.cards.clear();
        self.debounce.cancel();
    }
}

#[derive(Debug, Clone)]
pub struct Player {
    pub slot: PlayerSlot,
    pub name: String,
    pub captain: Captain,
    /// Card id of the ship this player sails
    pub ship: Option<String>,
    captain_zone: UpgradeZone,
    ship_zone: UpgradeZone,
    resources: ResourceTally,
    counted_resources: ResourceTally,
    pub(crate) resource_debounce: Debouncer,
}

impl Player {
    pub fn new(slot: PlayerSlot, name: impl Into<String>, constants: &GameConstants) -> Self {
        let upgrade_delay = constants.timing.upgrade_debounce_secs;
        Player {
            slot,
            name: name.into(),
            captain: Captain::new(slot, constants),
            ship: None,
            captain_zone: UpgradeZone::new(upgrade_delay),
            ship_zone: UpgradeZone::new(upgrade_delay),
            resources: ResourceTally::new(),
            counted_resources: ResourceTally::new(),
            resource_debounce: Debouncer::new(constants.timing.resource_debounce_secs),
        }
    }

    pub fn zone(&self, kind: ZoneKind) -> &UpgradeZone {
        match kind {
            ZoneKind::CaptainUpgrades => &self.captain_zone,
            ZoneKind::ShipUpgrades => &self.ship_zone,
        }
    }

    pub fn zone_mut(&mut self, kind: ZoneKind) -> &mut UpgradeZone {
        match kind {
            ZoneKind::CaptainUpgrades => &mut self.captain_zone,
            ZoneKind::ShipUpgrades => &mut self.ship_zone,
        }
    }

    /// Last announced resource tally
    pub fn resources(&self) -> &ResourceTally {
        &self.resources
    }

    /// Record the resource cards currently in the play area; announced after the debounce
    pub fn count_resources(&mut self, cards: &[Resource], silent: bool) {
        self.counted_resources = ResourceTally::from_cards(cards);
        self.resource_debounce.request(silent);
    }

    /// Adopt the latest count, returning the change strings ("Rum: +2")
    pub(crate) fn settle_resources(&mut self) -> Vec<String> {
        let changes = self.resources.changes_to(&self.counted_resources);
        if !changes.is_empty() {
            self.resources = self.counted_resources.clone();
        }
        changes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zone_tracks_cards_by_id() {
        let mut zone = UpgradeZone::new(0.5);
        assert!(zone.insert("card-1", "Cutlass"));
        assert!(!zone.insert("card-1", "Cutlass"));
        assert!(zone.insert("card-2", "Cutlass"));
        assert_eq!(zone.identities().collect::<Vec<_>>(), vec!["Cutlass", "Cutlass"]);

        assert!(zone.remove("card-1"));
        assert!(!zone.remove("card-1"));
        assert_eq!(zone.len(), 1);
    }

    #[test]
    fn test_settle_resources_reports_changes() {
        let mut player = Player::new(0, "Anne", &GameConstants::default());
        player.count_resources(&[Resource::Rum, Resource::Rum, Resource::Gold], false);
        assert!(player.resource_debounce.is_pending());

        let changes = player.settle_resources();
        assert_eq!(changes, vec!["Rum: +2".to_string(), "Gold: +1".to_string()]);
        assert_eq!(player.resources().get(Resource::Rum), 2);

        assert!(player.settle_resources().is_empty());
    }
}
