//! Catalog - Read-only lookup of game content (upgrades, abilities, ships)

mod ability;
mod ship;
mod upgrade;

pub use ability::{AbilitySpec, AbilityStat};
pub use ship::ShipSpec;
pub use upgrade::{Upgrade, UpgradeKind};

use serde::Deserialize;
use std::borrow::Cow;
use tracing::debug;

/// Metadata some card objects carry instead of a bare name
#[derive(Debug, Deserialize)]
struct CardMetadata {
    #[serde(rename = "upgradeName")]
    upgrade_name: String,
}

/// Resolve a card identity to an upgrade name.
///
/// Plain names pass through unchanged. Identities starting with `{` are
/// decoded as card metadata JSON (`{"upgradeName": "Cutlass"}`).
pub fn card_name(identity: &str) -> Option<Cow<'_, str>> {
    let trimmed = identity.trim();
    if trimmed.starts_with('{') {
        match serde_json::from_str::<CardMetadata>(trimmed) {
            Ok(meta) => Some(Cow::Owned(meta.upgrade_name)),
            Err(e) => {
                debug!(identity, error = %e, "card metadata could not be decoded");
                None
            }
        }
    } else if trimmed.is_empty() {
        None
    } else {
        Some(Cow::Borrowed(trimmed))
    }
}

/// Registry of all game content, owned by the table
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    upgrades: Vec<Upgrade>,
    abilities: Vec<AbilitySpec>,
    ships: Vec<ShipSpec>,
}

impl Catalog {
    pub fn new(upgrades: Vec<Upgrade>, abilities: Vec<AbilitySpec>, ships: Vec<ShipSpec>) -> Self {
        Catalog {
            upgrades,
            abilities,
            ships,
        }
    }

    /// Catalog built from the content files shipped with the crate
    pub fn bundled() -> Self {
        crate::config::bundled_catalog()
    }

    /// Look up the upgrade printed on a card.
    ///
    /// Unknown identities return `None`; callers ignore them.
    pub fn lookup(&self, identity: &str) -> Option<&Upgrade> {
        let name = card_name(identity)?;
        let found = self.upgrade(&name);
        if found.is_none() {
            debug!(card = %name, "no upgrade in catalog");
        }
        found
    }

    pub fn upgrade(&self, name: &str) -> Option<&Upgrade> {
        self.upgrades.iter().find(|u| u.name == name)
    }

    pub fn ability(&self, name: &str) -> Option<&AbilitySpec> {
        self.abilities.iter().find(|a| a.name == name)
    }

    pub fn ship(&self, name: &str) -> Option<&ShipSpec> {
        self.ships.iter().find(|s| s.name == name)
    }

    pub fn upgrades(&self) -> &[Upgrade] {
        &self.upgrades
    }

    pub fn abilities(&self) -> &[AbilitySpec] {
        &self.abilities
    }

    pub fn ships(&self) -> &[ShipSpec] {
        &self.ships
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::SlotLocation;

    fn small_catalog() -> Catalog {
        Catalog::new(
            vec![
                Upgrade::ship("Hold", 0, 0, 1),
                Upgrade::captain("Cutlass", SlotLocation::OneHandWeapon, 2, 0, 0),
            ],
            vec![],
            vec![],
        )
    }

    #[test]
    fn test_lookup_by_name() {
        let catalog = small_catalog();
        let hold = catalog.lookup("Hold").unwrap();
        assert_eq!(hold.cargo(), 1);
    }

    #[test]
    fn test_lookup_by_metadata() {
        let catalog = small_catalog();
        let cutlass = catalog.lookup(r#"{"upgradeName": "Cutlass"}"#).unwrap();
        assert_eq!(cutlass.combat_value, 2);
    }

    #[test]
    fn test_unknown_identity_is_none() {
        let catalog = small_catalog();
        assert!(catalog.lookup("Kraken").is_none());
        assert!(catalog.lookup("").is_none());
        assert!(catalog.lookup("{not json").is_none());
    }

    #[test]
    fn test_card_name_passthrough() {
        assert_eq!(card_name("  Dagger ").as_deref(), Some("Dagger"));
    }
}
