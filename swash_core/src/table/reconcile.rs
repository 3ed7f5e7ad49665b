//! Zone reconciliation - Bring a unit's upgrades in line with the cards in its zone

use crate::catalog::{Catalog, Upgrade};
use crate::slot::EquipError;
use crate::types::UpgradeCategory;
use crate::unit::Upgradeable;
use tracing::{info, warn};

/// Changes needed to match a zone snapshot
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ZoneDiff {
    /// Equipped names with no card left in the zone
    pub removed: Vec<String>,
    /// Catalog hits of the right category not yet equipped, in zone order
    pub added: Vec<Upgrade>,
}

impl ZoneDiff {
    pub fn is_empty(&self) -> bool {
        self.removed.is_empty() && self.added.is_empty()
    }
}

/// Outcome of one step of reconciliation
#[derive(Debug, Clone, PartialEq)]
pub enum ZoneChange {
    Removed(String),
    Added(String),
    Rejected { name: String, reason: EquipError },
}

/// Compare what is equipped with the identities currently in the zone.
///
/// Unknown identities are skipped. Upgrades of the other category are
/// neither added nor treated as present.
pub fn diff_zone<'a>(
    equipped: &[Upgrade],
    identities: impl IntoIterator<Item = &'a str>,
    catalog: &Catalog,
    category: UpgradeCategory,
) -> ZoneDiff {
    let present: Vec<&Upgrade> = identities
        .into_iter()
        .filter_map(|identity| catalog.lookup(identity))
        .filter(|u| u.category() == category)
        .collect();

    let removed = equipped
        .iter()
        .filter(|u| !present.iter().any(|p| p.name == u.name))
        .map(|u| u.name.clone())
        .collect();

    let added = present
        .into_iter()
        .filter(|p| !equipped.iter().any(|u| u.name == p.name))
        .cloned()
        .collect();

    ZoneDiff { removed, added }
}

/// Apply removals first, then additions, reporting each step
pub fn apply_diff(unit: &mut dyn Upgradeable, diff: ZoneDiff) -> Vec<ZoneChange> {
    let mut changes = Vec::new();

    for name in diff.removed {
        if unit.try_unequip(&name) {
            info!(upgrade = %name, "upgrade removed");
            changes.push(ZoneChange::Removed(name));
        }
    }

    for upgrade in diff.added {
        match unit.equip(&upgrade) {
            Ok(()) => {
                info!(upgrade = %upgrade.name, "upgrade equipped");
                changes.push(ZoneChange::Added(upgrade.name));
            }
            Err(reason) => {
                warn!(upgrade = %upgrade.name, %reason, "upgrade rejected");
                changes.push(ZoneChange::Rejected {
                    name: upgrade.name,
                    reason,
                });
            }
        }
    }

    changes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConstants;
    use crate::types::SlotLocation;
    use crate::unit::Captain;

    fn catalog() -> Catalog {
        Catalog::new(
            vec![
                Upgrade::captain("Cutlass", SlotLocation::OneHandWeapon, 2, 0, 0),
                Upgrade::captain("Dagger", SlotLocation::OneHandWeapon, 1, 0, 1),
                Upgrade::captain("Crossbow", SlotLocation::TwoHandWeapon, 2, 0, 1),
                Upgrade::ship("Hold", 0, 0, 1),
            ],
            vec![],
            vec![],
        )
    }

    #[test]
    fn test_diff_ignores_unknown_and_foreign_cards() {
        let diff = diff_zone(
            &[],
            ["Cutlass", "Hold", "Kraken"],
            &catalog(),
            UpgradeCategory::Captain,
        );
        assert!(diff.removed.is_empty());
        let names: Vec<&str> = diff.added.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Cutlass"]);
    }

    #[test]
    fn test_removals_run_before_additions() {
        let catalog = catalog();
        let mut captain = Captain::new(0, &GameConstants::default());
        let first = diff_zone(captain.upgrades(), ["Cutlass", "Dagger"], &catalog, UpgradeCategory::Captain);
        apply_diff(&mut captain, first);
        assert_eq!(captain.upgrades().len(), 2);

        // Swapping both one-handers for a crossbow only works if the hands are freed first
        let swap = diff_zone(captain.upgrades(), ["Crossbow"], &catalog, UpgradeCategory::Captain);
        let changes = apply_diff(&mut captain, swap);
        assert_eq!(
            changes,
            vec![
                ZoneChange::Removed("Cutlass".to_string()),
                ZoneChange::Removed("Dagger".to_string()),
                ZoneChange::Added("Crossbow".to_string()),
            ]
        );
    }

    #[test]
    fn test_duplicate_card_is_rejected() {
        let catalog = catalog();
        let mut captain = Captain::new(0, &GameConstants::default());
        let diff = diff_zone(captain.upgrades(), ["Cutlass", "Cutlass"], &catalog, UpgradeCategory::Captain);
        let changes = apply_diff(&mut captain, diff);
        assert_eq!(changes.len(), 2);
        assert!(matches!(
            &changes[1],
            ZoneChange::Rejected { name, reason: EquipError::Duplicate(_) } if name == "Cutlass"
        ));
        assert_eq!(captain.upgrades().len(), 1);
    }
}
