//! Units - Captains and ships that carry upgrades

mod abilities;
mod captain;
mod crew;
mod ship;

pub use abilities::{find_socket, AbilitySockets, EquippedAbility};
pub use captain::Captain;
pub use crew::{CrewBoard, UpkeepSlot};
pub use ship::{CrewArrival, Ship};

use crate::catalog::Upgrade;
use crate::slot::EquipError;
use crate::stat_block::StatSnapshot;
use crate::types::UpgradeCategory;

/// Anything that upgrade cards can be played onto
pub trait Upgradeable {
    /// Category of upgrade this unit accepts
    fn category(&self) -> UpgradeCategory;

    /// Equipped upgrades in equip order
    fn upgrades(&self) -> &[Upgrade];

    /// Validate and append an upgrade. On error nothing changes.
    fn equip(&mut self, upgrade: &Upgrade) -> Result<(), EquipError>;

    /// Remove the named upgrade, keeping the order of the rest
    fn try_unequip(&mut self, name: &str) -> bool;

    fn clear_upgrades(&mut self);

    /// Freshly computed stats
    fn stats(&self) -> StatSnapshot;

    fn try_equip(&mut self, upgrade: &Upgrade) -> bool {
        self.equip(upgrade).is_ok()
    }

    fn has_upgrade(&self, name: &str) -> bool {
        self.upgrades().iter().any(|u| u.name == name)
    }
}

/// Remove the first upgrade with `name`, preserving order
pub(crate) fn remove_named(upgrades: &mut Vec<Upgrade>, name: &str) -> bool {
    match upgrades.iter().position(|u| u.name == name) {
        Some(idx) => {
            upgrades.remove(idx);
            true
        }
        None => false,
    }
}
