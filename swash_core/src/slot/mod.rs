//! Slot allocation rules for captain equipment
//!
//! Capacity is always computed from the equipped set passed in, so a
//! change of traits (Sturdy entering or leaving) takes effect on the next
//! call without any cached state.

use crate::catalog::Upgrade;
use crate::config::SlotConstants;
use crate::types::{SlotLocation, UpgradeCategory};
use thiserror::Error;

/// Name of the ability that relaxes slot capacities
pub const STURDY: &str = "Sturdy";

/// Why an upgrade could not be equipped
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EquipError {
    #[error("{0} is already equipped")]
    Duplicate(String),
    #[error("no free {location} slot for {name}", location = .location.display_name())]
    NoSlot { name: String, location: SlotLocation },
    #[error("{name} is a {found} upgrade, expected {expected}")]
    WrongCategory {
        name: String,
        expected: UpgradeCategory,
        found: UpgradeCategory,
    },
}

/// Capacity limits for captain slots
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRules {
    pub weapon_hands: u32,
    pub armor_capacity: u32,
    pub sturdy_armor_capacity: u32,
}

impl Default for SlotRules {
    fn default() -> Self {
        SlotRules::from(&SlotConstants::default())
    }
}

impl From<&SlotConstants> for SlotRules {
    fn from(c: &SlotConstants) -> Self {
        SlotRules {
            weapon_hands: c.weapon_hands,
            armor_capacity: c.armor_capacity,
            sturdy_armor_capacity: c.sturdy_armor_capacity,
        }
    }
}

/// Weapon hands taken by the equipped set
pub fn weapon_hands_used(equipped: &[Upgrade]) -> u32 {
    equipped
        .iter()
        .filter_map(|u| u.location())
        .map(|l| l.hands())
        .sum()
}

/// Number of equipped upgrades at a location
pub fn occupancy(equipped: &[Upgrade], location: SlotLocation) -> u32 {
    equipped
        .iter()
        .filter(|u| u.location() == Some(location))
        .count() as u32
}

impl SlotRules {
    /// Whether a captain with `equipped` has room for an upgrade at `location`.
    ///
    /// - Brain: unlimited
    /// - Weapons: a one-hander needs a free hand, a two-hander needs both.
    ///   A Sturdy captain may add any weapon while hands used <= capacity.
    /// - Armor: one per location, or `sturdy_armor_capacity` when Sturdy
    pub fn has_room(&self, equipped: &[Upgrade], location: SlotLocation, sturdy: bool) -> bool {
        match location {
            SlotLocation::Brain => true,
            SlotLocation::OneHandWeapon | SlotLocation::TwoHandWeapon => {
                let used = weapon_hands_used(equipped);
                if sturdy && used <= self.weapon_hands {
                    true
                } else if location == SlotLocation::TwoHandWeapon {
                    used == 0
                } else {
                    used < self.weapon_hands
                }
            }
            SlotLocation::TorsoArmor | SlotLocation::HandArmor | SlotLocation::LegArmor => {
                let capacity = if sturdy {
                    self.sturdy_armor_capacity
                } else {
                    self.armor_capacity
                };
                occupancy(equipped, location) < capacity
            }
        }
    }

    /// Full eligibility check for a captain upgrade: category, duplicate name, then capacity
    pub fn check_captain(
        &self,
        equipped: &[Upgrade],
        candidate: &Upgrade,
        sturdy: bool,
    ) -> Result<(), EquipError> {
        let location = match candidate.location() {
            Some(location) => location,
            None => {
                return Err(EquipError::WrongCategory {
                    name: candidate.name.clone(),
                    expected: UpgradeCategory::Captain,
                    found: candidate.category(),
                })
            }
        };
        if equipped.iter().any(|u| u.name == candidate.name) {
            return Err(EquipError::Duplicate(candidate.name.clone()));
        }
        if !self.has_room(equipped, location, sturdy) {
            return Err(EquipError::NoSlot {
                name: candidate.name.clone(),
                location,
            });
        }
        Ok(())
    }
}

/// Ship eligibility: every upgrade gets its own slot, only duplicates are refused
pub fn check_ship(equipped: &[Upgrade], candidate: &Upgrade) -> Result<(), EquipError> {
    if candidate.category() != UpgradeCategory::Ship {
        return Err(EquipError::WrongCategory {
            name: candidate.name.clone(),
            expected: UpgradeCategory::Ship,
            found: candidate.category(),
        });
    }
    if equipped.iter().any(|u| u.name == candidate.name) {
        return Err(EquipError::Duplicate(candidate.name.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_hand(name: &str) -> Upgrade {
        Upgrade::captain(name, SlotLocation::OneHandWeapon, 1, 0, 0)
    }

    fn two_hand(name: &str) -> Upgrade {
        Upgrade::captain(name, SlotLocation::TwoHandWeapon, 2, 0, 0)
    }

    fn torso(name: &str) -> Upgrade {
        Upgrade::captain(name, SlotLocation::TorsoArmor, 0, 3, 0)
    }

    #[test]
    fn test_brain_always_has_room() {
        let rules = SlotRules::default();
        let equipped: Vec<Upgrade> = (0..10)
            .map(|i| Upgrade::captain(format!("Training {i}"), SlotLocation::Brain, 1, 0, 0))
            .collect();
        assert!(rules.has_room(&equipped, SlotLocation::Brain, false));
    }

    #[test]
    fn test_two_one_handers_fill_hands() {
        let rules = SlotRules::default();
        let equipped = vec![one_hand("Cutlass")];
        assert!(rules.has_room(&equipped, SlotLocation::OneHandWeapon, false));

        let equipped = vec![one_hand("Cutlass"), one_hand("Dagger")];
        assert!(!rules.has_room(&equipped, SlotLocation::OneHandWeapon, false));
    }

    #[test]
    fn test_two_hander_needs_empty_hands() {
        let rules = SlotRules::default();
        assert!(rules.has_room(&[], SlotLocation::TwoHandWeapon, false));
        assert!(!rules.has_room(&[one_hand("Pistol")], SlotLocation::TwoHandWeapon, false));
        assert!(!rules.has_room(&[two_hand("Crossbow")], SlotLocation::OneHandWeapon, false));
    }

    #[test]
    fn test_sturdy_relaxes_weapon_hands() {
        let rules = SlotRules::default();
        let equipped = vec![one_hand("Pistol")];
        assert!(rules.has_room(&equipped, SlotLocation::TwoHandWeapon, true));

        let equipped = vec![one_hand("Pistol"), one_hand("Dagger")];
        assert!(rules.has_room(&equipped, SlotLocation::TwoHandWeapon, true));

        let equipped = vec![one_hand("Pistol"), two_hand("Crossbow")];
        assert!(!rules.has_room(&equipped, SlotLocation::OneHandWeapon, true));
    }

    #[test]
    fn test_sturdy_allows_second_two_hander() {
        let rules = SlotRules::default();
        let crossbow = vec![two_hand("Crossbow")];
        assert!(!rules.has_room(&crossbow, SlotLocation::TwoHandWeapon, false));
        assert!(rules.has_room(&crossbow, SlotLocation::TwoHandWeapon, true));

        let equipped = vec![two_hand("Crossbow"), two_hand("Long Rifle")];
        assert_eq!(weapon_hands_used(&equipped), 4);
        assert!(!rules.has_room(&equipped, SlotLocation::OneHandWeapon, true));
        assert!(!rules.has_room(&equipped, SlotLocation::TwoHandWeapon, true));
        assert!(rules
            .check_captain(&crossbow, &two_hand("Long Rifle"), true)
            .is_ok());
    }

    #[test]
    fn test_armor_capacity() {
        let rules = SlotRules::default();
        let equipped = vec![torso("Spaulders")];
        assert!(!rules.has_room(&equipped, SlotLocation::TorsoArmor, false));
        assert!(rules.has_room(&equipped, SlotLocation::HandArmor, false));
        assert!(rules.has_room(&equipped, SlotLocation::TorsoArmor, true));

        let equipped = vec![torso("Spaulders"), torso("Cuirass")];
        assert!(!rules.has_room(&equipped, SlotLocation::TorsoArmor, true));
    }

    #[test]
    fn test_duplicate_checked_before_capacity() {
        let rules = SlotRules::default();
        let equipped = vec![one_hand("Cutlass"), one_hand("Dagger")];
        let err = rules.check_captain(&equipped, &one_hand("Cutlass"), false).unwrap_err();
        assert_eq!(err, EquipError::Duplicate("Cutlass".to_string()));
    }

    #[test]
    fn test_ship_upgrade_rejected_on_captain() {
        let rules = SlotRules::default();
        let err = rules
            .check_captain(&[], &Upgrade::ship("Hold", 0, 0, 1), false)
            .unwrap_err();
        assert!(matches!(err, EquipError::WrongCategory { .. }));
    }

    #[test]
    fn test_ship_check() {
        let equipped = vec![Upgrade::ship("Hold", 0, 0, 1)];
        assert!(check_ship(&equipped, &Upgrade::ship("Larder", 0, 0, 2)).is_ok());
        assert_eq!(
            check_ship(&equipped, &Upgrade::ship("Hold", 0, 0, 1)),
            Err(EquipError::Duplicate("Hold".to_string()))
        );
        assert!(check_ship(&[], &one_hand("Cutlass")).is_err());
    }

    #[test]
    fn test_no_slot_message() {
        let err = EquipError::NoSlot {
            name: "Crossbow".to_string(),
            location: SlotLocation::TwoHandWeapon,
        };
        assert_eq!(err.to_string(), "no free Two-Handed Weapon slot for Crossbow");
    }
}
