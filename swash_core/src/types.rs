//! Core types shared across the rules engine

use serde::{Deserialize, Serialize};
use std::fmt;

/// Seat index of a player at the table
pub type PlayerSlot = u8;

/// Whether an upgrade may be played on a Captain or a Ship
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UpgradeCategory {
    Captain,
    Ship,
}

impl fmt::Display for UpgradeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpgradeCategory::Captain => write!(f, "captain"),
            UpgradeCategory::Ship => write!(f, "ship"),
        }
    }
}

/// Where a captain upgrade is attached
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlotLocation {
    #[serde(rename = "1h")]
    OneHandWeapon,
    #[serde(rename = "2h")]
    TwoHandWeapon,
    #[serde(rename = "torso")]
    TorsoArmor,
    #[serde(rename = "hand")]
    HandArmor,
    #[serde(rename = "leg")]
    LegArmor,
    #[serde(rename = "brain")]
    Brain,
}

impl SlotLocation {
    /// Get all slot locations
    pub fn all() -> &'static [SlotLocation] {
        &[
            SlotLocation::OneHandWeapon,
            SlotLocation::TwoHandWeapon,
            SlotLocation::TorsoArmor,
            SlotLocation::HandArmor,
            SlotLocation::LegArmor,
            SlotLocation::Brain,
        ]
    }

    pub fn is_weapon(&self) -> bool {
        matches!(self, SlotLocation::OneHandWeapon | SlotLocation::TwoHandWeapon)
    }

    /// Number of weapon hands this location occupies
    pub fn hands(&self) -> u32 {
        match self {
            SlotLocation::OneHandWeapon => 1,
            SlotLocation::TwoHandWeapon => 2,
            _ => 0,
        }
    }

    /// Display name shown on the captain sheet
    pub fn display_name(&self) -> &'static str {
        match self {
            SlotLocation::OneHandWeapon => "One-Handed Weapon",
            SlotLocation::TwoHandWeapon => "Two-Handed Weapon",
            SlotLocation::TorsoArmor => "Torso Armor",
            SlotLocation::HandArmor => "Hand Armor",
            SlotLocation::LegArmor => "Leg Armor",
            SlotLocation::Brain => "Training Stat",
        }
    }
}

/// Body part on the captain sheet an ability card attaches to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptainSocket {
    Eye,
    Hand,
    Leg,
}

impl CaptainSocket {
    pub fn all() -> &'static [CaptainSocket] {
        &[CaptainSocket::Eye, CaptainSocket::Hand, CaptainSocket::Leg]
    }

    pub fn index(&self) -> usize {
        match self {
            CaptainSocket::Eye => 0,
            CaptainSocket::Hand => 1,
            CaptainSocket::Leg => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShipSize {
    Small,
    Medium,
    Large,
}

/// Which upgrade area of a player board a card was played into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ZoneKind {
    CaptainUpgrades,
    ShipUpgrades,
}

impl ZoneKind {
    /// Upgrade category accepted by this zone
    pub fn category(&self) -> UpgradeCategory {
        match self {
            ZoneKind::CaptainUpgrades => UpgradeCategory::Captain,
            ZoneKind::ShipUpgrades => UpgradeCategory::Ship,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weapon_hands() {
        assert_eq!(SlotLocation::OneHandWeapon.hands(), 1);
        assert_eq!(SlotLocation::TwoHandWeapon.hands(), 2);
        assert_eq!(SlotLocation::TorsoArmor.hands(), 0);
        assert!(SlotLocation::TwoHandWeapon.is_weapon());
        assert!(!SlotLocation::Brain.is_weapon());
    }

    #[test]
    fn test_location_serde_names() {
        let loc: SlotLocation = serde_json::from_str("\"2h\"").unwrap();
        assert_eq!(loc, SlotLocation::TwoHandWeapon);
        assert_eq!(serde_json::to_string(&SlotLocation::HandArmor).unwrap(), "\"hand\"");
    }

    #[test]
    fn test_zone_category() {
        assert_eq!(ZoneKind::CaptainUpgrades.category(), UpgradeCategory::Captain);
        assert_eq!(ZoneKind::ShipUpgrades.category(), UpgradeCategory::Ship);
    }
}
