//! Upgrade - The bottom half of a Swash card, played to raise stats

use crate::types::{SlotLocation, UpgradeCategory};
use serde::{Deserialize, Serialize};

/// Category-specific part of an upgrade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum UpgradeKind {
    Captain {
        location: SlotLocation,
        precision: i32,
    },
    Ship {
        cargo: i32,
    },
}

/// An immutable upgrade definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Upgrade {
    pub name: String,
    /// Increase in Combat Value
    pub combat_value: i32,
    /// Increase in Defense
    pub defense: i32,
    pub kind: UpgradeKind,
}

impl Upgrade {
    pub fn captain(
        name: impl Into<String>,
        location: SlotLocation,
        combat_value: i32,
        defense: i32,
        precision: i32,
    ) -> Self {
        Upgrade {
            name: name.into(),
            combat_value,
            defense,
            kind: UpgradeKind::Captain { location, precision },
        }
    }

    pub fn ship(name: impl Into<String>, combat_value: i32, defense: i32, cargo: i32) -> Self {
        Upgrade {
            name: name.into(),
            combat_value,
            defense,
            kind: UpgradeKind::Ship { cargo },
        }
    }

    pub fn category(&self) -> UpgradeCategory {
        match self.kind {
            UpgradeKind::Captain { .. } => UpgradeCategory::Captain,
            UpgradeKind::Ship { .. } => UpgradeCategory::Ship,
        }
    }

    /// Slot location (captain upgrades only)
    pub fn location(&self) -> Option<SlotLocation> {
        match self.kind {
            UpgradeKind::Captain { location, .. } => Some(location),
            UpgradeKind::Ship { .. } => None,
        }
    }

    pub fn precision(&self) -> i32 {
        match self.kind {
            UpgradeKind::Captain { precision, .. } => precision,
            UpgradeKind::Ship { .. } => 0,
        }
    }

    pub fn cargo(&self) -> i32 {
        match self.kind {
            UpgradeKind::Ship { cargo } => cargo,
            UpgradeKind::Captain { .. } => 0,
        }
    }

    pub fn is_weapon(&self) -> bool {
        self.location().map_or(false, |l| l.is_weapon())
    }
}
