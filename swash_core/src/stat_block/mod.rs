//! StatBlock - Final displayed stats of captains and ships

mod aggregator;

pub use aggregator::{accumulate, breakdown, StatAccumulator};

use serde::{Deserialize, Serialize};

/// Captain stats as shown on the captain sheet
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaptainStats {
    pub combat_value: i32,
    pub defense: i32,
    pub precision: i32,
}

impl From<StatAccumulator> for CaptainStats {
    fn from(acc: StatAccumulator) -> Self {
        CaptainStats {
            combat_value: acc.combat_value,
            defense: acc.defense,
            precision: acc.precision,
        }
    }
}

/// Ship stats as shown on the ship card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipStats {
    pub combat_value: i32,
    pub defense: i32,
    pub cargo: i32,
}

impl From<StatAccumulator> for ShipStats {
    fn from(acc: StatAccumulator) -> Self {
        ShipStats {
            combat_value: acc.combat_value,
            defense: acc.defense,
            cargo: acc.cargo,
        }
    }
}

/// Recomputed stats handed to whatever renders them
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "unit", rename_all = "snake_case")]
pub enum StatSnapshot {
    Captain(CaptainStats),
    Ship(ShipStats),
}

impl StatSnapshot {
    pub fn combat_value(&self) -> i32 {
        match self {
            StatSnapshot::Captain(s) => s.combat_value,
            StatSnapshot::Ship(s) => s.combat_value,
        }
    }

    pub fn defense(&self) -> i32 {
        match self {
            StatSnapshot::Captain(s) => s.defense,
            StatSnapshot::Ship(s) => s.defense,
        }
    }
}
