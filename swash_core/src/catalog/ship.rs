use crate::types::ShipSize;
use serde::{Deserialize, Serialize};

/// Printed stats of a ship card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShipSpec {
    pub name: String,
    pub size: ShipSize,
    pub health: u32,
    /// Starting Combat Value
    pub combat_value: i32,
    /// Starting Defense
    pub defense: i32,
    /// Starting Cargo
    pub cargo: i32,
}
