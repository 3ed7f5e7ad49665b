//! Inbound table events and outbound records

use crate::resource::Resource;
use crate::stat_block::StatSnapshot;
use crate::types::{PlayerSlot, ZoneKind};
use serde::{Deserialize, Serialize};

/// Where a crewmember was put down
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrewPosition {
    /// Upkeep slot on the owner's captain sheet, by index
    Upkeep(usize),
    CaptainDefense,
    /// On a ship card, by card id
    Ship(String),
    /// Anywhere the table does not track
    Elsewhere,
}

/// Something that happened on the table.
///
/// Events flagged `silent` update state without announcing it, as when the
/// table is rebuilt from an existing layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TableEvent {
    PlayerSeated {
        slot: PlayerSlot,
        name: String,
    },
    PlayerLeft {
        slot: PlayerSlot,
    },
    /// A ship card was found on the table and joins the ship deck
    ShipRegistered {
        card_id: String,
        name: String,
    },
    ShipClaimed {
        slot: PlayerSlot,
        card_id: String,
        silent: bool,
    },
    UpgradeCardEntered {
        slot: PlayerSlot,
        zone: ZoneKind,
        card_id: String,
        /// Upgrade name or card metadata JSON
        identity: String,
    },
    UpgradeCardLeft {
        slot: PlayerSlot,
        zone: ZoneKind,
        card_id: String,
    },
    /// Full contents of a zone as `(card_id, identity)` pairs
    ZoneSnapshot {
        slot: PlayerSlot,
        zone: ZoneKind,
        cards: Vec<(String, String)>,
        silent: bool,
    },
    CrewMoved {
        slot: PlayerSlot,
        crew_id: String,
        to: CrewPosition,
        silent: bool,
    },
    AbilitySnapped {
        slot: PlayerSlot,
        name: String,
        face_up: bool,
        silent: bool,
    },
    AbilityFlipped {
        slot: PlayerSlot,
        name: String,
        face_up: bool,
    },
    AbilityRemoved {
        slot: PlayerSlot,
        name: String,
    },
    AbilityExhaustToggled {
        slot: PlayerSlot,
        name: String,
    },
    DamageCubePlaced {
        slot: PlayerSlot,
        card_id: String,
        cube_id: String,
    },
    /// A damage cube or crewmember was lifted off a ship
    ShipObjectRemoved {
        card_id: String,
        object_id: String,
    },
    /// Resource cards currently in a player's area
    ResourcesCounted {
        slot: PlayerSlot,
        cards: Vec<Resource>,
        silent: bool,
    },
    RoundReset,
}

/// A captain or ship whose stats are displayed
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnitRef {
    Captain(PlayerSlot),
    Ship(String),
}

/// Who a notice is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Audience {
    /// Private message to one player
    Player(PlayerSlot),
    /// Chat broadcast
    Everyone,
}

/// Record emitted for the host to render
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TableOutput {
    StatsChanged {
        unit: UnitRef,
        stats: StatSnapshot,
    },
    CombatChanged {
        card_id: String,
        damage_taken: u32,
        remaining_health: u32,
        attack_leader: Option<PlayerSlot>,
    },
    Notice {
        audience: Audience,
        text: String,
    },
}

impl TableOutput {
    pub fn notice(audience: Audience, text: impl Into<String>) -> Self {
        TableOutput::Notice {
            audience,
            text: text.into(),
        }
    }

    /// Notice text if this is a notice
    pub fn text(&self) -> Option<&str> {
        match self {
            TableOutput::Notice { text, .. } => Some(text),
            _ => None,
        }
    }
}
