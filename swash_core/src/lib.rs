//! swash_core - Rules engine for the Swash tabletop game
//!
//! This library provides:
//! - Catalog: Upgrade, ability and ship content loaded from TOML
//! - Slot rules: Whether a captain or ship has room for an upgrade
//! - Stat aggregation: Base stats plus upgrades, abilities and crew
//! - Table: Event-driven composition root that emits stat snapshots and notices

pub mod catalog;
pub mod combat;
pub mod config;
pub mod deck;
pub mod prelude;
pub mod resource;
pub mod slot;
pub mod source;
pub mod stat_block;
pub mod table;
pub mod types;
pub mod unit;

// Re-export core types for convenience
pub use catalog::{card_name, AbilitySpec, AbilityStat, Catalog, ShipSpec, Upgrade, UpgradeKind};
pub use combat::ShipCombat;
pub use config::{ConfigError, GameConstants};
pub use deck::ShipDeck;
pub use resource::{Resource, ResourceConverter, ResourceTally};
pub use slot::{EquipError, SlotRules, STURDY};
pub use source::{AbilitySource, BaseStatsSource, CrewDefenseSource, StatSource, UpgradeSource};
pub use stat_block::{CaptainStats, ShipStats, StatAccumulator, StatSnapshot};
pub use table::{Audience, CrewPosition, Table, TableError, TableEvent, TableOutput, UnitRef};
pub use types::{CaptainSocket, PlayerSlot, ShipSize, SlotLocation, UpgradeCategory, ZoneKind};
pub use unit::{Captain, EquippedAbility, Ship, Upgradeable};
