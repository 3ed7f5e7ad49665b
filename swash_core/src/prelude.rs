//! Prelude module for convenient imports
//!
//! ```rust
//! use swash_core::prelude::*;
//! ```

// Content
pub use crate::catalog::{AbilitySpec, Catalog, ShipSpec, Upgrade};

// Core types
pub use crate::types::{CaptainSocket, PlayerSlot, SlotLocation, UpgradeCategory, ZoneKind};
pub use crate::stat_block::{CaptainStats, ShipStats, StatSnapshot};

// Units
pub use crate::slot::EquipError;
pub use crate::unit::{Captain, Ship, Upgradeable};

// Table
pub use crate::table::{Audience, CrewPosition, Table, TableEvent, TableOutput, UnitRef};

// Resources
pub use crate::resource::{Resource, ResourceTally};

// Config
pub use crate::config::GameConstants;
