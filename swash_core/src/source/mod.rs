//! StatSource - Trait and implementations for stat providers

mod ability;
mod base_stats;
mod crew;
mod upgrade;

pub use ability::AbilitySource;
pub use base_stats::BaseStatsSource;
pub use crew::CrewDefenseSource;
pub use upgrade::UpgradeSource;

use crate::stat_block::StatAccumulator;

/// Trait for anything that contributes stats to a captain or ship
pub trait StatSource: Send + Sync {
    /// Unique identifier for this source
    fn id(&self) -> &str;

    /// Priority for application order (higher = applied later)
    /// Default priority is 0.
    /// Suggested priorities:
    /// - Base stats: -100
    /// - Upgrades: 0
    /// - Abilities: 100
    /// - Situational (crew): 200
    fn priority(&self) -> i32 {
        0
    }

    /// Apply this source's stats to the accumulator
    fn apply(&self, stats: &mut StatAccumulator);
}
