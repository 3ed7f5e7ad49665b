//! StatAccumulator - Collects stat contributions before they become a snapshot

use crate::source::StatSource;

/// Running totals while sources are applied
///
/// Every field is a plain sum; application order does not affect totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatAccumulator {
    pub combat_value: i32,
    pub defense: i32,
    pub precision: i32,
    pub cargo: i32,
}

impl StatAccumulator {
    /// Create a new empty accumulator
    pub fn new() -> Self {
        StatAccumulator::default()
    }
}

/// Apply all sources in priority order and return the totals
pub fn accumulate(sources: &[&dyn StatSource]) -> StatAccumulator {
    let mut sorted: Vec<&dyn StatSource> = sources.to_vec();
    sorted.sort_by_key(|s| s.priority());

    let mut acc = StatAccumulator::new();
    for source in sorted {
        source.apply(&mut acc);
    }
    acc
}

/// Per-source contributions, in application order, for breakdown views
pub fn breakdown(sources: &[&dyn StatSource]) -> Vec<(String, StatAccumulator)> {
    let mut sorted: Vec<&dyn StatSource> = sources.to_vec();
    sorted.sort_by_key(|s| s.priority());

    sorted
        .into_iter()
        .map(|source| {
            let mut acc = StatAccumulator::new();
            source.apply(&mut acc);
            (source.id().to_string(), acc)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::{BaseStatsSource, CrewDefenseSource};

    #[test]
    fn test_accumulate_sums_sources() {
        let base = BaseStatsSource::captain(2, 1, 2);
        let crew = CrewDefenseSource::new(3);
        let acc = accumulate(&[&crew, &base]);

        assert_eq!(acc.combat_value, 2);
        assert_eq!(acc.defense, 4);
        assert_eq!(acc.precision, 2);
        assert_eq!(acc.cargo, 0);
    }

    #[test]
    fn test_breakdown_orders_by_priority() {
        let base = BaseStatsSource::ship(1, 4, 0);
        let crew = CrewDefenseSource::new(2);
        let rows = breakdown(&[&crew, &base]);

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, "base_stats");
        assert_eq!(rows[1].0, "crew_defense");
        assert_eq!(rows[1].1.defense, 2);
    }
}
