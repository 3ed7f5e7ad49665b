//! BaseStatsSource - Printed starting stats of a captain sheet or ship card

use crate::source::StatSource;
use crate::stat_block::StatAccumulator;

pub struct BaseStatsSource {
    pub combat_value: i32,
    pub defense: i32,
    pub precision: i32,
    pub cargo: i32,
}

impl BaseStatsSource {
    pub fn captain(combat_value: i32, defense: i32, precision: i32) -> Self {
        BaseStatsSource {
            combat_value,
            defense,
            precision,
            cargo: 0,
        }
    }

    pub fn ship(combat_value: i32, defense: i32, cargo: i32) -> Self {
        BaseStatsSource {
            combat_value,
            defense,
            precision: 0,
            cargo,
        }
    }
}

impl StatSource for BaseStatsSource {
    fn id(&self) -> &str {
        "base_stats"
    }

    fn priority(&self) -> i32 {
        -100 // Base stats apply first
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.combat_value += self.combat_value;
        stats.defense += self.defense;
        stats.precision += self.precision;
        stats.cargo += self.cargo;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_captain_base() {
        let source = BaseStatsSource::captain(2, 1, 2);
        let mut acc = StatAccumulator::new();
        source.apply(&mut acc);

        assert_eq!(acc.combat_value, 2);
        assert_eq!(acc.defense, 1);
        assert_eq!(acc.precision, 2);
        assert_eq!(acc.cargo, 0);
    }

    #[test]
    fn test_base_stats_priority() {
        let source = BaseStatsSource::ship(1, 4, 0);
        assert_eq!(source.priority(), -100);
    }
}
