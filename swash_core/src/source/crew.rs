//! CrewDefenseSource - Situational defense from crew standing guard

use crate::source::StatSource;
use crate::stat_block::StatAccumulator;

/// Each crewmember assigned to defense adds one Defense
pub struct CrewDefenseSource {
    pub count: usize,
}

impl CrewDefenseSource {
    pub fn new(count: usize) -> Self {
        CrewDefenseSource { count }
    }
}

impl StatSource for CrewDefenseSource {
    fn id(&self) -> &str {
        "crew_defense"
    }

    fn priority(&self) -> i32 {
        200
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        stats.defense += self.count as i32;
    }
}
