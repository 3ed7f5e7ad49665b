//! UpgradeSource - Stats from equipped upgrades

use crate::catalog::Upgrade;
use crate::source::StatSource;
use crate::stat_block::StatAccumulator;

/// Sum of the deltas of every equipped upgrade
pub struct UpgradeSource<'a> {
    upgrades: &'a [Upgrade],
}

impl<'a> UpgradeSource<'a> {
    pub fn new(upgrades: &'a [Upgrade]) -> Self {
        UpgradeSource { upgrades }
    }
}

impl StatSource for UpgradeSource<'_> {
    fn id(&self) -> &str {
        "upgrades"
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        for upgrade in self.upgrades {
            stats.combat_value += upgrade.combat_value;
            stats.defense += upgrade.defense;
            stats.precision += upgrade.precision();
            stats.cargo += upgrade.cargo();
        }
    }
}
