//! AbilitySource - Stats from socketed ability cards

use crate::source::StatSource;
use crate::stat_block::StatAccumulator;
use crate::unit::EquippedAbility;

pub struct AbilitySource<'a> {
    sockets: &'a [Option<EquippedAbility>],
}

impl<'a> AbilitySource<'a> {
    pub fn new(sockets: &'a [Option<EquippedAbility>]) -> Self {
        AbilitySource { sockets }
    }
}

impl StatSource for AbilitySource<'_> {
    fn id(&self) -> &str {
        "abilities"
    }

    fn priority(&self) -> i32 {
        100
    }

    fn apply(&self, stats: &mut StatAccumulator) {
        for ability in self.sockets.iter().flatten() {
            let stat = ability.stat();
            stats.combat_value += stat.combat_value;
            stats.precision += stat.precision;
            stats.defense += stat.defense;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AbilitySpec, AbilityStat};
    use crate::types::CaptainSocket;

    #[test]
    fn test_facing_selects_stat() {
        let dextrous = AbilitySpec::new("Dextrous", CaptainSocket::Hand).with_face_up(AbilityStat {
            combat_value: 1,
            ..Default::default()
        });
        let sturdy = AbilitySpec::new("Sturdy", CaptainSocket::Leg).with_face_down(AbilityStat {
            combat_value: -1,
            ..Default::default()
        });

        let sockets = vec![
            None,
            Some(EquippedAbility::new(dextrous, true)),
            Some(EquippedAbility::new(sturdy, false)),
        ];
        let source = AbilitySource::new(&sockets);
        let mut acc = StatAccumulator::new();
        source.apply(&mut acc);

        assert_eq!(acc.combat_value, 0);
    }
}
