use crate::catalog::{AbilitySpec, AbilityStat};
use crate::types::CaptainSocket;
use serde::{Deserialize, Serialize};

/// An ability card snapped into one of the captain's sockets
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EquippedAbility {
    pub spec: AbilitySpec,
    pub face_up: bool,
    pub exhausted: bool,
}

impl EquippedAbility {
    pub fn new(spec: AbilitySpec, face_up: bool) -> Self {
        EquippedAbility {
            spec,
            face_up,
            exhausted: false,
        }
    }

    pub fn name(&self) -> &str {
        &self.spec.name
    }

    /// Stat printed on the visible face
    pub fn stat(&self) -> AbilityStat {
        self.spec.stat(self.face_up)
    }
}

/// Eye, hand and leg sockets, indexed by [`CaptainSocket::index`]
pub type AbilitySockets = [Option<EquippedAbility>; 3];

/// Socket currently holding the named ability
pub fn find_socket(sockets: &AbilitySockets, name: &str) -> Option<CaptainSocket> {
    CaptainSocket::all()
        .iter()
        .copied()
        .find(|socket| sockets[socket.index()].as_ref().is_some_and(|a| a.name() == name))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_follows_facing() {
        let spec = AbilitySpec::new("Steadfast", CaptainSocket::Hand)
            .with_face_up(AbilityStat {
                defense: 1,
                ..Default::default()
            })
            .with_face_down(AbilityStat {
                combat_value: -1,
                ..Default::default()
            });

        let mut ability = EquippedAbility::new(spec, true);
        assert_eq!(ability.stat().defense, 1);

        ability.face_up = false;
        assert_eq!(ability.stat().defense, 0);
        assert_eq!(ability.stat().combat_value, -1);
    }

    #[test]
    fn test_find_socket() {
        let mut sockets: AbilitySockets = Default::default();
        sockets[CaptainSocket::Leg.index()] = Some(EquippedAbility::new(
            AbilitySpec::new("Sturdy", CaptainSocket::Leg),
            false,
        ));
        assert_eq!(find_socket(&sockets, "Sturdy"), Some(CaptainSocket::Leg));
        assert_eq!(find_socket(&sockets, "Dextrous"), None);
    }
}
