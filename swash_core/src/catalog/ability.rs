//! Ability cards attached to captain sockets

use crate::types::CaptainSocket;
use serde::{Deserialize, Serialize};

/// Stat change granted by one face of an ability card
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilityStat {
    #[serde(default)]
    pub combat_value: i32,
    #[serde(default)]
    pub precision: i32,
    #[serde(default)]
    pub defense: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySpec {
    pub name: String,
    pub socket: CaptainSocket,
    /// Whether the card can be exhausted during play
    #[serde(default)]
    pub exhaustible: bool,
    #[serde(default)]
    pub face_up: Option<AbilityStat>,
    #[serde(default)]
    pub face_down: Option<AbilityStat>,
}

impl AbilitySpec {
    pub fn new(name: impl Into<String>, socket: CaptainSocket) -> Self {
        AbilitySpec {
            name: name.into(),
            socket,
            exhaustible: false,
            face_up: None,
            face_down: None,
        }
    }

    pub fn exhaustible(mut self) -> Self {
        self.exhaustible = true;
        self
    }

    pub fn with_face_up(mut self, stat: AbilityStat) -> Self {
        self.face_up = Some(stat);
        self
    }

    pub fn with_face_down(mut self, stat: AbilityStat) -> Self {
        self.face_down = Some(stat);
        self
    }

    /// Stat for the given facing; a face with no stat contributes nothing
    pub fn stat(&self, face_up: bool) -> AbilityStat {
        let face = if face_up { self.face_up } else { self.face_down };
        face.unwrap_or_default()
    }
}
