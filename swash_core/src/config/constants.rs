//! Game constants configuration

use super::ConfigError;
use crate::resource::Resource;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Tunable game constants
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameConstants {
    #[serde(default)]
    pub captain: CaptainConstants,
    #[serde(default)]
    pub slots: SlotConstants,
    #[serde(default)]
    pub timing: TimingConstants,
    #[serde(default)]
    pub market: MarketConstants,
}

impl GameConstants {
    /// Constants shipped with the crate
    pub fn bundled() -> Self {
        let toml = include_str!("../../config/constants.toml");
        super::parse_toml(toml).unwrap_or_else(|e| {
            tracing::error!(error = %e, "bundled constants failed to parse, using defaults");
            GameConstants::default()
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let constants: GameConstants = super::load_toml(path)?;
        constants.validate()?;
        Ok(constants)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.captain.upkeep.len() > self.captain.crew as usize {
            return Err(ConfigError::ValidationError(format!(
                "captain has {} upkeep slots but only {} crew",
                self.captain.upkeep.len(),
                self.captain.crew
            )));
        }
        if self.slots.sturdy_armor_capacity < self.slots.armor_capacity {
            return Err(ConfigError::ValidationError(
                "sturdy armor capacity must not be below the normal capacity".to_string(),
            ));
        }
        if self.timing.upgrade_debounce_secs < 0.0 || self.timing.resource_debounce_secs < 0.0 {
            return Err(ConfigError::ValidationError(
                "debounce delays must not be negative".to_string(),
            ));
        }
        Ok(())
    }
}

/// Printed starting values of every captain sheet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CaptainConstants {
    #[serde(default = "default_captain_combat_value")]
    pub combat_value: i32,
    #[serde(default = "default_captain_defense")]
    pub defense: i32,
    #[serde(default = "default_captain_precision")]
    pub precision: i32,
    #[serde(default = "default_crew")]
    pub crew: u32,
    /// Resource paid when the crew slot at each index is empty
    #[serde(default = "default_upkeep")]
    pub upkeep: Vec<Resource>,
}

impl Default for CaptainConstants {
    fn default() -> Self {
        CaptainConstants {
            combat_value: default_captain_combat_value(),
            defense: default_captain_defense(),
            precision: default_captain_precision(),
            crew: default_crew(),
            upkeep: default_upkeep(),
        }
    }
}

fn default_captain_combat_value() -> i32 {
    2
}
fn default_captain_defense() -> i32 {
    1
}
fn default_captain_precision() -> i32 {
    2
}
fn default_crew() -> u32 {
    5
}
fn default_upkeep() -> Vec<Resource> {
    vec![
        Resource::None,
        Resource::Leather,
        Resource::Coffee,
        Resource::Rum,
        Resource::Spices,
    ]
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotConstants {
    /// Hands available for weapons; a two-handed weapon takes both
    #[serde(default = "default_weapon_hands")]
    pub weapon_hands: u32,
    /// Items per armor location
    #[serde(default = "default_armor_capacity")]
    pub armor_capacity: u32,
    /// Items per armor location for a Sturdy captain
    #[serde(default = "default_sturdy_armor_capacity")]
    pub sturdy_armor_capacity: u32,
}

impl Default for SlotConstants {
    fn default() -> Self {
        SlotConstants {
            weapon_hands: default_weapon_hands(),
            armor_capacity: default_armor_capacity(),
            sturdy_armor_capacity: default_sturdy_armor_capacity(),
        }
    }
}

fn default_weapon_hands() -> u32 {
    2
}
fn default_armor_capacity() -> u32 {
    1
}
fn default_sturdy_armor_capacity() -> u32 {
    2
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConstants {
    /// Quiet period before an upgrade zone is reconciled
    #[serde(default = "default_upgrade_debounce")]
    pub upgrade_debounce_secs: f64,
    /// Quiet period before resource changes are announced
    #[serde(default = "default_resource_debounce")]
    pub resource_debounce_secs: f64,
}

impl Default for TimingConstants {
    fn default() -> Self {
        TimingConstants {
            upgrade_debounce_secs: default_upgrade_debounce(),
            resource_debounce_secs: default_resource_debounce(),
        }
    }
}

fn default_upgrade_debounce() -> f64 {
    0.5
}
fn default_resource_debounce() -> f64 {
    1.0
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarketConstants {
    /// Positions for face-up ships in the market
    #[serde(default = "default_max_played_ships")]
    pub max_played_ships: usize,
}

impl Default for MarketConstants {
    fn default() -> Self {
        MarketConstants {
            max_played_ships: default_max_played_ships(),
        }
    }
}

fn default_max_played_ships() -> usize {
    4
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let constants = GameConstants::default();
        assert_eq!(constants.captain.combat_value, 2);
        assert_eq!(constants.captain.defense, 1);
        assert_eq!(constants.captain.precision, 2);
        assert_eq!(constants.captain.upkeep.len(), 5);
        assert_eq!(constants.slots.weapon_hands, 2);
        assert!((constants.timing.upgrade_debounce_secs - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bundled_matches_defaults() {
        let bundled = GameConstants::bundled();
        let defaults = GameConstants::default();
        assert_eq!(bundled.captain.upkeep, defaults.captain.upkeep);
        assert_eq!(bundled.slots.sturdy_armor_capacity, defaults.slots.sturdy_armor_capacity);
        assert_eq!(bundled.market.max_played_ships, defaults.market.max_played_ships);
    }

    #[test]
    fn test_parse_partial_constants() {
        let toml = r#"
[captain]
combat_value = 3

[timing]
upgrade_debounce_secs = 0.25
"#;

        let constants: GameConstants = toml::from_str(toml).unwrap();
        assert_eq!(constants.captain.combat_value, 3);
        assert_eq!(constants.captain.precision, 2);
        assert!((constants.timing.upgrade_debounce_secs - 0.25).abs() < f64::EPSILON);
        assert!((constants.timing.resource_debounce_secs - 1.0).abs() < f64::EPSILON);
        assert_eq!(constants.slots.armor_capacity, 1);
    }

    #[test]
    fn test_validate_rejects_shrinking_sturdy() {
        let mut constants = GameConstants::default();
        constants.slots.sturdy_armor_capacity = 0;
        assert!(matches!(
            constants.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }
}
