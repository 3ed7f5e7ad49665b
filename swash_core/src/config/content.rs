//! Content loading: upgrades, abilities and ships

use super::ConfigError;
use crate::catalog::{AbilitySpec, Catalog, ShipSpec, Upgrade};
use crate::types::{SlotLocation, UpgradeCategory};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Upgrade as written in content files, before category checks
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpgradeEntry {
    pub name: String,
    pub category: UpgradeCategory,
    #[serde(default)]
    pub location: Option<SlotLocation>,
    #[serde(default)]
    pub combat_value: i32,
    #[serde(default)]
    pub defense: i32,
    #[serde(default)]
    pub precision: i32,
    #[serde(default)]
    pub cargo: i32,
}

impl TryFrom<UpgradeEntry> for Upgrade {
    type Error = ConfigError;

    fn try_from(entry: UpgradeEntry) -> Result<Self, Self::Error> {
        match entry.category {
            UpgradeCategory::Captain => {
                let location = entry.location.ok_or_else(|| {
                    ConfigError::ValidationError(format!(
                        "captain upgrade '{}' has no location",
                        entry.name
                    ))
                })?;
                if entry.cargo != 0 {
                    return Err(ConfigError::ValidationError(format!(
                        "captain upgrade '{}' cannot add cargo",
                        entry.name
                    )));
                }
                Ok(Upgrade::captain(
                    entry.name,
                    location,
                    entry.combat_value,
                    entry.defense,
                    entry.precision,
                ))
            }
            UpgradeCategory::Ship => {
                if entry.location.is_some() || entry.precision != 0 {
                    return Err(ConfigError::ValidationError(format!(
                        "ship upgrade '{}' cannot have a location or precision",
                        entry.name
                    )));
                }
                Ok(Upgrade::ship(
                    entry.name,
                    entry.combat_value,
                    entry.defense,
                    entry.cargo,
                ))
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct UpgradesFile {
    #[serde(default)]
    upgrades: Vec<UpgradeEntry>,
}

#[derive(Debug, Deserialize)]
struct AbilitiesFile {
    #[serde(default)]
    abilities: Vec<AbilitySpec>,
}

#[derive(Debug, Deserialize)]
struct ShipsFile {
    #[serde(default)]
    ships: Vec<ShipSpec>,
}

fn ensure_unique<'a>(kind: &str, names: impl Iterator<Item = &'a str>) -> Result<(), ConfigError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(ConfigError::ValidationError(format!(
                "duplicate {} '{}'",
                kind, name
            )));
        }
    }
    Ok(())
}

/// Build a catalog from the three content documents
pub fn parse_catalog(upgrades: &str, abilities: &str, ships: &str) -> Result<Catalog, ConfigError> {
    let upgrades_file: UpgradesFile = super::parse_toml(upgrades)?;
    let abilities_file: AbilitiesFile = super::parse_toml(abilities)?;
    let ships_file: ShipsFile = super::parse_toml(ships)?;

    let upgrades = upgrades_file
        .upgrades
        .into_iter()
        .map(Upgrade::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    ensure_unique("upgrade", upgrades.iter().map(|u| u.name.as_str()))?;
    ensure_unique("ability", abilities_file.abilities.iter().map(|a| a.name.as_str()))?;
    ensure_unique("ship", ships_file.ships.iter().map(|s| s.name.as_str()))?;

    Ok(Catalog::new(upgrades, abilities_file.abilities, ships_file.ships))
}

/// Load `upgrades.toml`, `abilities.toml` and `ships.toml` from a directory
pub fn load_catalog(dir: &Path) -> Result<Catalog, ConfigError> {
    let upgrades = std::fs::read_to_string(dir.join("upgrades.toml"))?;
    let abilities = std::fs::read_to_string(dir.join("abilities.toml"))?;
    let ships = std::fs::read_to_string(dir.join("ships.toml"))?;
    parse_catalog(&upgrades, &abilities, &ships)
}

/// Catalog compiled into the crate
pub fn bundled_catalog() -> Catalog {
    let upgrades = include_str!("../../config/upgrades.toml");
    let abilities = include_str!("../../config/abilities.toml");
    let ships = include_str!("../../config/ships.toml");
    parse_catalog(upgrades, abilities, ships).unwrap_or_else(|e| {
        tracing::error!(error = %e, "bundled content failed to load");
        Catalog::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CaptainSocket, ShipSize};

    #[test]
    fn test_bundled_catalog_loads_all() {
        let catalog = bundled_catalog();
        assert_eq!(catalog.upgrades().len(), 31);
        assert_eq!(catalog.abilities().len(), 18);
        assert_eq!(catalog.ships().len(), 7);

        let crossbow = catalog.upgrade("Crossbow").unwrap();
        assert_eq!(crossbow.location(), Some(SlotLocation::TwoHandWeapon));
        assert_eq!(crossbow.precision(), 1);

        let sturdy = catalog.ability("Sturdy").unwrap();
        assert_eq!(sturdy.socket, CaptainSocket::Leg);
        assert_eq!(sturdy.stat(false).combat_value, -1);

        let galleon = catalog.ship("Galleon").unwrap();
        assert_eq!(galleon.size, ShipSize::Large);
        assert_eq!(galleon.health, 27);
    }

    #[test]
    fn test_parse_upgrade_entries() {
        let upgrades = r#"
[[upgrades]]
name = "Hold"
category = "ship"
cargo = 1

[[upgrades]]
name = "Dagger"
category = "captain"
location = "1h"
combat_value = 1
precision = 1
"#;
        let catalog = parse_catalog(upgrades, "", "").unwrap();
        assert_eq!(catalog.upgrade("Hold").unwrap().cargo(), 1);
        assert_eq!(catalog.upgrade("Dagger").unwrap().precision(), 1);
    }

    #[test]
    fn test_captain_upgrade_needs_location() {
        let upgrades = r#"
[[upgrades]]
name = "Cutlass"
category = "captain"
combat_value = 2
"#;
        let err = parse_catalog(upgrades, "", "").unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let upgrades = r#"
[[upgrades]]
name = "Hold"
category = "ship"

[[upgrades]]
name = "Hold"
category = "ship"
cargo = 2
"#;
        let err = parse_catalog(upgrades, "", "").unwrap_err();
        assert!(err.to_string().contains("duplicate upgrade 'Hold'"));
    }
}
