//! Trade goods, their values and per-player tallies

mod converter;

pub use converter::ResourceConverter;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Resource tokens in the game. `None` marks an upkeep slot with no cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Resource {
    None,
    Lumber,
    Leather,
    Iron,
    Coffee,
    Rum,
    Sugar,
    Spices,
    Gold,
}

impl Resource {
    /// Every tradeable resource (excludes `None`)
    pub fn tradeable() -> &'static [Resource] {
        &[
            Resource::Lumber,
            Resource::Leather,
            Resource::Iron,
            Resource::Coffee,
            Resource::Rum,
            Resource::Sugar,
            Resource::Spices,
            Resource::Gold,
        ]
    }

    /// Trade value used for conversion rates
    pub fn value(&self) -> u32 {
        match self {
            Resource::None => 0,
            Resource::Lumber | Resource::Leather | Resource::Iron => 1,
            Resource::Coffee | Resource::Rum => 2,
            Resource::Sugar | Resource::Spices => 3,
            Resource::Gold => 4,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Resource::None => "None",
            Resource::Lumber => "Lumber",
            Resource::Leather => "Leather",
            Resource::Iron => "Iron",
            Resource::Coffee => "Coffee",
            Resource::Rum => "Rum",
            Resource::Sugar => "Sugar",
            Resource::Spices => "Spices",
            Resource::Gold => "Gold",
        }
    }

    pub fn from_name(name: &str) -> Option<Resource> {
        match name {
            "None" => Some(Resource::None),
            "Lumber" => Some(Resource::Lumber),
            "Leather" => Some(Resource::Leather),
            "Iron" => Some(Resource::Iron),
            "Coffee" => Some(Resource::Coffee),
            "Rum" => Some(Resource::Rum),
            "Sugar" => Some(Resource::Sugar),
            "Spices" => Some(Resource::Spices),
            "Gold" => Some(Resource::Gold),
            _ => None,
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Count of resource cards a player holds
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceTally {
    counts: BTreeMap<Resource, u32>,
}

impl ResourceTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tally by counting each card once
    pub fn from_cards(cards: &[Resource]) -> Self {
        let mut tally = ResourceTally::new();
        for card in cards {
            tally.add(*card, 1);
        }
        tally
    }

    pub fn get(&self, resource: Resource) -> u32 {
        self.counts.get(&resource).copied().unwrap_or(0)
    }

    pub fn add(&mut self, resource: Resource, amount: u32) {
        if resource == Resource::None || amount == 0 {
            return;
        }
        *self.counts.entry(resource).or_insert(0) += amount;
    }

    /// Remove up to `amount`, returning how many were actually removed
    pub fn remove(&mut self, resource: Resource, amount: u32) -> u32 {
        let current = self.get(resource);
        let removed = current.min(amount);
        if current - removed == 0 {
            self.counts.remove(&resource);
        } else {
            self.counts.insert(resource, current - removed);
        }
        removed
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Describe what changed going from `self` to `next`, e.g. `["Rum: +2", "Gold: -1"]`
    pub fn changes_to(&self, next: &ResourceTally) -> Vec<String> {
        Resource::tradeable()
            .iter()
            .filter_map(|r| {
                let diff = next.get(*r) as i64 - self.get(*r) as i64;
                if diff == 0 {
                    None
                } else {
                    let sign = if diff > 0 { "+" } else { "" };
                    Some(format!("{}: {}{}", r, sign, diff))
                }
            })
            .collect()
    }
}
