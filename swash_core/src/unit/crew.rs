use crate::resource::Resource;
use serde::{Deserialize, Serialize};

/// One crew position on the captain sheet and the resource it costs when empty
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpkeepSlot {
    pub resource: Resource,
    pub occupant: Option<String>,
}

impl UpkeepSlot {
    pub fn upkeep_required(&self) -> bool {
        self.resource != Resource::None && self.occupant.is_none()
    }
}

/// Where a captain's crew currently stand
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewBoard {
    upkeep: Vec<UpkeepSlot>,
    on_defense: Vec<String>,
}

impl CrewBoard {
    pub fn new(resources: &[Resource]) -> Self {
        CrewBoard {
            upkeep: resources
                .iter()
                .map(|&resource| UpkeepSlot {
                    resource,
                    occupant: None,
                })
                .collect(),
            on_defense: Vec::new(),
        }
    }

    pub fn upkeep_slots(&self) -> &[UpkeepSlot] {
        &self.upkeep
    }

    pub fn defense_count(&self) -> usize {
        self.on_defense.len()
    }

    pub fn is_on_defense(&self, crew_id: &str) -> bool {
        self.on_defense.iter().any(|c| c == crew_id)
    }

    /// Resources owed for every empty, non-free upkeep slot
    pub fn required_upkeep(&self) -> Vec<Resource> {
        self.upkeep
            .iter()
            .filter(|slot| slot.upkeep_required())
            .map(|slot| slot.resource)
            .collect()
    }

    /// Highest-indexed empty upkeep slot, where returning crew go first
    pub fn return_slot(&self) -> Option<usize> {
        self.upkeep.iter().rposition(|slot| slot.occupant.is_none())
    }

    /// Put a crewmember on an upkeep slot, taking it off defense.
    ///
    /// Returns the slot's resource, or `None` when the index is out of range
    /// or already occupied by someone else.
    pub fn occupy(&mut self, index: usize, crew_id: &str) -> Option<Resource> {
        let slot = self.upkeep.get(index)?;
        if slot.occupant.as_deref().is_some_and(|c| c != crew_id) {
            return None;
        }
        self.release(crew_id);
        let slot = self.upkeep.get_mut(index)?;
        slot.occupant = Some(crew_id.to_string());
        Some(slot.resource)
    }

    /// Assign a crewmember to captain defense. False if already there.
    pub fn add_defense(&mut self, crew_id: &str) -> bool {
        if self.is_on_defense(crew_id) {
            return false;
        }
        self.vacate(crew_id);
        self.on_defense.push(crew_id.to_string());
        true
    }

    /// Forget a crewmember entirely, wherever it stood.
    /// Returns true when it was on defense.
    pub fn release(&mut self, crew_id: &str) -> bool {
        self.vacate(crew_id);
        match self.on_defense.iter().position(|c| c == crew_id) {
            Some(idx) => {
                self.on_defense.remove(idx);
                true
            }
            None => false,
        }
    }

    fn vacate(&mut self, crew_id: &str) {
        for slot in &mut self.upkeep {
            if slot.occupant.as_deref() == Some(crew_id) {
                slot.occupant = None;
            }
        }
    }

    /// Round reset: nobody stands guard any more
    pub fn clear_defense(&mut self) {
        self.on_defense.clear();
    }
}
