//! Player character vitals and belongings.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::value_objects::{
    CharacterName, EquipmentItem, HealthStatus, InventoryItem, Reputation,
};

/// The player character's current state within one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CharacterState {
    pub name: CharacterName,
    pub health: HealthStatus,
    pub equipment: Vec<EquipmentItem>,
    pub inventory: Vec<InventoryItem>,
    pub reputation: Reputation,
    /// Named stats, e.g. strength or charisma.
    pub attributes: BTreeMap<String, i32>,
    pub metadata: BTreeMap<String, Value>,
}

impl CharacterState {
    /// A fresh character: full health, neutral reputation, baseline stats.
    pub fn new_adventurer(name: CharacterName) -> Self {
        let attributes = [
            ("strength", 10),
            ("dexterity", 10),
            ("intelligence", 10),
            ("charisma", 10),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();

        Self {
            name,
            health: HealthStatus::starting(),
            equipment: Vec::new(),
            inventory: Vec::new(),
            reputation: Reputation::NEUTRAL,
            attributes,
            metadata: BTreeMap::new(),
        }
    }

    /// Apply a health delta, clamped into `[0, max]`.
    pub fn with_health_change(self, delta: i32) -> Self {
        Self {
            health: self.health.apply(delta),
            ..self
        }
    }

    /// Apply a reputation delta, clamped into `[-100, 100]`.
    pub fn with_reputation_change(self, delta: i32) -> Self {
        Self {
            reputation: self.reputation.apply(delta),
            ..self
        }
    }
}
