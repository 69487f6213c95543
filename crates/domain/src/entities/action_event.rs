//! A single player action, immutable once recorded.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DomainError;
use crate::ids::ActionId;
use crate::value_objects::{ActionType, LocationName};

/// One entry of the session's action log: what the player typed, where,
/// and what came of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionEvent {
    pub id: ActionId,
    pub timestamp: DateTime<Utc>,
    pub action_type: ActionType,
    /// Raw player input.
    pub command: String,
    pub target: Option<String>,
    pub location: LocationName,
    /// Narrative result of the action.
    pub outcome: String,
    /// Free-text consequence tags.
    pub consequences: Vec<String>,
    pub metadata: BTreeMap<String, Value>,
}

impl ActionEvent {
    /// Record a new action with a server-assigned id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` when `command` or `outcome` is
    /// blank.
    pub fn record(
        action_type: ActionType,
        command: impl Into<String>,
        target: Option<String>,
        location: LocationName,
        outcome: impl Into<String>,
        consequences: Vec<String>,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let command = command.into();
        let outcome = outcome.into();
        if command.trim().is_empty() {
            return Err(DomainError::validation("Command cannot be blank"));
        }
        if outcome.trim().is_empty() {
            return Err(DomainError::validation("Outcome cannot be blank"));
        }
        Ok(Self {
            id: ActionId::new(),
            timestamp,
            action_type,
            command,
            target: target.filter(|t| !t.trim().is_empty()),
            location,
            outcome,
            consequences,
            metadata: BTreeMap::new(),
        })
    }

    /// Whether the consequence tags mark this action as successful.
    ///
    /// Substring matching on free-text tags is the inherited convention;
    /// treat the answer as a hint, not a rule.
    pub fn is_successful(&self) -> bool {
        self.consequences
            .iter()
            .any(|c| c.contains("success") || c.contains("victory"))
    }

    /// Whether this action involved combat, per type or consequence tags.
    pub fn is_combat(&self) -> bool {
        self.action_type == ActionType::Attack
            || self.consequences.iter().any(|c| c.contains("combat"))
    }
}
