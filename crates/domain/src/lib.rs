//! Talekeeper domain model.
//!
//! One `PlayerContext` aggregate per play session: character vitals,
//! location history, NPC relationships and a bounded action log, plus the
//! pure classification rules that turn numbers into the labels the
//! narrator prompt uses. Everything here is an immutable value; "updates"
//! return new values and the engine crate decides what to persist.

pub mod aggregates;
pub mod entities;
pub mod error;
pub mod events;
pub mod ids;
pub mod value_objects;

pub use aggregates::{PlayerContext, MAX_ACTIONS};
pub use entities::{
    ActionEvent, CharacterState, LocationState, LocationVisit, NpcRelationship, STARTING_LOCATION,
};
pub use error::DomainError;
pub use events::DomainEvent;
pub use ids::{ActionId, NpcId, PlayerId, SessionId};
pub use value_objects::{
    ActionDistribution, ActionType, BehaviorType, CharacterName, Disposition, EquipmentItem,
    HealthStatus, InventoryItem, LocationName, NpcMood, PlayerMood, RelationshipLevel, Reputation,
    ReputationStanding, SessionMetrics,
};
