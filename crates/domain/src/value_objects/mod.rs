//! Value objects: validated names, clamped scores, classification rules.

mod action;
mod disposition;
mod health;
mod items;
mod metrics;
mod mood;
mod names;

pub use action::ActionType;
pub use disposition::{Disposition, Reputation};
pub use health::HealthStatus;
pub use items::{EquipmentItem, InventoryItem};
pub use metrics::{ActionDistribution, BehaviorType, SessionMetrics};
pub use mood::{NpcMood, PlayerMood, RelationshipLevel, ReputationStanding};
pub use names::{CharacterName, LocationName};
