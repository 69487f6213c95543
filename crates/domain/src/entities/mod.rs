//! Entities owned by the player context aggregate.

mod action_event;
mod character_state;
mod location_state;
mod npc_relationship;

pub use action_event::ActionEvent;
pub use character_state::CharacterState;
pub use location_state::{LocationState, LocationVisit, STARTING_LOCATION};
pub use npc_relationship::NpcRelationship;
