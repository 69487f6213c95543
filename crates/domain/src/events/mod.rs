//! Domain events.
//!
//! Coarse-grained descriptions of what a mutation did. There is no event
//! bus: every mutating engine operation returns the event alongside the
//! new state, and the caller decides whether to forward it to telemetry
//! or other subscribers.

use serde::{Deserialize, Serialize};

use crate::ids::{ActionId, NpcId, PlayerId, SessionId};
use crate::value_objects::ActionType;

/// What changed, for the caller to forward or drop.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum DomainEvent {
    SessionCreated {
        session_id: SessionId,
        player_id: PlayerId,
        player_name: String,
    },
    ActionRecorded {
        session_id: SessionId,
        action_id: ActionId,
        action_type: ActionType,
    },
    LocationChanged {
        session_id: SessionId,
        from: String,
        to: String,
    },
    NpcInteraction {
        session_id: SessionId,
        npc_id: NpcId,
        disposition_change: i32,
        disposition: i32,
    },
    HealthChanged {
        session_id: SessionId,
        delta: i32,
        current: u32,
    },
    ReputationChanged {
        session_id: SessionId,
        delta: i32,
        reputation: i32,
    },
}
