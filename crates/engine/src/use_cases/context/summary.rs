//! Compact read-only views for API responses and monitoring.

use chrono::{DateTime, Utc};
use serde::Serialize;
use talekeeper_domain::{BehaviorType, PlayerContext, ReputationStanding, SessionId};

use crate::prompt::action_line;

/// Snapshot of one session shaped for "give me this session's state"
/// responses.
#[derive(Debug, Clone, Serialize)]
pub struct ContextSummary {
    pub session_id: SessionId,
    pub player_id: String,
    pub character_name: String,
    pub current_location: String,
    pub previous_location: Option<String>,
    /// `current/max` rendering of health.
    pub health: String,
    pub reputation: i32,
    pub reputation_standing: String,
    pub session_duration_minutes: i64,
    pub player_mood: String,
    pub behavior: BehaviorType,
    /// Rendered recent action lines, oldest first.
    pub recent_actions: Vec<String>,
}

impl ContextSummary {
    pub fn from_context(
        context: &PlayerContext,
        recent_count: usize,
        now: DateTime<Utc>,
    ) -> Self {
        let recent_actions = context
            .recent_actions(recent_count)
            .iter()
            .map(|action| action_line(action, now))
            .collect();

        Self {
            session_id: context.session_id,
            player_id: context.player_id.as_str().to_string(),
            character_name: context.character.name.as_str().to_string(),
            current_location: context.location.current.as_str().to_string(),
            previous_location: context
                .location
                .previous
                .as_ref()
                .map(|p| p.as_str().to_string()),
            health: context.character.health.to_string(),
            reputation: context.character.reputation.value(),
            reputation_standing: ReputationStanding::from_reputation(context.character.reputation)
                .to_string(),
            session_duration_minutes: context.session_duration().num_minutes(),
            player_mood: context.player_mood().to_string(),
            behavior: context.session_stats.behavior_type(),
            recent_actions,
        }
    }
}

/// Operational counters for dashboards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EngineMetrics {
    pub active_sessions: usize,
    pub total_sessions: usize,
    pub cache_entries: usize,
}
