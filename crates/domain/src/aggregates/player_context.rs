//! The per-session aggregate root.

use std::collections::BTreeMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{ActionEvent, CharacterState, LocationState, NpcRelationship};
use crate::ids::{NpcId, PlayerId, SessionId};
use crate::value_objects::{CharacterName, LocationName, PlayerMood, SessionMetrics};

/// Upper bound on the retained action log; oldest entries drop first.
pub const MAX_ACTIONS: usize = 50;

/// Complete state of one play session.
///
/// Exclusively owns all nested structures; nothing here is shared across
/// sessions. Every transform returns a new value with `last_update`
/// refreshed, so a context is valid at every point in time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlayerContext {
    pub player_id: PlayerId,
    pub session_id: SessionId,
    pub start_time: DateTime<Utc>,
    pub last_update: DateTime<Utc>,
    pub character: CharacterState,
    pub location: LocationState,
    /// Ordered action log, oldest first, at most [`MAX_ACTIONS`] entries.
    pub actions: Vec<ActionEvent>,
    /// Keyed by NPC id; ordered so rendering is deterministic.
    pub npc_relationships: BTreeMap<NpcId, NpcRelationship>,
    pub session_stats: SessionMetrics,
}

impl PlayerContext {
    /// Fresh context for a newly created session.
    pub fn new(
        player_id: PlayerId,
        session_id: SessionId,
        player_name: CharacterName,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            player_id,
            session_id,
            start_time: now,
            last_update: now,
            character: CharacterState::new_adventurer(player_name),
            location: LocationState::starting(now),
            actions: Vec::new(),
            npc_relationships: BTreeMap::new(),
            session_stats: SessionMetrics::empty(),
        }
    }

    /// Append an action, counting it in the session stats and dropping
    /// the oldest entries beyond the cap.
    pub fn with_action(self, action: ActionEvent, now: DateTime<Utc>) -> Self {
        let action_type = action.action_type;
        let mut actions = self.actions;
        actions.push(action);
        if actions.len() > MAX_ACTIONS {
            let overflow = actions.len() - MAX_ACTIONS;
            actions.drain(..overflow);
        }
        Self {
            actions,
            session_stats: self.session_stats.record_action(action_type),
            last_update: now,
            ..self
        }
    }

    /// Move to a new location, closing out the current stay.
    ///
    /// `locations_visited` counts moves to a *different* location only,
    /// matching the visit-count reset.
    pub fn with_location(self, new_location: LocationName, now: DateTime<Utc>) -> Self {
        let moved = new_location != self.location.current;
        let session_stats = if moved {
            self.session_stats.record_location_visited()
        } else {
            self.session_stats
        };
        Self {
            location: self.location.move_to(new_location, now),
            session_stats,
            last_update: now,
            ..self
        }
    }

    /// Fold one NPC interaction into the context. First contact creates
    /// the relationship at neutral disposition and then applies the
    /// change; repeat contact updates the existing record.
    pub fn with_npc_interaction(
        self,
        npc_id: NpcId,
        npc_name: CharacterName,
        disposition_change: i32,
        new_facts: Vec<String>,
        now: DateTime<Utc>,
    ) -> Self {
        let mut npc_relationships = self.npc_relationships;
        let mut session_stats = self.session_stats;

        let updated = match npc_relationships.remove(&npc_id) {
            Some(existing) => existing.after_interaction(disposition_change, new_facts, now),
            None => {
                session_stats = session_stats.record_npc_interacted();
                NpcRelationship::first_interaction(
                    npc_id.clone(),
                    npc_name,
                    self.location.current.clone(),
                    disposition_change,
                    new_facts,
                    now,
                )
            }
        };
        npc_relationships.insert(npc_id, updated);

        Self {
            npc_relationships,
            session_stats,
            last_update: now,
            ..self
        }
    }

    /// Apply a health delta, clamped into `[0, max]`.
    pub fn with_health_change(self, delta: i32, now: DateTime<Utc>) -> Self {
        Self {
            character: self.character.with_health_change(delta),
            last_update: now,
            ..self
        }
    }

    /// Apply a reputation delta, clamped into `[-100, 100]`.
    pub fn with_reputation_change(self, delta: i32, now: DateTime<Utc>) -> Self {
        Self {
            character: self.character.with_reputation_change(delta),
            last_update: now,
            ..self
        }
    }

    /// The most recent `count` actions in chronological order.
    pub fn recent_actions(&self, count: usize) -> &[ActionEvent] {
        let start = self.actions.len().saturating_sub(count);
        &self.actions[start..]
    }

    /// NPCs last seen at the player's current location.
    pub fn npcs_nearby(&self) -> impl Iterator<Item = &NpcRelationship> {
        self.npc_relationships
            .values()
            .filter(|npc| npc.location == self.location.current)
    }

    /// Wall-clock span of the session so far.
    pub fn session_duration(&self) -> Duration {
        self.last_update - self.start_time
    }

    /// Derived overall mood from vitals and reputation.
    pub fn player_mood(&self) -> PlayerMood {
        PlayerMood::from_vitals(self.character.health.ratio(), self.character.reputation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::{ActionType, NpcMood};
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 1, 9, 0, 0).single().expect("valid time")
    }

    fn new_context() -> PlayerContext {
        PlayerContext::new(
            PlayerId::new("p1").expect("valid id"),
            SessionId::new(),
            CharacterName::new("Hero").expect("valid name"),
            t0(),
        )
    }

    fn talk_action(n: usize, at: DateTime<Utc>) -> ActionEvent {
        ActionEvent::record(
            ActionType::Talk,
            format!("/talk npc{}", n),
            None,
            LocationName::new("starting_village").expect("valid location"),
            "they answer",
            vec![],
            at,
        )
        .expect("valid action")
    }

    #[test]
    fn action_log_is_capped_at_fifty() {
        let mut ctx = new_context();
        for n in 0..60 {
            let at = t0() + Duration::minutes(n as i64);
            ctx = ctx.with_action(talk_action(n, at), at);
        }
        assert_eq!(ctx.actions.len(), MAX_ACTIONS);
        // The ten oldest were dropped.
        assert_eq!(ctx.actions[0].command, "/talk npc10");
        assert_eq!(ctx.actions[MAX_ACTIONS - 1].command, "/talk npc59");
        assert_eq!(ctx.session_stats.total_actions, 60);
    }

    #[test]
    fn recent_actions_returns_newest_slice() {
        let mut ctx = new_context();
        for n in 0..5 {
            let at = t0() + Duration::minutes(n as i64);
            ctx = ctx.with_action(talk_action(n, at), at);
        }
        let recent = ctx.recent_actions(3);
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].command, "/talk npc2");
        assert_eq!(recent[2].command, "/talk npc4");
        // Asking for more than exists returns everything.
        assert_eq!(ctx.recent_actions(100).len(), 5);
    }

    #[test]
    fn every_transform_refreshes_last_update() {
        let later = t0() + Duration::minutes(10);
        let ctx = new_context().with_health_change(-5, later);
        assert_eq!(ctx.last_update, later);
        assert_eq!(ctx.start_time, t0());

        let moved = ctx.with_location(
            LocationName::new("forest").expect("valid location"),
            later + Duration::minutes(1),
        );
        assert_eq!(moved.last_update, later + Duration::minutes(1));
    }

    #[test]
    fn first_npc_interaction_applies_change_once() {
        let ctx = new_context().with_npc_interaction(
            NpcId::new("npc1").expect("valid id"),
            CharacterName::new("Elder").expect("valid name"),
            10,
            vec![],
            t0(),
        );
        let npc = ctx
            .npc_relationships
            .get(&NpcId::new("npc1").expect("valid id"))
            .expect("relationship exists");
        assert_eq!(npc.disposition.value(), 10);
        assert_eq!(npc.interaction_count, 1);
        assert_eq!(npc.mood, NpcMood::Neutral);
        assert_eq!(ctx.session_stats.npcs_interacted, 1);
    }

    #[test]
    fn repeat_npc_interaction_updates_in_place() {
        let npc_id = NpcId::new("npc1").expect("valid id");
        let ctx = new_context()
            .with_npc_interaction(
                npc_id.clone(),
                CharacterName::new("Elder").expect("valid name"),
                10,
                vec![],
                t0(),
            )
            .with_npc_interaction(
                npc_id.clone(),
                CharacterName::new("Elder").expect("valid name"),
                15,
                vec!["knows the old road".to_string()],
                t0() + Duration::minutes(5),
            );

        assert_eq!(ctx.npc_relationships.len(), 1);
        let npc = ctx.npc_relationships.get(&npc_id).expect("relationship exists");
        assert_eq!(npc.disposition.value(), 25);
        assert_eq!(npc.mood, NpcMood::Helpful);
        assert_eq!(npc.interaction_count, 2);
        // Only the first meeting counts toward the metric.
        assert_eq!(ctx.session_stats.npcs_interacted, 1);
    }

    #[test]
    fn nearby_npcs_filter_by_current_location() {
        let forest = LocationName::new("forest").expect("valid location");
        let ctx = new_context()
            .with_npc_interaction(
                NpcId::new("npc1").expect("valid id"),
                CharacterName::new("Elder").expect("valid name"),
                0,
                vec![],
                t0(),
            )
            .with_location(forest, t0() + Duration::minutes(1))
            .with_npc_interaction(
                NpcId::new("npc2").expect("valid id"),
                CharacterName::new("Hermit").expect("valid name"),
                0,
                vec![],
                t0() + Duration::minutes(2),
            );

        let nearby: Vec<&str> = ctx.npcs_nearby().map(|n| n.name.as_str()).collect();
        assert_eq!(nearby, vec!["Hermit"]);
    }

    #[test]
    fn location_move_counts_distinct_visits() {
        let forest = LocationName::new("forest").expect("valid location");
        let ctx = new_context().with_location(forest.clone(), t0() + Duration::minutes(1));
        assert_eq!(ctx.location.previous.as_ref().map(|p| p.as_str()), Some("starting_village"));
        assert_eq!(ctx.location.current, forest);
        assert_eq!(ctx.location.visit_count, 1);
        assert_eq!(ctx.session_stats.locations_visited, 1);
    }
}
