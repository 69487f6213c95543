//! Per-session relationship with one NPC.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::NpcId;
use crate::value_objects::{CharacterName, Disposition, LocationName, NpcMood, RelationshipLevel};

/// Everything the session remembers about one NPC: disposition, derived
/// mood, interaction history and accumulated facts.
///
/// Created on first interaction; subsequent interactions update the record
/// in place rather than replacing it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NpcRelationship {
    pub npc_id: NpcId,
    pub name: CharacterName,
    pub disposition: Disposition,
    pub first_met: DateTime<Utc>,
    pub last_interaction: DateTime<Utc>,
    pub interaction_count: u32,
    /// De-duplicated facts the NPC has shared or witnessed.
    pub known_facts: Vec<String>,
    /// Cached derivation of `disposition`; recomputed on every change.
    pub mood: NpcMood,
    /// Where this NPC was last encountered.
    pub location: LocationName,
    pub notes: Vec<String>,
}

impl NpcRelationship {
    /// Record a first meeting at neutral disposition.
    pub fn first_meeting(
        npc_id: NpcId,
        name: CharacterName,
        location: LocationName,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            npc_id,
            name,
            disposition: Disposition::NEUTRAL,
            first_met: now,
            last_interaction: now,
            interaction_count: 1,
            known_facts: Vec::new(),
            mood: NpcMood::from_disposition(Disposition::NEUTRAL),
            location,
            notes: Vec::new(),
        }
    }

    /// First contact and the interaction that caused it in one step: the
    /// relationship starts neutral, the change applies once, and exactly
    /// one interaction is counted.
    pub fn first_interaction(
        npc_id: NpcId,
        name: CharacterName,
        location: LocationName,
        disposition_change: i32,
        new_facts: Vec<String>,
        now: DateTime<Utc>,
    ) -> Self {
        let mut relationship = Self::first_meeting(npc_id, name, location, now)
            .after_interaction(disposition_change, new_facts, now);
        relationship.interaction_count = 1;
        relationship
    }

    /// Fold one interaction into the relationship: clamp the disposition
    /// shift, recompute mood, union the new facts.
    pub fn after_interaction(
        self,
        disposition_change: i32,
        new_facts: Vec<String>,
        now: DateTime<Utc>,
    ) -> Self {
        let disposition = self.disposition.apply(disposition_change);

        let mut known_facts = self.known_facts;
        for fact in new_facts {
            if !known_facts.contains(&fact) {
                known_facts.push(fact);
            }
        }

        Self {
            disposition,
            mood: NpcMood::from_disposition(disposition),
            last_interaction: now,
            interaction_count: self.interaction_count + 1,
            known_facts,
            ..self
        }
    }

    /// Social-distance label derived from the current disposition.
    pub fn relationship_level(&self) -> RelationshipLevel {
        RelationshipLevel::from_disposition(self.disposition)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn elder(now: DateTime<Utc>) -> NpcRelationship {
        NpcRelationship::first_meeting(
            NpcId::new("npc1").expect("valid id"),
            CharacterName::new("Elder").expect("valid name"),
            LocationName::new("village").expect("valid location"),
            now,
        )
    }

    #[test]
    fn first_meeting_is_neutral() {
        let now = Utc::now();
        let npc = elder(now);
        assert_eq!(npc.disposition.value(), 0);
        assert_eq!(npc.mood, NpcMood::Neutral);
        assert_eq!(npc.interaction_count, 1);
        assert_eq!(npc.first_met, now);
    }

    #[test]
    fn interaction_updates_disposition_and_mood() {
        let now = Utc::now();
        let npc = elder(now).after_interaction(25, vec!["likes honey cakes".to_string()], now);
        assert_eq!(npc.disposition.value(), 25);
        assert_eq!(npc.mood, NpcMood::Helpful);
        assert_eq!(npc.interaction_count, 2);
        assert_eq!(npc.known_facts, vec!["likes honey cakes".to_string()]);
    }

    #[test]
    fn facts_do_not_duplicate() {
        let now = Utc::now();
        let npc = elder(now)
            .after_interaction(0, vec!["guards the gate".to_string()], now)
            .after_interaction(
                0,
                vec!["guards the gate".to_string(), "fears rain".to_string()],
                now,
            );
        assert_eq!(npc.known_facts.len(), 2);
    }

    #[test]
    fn first_interaction_counts_once() {
        let now = Utc::now();
        let npc = NpcRelationship::first_interaction(
            NpcId::new("npc1").expect("valid id"),
            CharacterName::new("Elder").expect("valid name"),
            LocationName::new("village").expect("valid location"),
            10,
            vec!["keeps the shrine".to_string()],
            now,
        );
        assert_eq!(npc.disposition.value(), 10);
        assert_eq!(npc.interaction_count, 1);
        assert_eq!(npc.known_facts.len(), 1);
    }

    #[test]
    fn disposition_clamps_and_mood_tracks_new_value() {
        let now = Utc::now();
        let npc = elder(now)
            .after_interaction(90, vec![], now)
            .after_interaction(50, vec![], now);
        assert_eq!(npc.disposition.value(), 100);
        assert_eq!(npc.mood, NpcMood::Ecstatic);
        assert_eq!(npc.relationship_level(), RelationshipLevel::BestFriend);
    }
}
