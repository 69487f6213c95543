//! Narrator prompt synthesis.
//!
//! Pure formatting over an already-loaded context: no storage or network
//! access happens here, and identical inputs plus the same "now" always
//! render the same text. Missing optional data renders as sensible
//! defaults instead of erroring.

use chrono::{DateTime, Utc};
use talekeeper_domain::{ActionEvent, NpcRelationship, PlayerContext, ReputationStanding};

/// Fixed text blocks of the narrator prompt.
pub mod templates {
    /// First line of every prompt.
    pub const HEADER: &str = "GAME MASTER CONTEXT";

    /// Closing instruction block handed to the narrator.
    pub const GM_INSTRUCTIONS: &str = "\
GM INSTRUCTIONS:
1. Respond as the omniscient narrator and world
2. Maintain consistency with previous interactions
3. React appropriately to the player's reputation and recent actions
4. Consider NPC relationships and dispositions
5. Provide immersive, contextual descriptions
6. Balance challenge with player agency

Current situation requires your response as Game Master.";

    /// Placeholder for an empty action history.
    pub const NO_RECENT_ACTIONS: &str = "- No recent actions";
}

/// Render the full narrator prompt from a context snapshot and its most
/// recent actions (chronological, oldest first).
pub fn narrator_prompt(
    context: &PlayerContext,
    recent_actions: &[ActionEvent],
    now: DateTime<Utc>,
) -> String {
    let mut prompt = String::new();

    prompt.push_str(templates::HEADER);
    prompt.push_str("\n\n");

    prompt.push_str("CURRENT GAME STATE:\n");
    prompt.push_str(&format!("- Location: {}", context.location.current));
    if let Some(previous) = &context.location.previous {
        prompt.push_str(&format!(" (previously: {})", previous));
    }
    prompt.push('\n');
    prompt.push_str(&format!("- Player Health: {}\n", context.character.health));
    prompt.push_str(&format!(
        "- Player Reputation: {} ({})\n",
        context.character.reputation,
        ReputationStanding::from_reputation(context.character.reputation)
    ));
    prompt.push_str(&format!(
        "- Session Duration: {} minutes\n",
        context.session_duration().num_minutes()
    ));
    prompt.push_str(&format!("- Player Mood: {}\n\n", context.player_mood()));

    prompt.push_str("RECENT PLAYER ACTIONS:\n");
    if recent_actions.is_empty() {
        prompt.push_str(templates::NO_RECENT_ACTIONS);
        prompt.push('\n');
    } else {
        for action in recent_actions {
            prompt.push_str(&format!("- {}\n", action_line(action, now)));
        }
    }

    prompt.push_str("\nACTIVE NPCS IN AREA:\n");
    for npc in context.npcs_nearby() {
        prompt.push_str(&npc_lines(npc, now));
    }

    prompt.push('\n');
    prompt.push_str(templates::GM_INSTRUCTIONS);

    prompt
}

/// One action rendered as `<minutes-ago> min ago: <command> (<type>) -> <outcome>`.
pub fn action_line(action: &ActionEvent, now: DateTime<Utc>) -> String {
    let minutes_ago = (now - action.timestamp).num_minutes().max(0);
    format!(
        "{} min ago: {} ({}) -> {}",
        minutes_ago, action.command, action.action_type, action.outcome
    )
}

fn npc_lines(npc: &NpcRelationship, now: DateTime<Utc>) -> String {
    let last_seen = (now - npc.last_interaction).num_minutes().max(0);
    let mut lines = format!(
        "- {} ({}): {} mood, {} relationship (last seen {} min ago)\n",
        npc.name,
        npc.npc_id,
        npc.mood,
        npc.relationship_level(),
        last_seen
    );
    if !npc.known_facts.is_empty() {
        lines.push_str(&format!("  - Knows: {}\n", npc.known_facts.join(", ")));
    }
    lines
}
