//! Action types and slash-command parsing.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of player action types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    Move,
    Talk,
    Attack,
    Examine,
    Use,
    Cast,
    Trade,
    Rest,
    #[default]
    Unknown,
}

impl ActionType {
    /// Sniff the action type from a raw slash command.
    ///
    /// Unrecognized or blank commands map to `Unknown`.
    pub fn from_command(command: &str) -> Self {
        let cmd = command.trim().to_ascii_lowercase();
        if cmd.is_empty() {
            return ActionType::Unknown;
        }

        if cmd.starts_with("/move") || cmd.starts_with("/go") {
            ActionType::Move
        } else if cmd.starts_with("/talk") || cmd.starts_with("/say") {
            ActionType::Talk
        } else if cmd.starts_with("/attack") || cmd.starts_with("/fight") {
            ActionType::Attack
        } else if cmd.starts_with("/look") || cmd.starts_with("/examine") {
            ActionType::Examine
        } else if cmd.starts_with("/use") || cmd.starts_with("/activate") {
            ActionType::Use
        } else if cmd.starts_with("/cast") || cmd.starts_with("/spell") {
            ActionType::Cast
        } else if cmd.starts_with("/trade") || cmd.starts_with("/buy") {
            ActionType::Trade
        } else if cmd.starts_with("/rest") || cmd.starts_with("/sleep") {
            ActionType::Rest
        } else {
            ActionType::Unknown
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Move => "move",
            ActionType::Talk => "talk",
            ActionType::Attack => "attack",
            ActionType::Examine => "examine",
            ActionType::Use => "use",
            ActionType::Cast => "cast",
            ActionType::Trade => "trade",
            ActionType::Rest => "rest",
            ActionType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
