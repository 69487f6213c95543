//! Session statistics and the derived behavior classification.

use serde::{Deserialize, Serialize};

use super::action::ActionType;

/// Monotonically accumulated per-session counters.
///
/// Only attack, talk, examine and move feed the classified counters;
/// every recorded action bumps the total.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SessionMetrics {
    pub total_actions: u32,
    pub combat_actions: u32,
    pub social_actions: u32,
    pub explore_actions: u32,
    pub session_time_minutes: f64,
    pub locations_visited: u32,
    pub npcs_interacted: u32,
}

impl SessionMetrics {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Count one action of the given type.
    pub fn record_action(self, action_type: ActionType) -> Self {
        let mut next = Self {
            total_actions: self.total_actions + 1,
            ..self
        };
        match action_type {
            ActionType::Attack => next.combat_actions += 1,
            ActionType::Talk => next.social_actions += 1,
            ActionType::Examine | ActionType::Move => next.explore_actions += 1,
            _ => {}
        }
        next
    }

    pub fn record_location_visited(self) -> Self {
        Self {
            locations_visited: self.locations_visited + 1,
            ..self
        }
    }

    pub fn record_npc_interacted(self) -> Self {
        Self {
            npcs_interacted: self.npcs_interacted + 1,
            ..self
        }
    }

    pub fn with_session_time(self, minutes: f64) -> Self {
        Self {
            session_time_minutes: minutes,
            ..self
        }
    }

    /// Percentage split of classified actions. All zeros when nothing has
    /// been recorded.
    pub fn action_distribution(&self) -> ActionDistribution {
        if self.total_actions == 0 {
            return ActionDistribution::default();
        }
        let total = f64::from(self.total_actions);
        let combat = f64::from(self.combat_actions) / total * 100.0;
        let social = f64::from(self.social_actions) / total * 100.0;
        let explore = f64::from(self.explore_actions) / total * 100.0;
        ActionDistribution {
            combat_percentage: combat,
            social_percentage: social,
            explore_percentage: explore,
            other_percentage: 100.0 - combat - social - explore,
        }
    }

    pub fn behavior_type(&self) -> BehaviorType {
        BehaviorType::from_distribution(&self.action_distribution())
    }
}

/// Derived read-only view of the action split.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ActionDistribution {
    pub combat_percentage: f64,
    pub social_percentage: f64,
    pub explore_percentage: f64,
    pub other_percentage: f64,
}

/// Player behavior classification for AI context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BehaviorType {
    Warrior,
    Diplomat,
    Explorer,
    #[default]
    Balanced,
}

impl BehaviorType {
    pub fn from_distribution(distribution: &ActionDistribution) -> Self {
        if distribution.combat_percentage > 50.0 {
            BehaviorType::Warrior
        } else if distribution.social_percentage > 50.0 {
            BehaviorType::Diplomat
        } else if distribution.explore_percentage > 50.0 {
            BehaviorType::Explorer
        } else {
            BehaviorType::Balanced
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BehaviorType::Warrior => "warrior",
            BehaviorType::Diplomat => "diplomat",
            BehaviorType::Explorer => "explorer",
            BehaviorType::Balanced => "balanced",
        }
    }
}

impl std::fmt::Display for BehaviorType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_by_action_class() {
        let metrics = SessionMetrics::empty()
            .record_action(ActionType::Attack)
            .record_action(ActionType::Talk)
            .record_action(ActionType::Examine)
            .record_action(ActionType::Move)
            .record_action(ActionType::Rest);

        assert_eq!(metrics.total_actions, 5);
        assert_eq!(metrics.combat_actions, 1);
        assert_eq!(metrics.social_actions, 1);
        assert_eq!(metrics.explore_actions, 2);
    }

    #[test]
    fn empty_distribution_is_all_zero() {
        let dist = SessionMetrics::empty().action_distribution();
        assert_eq!(dist.combat_percentage, 0.0);
        assert_eq!(dist.other_percentage, 0.0);
    }

    #[test]
    fn behavior_requires_majority() {
        let mut metrics = SessionMetrics::empty();
        for _ in 0..3 {
            metrics = metrics.record_action(ActionType::Attack);
        }
        metrics = metrics.record_action(ActionType::Talk);
        // 75% combat
        assert_eq!(metrics.behavior_type(), BehaviorType::Warrior);

        let even = SessionMetrics::empty()
            .record_action(ActionType::Attack)
            .record_action(ActionType::Talk);
        // 50/50 is not a majority
        assert_eq!(even.behavior_type(), BehaviorType::Balanced);
    }

    #[test]
    fn diplomat_and_explorer_classification() {
        let mut social = SessionMetrics::empty();
        for _ in 0..3 {
            social = social.record_action(ActionType::Talk);
        }
        social = social.record_action(ActionType::Rest);
        assert_eq!(social.behavior_type(), BehaviorType::Diplomat);

        let mut explore = SessionMetrics::empty();
        for _ in 0..3 {
            explore = explore.record_action(ActionType::Move);
        }
        explore = explore.record_action(ActionType::Rest);
        assert_eq!(explore.behavior_type(), BehaviorType::Explorer);
    }
}
