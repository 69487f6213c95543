//! Classification rules: numeric scores to categorical labels.
//!
//! Pure, total step functions evaluated highest-threshold-first. These
//! labels are only ever derived for prompt rendering; the numeric score
//! remains the source of truth.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::disposition::{Disposition, Reputation};

/// How an NPC currently feels about the player, derived from disposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NpcMood {
    Ecstatic,
    Joyful,
    Friendly,
    Helpful,
    #[default]
    Neutral,
    Suspicious,
    Unfriendly,
    Hostile,
    Enraged,
}

impl NpcMood {
    /// Derive mood from a disposition score.
    pub fn from_disposition(disposition: Disposition) -> Self {
        match disposition.value() {
            d if d >= 80 => NpcMood::Ecstatic,
            d if d >= 60 => NpcMood::Joyful,
            d if d >= 40 => NpcMood::Friendly,
            d if d >= 20 => NpcMood::Helpful,
            d if d >= -20 => NpcMood::Neutral,
            d if d >= -40 => NpcMood::Suspicious,
            d if d >= -60 => NpcMood::Unfriendly,
            d if d >= -80 => NpcMood::Hostile,
            _ => NpcMood::Enraged,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            NpcMood::Ecstatic => "ecstatic",
            NpcMood::Joyful => "joyful",
            NpcMood::Friendly => "friendly",
            NpcMood::Helpful => "helpful",
            NpcMood::Neutral => "neutral",
            NpcMood::Suspicious => "suspicious",
            NpcMood::Unfriendly => "unfriendly",
            NpcMood::Hostile => "hostile",
            NpcMood::Enraged => "enraged",
        }
    }
}

impl fmt::Display for NpcMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for NpcMood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ecstatic" => Ok(NpcMood::Ecstatic),
            "joyful" => Ok(NpcMood::Joyful),
            "friendly" => Ok(NpcMood::Friendly),
            "helpful" => Ok(NpcMood::Helpful),
            "neutral" => Ok(NpcMood::Neutral),
            "suspicious" => Ok(NpcMood::Suspicious),
            "unfriendly" => Ok(NpcMood::Unfriendly),
            "hostile" => Ok(NpcMood::Hostile),
            "enraged" => Ok(NpcMood::Enraged),
            _ => Err(format!("Unknown NPC mood: {}", s)),
        }
    }
}

/// How well the NPC and the player know each other, derived from
/// disposition on a coarser ladder than mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RelationshipLevel {
    BestFriend,
    CloseFriend,
    Friend,
    Ally,
    #[default]
    Neutral,
    Unfriendly,
    Hostile,
    Enemy,
    Nemesis,
}

impl RelationshipLevel {
    pub fn from_disposition(disposition: Disposition) -> Self {
        match disposition.value() {
            d if d >= 75 => RelationshipLevel::BestFriend,
            d if d >= 50 => RelationshipLevel::CloseFriend,
            d if d >= 25 => RelationshipLevel::Friend,
            d if d >= 10 => RelationshipLevel::Ally,
            d if d >= -10 => RelationshipLevel::Neutral,
            d if d >= -25 => RelationshipLevel::Unfriendly,
            d if d >= -50 => RelationshipLevel::Hostile,
            d if d >= -75 => RelationshipLevel::Enemy,
            _ => RelationshipLevel::Nemesis,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RelationshipLevel::BestFriend => "Best Friend",
            RelationshipLevel::CloseFriend => "Close Friend",
            RelationshipLevel::Friend => "Friend",
            RelationshipLevel::Ally => "Ally",
            RelationshipLevel::Neutral => "Neutral",
            RelationshipLevel::Unfriendly => "Unfriendly",
            RelationshipLevel::Hostile => "Hostile",
            RelationshipLevel::Enemy => "Enemy",
            RelationshipLevel::Nemesis => "Nemesis",
        }
    }
}

impl fmt::Display for RelationshipLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The player's standing with the wider world, derived from reputation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReputationStanding {
    LegendaryHero,
    Renowned,
    Respected,
    #[default]
    Neutral,
    Disliked,
    Despised,
    Notorious,
    Villain,
}

impl ReputationStanding {
    pub fn from_reputation(reputation: Reputation) -> Self {
        match reputation.value() {
            r if r >= 75 => ReputationStanding::LegendaryHero,
            r if r >= 50 => ReputationStanding::Renowned,
            r if r >= 25 => ReputationStanding::Respected,
            r if r >= 0 => ReputationStanding::Neutral,
            r if r >= -25 => ReputationStanding::Disliked,
            r if r >= -50 => ReputationStanding::Despised,
            r if r >= -75 => ReputationStanding::Notorious,
            _ => ReputationStanding::Villain,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ReputationStanding::LegendaryHero => "Legendary Hero",
            ReputationStanding::Renowned => "Renowned",
            ReputationStanding::Respected => "Respected",
            ReputationStanding::Neutral => "Neutral",
            ReputationStanding::Disliked => "Disliked",
            ReputationStanding::Despised => "Despised",
            ReputationStanding::Notorious => "Notorious",
            ReputationStanding::Villain => "Villain",
        }
    }
}

impl fmt::Display for ReputationStanding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// The player's overall mood, derived from health ratio and reputation.
///
/// Checks are ordered; the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerMood {
    Confident,
    Desperate,
    Troubled,
    Focused,
}

impl PlayerMood {
    pub fn from_vitals(health_ratio: f64, reputation: Reputation) -> Self {
        if health_ratio > 0.8 && reputation.value() > 25 {
            PlayerMood::Confident
        } else if health_ratio < 0.3 {
            PlayerMood::Desperate
        } else if reputation.value() < -25 {
            PlayerMood::Troubled
        } else {
            PlayerMood::Focused
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PlayerMood::Confident => "confident",
            PlayerMood::Desperate => "desperate",
            PlayerMood::Troubled => "troubled",
            PlayerMood::Focused => "focused",
        }
    }
}

impl fmt::Display for PlayerMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mood(d: i32) -> NpcMood {
        NpcMood::from_disposition(Disposition::new(d))
    }

    #[test]
    fn npc_mood_thresholds_both_sides() {
        assert_eq!(mood(100), NpcMood::Ecstatic);
        assert_eq!(mood(80), NpcMood::Ecstatic);
        assert_eq!(mood(79), NpcMood::Joyful);
        assert_eq!(mood(60), NpcMood::Joyful);
        assert_eq!(mood(59), NpcMood::Friendly);
        assert_eq!(mood(40), NpcMood::Friendly);
        assert_eq!(mood(39), NpcMood::Helpful);
        assert_eq!(mood(20), NpcMood::Helpful);
        assert_eq!(mood(19), NpcMood::Neutral);
        assert_eq!(mood(-20), NpcMood::Neutral);
        assert_eq!(mood(-21), NpcMood::Suspicious);
        assert_eq!(mood(-40), NpcMood::Suspicious);
        assert_eq!(mood(-41), NpcMood::Unfriendly);
        assert_eq!(mood(-60), NpcMood::Unfriendly);
        assert_eq!(mood(-61), NpcMood::Hostile);
        assert_eq!(mood(-80), NpcMood::Hostile);
        assert_eq!(mood(-81), NpcMood::Enraged);
        assert_eq!(mood(-100), NpcMood::Enraged);
    }

    fn level(d: i32) -> RelationshipLevel {
        RelationshipLevel::from_disposition(Disposition::new(d))
    }

    #[test]
    fn relationship_thresholds_both_sides() {
        assert_eq!(level(75), RelationshipLevel::BestFriend);
        assert_eq!(level(74), RelationshipLevel::CloseFriend);
        assert_eq!(level(50), RelationshipLevel::CloseFriend);
        assert_eq!(level(49), RelationshipLevel::Friend);
        assert_eq!(level(25), RelationshipLevel::Friend);
        assert_eq!(level(24), RelationshipLevel::Ally);
        assert_eq!(level(10), RelationshipLevel::Ally);
        assert_eq!(level(9), RelationshipLevel::Neutral);
        assert_eq!(level(-10), RelationshipLevel::Neutral);
        assert_eq!(level(-11), RelationshipLevel::Unfriendly);
        assert_eq!(level(-25), RelationshipLevel::Unfriendly);
        assert_eq!(level(-26), RelationshipLevel::Hostile);
        assert_eq!(level(-50), RelationshipLevel::Hostile);
        assert_eq!(level(-51), RelationshipLevel::Enemy);
        assert_eq!(level(-75), RelationshipLevel::Enemy);
        assert_eq!(level(-76), RelationshipLevel::Nemesis);
    }

    fn standing(r: i32) -> ReputationStanding {
        ReputationStanding::from_reputation(Reputation::new(r))
    }

    #[test]
    fn reputation_thresholds_both_sides() {
        assert_eq!(standing(75), ReputationStanding::LegendaryHero);
        assert_eq!(standing(74), ReputationStanding::Renowned);
        assert_eq!(standing(50), ReputationStanding::Renowned);
        assert_eq!(standing(49), ReputationStanding::Respected);
        assert_eq!(standing(25), ReputationStanding::Respected);
        assert_eq!(standing(24), ReputationStanding::Neutral);
        assert_eq!(standing(0), ReputationStanding::Neutral);
        assert_eq!(standing(-1), ReputationStanding::Disliked);
        assert_eq!(standing(-25), ReputationStanding::Disliked);
        assert_eq!(standing(-26), ReputationStanding::Despised);
        assert_eq!(standing(-50), ReputationStanding::Despised);
        assert_eq!(standing(-51), ReputationStanding::Notorious);
        assert_eq!(standing(-75), ReputationStanding::Notorious);
        assert_eq!(standing(-76), ReputationStanding::Villain);
    }

    #[test]
    fn player_mood_first_match_wins() {
        // Healthy and admired beats everything else.
        assert_eq!(
            PlayerMood::from_vitals(0.9, Reputation::new(30)),
            PlayerMood::Confident
        );
        // Low health wins over bad reputation.
        assert_eq!(
            PlayerMood::from_vitals(0.2, Reputation::new(-90)),
            PlayerMood::Desperate
        );
        assert_eq!(
            PlayerMood::from_vitals(0.5, Reputation::new(-30)),
            PlayerMood::Troubled
        );
        assert_eq!(
            PlayerMood::from_vitals(0.5, Reputation::new(0)),
            PlayerMood::Focused
        );
        // Healthy but not admired is merely focused.
        assert_eq!(
            PlayerMood::from_vitals(0.9, Reputation::new(25)),
            PlayerMood::Focused
        );
        // Admired but on the 0.8 boundary is not confident.
        assert_eq!(
            PlayerMood::from_vitals(0.8, Reputation::new(90)),
            PlayerMood::Focused
        );
    }

    #[test]
    fn npc_mood_parse() {
        assert_eq!("helpful".parse::<NpcMood>(), Ok(NpcMood::Helpful));
        assert_eq!("ENRAGED".parse::<NpcMood>(), Ok(NpcMood::Enraged));
        assert!("grumpy".parse::<NpcMood>().is_err());
    }
}
