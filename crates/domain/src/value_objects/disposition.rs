//! Clamped score newtypes.
//!
//! `Disposition` measures how an NPC feels about the player, `Reputation`
//! the player's standing with the wider world. Both live on a [-100, 100]
//! scale and saturate at the ends rather than erroring.

use std::fmt;

use serde::{Deserialize, Serialize};

const SCORE_MIN: i32 = -100;
const SCORE_MAX: i32 = 100;

macro_rules! define_score {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
        )]
        #[serde(transparent)]
        pub struct $name(i32);

        impl $name {
            /// Neutral starting score.
            pub const NEUTRAL: Self = Self(0);

            /// Create a score, clamping into [-100, 100].
            pub fn new(value: i32) -> Self {
                Self(value.clamp(SCORE_MIN, SCORE_MAX))
            }

            /// Apply a delta, clamping the result into [-100, 100].
            pub fn apply(self, delta: i32) -> Self {
                Self::new(self.0.saturating_add(delta))
            }

            pub fn value(self) -> i32 {
                self.0
            }
        }

        impl From<i32> for $name {
            fn from(value: i32) -> Self {
                Self::new(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

define_score!(Disposition);
define_score!(Reputation);
