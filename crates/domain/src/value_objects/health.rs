//! Character health tracking.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Current/maximum hit points. `0 <= current <= max`, `max > 0`.
///
/// There is no explicit death state; callers interpret `current == 0` as
/// incapacitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    current: u32,
    max: u32,
}

impl HealthStatus {
    /// Create a health status.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if `max == 0` or `current > max`.
    pub fn new(current: u32, max: u32) -> Result<Self, DomainError> {
        if max == 0 {
            return Err(DomainError::validation("Max health must be positive"));
        }
        if current > max {
            return Err(DomainError::validation(
                "Current health cannot exceed max health",
            ));
        }
        Ok(Self { current, max })
    }

    /// Starting health for a fresh character.
    pub fn starting() -> Self {
        Self {
            current: 20,
            max: 20,
        }
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Apply a health change, clamping into `[0, max]`.
    pub fn apply(self, delta: i32) -> Self {
        let shifted = i64::from(self.current) + i64::from(delta);
        let clamped = shifted.clamp(0, i64::from(self.max));
        Self {
            // Clamped into [0, max], both of which fit u32.
            current: clamped as u32,
            max: self.max,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    /// Health as a fraction of maximum, in `[0.0, 1.0]`.
    pub fn ratio(&self) -> f64 {
        f64::from(self.current) / f64::from(self.max)
    }
}

impl std::fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.current, self.max)
    }
}
