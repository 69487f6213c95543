//! Ports that exist so time is injectable in tests.

use chrono::{DateTime, Utc};

/// Source of "now" for every timestamped rule in the engine.
#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
