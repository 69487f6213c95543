//! Engine settings.
//!
//! Hard defaults tuned to the original deployment, overridable per
//! process through environment variables (a `.env` file is honored).

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Operational knobs for the context engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineSettings {
    /// How long a cached context stays servable without a reload.
    pub cache_ttl_minutes: u64,
    /// Window for "active session" listings and metrics.
    pub active_window_minutes: u64,
    /// Sessions idle longer than this are eligible for cleanup.
    pub max_context_age_days: u64,
    /// Suggested cadence for the cleanup sweep.
    pub cleanup_interval_hours: u64,
    /// Recent actions included in the narrator prompt.
    pub prompt_recent_actions: usize,
    /// Recent actions included in the compact summary.
    pub summary_recent_actions: usize,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            cache_ttl_minutes: 30,
            active_window_minutes: 60,
            max_context_age_days: 30,
            cleanup_interval_hours: 6,
            prompt_recent_actions: 10,
            summary_recent_actions: 5,
        }
    }
}

impl EngineSettings {
    /// Load settings from the environment, falling back to defaults for
    /// anything unset or unparsable.
    pub fn from_env() -> Self {
        // A missing .env file is fine; real env vars still apply.
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            cache_ttl_minutes: env_parse("TALEKEEPER_CACHE_TTL_MINUTES", defaults.cache_ttl_minutes),
            active_window_minutes: env_parse(
                "TALEKEEPER_ACTIVE_WINDOW_MINUTES",
                defaults.active_window_minutes,
            ),
            max_context_age_days: env_parse(
                "TALEKEEPER_MAX_CONTEXT_AGE_DAYS",
                defaults.max_context_age_days,
            ),
            cleanup_interval_hours: env_parse(
                "TALEKEEPER_CLEANUP_INTERVAL_HOURS",
                defaults.cleanup_interval_hours,
            ),
            prompt_recent_actions: env_parse(
                "TALEKEEPER_PROMPT_RECENT_ACTIONS",
                defaults.prompt_recent_actions,
            ),
            summary_recent_actions: env_parse(
                "TALEKEEPER_SUMMARY_RECENT_ACTIONS",
                defaults.summary_recent_actions,
            ),
        }
    }

    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_minutes * 60)
    }

    pub fn active_window(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.active_window_minutes as i64)
    }

    pub fn max_context_age(&self) -> chrono::Duration {
        chrono::Duration::days(self.max_context_age_days as i64)
    }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|raw| raw.trim().parse().ok())
        .unwrap_or(default)
}
