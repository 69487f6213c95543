//! TTL-based read-through cache for player contexts.
//!
//! Holds a transient copy per session id with no lifecycle of its own:
//! every mutating operation invalidates the entry synchronously, and a
//! background sweep can drop entries that aged out without traffic.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use talekeeper_domain::{PlayerContext, SessionId};

/// Thread-safe session cache with time-to-live expiration.
///
/// Entries past their TTL are treated as absent on read and removed by
/// `purge_expired()`.
pub struct ContextCache {
    entries: DashMap<SessionId, CacheEntry>,
    ttl: Duration,
}

struct CacheEntry {
    context: PlayerContext,
    inserted_at: Instant,
}

impl ContextCache {
    /// Create a cache with the specified TTL.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: DashMap::new(),
            ttl,
        }
    }

    /// Store a context, replacing any existing entry and resetting its TTL.
    pub fn put(&self, context: PlayerContext) {
        let entry = CacheEntry {
            inserted_at: Instant::now(),
            context,
        };
        self.entries.insert(entry.context.session_id, entry);
    }

    /// Store a context with an explicit insertion time (tests only).
    #[cfg(test)]
    fn put_at(&self, context: PlayerContext, inserted_at: Instant) {
        let entry = CacheEntry {
            inserted_at,
            context,
        };
        self.entries.insert(entry.context.session_id, entry);
    }

    /// Get a context if present and not expired.
    pub fn get(&self, session_id: SessionId) -> Option<PlayerContext> {
        self.entries.get(&session_id).and_then(|entry| {
            if entry.inserted_at.elapsed() < self.ttl {
                Some(entry.context.clone())
            } else {
                None
            }
        })
    }

    /// Drop the entry for a session, if any.
    pub fn invalidate(&self, session_id: SessionId) {
        self.entries.remove(&session_id);
    }

    /// Remove all expired entries and return how many were removed.
    pub fn purge_expired(&self) -> usize {
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| entry.inserted_at.elapsed() < self.ttl);
        before - self.entries.len()
    }

    /// Entry count, including expired entries not yet purged.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use talekeeper_domain::{CharacterName, PlayerId};

    fn context() -> PlayerContext {
        PlayerContext::new(
            PlayerId::new("p1").expect("valid id"),
            SessionId::new(),
            CharacterName::new("Hero").expect("valid name"),
            Utc::now(),
        )
    }

    fn expired_instant(ttl: Duration) -> Instant {
        Instant::now() - (ttl + Duration::from_millis(1))
    }

    #[test]
    fn put_and_get() {
        let cache = ContextCache::new(Duration::from_secs(60));
        let ctx = context();
        let id = ctx.session_id;
        cache.put(ctx.clone());
        assert_eq!(cache.get(id), Some(ctx));
    }

    #[test]
    fn get_returns_none_for_missing() {
        let cache = ContextCache::new(Duration::from_secs(60));
        assert_eq!(cache.get(SessionId::new()), None);
    }

    #[test]
    fn invalidate_removes_entry() {
        let cache = ContextCache::new(Duration::from_secs(60));
        let ctx = context();
        let id = ctx.session_id;
        cache.put(ctx);
        cache.invalidate(id);
        assert_eq!(cache.get(id), None);
    }

    #[test]
    fn expired_entries_not_returned() {
        let ttl = Duration::from_millis(10);
        let cache = ContextCache::new(ttl);
        let ctx = context();
        let id = ctx.session_id;
        cache.put_at(ctx, expired_instant(ttl));
        assert_eq!(cache.get(id), None);
    }

    #[test]
    fn purge_removes_only_expired() {
        let ttl = Duration::from_millis(10);
        let cache = ContextCache::new(ttl);
        cache.put_at(context(), expired_instant(ttl));
        cache.put_at(context(), expired_instant(ttl));
        let fresh = context();
        let fresh_id = fresh.session_id;
        cache.put(fresh);

        assert_eq!(cache.purge_expired(), 2);
        assert_eq!(cache.len(), 1);
        assert!(cache.get(fresh_id).is_some());
    }
}
