//! The context mutation service.
//!
//! Every operation is load -> pure aggregate transform -> save ->
//! cache invalidate, under a per-session write lock so concurrent
//! writers to one session cannot interleave field updates. Reads go
//! through the cache and may be briefly stale.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use talekeeper_domain::{
    ActionEvent, ActionType, CharacterName, DomainError, DomainEvent, LocationName, NpcId,
    PlayerContext, PlayerId, SessionId,
};
use tokio::sync::{Mutex, OwnedMutexGuard};

use crate::infrastructure::cache::ContextCache;
use crate::infrastructure::ports::{ClockPort, ContextStore, RepoError};
use crate::infrastructure::settings::EngineSettings;

use super::summary::{ContextSummary, EngineMetrics};

/// Errors surfaced by context operations.
#[derive(Debug, thiserror::Error)]
pub enum ContextError {
    /// Malformed input; never retried.
    #[error(transparent)]
    Validation(#[from] DomainError),

    /// Unknown or evicted session id; the caller decides whether to
    /// start a new session.
    #[error("Session not found: {0}")]
    SessionNotFound(SessionId),

    /// The store failed; the mutation was not applied.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(#[from] RepoError),
}

/// One live write transaction: the per-session guard, the loaded state
/// and the operation timestamp.
struct WriteTxn {
    _guard: OwnedMutexGuard<()>,
    context: PlayerContext,
    now: DateTime<Utc>,
}

/// Applies game events to player contexts and keeps store and cache in
/// agreement.
pub struct ContextService {
    store: Arc<dyn ContextStore>,
    cache: Arc<ContextCache>,
    clock: Arc<dyn ClockPort>,
    settings: EngineSettings,
    write_locks: DashMap<SessionId, Arc<Mutex<()>>>,
}

impl ContextService {
    pub fn new(
        store: Arc<dyn ContextStore>,
        cache: Arc<ContextCache>,
        clock: Arc<dyn ClockPort>,
        settings: EngineSettings,
    ) -> Self {
        Self {
            store,
            cache,
            clock,
            settings,
            write_locks: DashMap::new(),
        }
    }

    /// Create a new play session for a player.
    pub async fn create_session(
        &self,
        player_id: &str,
        player_name: &str,
    ) -> Result<(PlayerContext, DomainEvent), ContextError> {
        let player_id = PlayerId::new(player_id)?;
        let player_name = CharacterName::new(player_name)?;

        let session_id = SessionId::new();
        let now = self.clock.now();
        let context = PlayerContext::new(player_id.clone(), session_id, player_name.clone(), now);
        self.store.save(&context).await?;

        tracing::info!(
            session_id = %session_id,
            player_id = %player_id,
            player_name = %player_name,
            "created new session"
        );

        let event = DomainEvent::SessionCreated {
            session_id,
            player_id,
            player_name: player_name.as_str().to_string(),
        };
        Ok((context, event))
    }

    /// Current state of a session, served from the cache when fresh.
    pub async fn get_context(&self, session_id: SessionId) -> Result<PlayerContext, ContextError> {
        if let Some(context) = self.cache.get(session_id) {
            return Ok(context);
        }
        let context = self
            .store
            .load(session_id)
            .await?
            .ok_or(ContextError::SessionNotFound(session_id))?;
        self.cache.put(context.clone());
        Ok(context)
    }

    /// Record a player action with its outcome and consequences.
    pub async fn record_action(
        &self,
        session_id: SessionId,
        command: &str,
        action_type: ActionType,
        target: Option<String>,
        location: &str,
        outcome: &str,
        consequences: Vec<String>,
    ) -> Result<(PlayerContext, DomainEvent), ContextError> {
        let location = LocationName::new(location)?;

        let txn = self.begin_write(session_id).await?;
        let action = ActionEvent::record(
            action_type,
            command,
            target,
            location,
            outcome,
            consequences,
            txn.now,
        )?;
        let action_id = action.id;
        let next = txn.context.with_action(action, txn.now);
        self.commit(&next).await?;

        tracing::debug!(
            session_id = %session_id,
            command = command,
            outcome = outcome,
            "recorded action"
        );

        let event = DomainEvent::ActionRecorded {
            session_id,
            action_id,
            action_type,
        };
        Ok((next, event))
    }

    /// Move the player to a new location.
    ///
    /// Moving to the location the player is already in is a recognized
    /// no-op: nothing is persisted and no event is emitted.
    pub async fn update_location(
        &self,
        session_id: SessionId,
        new_location: &str,
    ) -> Result<(PlayerContext, Option<DomainEvent>), ContextError> {
        let new_location = LocationName::new(new_location)?;

        let txn = self.begin_write(session_id).await?;
        if txn.context.location.current == new_location {
            return Ok((txn.context, None));
        }

        let from = txn.context.location.current.as_str().to_string();
        let next = txn.context.with_location(new_location.clone(), txn.now);
        self.commit(&next).await?;

        tracing::debug!(
            session_id = %session_id,
            from = %from,
            to = %new_location,
            "updated location"
        );

        let event = DomainEvent::LocationChanged {
            session_id,
            from,
            to: new_location.as_str().to_string(),
        };
        Ok((next, Some(event)))
    }

    /// Record an interaction with an NPC, creating the relationship on
    /// first contact.
    pub async fn update_npc_relationship(
        &self,
        session_id: SessionId,
        npc_id: &str,
        npc_name: &str,
        disposition_change: i32,
        new_facts: Vec<String>,
    ) -> Result<(PlayerContext, DomainEvent), ContextError> {
        let npc_id = NpcId::new(npc_id)?;
        let npc_name = CharacterName::new(npc_name)?;

        let txn = self.begin_write(session_id).await?;
        let next = txn.context.with_npc_interaction(
            npc_id.clone(),
            npc_name,
            disposition_change,
            new_facts,
            txn.now,
        );
        let disposition = next
            .npc_relationships
            .get(&npc_id)
            .map(|npc| npc.disposition.value())
            .unwrap_or_default();
        self.commit(&next).await?;

        tracing::debug!(
            session_id = %session_id,
            npc_id = %npc_id,
            disposition_change,
            disposition,
            "updated NPC relationship"
        );

        let event = DomainEvent::NpcInteraction {
            session_id,
            npc_id,
            disposition_change,
            disposition,
        };
        Ok((next, event))
    }

    /// Apply a health delta, clamped into `[0, max]`.
    pub async fn update_character_health(
        &self,
        session_id: SessionId,
        delta: i32,
    ) -> Result<(PlayerContext, DomainEvent), ContextError> {
        let txn = self.begin_write(session_id).await?;
        let next = txn.context.with_health_change(delta, txn.now);
        let current = next.character.health.current();
        self.commit(&next).await?;

        tracing::debug!(session_id = %session_id, delta, current, "updated health");

        let event = DomainEvent::HealthChanged {
            session_id,
            delta,
            current,
        };
        Ok((next, event))
    }

    /// Apply a reputation delta, clamped into `[-100, 100]`.
    pub async fn update_reputation(
        &self,
        session_id: SessionId,
        delta: i32,
    ) -> Result<(PlayerContext, DomainEvent), ContextError> {
        let txn = self.begin_write(session_id).await?;
        let next = txn.context.with_reputation_change(delta, txn.now);
        let reputation = next.character.reputation.value();
        self.commit(&next).await?;

        tracing::debug!(session_id = %session_id, delta, reputation, "updated reputation");

        let event = DomainEvent::ReputationChanged {
            session_id,
            delta,
            reputation,
        };
        Ok((next, event))
    }

    /// The most recent `count` actions, oldest first.
    pub async fn recent_actions(
        &self,
        session_id: SessionId,
        count: usize,
    ) -> Result<Vec<ActionEvent>, ContextError> {
        let context = self.get_context(session_id).await?;
        Ok(context.recent_actions(count).to_vec())
    }

    /// Render the narrator prompt for a session.
    pub async fn generate_prompt(&self, session_id: SessionId) -> Result<String, ContextError> {
        let context = self.get_context(session_id).await?;
        let recent = context.recent_actions(self.settings.prompt_recent_actions);
        Ok(crate::prompt::narrator_prompt(
            &context,
            recent,
            self.clock.now(),
        ))
    }

    /// Compact summary view for API responses.
    pub async fn context_summary(
        &self,
        session_id: SessionId,
    ) -> Result<ContextSummary, ContextError> {
        let context = self.get_context(session_id).await?;
        Ok(ContextSummary::from_context(
            &context,
            self.settings.summary_recent_actions,
            self.clock.now(),
        ))
    }

    /// Sessions updated within the configured active window.
    pub async fn list_active_sessions(&self) -> Result<Vec<SessionId>, ContextError> {
        let since = self.clock.now() - self.settings.active_window();
        Ok(self.store.list_active_since(since).await?)
    }

    /// Operational counters for monitoring.
    pub async fn engine_metrics(&self) -> Result<EngineMetrics, ContextError> {
        let since = self.clock.now() - self.settings.active_window();
        Ok(EngineMetrics {
            active_sessions: self.store.list_active_since(since).await?.len(),
            total_sessions: self.store.count().await?,
            cache_entries: self.cache.len(),
        })
    }

    /// Delete every session idle for longer than `max_age`; returns how
    /// many were removed.
    ///
    /// Each deletion takes the same per-session lock as regular writes,
    /// so the sweep and live traffic can only race benignly on
    /// "not found".
    pub async fn cleanup_expired_sessions(
        &self,
        max_age: chrono::Duration,
    ) -> Result<usize, ContextError> {
        let cutoff = self.clock.now() - max_age;
        let stale = self.store.list_older_than(cutoff).await?;

        let mut removed = 0usize;
        for session_id in stale {
            let lock = self.lock_for(session_id);
            let _guard = lock.lock_owned().await;
            self.store.delete(session_id).await?;
            self.cache.invalidate(session_id);
            self.write_locks.remove(&session_id);
            removed += 1;
        }

        tracing::info!(removed, "cleaned up expired sessions");
        Ok(removed)
    }

    fn lock_for(&self, session_id: SessionId) -> Arc<Mutex<()>> {
        self.write_locks
            .entry(session_id)
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    /// Take the session's write lock and load its current state.
    async fn begin_write(&self, session_id: SessionId) -> Result<WriteTxn, ContextError> {
        let lock = self.lock_for(session_id);
        let guard = lock.lock_owned().await;
        let context = self
            .store
            .load(session_id)
            .await?
            .ok_or(ContextError::SessionNotFound(session_id))?;
        Ok(WriteTxn {
            _guard: guard,
            context,
            now: self.clock.now(),
        })
    }

    /// Persist the new state and synchronously drop the stale cache
    /// entry. Must be called while the write lock is held.
    async fn commit(&self, next: &PlayerContext) -> Result<(), ContextError> {
        self.store.save(next).await?;
        self.cache.invalidate(next.session_id);
        Ok(())
    }
}
