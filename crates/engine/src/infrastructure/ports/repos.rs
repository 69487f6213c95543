//! Store port for the player context aggregate.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use talekeeper_domain::{PlayerContext, SessionId};

use super::error::RepoError;

/// Durable storage for player contexts, the sole source of truth.
///
/// No assumption is made about the underlying technology; the engine only
/// needs these lookups plus the two timestamp scans the cleanup sweep and
/// session monitoring run on.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContextStore: Send + Sync {
    /// Load a context by session id, `None` when unknown.
    async fn load(&self, session_id: SessionId) -> Result<Option<PlayerContext>, RepoError>;

    /// Persist a context, replacing any prior value for its session id.
    async fn save(&self, context: &PlayerContext) -> Result<(), RepoError>;

    /// Remove a context. Deleting an unknown id is not an error.
    async fn delete(&self, session_id: SessionId) -> Result<(), RepoError>;

    /// Sessions whose `last_update` is at or after `since`.
    async fn list_active_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<SessionId>, RepoError>;

    /// Sessions whose `last_update` is strictly before `before`.
    async fn list_older_than(
        &self,
        before: DateTime<Utc>,
    ) -> Result<Vec<SessionId>, RepoError>;

    /// Total number of stored sessions.
    async fn count(&self) -> Result<usize, RepoError>;
}
