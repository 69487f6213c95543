//! In-memory context store.
//!
//! The default store adapter for tests and single-process deployments.
//! Contexts cross the boundary as JSON so this adapter keeps the same
//! (de)serialization edge a durable implementation would have.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use talekeeper_domain::{PlayerContext, SessionId};

use crate::infrastructure::ports::{ContextStore, RepoError};

/// `DashMap`-backed store; rows are serialized JSON documents.
#[derive(Default)]
pub struct InMemoryContextStore {
    rows: DashMap<SessionId, StoredRow>,
}

struct StoredRow {
    document: String,
    last_update: DateTime<Utc>,
}

impl InMemoryContextStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ContextStore for InMemoryContextStore {
    async fn load(&self, session_id: SessionId) -> Result<Option<PlayerContext>, RepoError> {
        match self.rows.get(&session_id) {
            Some(row) => {
                let context = serde_json::from_str(&row.document)
                    .map_err(|e| RepoError::serialization(e))?;
                Ok(Some(context))
            }
            None => Ok(None),
        }
    }

    async fn save(&self, context: &PlayerContext) -> Result<(), RepoError> {
        let document =
            serde_json::to_string(context).map_err(|e| RepoError::serialization(e))?;
        self.rows.insert(
            context.session_id,
            StoredRow {
                document,
                last_update: context.last_update,
            },
        );
        Ok(())
    }

    async fn delete(&self, session_id: SessionId) -> Result<(), RepoError> {
        self.rows.remove(&session_id);
        Ok(())
    }

    async fn list_active_since(
        &self,
        since: DateTime<Utc>,
    ) -> Result<Vec<SessionId>, RepoError> {
        Ok(self
            .rows
            .iter()
            .filter(|row| row.last_update >= since)
            .map(|row| *row.key())
            .collect())
    }

    async fn list_older_than(
        &self,
        before: DateTime<Utc>,
    ) -> Result<Vec<SessionId>, RepoError> {
        Ok(self
            .rows
            .iter()
            .filter(|row| row.last_update < before)
            .map(|row| *row.key())
            .collect())
    }

    async fn count(&self) -> Result<usize, RepoError> {
        Ok(self.rows.len())
    }
}
