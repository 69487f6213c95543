//! Narrate use case - turn a session's state into narration.

use std::sync::Arc;

use talekeeper_domain::SessionId;

use crate::infrastructure::ports::NarratorPort;
use crate::use_cases::context::{ContextError, ContextService};

/// Narration returned when the provider cannot answer. The provider is
/// contractually expected to degrade internally; this is the engine's
/// last-resort stand-in so callers always get a valid string.
const DEGRADED_NARRATION: &str =
    "The world seems to hold its breath for a moment. The tale will continue shortly.";

/// Renders the narrator prompt for a session and asks the AI narrator
/// for the next piece of the story.
pub struct Narrate {
    contexts: Arc<ContextService>,
    narrator: Arc<dyn NarratorPort>,
}

impl Narrate {
    pub fn new(contexts: Arc<ContextService>, narrator: Arc<dyn NarratorPort>) -> Self {
        Self { contexts, narrator }
    }

    /// Produce narration for the session's current state.
    ///
    /// Provider failure is reported, not fatal: the result is a degraded
    /// but valid narration string. Session and store errors still
    /// propagate.
    pub async fn execute(&self, session_id: SessionId) -> Result<String, ContextError> {
        let prompt = self.contexts.generate_prompt(session_id).await?;

        if !self.narrator.healthy().await {
            tracing::warn!(session_id = %session_id, "narrator unhealthy, degrading");
            return Ok(DEGRADED_NARRATION.to_string());
        }

        match self.narrator.generate(&prompt).await {
            Ok(text) => Ok(text),
            Err(error) => {
                tracing::warn!(
                    session_id = %session_id,
                    error = %error,
                    "narrator failed, degrading"
                );
                Ok(DEGRADED_NARRATION.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::cache::ContextCache;
    use crate::infrastructure::clock::SystemClock;
    use crate::infrastructure::memory::InMemoryContextStore;
    use crate::infrastructure::ports::{LlmError, MockNarratorPort};
    use crate::infrastructure::settings::EngineSettings;

    async fn service_with_session() -> (Arc<ContextService>, SessionId) {
        let service = Arc::new(ContextService::new(
            Arc::new(InMemoryContextStore::new()),
            Arc::new(ContextCache::new(std::time::Duration::from_secs(60))),
            Arc::new(SystemClock::new()),
            EngineSettings::default(),
        ));
        let (context, _) = service
            .create_session("p1", "Hero")
            .await
            .expect("session created");
        (service, context.session_id)
    }

    #[tokio::test]
    async fn passes_rendered_prompt_to_provider() {
        let (service, session_id) = service_with_session().await;

        let mut narrator = MockNarratorPort::new();
        narrator.expect_healthy().returning(|| true);
        narrator
            .expect_generate()
            .withf(|prompt| prompt.starts_with("GAME MASTER CONTEXT"))
            .returning(|_| Ok("The village stirs.".to_string()));

        let narrate = Narrate::new(service, Arc::new(narrator));
        let text = narrate.execute(session_id).await.expect("narration");
        assert_eq!(text, "The village stirs.");
    }

    #[tokio::test]
    async fn unhealthy_provider_degrades() {
        let (service, session_id) = service_with_session().await;

        let mut narrator = MockNarratorPort::new();
        narrator.expect_healthy().returning(|| false);

        let narrate = Narrate::new(service, Arc::new(narrator));
        let text = narrate.execute(session_id).await.expect("narration");
        assert_eq!(text, DEGRADED_NARRATION);
    }

    #[tokio::test]
    async fn provider_error_degrades() {
        let (service, session_id) = service_with_session().await;

        let mut narrator = MockNarratorPort::new();
        narrator.expect_healthy().returning(|| true);
        narrator
            .expect_generate()
            .returning(|_| Err(LlmError::RequestFailed("timeout".to_string())));

        let narrate = Narrate::new(service, Arc::new(narrator));
        let text = narrate.execute(session_id).await.expect("narration");
        assert_eq!(text, DEGRADED_NARRATION);
    }

    #[tokio::test]
    async fn unknown_session_still_errors() {
        let (service, _) = service_with_session().await;

        let mut narrator = MockNarratorPort::new();
        narrator.expect_healthy().returning(|| true);

        let narrate = Narrate::new(service, Arc::new(narrator));
        let result = narrate.execute(SessionId::new()).await;
        assert!(matches!(result, Err(ContextError::SessionNotFound(_))));
    }
}
