//! Talekeeper engine.
//!
//! Library-level contract around the domain aggregate: port traits for
//! the durable store, the narrator LLM and the clock; infrastructure
//! adapters (in-memory store, TTL session cache); the context mutation
//! service that serializes writers per session; and the pure prompt
//! synthesizer the narrator consumes.

pub mod infrastructure;
pub mod prompt;
pub mod use_cases;

pub use infrastructure::cache::ContextCache;
pub use infrastructure::clock::SystemClock;
pub use infrastructure::memory::InMemoryContextStore;
pub use infrastructure::ports::{
    ClockPort, ContextStore, LlmError, NarratorPort, RepoError,
};
pub use infrastructure::settings::EngineSettings;
pub use use_cases::context::{ContextError, ContextService, ContextSummary, EngineMetrics};
pub use use_cases::narrative::Narrate;
