//! Player context lifecycle: create, mutate, read, clean up.

mod service;
mod summary;

pub use service::{ContextError, ContextService};
pub use summary::{ContextSummary, EngineMetrics};
