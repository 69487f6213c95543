//! Port traits the engine consumes.
//!
//! The engine is store-agnostic and provider-agnostic: everything it
//! needs from the outside world comes through these traits, injected as
//! `Arc<dyn ...>` constructor arguments.

mod error;
mod external;
mod repos;
mod testing;

pub use error::{LlmError, RepoError};
pub use external::NarratorPort;
pub use repos::ContextStore;
pub use testing::ClockPort;

#[cfg(test)]
pub use external::MockNarratorPort;
#[cfg(test)]
pub use repos::MockContextStore;
#[cfg(test)]
pub use testing::MockClockPort;
