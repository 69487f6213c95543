//! Narration: hand the rendered prompt to the AI narrator.

mod narrate;

pub use narrate::Narrate;
