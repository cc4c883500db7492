//! Enumerated types.

mod language;
mod persona_state;
mod relationship;

pub use language::{Language, UnknownLanguage};
pub use persona_state::PersonaState;
pub use relationship::Relationship;
