//! Registration dialogue: name first, then a photo
//!
//! `transition` decides what happens, `ConversationEngine` makes it happen
//! through a [`Transport`] and keeps one session per chat.

mod effect;
mod engine;
mod event;
mod normalize;
mod state;
mod store;
mod submission;
mod transition;
mod transport;

pub use effect::{Effect, PhotoSave, Reply};
pub use engine::{ConversationEngine, EngineSettings};
pub use event::{best_variant, Event, PhotoVariant};
pub use normalize::{normalize_name, MAX_NAME_CHARS};
pub use state::DialogueState;
pub use store::SessionStore;
pub use submission::{file_extension, photo_path, Submission, DEFAULT_EXTENSION};
pub use transition::{transition, Transition};
pub use transport::{ResolvedMedia, Transport};
