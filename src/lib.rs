//! Contest bot - Telegram bot that registers contest participants
//!
//! A participant is registered in two steps: the bot asks for the child's
//! full name, then for a photo. The photo is saved as
//! `photos/<Normalized_Name>.<ext>` and the entry is recorded in SQLite.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, logging
//! - `conversation`: the per-chat registration state machine
//! - `storage`: participant database
//! - `telegram`: bot creation, transport and dispatcher handlers

pub mod cli;
pub mod conversation;
pub mod core;
pub mod storage;
pub mod telegram;

// Re-export commonly used types for convenience
pub use conversation::{ConversationEngine, EngineSettings, Event, Submission};
pub use core::{config, AppError, AppResult};
pub use storage::{create_pool, get_connection, DbConnection, DbPool};
