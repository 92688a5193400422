//! Telegram bot integration and handlers

pub mod bot;
pub mod handlers;
pub mod transport;

// Re-exports for convenience
pub use bot::{create_bot, create_bot_with, event_from_message, setup_bot_commands, Command};
pub use handlers::{handle_message, schema, HandlerDeps, HandlerError};
pub use transport::TelegramTransport;
