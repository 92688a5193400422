//! Bot initialization and inbound message classification
//!
//! This module contains:
//! - Command enum definition
//! - Bot instance creation
//! - Conversion of Telegram messages into engine events

use reqwest::ClientBuilder;
use teloxide::prelude::*;
use teloxide::types::Message;
use teloxide::utils::command::BotCommands;

use crate::conversation::{Event, PhotoVariant};
use crate::core::config;
use crate::core::error::{AppError, AppResult};

/// Bot commands enum with descriptions
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Я умею:")]
pub enum Command {
    #[command(description = "Начать работу с ботом")]
    Start,
    #[command(description = "Отменить текущее действие")]
    Cancel,
}

/// Creates a Bot instance from the configured token and optional API URL
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(AppError::Config)` - BOT_TOKEN is missing; the bot must not start
pub fn create_bot() -> AppResult<Bot> {
    create_bot_with(&config::BOT_TOKEN, config::BOT_API_URL.as_deref())
}

/// Creates a Bot instance with an explicit token and optional API URL
pub fn create_bot_with(token: &str, api_url: Option<&str>) -> AppResult<Bot> {
    if token.trim().is_empty() {
        log::error!("BOT_TOKEN is not set in the environment variables.");
        return Err(AppError::Config(
            "BOT_TOKEN is not set in the environment variables".to_string(),
        ));
    }

    let client = ClientBuilder::new().timeout(config::network::timeout()).build()?;
    let bot = Bot::with_client(token.trim(), client);

    match api_url {
        Some(bot_api_url) => {
            log::info!("Using custom Bot API URL: {}", bot_api_url);
            let url = url::Url::parse(bot_api_url)?;
            Ok(bot.set_api_url(url))
        }
        None => Ok(bot),
    }
}

/// Sets up bot commands in Telegram UI
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    bot.set_my_commands(Command::bot_commands()).await?;
    Ok(())
}

/// Classifies an inbound message for the conversation engine
///
/// Photos win over captions; text is parsed as a command first and falls
/// back to plain text, so unknown commands reach the engine as text.
pub fn event_from_message(msg: &Message, bot_username: Option<&str>) -> Event {
    if let Some(photos) = msg.photo() {
        let variants = photos
            .iter()
            .map(|photo| PhotoVariant::new(photo.file.id.0.clone(), photo.width, photo.height))
            .collect();
        return Event::Photo(variants);
    }

    if let Some(text) = msg.text() {
        return match Command::parse(text, bot_username.unwrap_or_default()) {
            Ok(Command::Start) => Event::Start,
            Ok(Command::Cancel) => Event::Cancel,
            Err(_) => Event::Text(text.to_string()),
        };
    }

    Event::Other
}
