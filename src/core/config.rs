use once_cell::sync::Lazy;
use std::env;
use std::time::Duration;

/// Configuration constants for the bot

/// Bot token
/// Read from BOT_TOKEN or TELOXIDE_TOKEN environment variable
/// Empty when neither is set; `create_bot` refuses to start in that case
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| {
    env::var("BOT_TOKEN")
        .or_else(|_| env::var("TELOXIDE_TOKEN"))
        .unwrap_or_else(|_| String::new())
});

/// Custom Bot API server URL (local telegram-bot-api)
/// Read from BOT_API_URL environment variable
pub static BOT_API_URL: Lazy<Option<String>> = Lazy::new(|| env::var("BOT_API_URL").ok());

/// Database file path
/// Read from DATABASE_PATH environment variable
/// Default: bot_database.db
pub static DATABASE_PATH: Lazy<String> =
    Lazy::new(|| env::var("DATABASE_PATH").unwrap_or_else(|_| "bot_database.db".to_string()));

/// Log file path
/// Read from LOG_FILE_PATH environment variable
/// Default: bot.log
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE_PATH").unwrap_or_else(|_| "bot.log".to_string()));

/// Directory where participant photos are stored
/// Read from PHOTOS_DIR environment variable
/// Default: photos
pub static PHOTOS_DIR: Lazy<String> = Lazy::new(|| env::var("PHOTOS_DIR").unwrap_or_else(|_| "photos".to_string()));

/// Registration flow configuration
pub mod greeting {
    use super::{env, Duration, Lazy};

    /// Sticker sent before the greeting text
    pub const DEFAULT_STICKER: &str = "CAACAgIAAxkBAAIRlWe8zRPhoaoD08dIOYbDrmPhmV55AAJdWwACS9bJSiTwphdkogdfNgQ";

    /// Pause between the sticker and the greeting text (in milliseconds)
    pub const DEFAULT_PAUSE_MS: u64 = 700;

    /// Sticker file id, read from GREETING_STICKER
    /// An empty value disables the sticker
    pub static STICKER: Lazy<Option<String>> = Lazy::new(|| match env::var("GREETING_STICKER") {
        Ok(value) if value.trim().is_empty() => None,
        Ok(value) => Some(value.trim().to_string()),
        Err(_) => Some(DEFAULT_STICKER.to_string()),
    });

    /// Pause duration, read from GREETING_PAUSE_MS
    pub static PAUSE: Lazy<Duration> = Lazy::new(|| {
        let ms = env::var("GREETING_PAUSE_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .unwrap_or(DEFAULT_PAUSE_MS);
        Duration::from_millis(ms)
    });
}

/// Database configuration
pub mod database {
    /// Maximum number of pooled SQLite connections
    pub const MAX_CONNECTIONS: u32 = 4;
}

/// Retry configuration
pub mod retry {
    use super::Duration;

    /// Maximum number of retries for dispatcher reconnection
    pub const MAX_DISPATCHER_RETRIES: u32 = 5;

    /// Delay between dispatcher retry attempts (in seconds)
    pub const DISPATCHER_RETRY_DELAY_SECS: u64 = 5;

    /// Dispatcher retry delay duration
    pub fn dispatcher_delay() -> Duration {
        Duration::from_secs(DISPATCHER_RETRY_DELAY_SECS)
    }

    /// Base for exponential backoff calculation
    pub const EXPONENTIAL_BACKOFF_BASE: u64 = 2;
}

/// Network configuration
pub mod network {
    use super::Duration;

    /// Request timeout for Bot API calls and file downloads (in seconds)
    pub const REQUEST_TIMEOUT_SECS: u64 = 120;

    /// Request timeout duration
    pub fn timeout() -> Duration {
        Duration::from_secs(REQUEST_TIMEOUT_SECS)
    }
}
