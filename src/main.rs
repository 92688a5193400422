use anyhow::Result;
use dotenvy::dotenv;
use std::sync::Arc;
use std::time::Duration;
use teloxide::prelude::*;
use tokio::time::sleep;

use contest_bot::cli::{Cli, Commands};
use contest_bot::conversation::{ConversationEngine, EngineSettings};
use contest_bot::core::{config, init_logger, install_panic_hook};
use contest_bot::storage::{create_pool, get_connection, list_participants};
use contest_bot::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps, TelegramTransport};

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, database, missing token).
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Load environment variables from .env if present, before any config is read
    let _ = dotenv();

    install_panic_hook();
    init_logger(&config::LOG_FILE_PATH)?;

    let result = match cli.command {
        Some(Commands::Run) | None => run_bot().await,
        Some(Commands::Participants { json }) => run_list_participants(json),
    };

    match result {
        Ok(()) => {
            log::info!("Bot stopped!");
            Ok(())
        }
        Err(e) => {
            log::error!("Bot stopped with error: {:#}", e);
            Err(e)
        }
    }
}

/// Print registered participants
fn run_list_participants(json: bool) -> Result<()> {
    let db_pool = create_pool(&config::DATABASE_PATH)?;
    let conn = get_connection(&db_pool)?;
    let participants = list_participants(&conn)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&participants)?);
        return Ok(());
    }

    if participants.is_empty() {
        println!("No participants registered yet.");
        return Ok(());
    }

    println!("{:<5} {:<14} {:<40} {}", "ID", "USER", "NAME", "PHOTO");
    for p in &participants {
        println!("{:<5} {:<14} {:<40} {}", p.id, p.user_id, p.display_name, p.media_filename);
    }
    println!("\nTotal: {}", participants.len());

    Ok(())
}

async fn run_bot() -> Result<()> {
    log::info!("Bot started!");

    // Fails fast when BOT_TOKEN is missing
    let bot = create_bot()?;

    let db_pool = Arc::new(create_pool(&config::DATABASE_PATH)?);
    log::info!("Database ready at {}", config::DATABASE_PATH.as_str());

    let bot_info = bot.get_me().await?;
    let bot_username = bot_info.username.clone();
    log::info!("Bot username: {:?}, Bot ID: {}", bot_username, bot_info.id);

    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to set bot commands: {}", e);
    }

    let transport = Arc::new(TelegramTransport::new(bot.clone()));
    let engine = Arc::new(ConversationEngine::new(transport, EngineSettings::from_config()));
    log::info!("Photos will be stored in {}", config::PHOTOS_DIR.as_str());

    let handler = schema(HandlerDeps::new(engine, db_pool, bot_username));

    let mut retry_count = 0;
    let max_retries = config::retry::MAX_DISPATCHER_RETRIES;

    // Run the dispatcher with retry logic
    loop {
        let bot_clone = bot.clone();
        let handler_clone = handler.clone();

        // Run the dispatcher in a separate task so a panic surfaces through the JoinHandle
        let handle = tokio::spawn(async move {
            use teloxide::update_listeners::Polling;

            // Pending updates from before the restart are dropped
            let listener = Polling::builder(bot_clone.clone()).drop_pending_updates().build();

            Dispatcher::builder(bot_clone, handler_clone)
                .dependencies(DependencyMap::new())
                .enable_ctrlc_handler()
                .build()
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("An error from the update listener"),
                )
                .await
        });

        match handle.await {
            Ok(()) => {
                log::info!("Dispatcher shutdown gracefully");
                break;
            }
            Err(join_err) if join_err.is_panic() => {
                log::error!("Dispatcher panicked: {}", join_err);

                if retry_count < max_retries {
                    retry_count += 1;
                    log::info!(
                        "Retrying dispatcher after panic (attempt {}/{})...",
                        retry_count,
                        max_retries
                    );
                    exponential_backoff(retry_count).await;
                } else {
                    log::error!("Max retries reached after panic. Exiting...");
                    return Err(anyhow::anyhow!("dispatcher panicked {} times", retry_count + 1));
                }
            }
            Err(join_err) => {
                log::warn!("Dispatcher task was cancelled: {}", join_err);
                break;
            }
        }

        sleep(config::retry::dispatcher_delay()).await;
    }

    Ok(())
}

async fn exponential_backoff(retry_count: u32) {
    let delay = Duration::from_secs(config::retry::EXPONENTIAL_BACKOFF_BASE.pow(retry_count));
    sleep(delay).await;
}
