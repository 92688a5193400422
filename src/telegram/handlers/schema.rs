//! Dispatcher schema and the registration endpoint

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::types::{HandlerDeps, HandlerError};
use crate::conversation::Submission;
use crate::storage::{get_connection, insert_participant, DbPool};
use crate::telegram::bot::event_from_message;

/// Creates the main dispatcher schema for the Telegram bot.
///
/// The same schema is used in production and can be used in integration tests.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    dptree::entry().branch(registration_handler(deps))
}

/// Every message goes to the conversation engine; the engine decides
/// whether it is a command, a name, a photo or noise.
fn registration_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().endpoint(move |msg: Message| {
        let deps = deps.clone();
        async move {
            handle_message(&deps, &msg).await;
            Ok(())
        }
    })
}

/// Runs one message through the engine and stores a finished registration.
///
/// This is the fault boundary: errors are logged with the chat id and never
/// propagate into the dispatcher, so one chat cannot disturb the others.
pub async fn handle_message(deps: &HandlerDeps, msg: &Message) {
    let chat_id = msg.chat.id;
    let event = event_from_message(msg, deps.bot_username.as_deref());
    let kind = event.kind();

    match deps.engine.handle(chat_id, event).await {
        Ok(Some(submission)) => record_submission(&deps.db_pool, submission),
        Ok(None) => {}
        Err(e) => {
            log::error!("Error handling {} message from chat {}: {:?}", kind, chat_id, e);
        }
    }
}

fn record_submission(db_pool: &DbPool, submission: Submission) {
    let conn = match get_connection(db_pool) {
        Ok(conn) => conn,
        Err(e) => {
            log::error!(
                "Failed to get DB connection to record participant {} (chat {}): {}",
                submission.display_name,
                submission.chat_id,
                e
            );
            return;
        }
    };

    match insert_participant(&conn, &submission) {
        Ok(id) => log::info!(
            "Participant #{} registered: {} (chat {}, {})",
            id,
            submission.display_name,
            submission.chat_id,
            submission.media_path.display()
        ),
        Err(e) => log::error!(
            "Failed to record participant {} (chat {}): {}",
            submission.display_name,
            submission.chat_id,
            e
        ),
    }
}
