//! Handler types and dependencies

use std::sync::Arc;

use crate::conversation::ConversationEngine;
use crate::storage::DbPool;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
///
/// Built once at startup and cloned into every endpoint; the clones share the
/// same engine and therefore the same session map.
#[derive(Clone)]
pub struct HandlerDeps {
    pub engine: Arc<ConversationEngine>,
    pub db_pool: Arc<DbPool>,
    pub bot_username: Option<String>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(engine: Arc<ConversationEngine>, db_pool: Arc<DbPool>, bot_username: Option<String>) -> Self {
        Self {
            engine,
            db_pool,
            bot_username,
        }
    }
}
