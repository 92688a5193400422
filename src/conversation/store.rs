use dashmap::DashMap;
use teloxide::types::ChatId;

use super::state::DialogueState;

/// In-memory session map keyed by chat.
///
/// Only non-idle sessions are stored; an absent entry means `Idle`. Nothing is
/// persisted, so every session starts over after a restart.
#[derive(Debug, Default)]
pub struct SessionStore {
    sessions: DashMap<ChatId, DialogueState>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current state for the chat (`Idle` when there is no session).
    ///
    /// Returns a copy so no map guard outlives the call.
    pub fn state(&self, chat_id: ChatId) -> DialogueState {
        self.sessions
            .get(&chat_id)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// Stores the new state, dropping the session when it becomes idle.
    pub fn set(&self, chat_id: ChatId, state: DialogueState) {
        if state.is_idle() {
            self.sessions.remove(&chat_id);
        } else {
            self.sessions.insert(chat_id, state);
        }
    }

    pub fn reset(&self, chat_id: ChatId) {
        self.sessions.remove(&chat_id);
    }

    /// Number of live (non-idle) sessions
    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
