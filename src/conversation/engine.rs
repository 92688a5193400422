//! Conversation engine: applies transitions and executes their effects

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use teloxide::types::ChatId;

use super::effect::{Effect, PhotoSave, Reply};
use super::event::Event;
use super::state::DialogueState;
use super::store::SessionStore;
use super::submission::{photo_path, Submission};
use super::transition::{transition, Transition};
use super::transport::Transport;
use crate::core::config;
use crate::core::error::AppResult;

/// Engine settings that come from the environment in production
#[derive(Debug, Clone)]
pub struct EngineSettings {
    pub photos_dir: PathBuf,
    pub greeting_sticker: Option<String>,
    pub greeting_pause: Duration,
}

impl EngineSettings {
    pub fn from_config() -> Self {
        Self {
            photos_dir: PathBuf::from(config::PHOTOS_DIR.as_str()),
            greeting_sticker: config::greeting::STICKER.clone(),
            greeting_pause: *config::greeting::PAUSE,
        }
    }
}

/// Drives the registration flow for every chat
///
/// Each call to [`ConversationEngine::handle`] touches only the session of the
/// chat it was called for. The dispatcher serialises updates per chat and runs
/// different chats concurrently, so there is no cross-session locking here.
pub struct ConversationEngine {
    transport: Arc<dyn Transport>,
    sessions: SessionStore,
    settings: EngineSettings,
}

impl ConversationEngine {
    pub fn new(transport: Arc<dyn Transport>, settings: EngineSettings) -> Self {
        Self {
            transport,
            sessions: SessionStore::new(),
            settings,
        }
    }

    pub fn sessions(&self) -> &SessionStore {
        &self.sessions
    }

    pub fn state(&self, chat_id: ChatId) -> DialogueState {
        self.sessions.state(chat_id)
    }

    /// Handles one inbound event for one chat.
    ///
    /// Returns the finished submission when this event completed a
    /// registration. If saving the photo fails the user is asked to send it
    /// again and the session is left untouched. Once a photo is saved the
    /// submission is returned even if the confirmation cannot be sent.
    pub async fn handle(&self, chat_id: ChatId, event: Event) -> AppResult<Option<Submission>> {
        let current = self.sessions.state(chat_id);
        let kind = event.kind();
        let cancelling = matches!(event, Event::Cancel) && !current.is_idle();
        let Transition { next, save, effects } = transition(&current, event);

        log::debug!("chat {}: {} in state {} -> {}", chat_id, kind, current, next);

        let submission = match save {
            Some(save) => match self.save_photo(chat_id, &save).await {
                Ok(saved) => Some(saved),
                Err(e) => {
                    log::error!("Failed to save photo for chat {}: {}", chat_id, e);
                    self.transport
                        .send_reply(chat_id, Reply::PhotoSaveFailed.text())
                        .await?;
                    return Ok(None);
                }
            },
            None => None,
        };

        if cancelling {
            log::info!("User {} has cancelled the registration", chat_id);
            self.sessions.reset(chat_id);
        } else {
            self.sessions.set(chat_id, next);
        }

        for effect in effects {
            if let Err(e) = self.execute(chat_id, effect).await {
                let Some(submission) = submission else {
                    return Err(e);
                };
                log::error!(
                    "Photo of {} saved but chat {} was not notified: {}",
                    submission.display_name,
                    chat_id,
                    e
                );
                return Ok(Some(submission));
            }
        }

        Ok(submission)
    }

    async fn execute(&self, chat_id: ChatId, effect: Effect) -> AppResult<()> {
        match effect {
            Effect::GreetingSticker => {
                if let Some(sticker) = &self.settings.greeting_sticker {
                    self.transport.send_sticker(chat_id, sticker).await?;
                    if !self.settings.greeting_pause.is_zero() {
                        tokio::time::sleep(self.settings.greeting_pause).await;
                    }
                }
            }
            Effect::Reply(reply) => {
                self.transport.send_reply(chat_id, reply.text()).await?;
            }
        }
        Ok(())
    }

    async fn save_photo(&self, chat_id: ChatId, save: &PhotoSave) -> AppResult<Submission> {
        let PhotoSave { variant, name } = save;
        let media = self.transport.resolve_media(&variant.file_id).await?;
        let path = photo_path(&self.settings.photos_dir, name, &media.extension);

        fs_err::tokio::create_dir_all(&self.settings.photos_dir).await?;
        self.transport.download(&media, &path).await?;
        log::info!("Photo saved: {}", path.display());

        Ok(Submission {
            chat_id,
            display_name: name.to_string(),
            media_reference: variant.file_id.clone(),
            media_path: path,
        })
    }
}
