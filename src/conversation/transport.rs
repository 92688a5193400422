//! Outbound side of the engine
//!
//! The engine never talks to Telegram directly; everything it sends or
//! fetches goes through this trait so tests can record the calls.

use std::path::Path;

use async_trait::async_trait;
use teloxide::types::ChatId;

use crate::core::error::AppResult;

/// A media file resolved to something downloadable
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMedia {
    /// Path of the file on the platform's file server
    pub remote_path: String,
    /// File extension derived from `remote_path`, without the dot
    pub extension: String,
}

#[async_trait]
pub trait Transport: Send + Sync {
    async fn send_reply(&self, chat_id: ChatId, text: &str) -> AppResult<()>;

    async fn send_sticker(&self, chat_id: ChatId, sticker: &str) -> AppResult<()>;

    /// Looks up a media file id and returns where to download it from
    async fn resolve_media(&self, media_id: &str) -> AppResult<ResolvedMedia>;

    /// Downloads the file to `destination`, overwriting it if present
    async fn download(&self, media: &ResolvedMedia, destination: &Path) -> AppResult<()>;
}
