//! Telegram implementation of the engine's transport

use std::path::Path;

use async_trait::async_trait;
use teloxide::net::Download;
use teloxide::prelude::*;
use teloxide::types::{FileId, InputFile};
use tokio::io::AsyncWriteExt;

use crate::conversation::{file_extension, ResolvedMedia, Transport};
use crate::core::error::AppResult;

/// Sends replies and fetches photos through the Bot API
#[derive(Clone)]
pub struct TelegramTransport {
    bot: Bot,
}

impl TelegramTransport {
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }
}

#[async_trait]
impl Transport for TelegramTransport {
    async fn send_reply(&self, chat_id: ChatId, text: &str) -> AppResult<()> {
        self.bot.send_message(chat_id, text).await?;
        Ok(())
    }

    async fn send_sticker(&self, chat_id: ChatId, sticker: &str) -> AppResult<()> {
        self.bot
            .send_sticker(chat_id, InputFile::file_id(FileId(sticker.to_string())))
            .await?;
        Ok(())
    }

    async fn resolve_media(&self, media_id: &str) -> AppResult<ResolvedMedia> {
        let file = self.bot.get_file(FileId(media_id.to_string())).await?;
        let extension = file_extension(&file.path);
        Ok(ResolvedMedia {
            remote_path: file.path,
            extension,
        })
    }

    async fn download(&self, media: &ResolvedMedia, destination: &Path) -> AppResult<()> {
        // Hidden sibling file, renamed over the destination only on success
        let dir = match destination.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        let part = tempfile::Builder::new()
            .prefix(".download-")
            .suffix(".part")
            .tempfile_in(dir)?;
        let (file, part_path) = part.into_parts();
        let mut dst = tokio::fs::File::from_std(file);

        self.bot.download_file(&media.remote_path, &mut dst).await?;
        dst.flush().await?;
        drop(dst);

        part_path.persist(destination).map_err(|e| e.error)?;
        Ok(())
    }
}
