//! Transport double that records every outbound call

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use contest_bot::conversation::{file_extension, ResolvedMedia, Transport};
use contest_bot::core::{AppError, AppResult};
use teloxide::types::ChatId;

/// One call made by the engine
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    Reply(ChatId, String),
    Sticker(ChatId, String),
    Resolve(String),
    Download { remote_path: String, destination: PathBuf },
}

/// Records calls and writes a tiny fake photo on download
#[derive(Debug, Default)]
pub struct RecordingTransport {
    calls: Mutex<Vec<Call>>,
    fail_downloads: AtomicBool,
    fail_resolve: AtomicBool,
    failing_reply: Mutex<Option<String>>,
}

impl RecordingTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_fail_downloads(&self, fail: bool) {
        self.fail_downloads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_resolve(&self, fail: bool) {
        self.fail_resolve.store(fail, Ordering::SeqCst);
    }

    /// Makes every reply with exactly this text fail; `None` clears it
    pub fn set_fail_reply(&self, text: Option<&str>) {
        *self.failing_reply.lock().unwrap() = text.map(str::to_string);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    /// Text replies sent to one chat, in order
    pub fn replies_to(&self, chat_id: ChatId) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Reply(chat, text) if chat == chat_id => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn downloads(&self) -> Vec<PathBuf> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::Download { destination, .. } => Some(destination),
                _ => None,
            })
            .collect()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send_reply(&self, chat_id: ChatId, text: &str) -> AppResult<()> {
        if self.failing_reply.lock().unwrap().as_deref() == Some(text) {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::BrokenPipe,
                "chat is unreachable",
            )));
        }
        self.record(Call::Reply(chat_id, text.to_string()));
        Ok(())
    }

    async fn send_sticker(&self, chat_id: ChatId, sticker: &str) -> AppResult<()> {
        self.record(Call::Sticker(chat_id, sticker.to_string()));
        Ok(())
    }

    async fn resolve_media(&self, media_id: &str) -> AppResult<ResolvedMedia> {
        self.record(Call::Resolve(media_id.to_string()));
        if self.fail_resolve.load(Ordering::SeqCst) {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::TimedOut,
                "getFile timed out",
            )));
        }
        let remote_path = format!("photos/{}.jpg", media_id);
        Ok(ResolvedMedia {
            extension: file_extension(&remote_path),
            remote_path,
        })
    }

    async fn download(&self, media: &ResolvedMedia, destination: &Path) -> AppResult<()> {
        if self.fail_downloads.load(Ordering::SeqCst) {
            return Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::ConnectionReset,
                "connection reset by peer",
            )));
        }
        self.record(Call::Download {
            remote_path: media.remote_path.clone(),
            destination: destination.to_path_buf(),
        });
        std::fs::write(destination, b"\xFF\xD8\xFF fake jpeg")?;
        Ok(())
    }
}
