//! Engine and message fixtures

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use contest_bot::conversation::{ConversationEngine, EngineSettings};
use teloxide::types::Message;
use tempfile::TempDir;

use super::transport::RecordingTransport;

pub const TEST_STICKER: &str = "sticker-file-id";

/// Engine wired to a recording transport and a temporary photos directory
pub struct TestEngine {
    pub engine: Arc<ConversationEngine>,
    pub transport: Arc<RecordingTransport>,
    pub photos_dir: PathBuf,
    // Keeps the directory alive for the duration of the test
    _dir: TempDir,
}

pub fn test_engine() -> TestEngine {
    let dir = tempfile::tempdir().unwrap();
    let photos_dir = dir.path().join("photos");
    let transport = Arc::new(RecordingTransport::new());
    let settings = EngineSettings {
        photos_dir: photos_dir.clone(),
        greeting_sticker: Some(TEST_STICKER.to_string()),
        greeting_pause: Duration::ZERO,
    };
    let engine = Arc::new(ConversationEngine::new(transport.clone(), settings));

    TestEngine {
        engine,
        transport,
        photos_dir,
        _dir: dir,
    }
}

fn base_message(chat_id: i64) -> serde_json::Value {
    serde_json::json!({
        "message_id": 1,
        "date": 1740000000,
        "chat": { "id": chat_id, "type": "private", "first_name": "Test" },
        "from": { "id": chat_id, "is_bot": false, "first_name": "Test" }
    })
}

/// Private-chat text message
pub fn text_message(chat_id: i64, text: &str) -> Message {
    let mut value = base_message(chat_id);
    value["text"] = serde_json::json!(text);
    serde_json::from_value(value).unwrap()
}

/// Private-chat photo message with a thumbnail and a full-size variant
pub fn photo_message(chat_id: i64, file_id: &str) -> Message {
    let mut value = base_message(chat_id);
    value["photo"] = serde_json::json!([
        { "file_id": format!("{}-thumb", file_id), "file_unique_id": "t", "width": 90, "height": 90, "file_size": 900 },
        { "file_id": file_id, "file_unique_id": "f", "width": 1280, "height": 960, "file_size": 120000 }
    ]);
    serde_json::from_value(value).unwrap()
}
