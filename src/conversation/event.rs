//! Inbound events as seen by the conversation engine

/// One resolution variant of an inbound photo
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhotoVariant {
    /// Platform file id used to resolve and download the variant
    pub file_id: String,
    pub width: u32,
    pub height: u32,
}

impl PhotoVariant {
    pub fn new(file_id: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            file_id: file_id.into(),
            width,
            height,
        }
    }

    fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }
}

/// Event delivered to the engine for a single user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// `/start` command
    Start,
    /// `/cancel` command
    Cancel,
    /// Plain text message (including unknown commands)
    Text(String),
    /// Photo message with all offered resolution variants
    Photo(Vec<PhotoVariant>),
    /// Anything else: documents, stickers, voice, ...
    Other,
}

impl Event {
    /// Short label for logging, never includes user content
    pub fn kind(&self) -> &'static str {
        match self {
            Event::Start => "start",
            Event::Cancel => "cancel",
            Event::Text(_) => "text",
            Event::Photo(_) => "photo",
            Event::Other => "other",
        }
    }
}

/// Picks the highest-resolution variant
///
/// Variants arrive in ascending size order, so on equal area the later one
/// wins, which makes this "the last one" for well-formed input.
pub fn best_variant(variants: &[PhotoVariant]) -> Option<&PhotoVariant> {
    variants.iter().max_by_key(|variant| variant.area())
}
