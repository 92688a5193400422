//! Common test utilities
//!
//! This module is shared across all integration tests

pub mod fixtures;
pub mod transport;

#[allow(unused_imports)]
pub use fixtures::{photo_message, test_engine, text_message, TestEngine};
#[allow(unused_imports)]
pub use transport::{Call, RecordingTransport};
