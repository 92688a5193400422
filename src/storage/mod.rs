//! Participant storage (SQLite)

pub mod db;
pub mod migrations;

// Re-exports for convenience
pub use db::{
    count_participants, create_pool, get_connection, insert_participant, list_participants, DbConnection, DbPool,
    Participant,
};
