use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{params, Connection, Result};
use serde::Serialize;

use super::migrations::run_migrations;
use crate::conversation::Submission;
use crate::core::config;
use crate::core::error::AppResult;

/// A registered contest participant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Participant {
    pub id: i64,
    /// Telegram chat id of the person who registered
    pub user_id: i64,
    /// Normalized participant name
    pub display_name: String,
    /// Local path of the stored photo
    pub media_filename: String,
    /// Telegram file id of the stored photo
    pub media_reference: String,
    pub like_count: i64,
    pub has_voted: bool,
}

pub type DbPool = Pool<SqliteConnectionManager>;
pub type DbConnection = PooledConnection<SqliteConnectionManager>;

/// Create a new database connection pool
///
/// Runs the embedded migrations on the first connection, so the
/// `participants` table exists before the pool is handed out.
///
/// # Example
///
/// ```no_run
/// use contest_bot::storage::create_pool;
///
/// let pool = create_pool("bot_database.db")?;
/// # Ok::<(), contest_bot::core::AppError>(())
/// ```
pub fn create_pool(database_path: &str) -> AppResult<DbPool> {
    let manager = SqliteConnectionManager::file(database_path);
    let pool = Pool::builder()
        .max_size(config::database::MAX_CONNECTIONS)
        .build(manager)?;

    let mut conn = pool.get()?;
    run_migrations(&mut conn)?;

    Ok(pool)
}

/// Get a connection from the pool
pub fn get_connection(pool: &DbPool) -> Result<DbConnection, r2d2::Error> {
    pool.get()
}

/// Stores a finished registration and returns the new row id.
pub fn insert_participant(conn: &Connection, submission: &Submission) -> Result<i64> {
    conn.execute(
        "INSERT INTO participants (user_id, display_name, media_filename, media_reference)
         VALUES (?1, ?2, ?3, ?4)",
        params![
            submission.chat_id.0,
            submission.display_name,
            submission.media_path.to_string_lossy(),
            submission.media_reference,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All participants in registration order.
pub fn list_participants(conn: &Connection) -> Result<Vec<Participant>> {
    let mut stmt = conn.prepare(
        "SELECT id, user_id, display_name, media_filename, media_reference, like_count, has_voted
         FROM participants ORDER BY id",
    )?;
    let rows = stmt.query_map([], |row| {
        Ok(Participant {
            id: row.get(0)?,
            user_id: row.get(1)?,
            display_name: row.get(2)?,
            media_filename: row.get(3)?,
            media_reference: row.get(4)?,
            like_count: row.get(5)?,
            has_voted: row.get(6)?,
        })
    })?;

    rows.collect()
}

pub fn count_participants(conn: &Connection) -> Result<i64> {
    conn.query_row("SELECT COUNT(*) FROM participants", [], |row| row.get(0))
}
