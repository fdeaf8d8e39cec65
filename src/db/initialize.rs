use crate::errors::AppResult;
use rusqlite::Connection;

/// Initialize the database.
/// The whole dashboard lives in a single key/value table; creating it is
/// idempotent so this runs on every open.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS kv (
            key        TEXT PRIMARY KEY,
            value      TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}
