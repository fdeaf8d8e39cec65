use crate::db::pool::DbPool;
use crate::errors::AppResult;
use chrono::Local;
use rusqlite::{OptionalExtension, params};

/// Read the value stored under `key`, if any.
pub fn get_value(pool: &mut DbPool, key: &str) -> AppResult<Option<String>> {
    let mut stmt = pool
        .conn
        .prepare_cached("SELECT value FROM kv WHERE key = ?1")?;

    let value = stmt
        .query_row([key], |row| row.get::<_, String>(0))
        .optional()?;

    Ok(value)
}

/// Insert or replace the value stored under `key`.
pub fn put_value(pool: &mut DbPool, key: &str, value: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    pool.with_conn(|conn| {
        conn.execute(
            "INSERT INTO kv (key, value, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value,
                                            updated_at = excluded.updated_at",
            params![key, value, now],
        )
    })?;

    Ok(())
}

pub fn delete_value(pool: &mut DbPool, key: &str) -> AppResult<()> {
    pool.conn.execute("DELETE FROM kv WHERE key = ?1", [key])?;
    Ok(())
}
