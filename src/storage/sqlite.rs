use super::KeyValueStorage;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_value, get_value, put_value};
use crate::errors::AppResult;

/// Storage backed by the `kv` table of a SQLite file.
pub struct SqliteStorage {
    pool: DbPool,
}

impl SqliteStorage {
    /// Open (or create) the database at `path` and make sure the schema exists.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn in_memory() -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }
}

impl KeyValueStorage for SqliteStorage {
    fn get_item(&mut self, key: &str) -> AppResult<Option<String>> {
        get_value(&mut self.pool, key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        put_value(&mut self.pool, key, value)
    }

    fn remove_item(&mut self, key: &str) -> AppResult<()> {
        delete_value(&mut self.pool, key)
    }
}
