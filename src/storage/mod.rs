//! Key/value persistence backends for the dashboard blob.

mod memory;
mod sqlite;

pub use memory::MemoryStorage;
pub use sqlite::SqliteStorage;

use crate::errors::AppResult;

/// Default key the dashboard blob is stored under.
pub const DEFAULT_STORAGE_KEY: &str = "employeeDashboard";

/// Synchronous string key/value store.
pub trait KeyValueStorage {
    fn get_item(&mut self, key: &str) -> AppResult<Option<String>>;

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()>;

    fn remove_item(&mut self, key: &str) -> AppResult<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn get_item(&mut self, key: &str) -> AppResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> AppResult<()> {
        (**self).remove_item(key)
    }
}
