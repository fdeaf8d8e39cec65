use crate::core::store::Store;
use crate::errors::AppResult;
use crate::storage::KeyValueStorage;
use crate::ui::messages::success;

/// Append an empty row.
pub fn handle<S: KeyValueStorage>(store: &mut Store<S>) -> AppResult<()> {
    let index = store.add_row();
    success(format!("Row #{} added ({} rows)", index + 1, store.len()));
    Ok(())
}
