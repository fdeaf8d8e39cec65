use crate::core::store::Store;
use crate::errors::AppResult;
use crate::storage::KeyValueStorage;
use crate::ui::messages::success;

pub fn handle<S: KeyValueStorage>(store: &mut Store<S>) -> AppResult<()> {
    if store.toggle_mode() {
        success("Switched to edit mode: text can be changed with `set`.");
    } else {
        success("Switched to manage mode: statuses can be cycled with `cycle`.");
    }
    Ok(())
}
