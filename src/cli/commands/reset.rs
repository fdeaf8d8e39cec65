use crate::cli::parser::Commands;
use crate::core::store::Store;
use crate::errors::AppResult;
use crate::storage::KeyValueStorage;
use crate::ui::messages::{confirm, info, success};

pub fn handle<S: KeyValueStorage>(cmd: &Commands, store: &mut Store<S>) -> AppResult<()> {
    if let Commands::Reset { yes } = cmd {
        if !*yes && !confirm("Reset the whole board? All rows will be lost.") {
            info("Operation cancelled.");
            return Ok(());
        }

        store.reset_all();
        success("Board reset: one empty row, edit mode.");
    }

    Ok(())
}
