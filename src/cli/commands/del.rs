use crate::cli::parser::Commands;
use crate::core::logic::DashboardLogic;
use crate::core::store::Store;
use crate::errors::AppResult;
use crate::storage::KeyValueStorage;
use crate::ui::messages::{confirm, info, success};

pub fn handle<S: KeyValueStorage>(cmd: &Commands, store: &mut Store<S>) -> AppResult<()> {
    if let Commands::Del { row, yes } = cmd {
        let index = DashboardLogic::row_index(store, *row)?;

        let prompt = format!("Delete row #{}? This action is irreversible.", row);
        if !*yes && !confirm(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let was_last = store.len() == 1;
        store.delete_row(index)?;

        if was_last {
            success(format!("Row #{} cleared (the board always keeps one row).", row));
        } else {
            success(format!("Row #{} deleted ({} rows left).", row, store.len()));
        }
    }

    Ok(())
}
