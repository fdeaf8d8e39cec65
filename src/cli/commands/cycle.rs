use crate::cli::parser::Commands;
use crate::core::logic::DashboardLogic;
use crate::core::store::Store;
use crate::errors::AppResult;
use crate::storage::KeyValueStorage;
use crate::ui::messages::success;

pub fn handle<S: KeyValueStorage>(cmd: &Commands, store: &mut Store<S>) -> AppResult<()> {
    if let Commands::Cycle { row, field } = cmd {
        let index = DashboardLogic::row_index(store, *row)?;
        let cell = DashboardLogic::cycle_status(store, index, *field)?;

        success(format!("Row #{} {} → {}", row, field, cell.status));
    }

    Ok(())
}
