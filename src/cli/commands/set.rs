use crate::cli::parser::Commands;
use crate::core::logic::DashboardLogic;
use crate::core::store::Store;
use crate::errors::AppResult;
use crate::storage::KeyValueStorage;
use crate::ui::messages::success;

pub fn handle<S: KeyValueStorage>(cmd: &Commands, store: &mut Store<S>) -> AppResult<()> {
    if let Commands::Set { row, field, text } = cmd {
        let index = DashboardLogic::row_index(store, *row)?;
        let cell = DashboardLogic::set_text(store, index, *field, text)?;

        success(format!("Row #{} {} = \"{}\"", row, field, cell.text));
    }

    Ok(())
}
