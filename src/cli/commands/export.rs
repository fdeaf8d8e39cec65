use crate::cli::parser::Commands;
use crate::core::store::Store;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::storage::KeyValueStorage;

pub fn handle<S: KeyValueStorage>(cmd: &Commands, store: &Store<S>) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        force,
    } = cmd
    {
        ExportLogic::export(store.dashboard(), *format, file, *force)?;
    }

    Ok(())
}
