use crate::core::store::{FieldUpdate, Store};
use crate::errors::{AppError, AppResult};
use crate::models::{Cell, Field};
use crate::storage::KeyValueStorage;

/// Mode-aware operations behind the `set` and `cycle` commands.
///
/// Text can only change in edit mode, statuses only cycle in manage mode.
pub struct DashboardLogic;

impl DashboardLogic {
    pub fn set_text<S: KeyValueStorage>(
        store: &mut Store<S>,
        index: usize,
        field: Field,
        text: &str,
    ) -> AppResult<Cell> {
        if !store.is_edit_mode() {
            return Err(AppError::WrongMode(
                "Text can only be changed in edit mode (run `shiftboard mode` first)".into(),
            ));
        }

        store.update_field(index, field, FieldUpdate::text(text))
    }

    pub fn cycle_status<S: KeyValueStorage>(
        store: &mut Store<S>,
        index: usize,
        field: Field,
    ) -> AppResult<Cell> {
        if store.is_edit_mode() {
            return Err(AppError::WrongMode(
                "Statuses can only be cycled in manage mode (run `shiftboard mode` first)".into(),
            ));
        }

        store.update_field(index, field, FieldUpdate::cycle())
    }

    /// Convert a 1-based row number from the command line to an index.
    pub fn row_index<S: KeyValueStorage>(store: &Store<S>, row: usize) -> AppResult<usize> {
        if row == 0 || row > store.len() {
            return Err(AppError::InvalidRow(row));
        }
        Ok(row - 1)
    }
}
