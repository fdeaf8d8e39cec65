//! Dashboard state store.
//!
//! Owns the employee rows and the edit/manage flag, and writes the whole
//! state through to a [`KeyValueStorage`] after every mutation. Storage
//! failures never reach the caller: a failed read falls back to the default
//! dashboard, a failed write is logged and the in-memory state carries on.

use crate::errors::{AppError, AppResult};
use crate::models::{Cell, Dashboard, Employee, Field};
use crate::storage::{DEFAULT_STORAGE_KEY, KeyValueStorage};
use tracing::{debug, warn};

/// Requested change to a single cell.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldUpdate {
    /// New text, replacing the current one.
    pub text: Option<String>,
    /// Advance the status one step along the field's cycle.
    pub cycle_status: bool,
}

impl FieldUpdate {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            cycle_status: false,
        }
    }

    pub fn cycle() -> Self {
        Self {
            text: None,
            cycle_status: true,
        }
    }
}

pub struct Store<S: KeyValueStorage> {
    storage: S,
    key: String,
    state: Dashboard,
}

impl<S: KeyValueStorage> Store<S> {
    /// Load under the default `employeeDashboard` key.
    pub fn load(storage: S) -> Self {
        Self::load_with_key(storage, DEFAULT_STORAGE_KEY)
    }

    /// Load the dashboard stored under `key`, falling back to one empty row
    /// in edit mode, then persist the result straight away.
    pub fn load_with_key(mut storage: S, key: &str) -> Self {
        let state = match storage.get_item(key) {
            Ok(Some(raw)) => match Dashboard::from_json(&raw) {
                Ok(d) => {
                    debug!(key, rows = d.employees.len(), "loaded saved state");
                    d
                }
                Err(e) => {
                    warn!(key, error = %e, "saved state is corrupt, starting over");
                    Dashboard::default()
                }
            },
            Ok(None) => {
                debug!(key, "no saved state found, creating initial state");
                Dashboard::default()
            }
            Err(e) => {
                warn!(key, error = %e, "failed to read saved state, starting over");
                Dashboard::default()
            }
        };

        let mut store = Self {
            storage,
            key: key.to_string(),
            state,
        };
        store.save();
        store
    }

    /// Write the full state to storage. Failures are logged and dropped.
    pub fn save(&mut self) {
        let blob = match self.state.to_json() {
            Ok(b) => b,
            Err(e) => {
                warn!(key = %self.key, error = %e, "failed to serialize state");
                return;
            }
        };

        match self.storage.set_item(&self.key, &blob) {
            Ok(()) => debug!(key = %self.key, bytes = blob.len(), "state saved"),
            Err(e) => warn!(key = %self.key, error = %e, "failed to save state"),
        }
    }

    /// Append one empty row; returns its index.
    pub fn add_row(&mut self) -> usize {
        self.state.employees.push(Employee::empty());
        self.save();
        self.state.employees.len() - 1
    }

    /// Remove the row at `index`. The last remaining row is blanked instead.
    pub fn delete_row(&mut self, index: usize) -> AppResult<()> {
        self.check_index(index)?;

        if self.state.employees.len() > 1 {
            self.state.employees.remove(index);
        } else {
            self.state.employees[0] = Employee::empty();
        }

        debug!(index, rows = self.state.employees.len(), "row deleted");
        self.save();
        Ok(())
    }

    /// Back to one empty row, edit mode on.
    pub fn reset_all(&mut self) {
        self.state = Dashboard::default();
        debug!("dashboard reset");
        self.save();
    }

    /// Flip between edit and manage mode; returns the new `is_edit_mode`.
    pub fn toggle_mode(&mut self) -> bool {
        self.state.is_edit_mode = !self.state.is_edit_mode;
        self.save();
        self.state.is_edit_mode
    }

    /// Apply `update` to one cell and return the cell as it now stands.
    ///
    /// Text is replaced first, then the status advances one step when asked.
    pub fn update_field(
        &mut self,
        index: usize,
        field: Field,
        update: FieldUpdate,
    ) -> AppResult<Cell> {
        self.check_index(index)?;

        let cell = self.state.employees[index].cell_mut(field);
        if let Some(text) = update.text {
            cell.text = text;
        }
        if update.cycle_status {
            cell.status = field.next_status(cell.status);
        }
        let updated = cell.clone();

        debug!(index, %field, status = %updated.status, "field updated");
        self.save();
        Ok(updated)
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.state
    }

    pub fn employees(&self) -> &[Employee] {
        &self.state.employees
    }

    pub fn is_edit_mode(&self) -> bool {
        self.state.is_edit_mode
    }

    pub fn len(&self) -> usize {
        self.state.employees.len()
    }

    /// Never true for a loaded store.
    pub fn is_empty(&self) -> bool {
        self.state.employees.is_empty()
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give the backend back, e.g. to reload it into a fresh store.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn check_index(&self, index: usize) -> AppResult<()> {
        if index < self.state.employees.len() {
            Ok(())
        } else {
            Err(AppError::InvalidRow(index))
        }
    }
}
