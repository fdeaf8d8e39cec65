use super::employee::Employee;
use serde::de::Error as _;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// In-memory dashboard: ordered employee rows plus the edit/manage flag.
///
/// Serializes to the persisted blob layout:
/// `{ "employees": [...], "isEditMode": bool }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub employees: Vec<Employee>,
    pub is_edit_mode: bool,
}

impl Default for Dashboard {
    /// One empty row, edit mode on.
    fn default() -> Self {
        Self {
            employees: vec![Employee::empty()],
            is_edit_mode: true,
        }
    }
}

impl Dashboard {
    /// Rebuild a dashboard from a persisted blob.
    ///
    /// - invalid JSON, a non-object blob or a malformed record → `Err`
    /// - `employees` missing or not an array → one empty row
    /// - `employees` empty → one empty row
    /// - `isEditMode` is true only when the blob holds `true`
    pub fn from_json(raw: &str) -> serde_json::Result<Self> {
        let value: Value = serde_json::from_str(raw)?;
        if !value.is_object() {
            return Err(serde_json::Error::custom("state is not an object"));
        }

        let is_edit_mode = value
            .get("isEditMode")
            .map(is_truthy)
            .unwrap_or(false);

        let mut employees = match value.get("employees") {
            Some(list @ Value::Array(_)) => Vec::<Employee>::deserialize(list)?,
            _ => Vec::new(),
        };

        if employees.is_empty() {
            employees.push(Employee::empty());
        }

        Ok(Self {
            employees,
            is_edit_mode,
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// Loose boolean coercion for hand-edited blobs (`1`, `"yes"` ...).
fn is_truthy(v: &Value) -> bool {
    match v {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
