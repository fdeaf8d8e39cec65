// src/export/model.rs

use crate::models::{Dashboard, Employee};
use serde::Serialize;

/// Flat, one-line-per-employee shape used by the CSV export.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct EmployeeExport {
    pub row: usize,
    pub name: String,
    pub name_status: String,
    pub shift_start: String,
    pub shift_start_status: String,
    pub shift_end: String,
    pub shift_end_status: String,
    pub first_break: String,
    pub first_break_status: String,
    pub lunch: String,
    pub lunch_status: String,
    pub second_break: String,
    pub second_break_status: String,
}

impl EmployeeExport {
    /// `row` is the 1-based row number shown by `show`.
    pub fn from_employee(row: usize, e: &Employee) -> Self {
        Self {
            row,
            name: e.name.text.clone(),
            name_status: e.name.status.to_string(),
            shift_start: e.shift_start.text.clone(),
            shift_start_status: e.shift_start.status.to_string(),
            shift_end: e.shift_end.text.clone(),
            shift_end_status: e.shift_end.status.to_string(),
            first_break: e.first_break.text.clone(),
            first_break_status: e.first_break.status.to_string(),
            lunch: e.lunch.text.clone(),
            lunch_status: e.lunch.status.to_string(),
            second_break: e.second_break.text.clone(),
            second_break_status: e.second_break.status.to_string(),
        }
    }
}

pub(crate) fn dashboard_to_rows(dashboard: &Dashboard) -> Vec<EmployeeExport> {
    dashboard
        .employees
        .iter()
        .enumerate()
        .map(|(i, e)| EmployeeExport::from_employee(i + 1, e))
        .collect()
}
