//! Cross-field status tags.
//!
//! A row's clock state (`name`) and lateness (`shiftStart`, `shiftEnd`) are
//! shown on all three identity cells, not only on the cell that holds them.

use crate::models::{Employee, Field, Status};

/// Cells that mirror row-wide statuses.
pub const IDENTITY_FIELDS: [Field; 3] = [Field::Name, Field::ShiftStart, Field::ShiftEnd];

/// Display tags for every cell of one row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowTags {
    tags: Vec<(Field, Vec<Status>)>,
}

impl RowTags {
    /// Tags for `field`: its own status first, then any row-wide ones.
    pub fn for_field(&self, field: Field) -> &[Status] {
        self.tags
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, t)| t.as_slice())
            .unwrap_or(&[])
    }

    pub fn has(&self, field: Field, status: Status) -> bool {
        self.for_field(field).contains(&status)
    }
}

/// Compute the tags of one row.
pub fn row_tags(employee: &Employee) -> RowTags {
    let mut shared: Vec<Status> = Vec::new();

    if matches!(employee.name.status, Status::ClockedIn | Status::ClockedOut) {
        shared.push(employee.name.status);
    }
    for cell in [&employee.shift_start, &employee.shift_end] {
        if matches!(cell.status, Status::Tardy | Status::Absent) {
            shared.push(cell.status);
        }
    }

    let tags = employee
        .cells()
        .map(|(field, cell)| {
            let mut t = vec![cell.status];
            if IDENTITY_FIELDS.contains(&field) {
                for s in &shared {
                    if !t.contains(s) {
                        t.push(*s);
                    }
                }
            }
            (field, t)
        })
        .collect();

    RowTags { tags }
}
