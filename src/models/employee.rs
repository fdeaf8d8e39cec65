use super::{field::Field, status::Status};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One `{text, status}` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub text: String,
    pub status: Status,
}

impl Cell {
    /// Empty cell in the first status of `field`'s cycle.
    pub fn empty(field: Field) -> Self {
        Self {
            text: String::new(),
            status: field.initial_status(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Cell as found in a persisted record. Text and status may be missing and
/// an unrecognised status string reads as `None`.
#[derive(Deserialize)]
struct RawCell {
    #[serde(default)]
    text: String,
    #[serde(default, deserialize_with = "known_status")]
    status: Option<Status>,
}

fn known_status<'de, D>(deserializer: D) -> Result<Option<Status>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value
        .as_ref()
        .and_then(Value::as_str)
        .and_then(Status::from_str_opt))
}

impl RawCell {
    fn into_cell(self, field: Field) -> Cell {
        Cell {
            text: self.text,
            status: self.status.unwrap_or_else(|| field.initial_status()),
        }
    }
}

fn restore(raw: Option<RawCell>, field: Field) -> Cell {
    raw.map_or_else(|| Cell::empty(field), |c| c.into_cell(field))
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawEmployee {
    name: Option<RawCell>,
    shift_start: Option<RawCell>,
    shift_end: Option<RawCell>,
    first_break: Option<RawCell>,
    lunch: Option<RawCell>,
    second_break: Option<RawCell>,
}

impl From<RawEmployee> for Employee {
    fn from(raw: RawEmployee) -> Self {
        Self {
            name: restore(raw.name, Field::Name),
            shift_start: restore(raw.shift_start, Field::ShiftStart),
            shift_end: restore(raw.shift_end, Field::ShiftEnd),
            first_break: restore(raw.first_break, Field::FirstBreak),
            lunch: restore(raw.lunch, Field::Lunch),
            second_break: restore(raw.second_break, Field::SecondBreak),
        }
    }
}

/// One employee row.
///
/// Reading is lenient: a missing cell, a missing status or a status string
/// outside the vocabulary falls back to the field's initial status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", from = "RawEmployee")]
pub struct Employee {
    pub name: Cell,
    pub shift_start: Cell,
    pub shift_end: Cell,
    pub first_break: Cell,
    pub lunch: Cell,
    pub second_break: Cell,
}

impl Default for Employee {
    fn default() -> Self {
        Self::empty()
    }
}

impl Employee {
    pub fn empty() -> Self {
        Self {
            name: Cell::empty(Field::Name),
            shift_start: Cell::empty(Field::ShiftStart),
            shift_end: Cell::empty(Field::ShiftEnd),
            first_break: Cell::empty(Field::FirstBreak),
            lunch: Cell::empty(Field::Lunch),
            second_break: Cell::empty(Field::SecondBreak),
        }
    }

    pub fn cell(&self, field: Field) -> &Cell {
        match field {
            Field::Name => &self.name,
            Field::ShiftStart => &self.shift_start,
            Field::ShiftEnd => &self.shift_end,
            Field::FirstBreak => &self.first_break,
            Field::Lunch => &self.lunch,
            Field::SecondBreak => &self.second_break,
        }
    }

    pub fn cell_mut(&mut self, field: Field) -> &mut Cell {
        match field {
            Field::Name => &mut self.name,
            Field::ShiftStart => &mut self.shift_start,
            Field::ShiftEnd => &mut self.shift_end,
            Field::FirstBreak => &mut self.first_break,
            Field::Lunch => &mut self.lunch,
            Field::SecondBreak => &mut self.second_break,
        }
    }

    /// Cells in display order.
    pub fn cells(&self) -> impl Iterator<Item = (Field, &Cell)> {
        Field::ALL.into_iter().map(move |f| (f, self.cell(f)))
    }
}
