use crate::config::Config;
use crate::core::store::Store;
use crate::core::styles::row_tags;
use crate::errors::AppResult;
use crate::models::{Cell, Employee, Field, Status};
use crate::storage::KeyValueStorage;
use crate::ui::messages::header;
use crate::utils::colors::{color_for_status, color_for_tags, paint};
use crate::utils::table::{Column, Table};
use chrono::Local;

pub fn handle<S: KeyValueStorage>(store: &Store<S>, cfg: &Config) -> AppResult<()> {
    let mode = if store.is_edit_mode() { "EDIT" } else { "MANAGE" };
    header(format!(
        "Shift board · {} · {} mode",
        Local::now().format("%Y-%m-%d"),
        mode
    ));

    print!("{}", render_table(store.employees(), cfg.color));
    Ok(())
}

/// Build the board table.
pub(crate) fn render_table(employees: &[Employee], color: bool) -> String {
    let mut columns = vec![Column::new("#")];
    columns.extend(Field::ALL.iter().map(|f| Column::new(f.label())));

    let mut table = Table::new(columns);

    for (i, employee) in employees.iter().enumerate() {
        let tags = row_tags(employee);

        let mut row = vec![(i + 1).to_string()];
        row.extend(
            employee
                .cells()
                .map(|(field, cell)| render_cell(cell, tags.for_field(field), color)),
        );
        table.add_row(row);
    }

    table.render()
}

fn render_cell(cell: &Cell, tags: &[Status], color: bool) -> String {
    let text = if cell.is_blank() { "--" } else { cell.text.as_str() };

    format!(
        "{} [{}]",
        paint(text, color_for_tags(tags), color),
        paint(cell.status.as_str(), color_for_status(cell.status), color)
    )
}
