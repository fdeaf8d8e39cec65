// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::dashboard_to_rows;
use crate::models::Dashboard;
use std::path::Path;
use tracing::debug;

/// High-level export of the current dashboard.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `dashboard` to `file`.
    ///
    /// An existing file is only replaced with `force` or after confirmation.
    pub fn export(
        dashboard: &Dashboard,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = Path::new(file);
        debug!(format = format.as_str(), file, "exporting dashboard");

        ensure_writable(path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        match format {
            ExportFormat::Csv => export_csv(&dashboard_to_rows(dashboard), path)?,
            ExportFormat::Json => export_json(dashboard, path)?,
        }

        Ok(())
    }
}
