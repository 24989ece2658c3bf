mod csv;
mod json;
mod model;
mod xlsx;

pub use model::ItemExport;

use crate::errors::{AppError, AppResult};
use crate::models::WorkItem;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Completion notice shared by every format.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Xlsx,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
        }
    }
}

/// Export the given rows to `path` in the requested format.
/// Refuses to overwrite an existing file unless `force` is set.
pub fn export_items(
    rows: &[WorkItem],
    format: &ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    if path.exists() && !force {
        return Err(AppError::Export(format!(
            "'{}' already exists (use --force to overwrite)",
            path.display()
        )));
    }

    let items: Vec<ItemExport> = rows.iter().map(ItemExport::from).collect();

    match format {
        ExportFormat::Csv => csv::export_csv(&items, path)?,
        ExportFormat::Json => json::export_json(&items, path)?,
        ExportFormat::Xlsx => xlsx::export_xlsx(&items, path)?,
    }

    notify_export_success(format.as_str().to_uppercase().as_str(), path);
    Ok(())
}
