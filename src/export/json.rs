use crate::errors::{AppError, AppResult};
use crate::export::model::ItemExport;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Write the exported items as a pretty-printed JSON array.
pub fn export_json(items: &[ItemExport], path: &Path) -> AppResult<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, items)
        .map_err(|e| AppError::Export(e.to_string()))?;
    Ok(())
}
