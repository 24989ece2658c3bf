use crate::errors::AppResult;
use crate::export::model::{ItemExport, get_headers, item_to_row};
use csv::Writer;
use std::path::Path;

/// Write the exported items as CSV.
pub fn export_csv(items: &[ItemExport], path: &Path) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;

    for item in items {
        wtr.write_record(item_to_row(item))?;
    }

    wtr.flush()?;
    Ok(())
}
