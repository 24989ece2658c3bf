//! Per-user accumulated table persistence.
//!
//! One CSV file per username, columns
//! `Protocolo, Usuário, Status, Tempo de Análise, Próximo` plus the optional
//! `Carteira`. Duration and timestamp cells are stored as display strings and
//! typed only in memory; a missing file is an empty table, not an error.

use crate::errors::AppResult;
use crate::models::WorkItem;
use crate::utils::{date, duration};
use csv::{ReaderBuilder, WriterBuilder};
use std::path::{Path, PathBuf};

pub const COL_PROTOCOL: &str = "Protocolo";
pub const COL_ANALYST: &str = "Usuário";
pub const COL_STATUS: &str = "Status";
pub const COL_ANALYSIS_TIME: &str = "Tempo de Análise";
pub const COL_NEXT: &str = "Próximo";
pub const COL_PORTFOLIO: &str = "Carteira";

/// Path of the accumulated table for one user.
pub fn table_file(data_dir: &Path, username: &str) -> PathBuf {
    data_dir.join(format!("dados_acumulados_{}.csv", username))
}

/// Load a user's table. Missing file ⇒ empty table.
pub fn load_table(data_dir: &Path, username: &str) -> AppResult<Vec<WorkItem>> {
    let path = table_file(data_dir, username);
    if !path.exists() {
        return Ok(Vec::new());
    }
    read_rows(&path)
}

/// Read WorkItem rows from any file honouring the column contract.
/// Used both for the accumulated table and for uploads.
pub fn read_rows(path: &Path) -> AppResult<Vec<WorkItem>> {
    let mut reader = ReaderBuilder::new().flexible(true).from_path(path)?;

    let headers = reader.headers()?.clone();
    let idx = |name: &str| headers.iter().position(|h| h.trim() == name);

    let protocol = idx(COL_PROTOCOL);
    let analyst = idx(COL_ANALYST);
    let status = idx(COL_STATUS);
    let analysis_time = idx(COL_ANALYSIS_TIME);
    let next = idx(COL_NEXT);
    let portfolio = idx(COL_PORTFOLIO);

    let cell = |rec: &csv::StringRecord, i: Option<usize>| -> String {
        i.and_then(|i| rec.get(i)).unwrap_or("").to_string()
    };

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let portfolio_cell = cell(&record, portfolio);
        rows.push(WorkItem::from_cells(
            &cell(&record, protocol),
            &cell(&record, analyst),
            &cell(&record, status),
            &cell(&record, analysis_time),
            &cell(&record, next),
            Some(portfolio_cell.as_str()),
        ));
    }

    Ok(rows)
}

/// Append uploaded rows to the in-memory table. Rows are taken verbatim:
/// duplicate protocols across uploads are kept, matching the accumulation
/// contract.
pub fn append_rows(table: &mut Vec<WorkItem>, new_rows: Vec<WorkItem>) {
    table.extend(new_rows);
}

/// Persist the full table, whole-file overwrite. Durations and timestamps are
/// serialized back to their display-string forms.
pub fn save_table(data_dir: &Path, username: &str, rows: &[WorkItem]) -> AppResult<()> {
    std::fs::create_dir_all(data_dir)?;
    let path = table_file(data_dir, username);
    let mut writer = WriterBuilder::new().from_path(&path)?;

    writer.write_record([
        COL_PROTOCOL,
        COL_ANALYST,
        COL_STATUS,
        COL_ANALYSIS_TIME,
        COL_NEXT,
        COL_PORTFOLIO,
    ])?;

    for row in rows {
        let tempo = duration::serialize_duration(row.analysis_time);
        let proximo = date::serialize_next(row.next_review);
        writer.write_record([
            row.protocol.as_str(),
            row.analyst.as_str(),
            row.status.as_str(),
            tempo.as_str(),
            proximo.as_str(),
            row.portfolio.as_deref().unwrap_or(""),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
