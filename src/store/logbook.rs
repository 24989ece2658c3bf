//! Per-user logbook persistence: an append-only text file, one entry per
//! line, `DD/MM/YYYY HH:MM - <text>`. Entries are never edited or deleted.

use crate::errors::{AppError, AppResult};
use crate::utils::date::LOG_STAMP_FORMAT;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Path of the logbook file for one user.
pub fn log_file(data_dir: &Path, username: &str) -> PathBuf {
    data_dir.join(format!("diario_bordo_{}.txt", username))
}

/// All entries in file order. Missing file ⇒ no entries.
pub fn load_log(data_dir: &Path, username: &str) -> AppResult<Vec<String>> {
    let path = log_file(data_dir, username);
    if !path.exists() {
        return Ok(Vec::new());
    }
    let content = fs::read_to_string(&path)?;
    Ok(content
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(str::to_string)
        .collect())
}

/// Append one timestamped note. Blank or whitespace-only text is rejected
/// before anything touches the file.
pub fn append_log(data_dir: &Path, username: &str, text: &str) -> AppResult<()> {
    let text = text.trim();
    if text.is_empty() {
        return Err(AppError::EmptyNote);
    }

    fs::create_dir_all(data_dir)?;
    let path = log_file(data_dir, username);
    let mut file = OpenOptions::new().create(true).append(true).open(&path)?;

    let stamp = chrono::Local::now().format(LOG_STAMP_FORMAT);
    writeln!(file, "{} - {}", stamp, text)?;
    Ok(())
}
