//! Unified application error type.
//! All modules (store, core, cli, auth) return AppError to keep the error
//! handling consistent and easy to manage. Unparseable duration or timestamp
//! cells are NOT errors: they become `None` fields and are simply excluded
//! from the numeric aggregates.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Spreadsheet error: {0}")]
    Csv(#[from] csv::Error),

    // ---------------------------
    // Auth
    // ---------------------------
    /// Deliberately opaque: does not reveal whether the user exists.
    #[error("Invalid username or password")]
    Auth,

    #[error("Missing credentials: pass --user and --password")]
    MissingCredentials,

    // ---------------------------
    // Input errors
    // ---------------------------
    #[error("Invalid date format: {0} (expected DD/MM/YYYY)")]
    InvalidDate(String),

    #[error("Start date {0} is after end date {1}")]
    InvalidRange(String, String),

    #[error("A logbook note cannot be empty")]
    EmptyNote,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export / backup errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("Backup error: {0}")]
    Backup(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
