use crate::auth::Session;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::store::table;
use crate::ui::messages::success;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    let Commands::Upload { file } = cmd else {
        return Ok(());
    };

    let upload_path = Path::new(file);
    if !upload_path.exists() {
        return Err(AppError::Other(format!("file not found: {file}")));
    }

    let data_dir = Path::new(&cfg.data_dir);

    // Ingest and persist are two distinct steps: rows are appended verbatim
    // (no dedup) to the in-memory table, then the merged table is saved.
    let mut rows = table::load_table(data_dir, &session.username)?;
    let new_rows = table::read_rows(upload_path)?;
    let added = new_rows.len();
    table::append_rows(&mut rows, new_rows);
    table::save_table(data_dir, &session.username, &rows)?;

    success(format!(
        "Arquivo \"{file}\" carregado e processado com sucesso! ({added} rows, {} total)",
        rows.len()
    ));

    Ok(())
}
