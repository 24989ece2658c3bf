use crate::auth::Session;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::table;
use crate::ui::messages::success;
use std::path::Path;

/// Re-persist the user's table with canonical cell formats.
///
/// Save always writes the FULL base table: date filters only scope what a
/// view renders, they never decide what gets persisted.
pub fn handle(cfg: &Config, session: &Session) -> AppResult<()> {
    let data_dir = Path::new(&cfg.data_dir);
    let rows = table::load_table(data_dir, &session.username)?;
    table::save_table(data_dir, &session.username, &rows)?;

    success(format!("Tabela salva ({} rows)", rows.len()));
    Ok(())
}
