use crate::auth::Session;
use crate::cli::commands::apply_date_filter;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export;
use crate::store::table;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    let Commands::Export {
        format,
        file,
        from,
        to,
        force,
    } = cmd
    else {
        return Ok(());
    };

    let data_dir = Path::new(&cfg.data_dir);
    let rows = table::load_table(data_dir, &session.username)?;

    // Export honours the same date filter as the views; with no bounds this
    // is the full table.
    let rows = if from.is_some() || to.is_some() {
        apply_date_filter(&rows, from.as_deref(), to.as_deref())?
    } else {
        rows
    };

    export::export_items(&rows, format, Path::new(file), *force)
}
