use crate::auth::Session;
use crate::cli::commands::apply_date_filter;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{leaderboard, status_summary, tmo};
use crate::errors::AppResult;
use crate::store::table;
use crate::ui::view;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    let Commands::Overview { from, to } = cmd else {
        return Ok(());
    };

    let data_dir = Path::new(&cfg.data_dir);
    let rows = table::load_table(data_dir, &session.username)?;
    let rows = apply_date_filter(&rows, from.as_deref(), to.as_deref())?;

    println!("Visão Geral: {}", session.username);
    println!();

    let summary = status_summary(&rows);
    view::render_summary(&summary);
    view::render_distribution(&summary, cfg.chart_width);
    view::render_tmo(&tmo::tmo_by_day(&rows), cfg.chart_width);
    view::render_leaderboard(&leaderboard(&rows));

    Ok(())
}
