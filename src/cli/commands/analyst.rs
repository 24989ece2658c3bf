use crate::auth::Session;
use crate::cli::commands::apply_date_filter;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::{attention, filter, status_summary, tmo};
use crate::errors::{AppError, AppResult};
use crate::store::table;
use crate::ui::messages::header;
use crate::ui::view;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    let Commands::Analyst {
        name,
        from,
        to,
        list,
    } = cmd
    else {
        return Ok(());
    };

    let data_dir = Path::new(&cfg.data_dir);
    let rows = table::load_table(data_dir, &session.username)?;
    let rows = apply_date_filter(&rows, from.as_deref(), to.as_deref())?;

    // The selector only offers analysts present in the filtered table.
    if *list {
        let analysts = filter::distinct_analysts(&rows);
        if analysts.is_empty() {
            println!("(nenhum analista no período)");
        } else {
            for a in analysts {
                println!("{a}");
            }
        }
        return Ok(());
    }

    let name = name
        .as_deref()
        .ok_or_else(|| AppError::Other("analyst name required (or use --list)".to_string()))?;
    let scoped = filter::filter_by_analyst(&rows, name);

    println!("Análise por Analista: {name}");
    println!();

    let summary = status_summary(&scoped);
    view::render_summary(&summary);

    header(format!("Carteiras Cadastradas por {name}"));
    let portfolios = filter::distinct_portfolios(&scoped, name);
    if portfolios.is_empty() {
        println!("(nenhuma carteira cadastrada)");
    } else {
        for p in portfolios {
            println!("{p}");
        }
    }

    view::render_distribution(&summary, cfg.chart_width);
    view::render_tmo(&tmo::tmo_by_day(&scoped), cfg.chart_width);
    view::render_attention(&attention::points_of_attention(&scoped));

    Ok(())
}
