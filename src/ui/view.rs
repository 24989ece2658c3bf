//! Shared dashboard blocks used by the overview and analyst views.

use crate::core::{LeaderboardRow, StatusSummary};
use crate::models::WorkItem;
use crate::ui::chart;
use crate::ui::messages::{header, metric};
use crate::utils::colors::colorize_optional;
use crate::utils::date::format_date;
use crate::utils::format_duration;
use crate::utils::table::Table;
use chrono::NaiveDate;

/// The four headline metric cards.
pub fn render_summary(summary: &StatusSummary) {
    metric("Total de Cadastros", summary.finalized);
    metric("Reclassificações", summary.reclassified);
    metric("Andamentos", summary.in_progress);
    metric(
        "Tempo Médio por Cadastro",
        colorize_optional(&format_duration(summary.mean_analysis)),
    );
}

/// Status distribution block (the former pie chart).
pub fn render_distribution(summary: &StatusSummary, width: usize) {
    header("Distribuição de Status");
    let data = vec![
        ("Finalizado".to_string(), summary.finalized),
        ("Reclassificado".to_string(), summary.reclassified),
        ("Andamento".to_string(), summary.in_progress),
    ];
    print!("{}", chart::distribution(&data, width));
}

/// TMO-per-day bar chart, in minutes.
pub fn render_tmo(tmo: &[(NaiveDate, f64)], width: usize) {
    header("Tempo Médio de Operação (TMO) por Dia");
    if tmo.is_empty() {
        println!("(sem dados no período)");
        return;
    }
    let data: Vec<(String, f64)> = tmo
        .iter()
        .map(|(day, value)| (format_date(*day), *value))
        .collect();
    print!("{}", chart::bar_chart(&data, width));
}

/// Full leaderboard table.
pub fn render_leaderboard(board: &[LeaderboardRow]) {
    header("Ranking Dinâmico");
    if board.is_empty() {
        println!("(sem dados no período)");
        return;
    }

    let mut table = Table::new(vec![
        "Rank",
        "Usuário",
        "Andamento",
        "Finalizado",
        "Reclassificado",
        "Total",
    ]);
    for row in board {
        table.add_row(vec![
            row.rank.to_string(),
            row.analyst.clone(),
            row.in_progress.to_string(),
            row.finalized.to_string(),
            row.reclassified.to_string(),
            row.total.to_string(),
        ]);
    }
    print!("{}", table.render());
}

/// Points-of-attention table, or the explicit empty-state message.
pub fn render_attention(items: &[WorkItem]) {
    header("Pontos de Atenção");
    if items.is_empty() {
        println!("Nenhum ponto de atenção encontrado.");
        return;
    }

    let mut table = Table::new(vec!["Protocolo", "Usuário", "Status", "Tempo de Análise"]);
    for item in items {
        table.add_row(vec![
            item.protocol.clone(),
            item.analyst.clone(),
            item.status.as_str().to_string(),
            format_duration(item.analysis_time),
        ]);
    }
    print!("{}", table.render());
}
