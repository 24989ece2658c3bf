//! Aggregation engine properties: counts, means, TMO, attention, leaderboard.

use chrono::{Duration, NaiveDate};
use prodtrack::core::attention::points_of_attention;
use prodtrack::core::filter::{
    distinct_analysts, distinct_portfolios, filter_by_analyst, filter_by_range,
};
use prodtrack::core::tmo::tmo_by_day;
use prodtrack::core::{count_by_status, leaderboard, mean_duration, status_summary};
use prodtrack::models::{Status, WorkItem};
use prodtrack::utils::format_duration;

fn item(protocol: &str, analyst: &str, status: &str, tempo: &str, next: &str) -> WorkItem {
    WorkItem::from_cells(protocol, analyst, status, tempo, next, None)
}

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
}

#[test]
fn status_counts_partition_the_table() {
    let rows = vec![
        item("1", "ana", "FINALIZADO", "00:01:00", "01/01/2024 10:00:00"),
        item("2", "ana", "RECLASSIFICADO", "00:01:00", "01/01/2024 10:00:00"),
        item("3", "bia", "ANDAMENTO_PRE", "", "01/01/2024 10:00:00"),
        item("4", "bia", "CANCELADO", "", "01/01/2024 10:00:00"),
        item("5", "bia", "FINALIZADO", "bad", "02/01/2024 10:00:00"),
    ];

    let known = count_by_status(&rows, &Status::Finalizado)
        + count_by_status(&rows, &Status::Reclassificado)
        + count_by_status(&rows, &Status::AndamentoPre);
    let other = rows
        .iter()
        .filter(|r| matches!(r.status, Status::Other(_)))
        .count();

    assert_eq!(known + other, rows.len());
    assert_eq!(other, 1);
}

#[test]
fn mean_duration_ignores_unparseable_cells() {
    let rows = vec![
        item("1", "ana", "FINALIZADO", "00:01:00", "01/01/2024 10:00:00"),
        item("2", "ana", "FINALIZADO", "00:03:00", "01/01/2024 11:00:00"),
        item("3", "ana", "FINALIZADO", "not a duration", "01/01/2024 12:00:00"),
        item("4", "ana", "RECLASSIFICADO", "10:00:00", "01/01/2024 13:00:00"),
    ];

    assert_eq!(
        mean_duration(&rows, &Status::Finalizado),
        Some(Duration::minutes(2))
    );
}

#[test]
fn mean_duration_of_empty_or_all_null_subset_is_none() {
    assert_eq!(mean_duration(&[], &Status::Finalizado), None);

    let all_null = vec![
        item("1", "ana", "FINALIZADO", "", "01/01/2024 10:00:00"),
        item("2", "ana", "FINALIZADO", "??", "01/01/2024 11:00:00"),
    ];
    let mean = mean_duration(&all_null, &Status::Finalizado);
    assert_eq!(mean, None);
    assert_eq!(format_duration(mean), "0 min");
}

#[test]
fn empty_table_yields_zero_summary() {
    let summary = status_summary(&[]);
    assert_eq!(summary.finalized, 0);
    assert_eq!(summary.reclassified, 0);
    assert_eq!(summary.in_progress, 0);
    assert_eq!(format_duration(summary.mean_analysis), "0 min");
    assert!(tmo_by_day(&[]).is_empty());
    assert!(leaderboard(&[]).is_empty());
}

#[test]
fn tmo_averages_finalized_minutes_per_day() {
    let rows = vec![
        item("1", "ana", "FINALIZADO", "00:01:00", "01/01/2024 09:00:00"),
        item("2", "ana", "FINALIZADO", "00:03:00", "01/01/2024 18:00:00"),
        // different day
        item("3", "ana", "FINALIZADO", "00:05:00", "02/01/2024 09:00:00"),
        // not finalized: never counted
        item("4", "ana", "ANDAMENTO_PRE", "00:09:00", "01/01/2024 09:00:00"),
        // no parsed timestamp: contributes to no day
        item("5", "ana", "FINALIZADO", "00:09:00", ""),
    ];

    let tmo = tmo_by_day(&rows);
    assert_eq!(tmo.len(), 2);
    assert_eq!(tmo[0].0, date(1));
    assert!((tmo[0].1 - 2.0).abs() < 1e-9);
    assert_eq!(tmo[1].0, date(2));
    assert!((tmo[1].1 - 5.0).abs() < 1e-9);
}

#[test]
fn tmo_days_come_back_in_ascending_order() {
    let rows = vec![
        item("1", "ana", "FINALIZADO", "00:02:00", "03/01/2024 10:00:00"),
        item("2", "ana", "FINALIZADO", "00:02:00", "01/01/2024 10:00:00"),
        item("3", "ana", "FINALIZADO", "00:02:00", "02/01/2024 10:00:00"),
    ];

    let days: Vec<NaiveDate> = tmo_by_day(&rows).into_iter().map(|(d, _)| d).collect();
    assert_eq!(days, vec![date(1), date(2), date(3)]);
}

#[test]
fn attention_threshold_is_strictly_above_two_minutes() {
    let rows = vec![
        item("100", "ana", "FINALIZADO", "00:02:00", "01/01/2024 10:00:00"),
        item("200", "ana", "FINALIZADO", "00:02:01", "01/01/2024 10:00:00"),
        item("300", "ana", "FINALIZADO", "", "01/01/2024 10:00:00"),
    ];

    let flagged = points_of_attention(&rows);
    assert_eq!(flagged.len(), 1);
    assert_eq!(flagged[0].protocol, "200");
}

#[test]
fn attention_strips_thousands_separators_from_protocol() {
    let rows = vec![item(
        "1,234,567",
        "ana",
        "FINALIZADO",
        "00:05:00",
        "01/01/2024 10:00:00",
    )];

    let flagged = points_of_attention(&rows);
    assert_eq!(flagged[0].protocol, "1234567");
}

#[test]
fn leaderboard_ranks_are_a_strict_sequence_even_on_ties() {
    let rows = vec![
        item("1", "bia", "FINALIZADO", "", "01/01/2024 10:00:00"),
        item("2", "ana", "FINALIZADO", "", "01/01/2024 10:00:00"),
        item("3", "carla", "FINALIZADO", "", "01/01/2024 10:00:00"),
        item("4", "carla", "RECLASSIFICADO", "", "01/01/2024 10:00:00"),
    ];

    let board = leaderboard(&rows);
    let ranks: Vec<usize> = board.iter().map(|r| r.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);

    // carla leads; the tie between ana and bia resolves alphabetically.
    assert_eq!(board[0].analyst, "carla");
    assert_eq!(board[0].total, 2);
    assert_eq!(board[1].analyst, "ana");
    assert_eq!(board[2].analyst, "bia");
}

#[test]
fn leaderboard_counts_statuses_per_analyst() {
    let rows = vec![
        item("1", "ana", "FINALIZADO", "", "01/01/2024 10:00:00"),
        item("2", "ana", "ANDAMENTO_PRE", "", "01/01/2024 10:00:00"),
        item("3", "ana", "RECLASSIFICADO", "", "01/01/2024 10:00:00"),
        item("4", "ana", "OUTRO", "", "01/01/2024 10:00:00"),
    ];

    let board = leaderboard(&rows);
    assert_eq!(board.len(), 1);
    assert_eq!(board[0].in_progress, 1);
    assert_eq!(board[0].finalized, 1);
    assert_eq!(board[0].reclassified, 1);
    // unclassified statuses stay out of the total
    assert_eq!(board[0].total, 3);
}

#[test]
fn range_filter_is_a_closed_interval_on_the_next_date() {
    let rows = vec![
        item("1", "ana", "FINALIZADO", "", "01/01/2024 23:59:59"),
        item("2", "ana", "FINALIZADO", "", "02/01/2024 00:00:00"),
        item("3", "ana", "FINALIZADO", "", "03/01/2024 00:00:00"),
        item("4", "ana", "FINALIZADO", "", ""), // no timestamp, never matches
    ];

    let filtered = filter_by_range(&rows, date(1), date(2));
    assert_eq!(filtered.len(), 2);

    // inverted range: empty set, not an error
    assert!(filter_by_range(&rows, date(3), date(1)).is_empty());
}

#[test]
fn analyst_projections() {
    let a = WorkItem::from_cells("1", "ana", "FINALIZADO", "", "", Some("Carteira A"));
    let b = WorkItem::from_cells("2", "ana", "FINALIZADO", "", "", Some("Carteira B"));
    let c = WorkItem::from_cells("3", "ana", "FINALIZADO", "", "", Some("Carteira A"));
    let d = WorkItem::from_cells("4", "bia", "FINALIZADO", "", "", Some("Carteira C"));
    let e = WorkItem::from_cells("5", "bia", "FINALIZADO", "", "", Some(""));
    let rows = vec![a, b, c, d, e];

    assert_eq!(distinct_analysts(&rows), vec!["ana", "bia"]);
    assert_eq!(
        distinct_portfolios(&rows, "ana"),
        vec!["Carteira A", "Carteira B"]
    );
    assert_eq!(distinct_portfolios(&rows, "bia"), vec!["Carteira C"]);
    assert_eq!(filter_by_analyst(&rows, "bia").len(), 2);
}
