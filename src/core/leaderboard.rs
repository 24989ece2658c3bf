//! Per-analyst leaderboard over the three known statuses.

use crate::models::{Status, WorkItem};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub rank: usize,
    pub analyst: String,
    pub in_progress: usize,
    pub finalized: usize,
    pub reclassified: usize,
    pub total: usize,
}

/// Group rows by analyst (alphabetically), count the three statuses, then
/// stable-sort by total descending. Ties keep the alphabetical grouping
/// order; ranks are the resulting positions 1..N, never value-based tie
/// ranks.
pub fn leaderboard(rows: &[WorkItem]) -> Vec<LeaderboardRow> {
    let mut counts: BTreeMap<String, (usize, usize, usize)> = BTreeMap::new();

    for row in rows {
        let entry = counts.entry(row.analyst.clone()).or_default();
        match row.status {
            Status::AndamentoPre => entry.0 += 1,
            Status::Finalizado => entry.1 += 1,
            Status::Reclassificado => entry.2 += 1,
            Status::Other(_) => {}
        }
    }

    let mut board: Vec<LeaderboardRow> = counts
        .into_iter()
        .map(|(analyst, (a, f, r))| LeaderboardRow {
            rank: 0,
            analyst,
            in_progress: a,
            finalized: f,
            reclassified: r,
            total: a + f + r,
        })
        .collect();

    board.sort_by(|x, y| y.total.cmp(&x.total));

    for (i, row) in board.iter_mut().enumerate() {
        row.rank = i + 1;
    }

    board
}
