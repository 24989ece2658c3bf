//! Status counts and mean analysis duration.

use crate::models::{Status, WorkItem};
use chrono::Duration;

/// Count of rows with an exact status match.
pub fn count_by_status(rows: &[WorkItem], status: &Status) -> usize {
    rows.iter().filter(|r| &r.status == status).count()
}

/// Arithmetic mean of `Tempo de Análise` over rows matching `status`,
/// ignoring rows whose duration failed to parse. `None` when there is
/// nothing to average (rendered as "0 min" upstream).
pub fn mean_duration(rows: &[WorkItem], status: &Status) -> Option<Duration> {
    let durations: Vec<Duration> = rows
        .iter()
        .filter(|r| &r.status == status)
        .filter_map(|r| r.analysis_time)
        .collect();

    if durations.is_empty() {
        return None;
    }

    let total: i64 = durations.iter().map(|d| d.num_seconds()).sum();
    Some(Duration::seconds(total / durations.len() as i64))
}

/// The four headline numbers of a dashboard view.
pub struct StatusSummary {
    pub finalized: usize,
    pub reclassified: usize,
    pub in_progress: usize,
    pub mean_analysis: Option<Duration>,
}

pub fn status_summary(rows: &[WorkItem]) -> StatusSummary {
    StatusSummary {
        finalized: count_by_status(rows, &Status::Finalizado),
        reclassified: count_by_status(rows, &Status::Reclassificado),
        in_progress: count_by_status(rows, &Status::AndamentoPre),
        mean_analysis: mean_duration(rows, &Status::Finalizado),
    }
}
