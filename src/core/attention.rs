//! Points of attention: items whose analysis ran past the review threshold.

use crate::models::WorkItem;
use chrono::Duration;

/// The fixed review threshold: anything strictly above two minutes.
pub fn threshold() -> Duration {
    Duration::minutes(2)
}

/// Rows whose analysis duration exceeds the threshold, with `Protocolo`
/// already cleaned of thousands-separator commas for display. An item at
/// exactly 2:00 stays out; 2:01 is in.
pub fn points_of_attention(rows: &[WorkItem]) -> Vec<WorkItem> {
    rows.iter()
        .filter(|r| r.analysis_time.is_some_and(|d| d > threshold()))
        .map(|r| {
            let mut item = r.clone();
            item.protocol = r.clean_protocol();
            item
        })
        .collect()
}
