//! TMO (Tempo Médio de Operação): mean per-item analysis minutes per day.

use crate::models::{Status, WorkItem};
use crate::utils::duration::as_minutes;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// TMO per day over FINALIZADO rows: total analysis minutes divided by the
/// number of items with a parsed duration that day. Days come back in
/// ascending date order; rows without a `Próximo` date contribute nothing.
pub fn tmo_by_day(rows: &[WorkItem]) -> Vec<(NaiveDate, f64)> {
    let mut per_day: BTreeMap<NaiveDate, (f64, usize)> = BTreeMap::new();

    for row in rows {
        if row.status != Status::Finalizado {
            continue;
        }
        let (Some(day), Some(d)) = (row.next_date(), row.analysis_time) else {
            continue;
        };
        let entry = per_day.entry(day).or_insert((0.0, 0));
        entry.0 += as_minutes(d);
        entry.1 += 1;
    }

    per_day
        .into_iter()
        .map(|(day, (total, count))| (day, total / count as f64))
        .collect()
}
