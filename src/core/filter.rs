//! Date-range filtering over the `Próximo` date component.

use crate::models::WorkItem;
use chrono::NaiveDate;

/// Keep rows whose `Próximo` date falls inside the closed range.
/// Rows without a parseable timestamp never satisfy a bounded range; an
/// inverted range (from > to) yields an empty set rather than an error, the
/// caller is responsible for warning about it.
pub fn filter_by_range(rows: &[WorkItem], from: NaiveDate, to: NaiveDate) -> Vec<WorkItem> {
    rows.iter()
        .filter(|r| r.next_date().is_some_and(|d| d >= from && d <= to))
        .cloned()
        .collect()
}

/// Restrict to one analyst.
pub fn filter_by_analyst(rows: &[WorkItem], analyst: &str) -> Vec<WorkItem> {
    rows.iter()
        .filter(|r| r.analyst == analyst)
        .cloned()
        .collect()
}

/// Distinct analysts present, first-seen order.
pub fn distinct_analysts(rows: &[WorkItem]) -> Vec<String> {
    let mut seen = Vec::new();
    for r in rows {
        if !r.analyst.is_empty() && !seen.iter().any(|s| s == &r.analyst) {
            seen.push(r.analyst.clone());
        }
    }
    seen
}

/// Unique non-empty `Carteira` values for one analyst, first-seen order.
pub fn distinct_portfolios(rows: &[WorkItem], analyst: &str) -> Vec<String> {
    let mut seen = Vec::new();
    for r in rows.iter().filter(|r| r.analyst == analyst) {
        if let Some(p) = &r.portfolio
            && !seen.iter().any(|s| s == p)
        {
            seen.push(p.clone());
        }
    }
    seen
}

/// Sorted distinct `Próximo` dates, used to default the range bounds.
pub fn present_dates(rows: &[WorkItem]) -> Vec<NaiveDate> {
    let mut dates: Vec<NaiveDate> = rows.iter().filter_map(|r| r.next_date()).collect();
    dates.sort();
    dates.dedup();
    dates
}
