pub mod analyst;
pub mod backup;
pub mod config;
pub mod export;
pub mod init;
pub mod logbook;
pub mod overview;
pub mod save;
pub mod upload;

use crate::core::filter;
use crate::errors::{AppError, AppResult};
use crate::models::WorkItem;
use crate::ui::messages::warning;
use crate::utils::date;

/// Resolve the `--from`/`--to` pair against the table and apply the filter.
/// An inverted range warns and proceeds on the (empty) filtered set instead
/// of aborting the view.
pub(crate) fn apply_date_filter(
    rows: &[WorkItem],
    from: Option<&str>,
    to: Option<&str>,
) -> AppResult<Vec<WorkItem>> {
    let dates = filter::present_dates(rows);
    let (from, to) = date::resolve_range(from, to, &dates)?;

    if from > to {
        warning(AppError::InvalidRange(
            date::format_date(from),
            date::format_date(to),
        ));
    }

    Ok(filter::filter_by_range(rows, from, to))
}
