use super::status::Status;
use crate::utils::{date, duration};
use chrono::{Duration, NaiveDate, NaiveDateTime};

/// One row of the accumulated per-user table.
///
/// The persisted file stores `Tempo de Análise` and `Próximo` as display
/// strings; in memory they are typed values, converted back to strings only
/// at the persistence and rendering boundaries. Cells that fail to parse are
/// carried as `None` and excluded from the numeric aggregates.
#[derive(Debug, Clone)]
pub struct WorkItem {
    pub protocol: String,                    // ⇔ Protocolo
    pub analyst: String,                     // ⇔ Usuário
    pub status: Status,                      // ⇔ Status
    pub analysis_time: Option<Duration>,     // ⇔ Tempo de Análise
    pub next_review: Option<NaiveDateTime>,  // ⇔ Próximo
    pub portfolio: Option<String>,           // ⇔ Carteira
}

impl WorkItem {
    /// Build a row from the raw string cells of an uploaded or loaded file.
    pub fn from_cells(
        protocol: &str,
        analyst: &str,
        status: &str,
        analysis_time: &str,
        next_review: &str,
        portfolio: Option<&str>,
    ) -> Self {
        Self {
            protocol: protocol.trim().to_string(),
            analyst: analyst.trim().to_string(),
            status: Status::from_str(status.trim()),
            analysis_time: duration::parse_duration(analysis_time),
            next_review: date::parse_next(next_review),
            portfolio: portfolio
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string),
        }
    }

    /// Date component of `Próximo`, the grouping key for the day charts.
    pub fn next_date(&self) -> Option<NaiveDate> {
        self.next_review.map(|dt| dt.date())
    }

    /// `Protocolo` with thousands-separator commas stripped, as shown in the
    /// points-of-attention table.
    pub fn clean_protocol(&self) -> String {
        self.protocol.replace(',', "")
    }
}
