//! Analysis-duration utilities: parsing the stored string form, formatting
//! for display, and the canonical serialization used on save.
//!
//! Stored durations come in as `HH:MM:SS` (or `H:MM:SS`), optionally with a
//! `N days ` prefix as produced by some upstream exports. Anything else parses
//! to `None`, which downstream aggregation treats as "excluded", never as an
//! error.

use chrono::Duration;
use regex::Regex;
use std::sync::OnceLock;

fn duration_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?:(\d+)\s+days?\s+)?(\d+):(\d{2}):(\d{2})$").unwrap()
    })
}

/// Parse a stored duration string. `None` on anything non-conforming.
pub fn parse_duration(s: &str) -> Option<Duration> {
    let caps = duration_re().captures(s.trim())?;

    let days: i64 = caps.get(1).map_or(Ok(0), |m| m.as_str().parse()).ok()?;
    let hours: i64 = caps[2].parse().ok()?;
    let minutes: i64 = caps[3].parse().ok()?;
    let seconds: i64 = caps[4].parse().ok()?;

    if minutes > 59 || seconds > 59 {
        return None;
    }

    Some(Duration::seconds(
        ((days * 24 + hours) * 60 + minutes) * 60 + seconds,
    ))
}

/// Human-readable rendition used by the metric cards and tables.
/// Missing or zero durations render as "0 min".
pub fn format_duration(d: Option<Duration>) -> String {
    match d {
        None => "0 min".to_string(),
        Some(d) => {
            let total = d.num_seconds();
            if total <= 0 {
                return "0 min".to_string();
            }
            let minutes = total / 60;
            let seconds = total % 60;
            format!("{} min {} sec", minutes, seconds)
        }
    }
}

/// Canonical string form written back to the per-user spreadsheet.
/// Re-parses to the same value; missing durations serialize as an empty cell.
pub fn serialize_duration(d: Option<Duration>) -> String {
    match d {
        None => String::new(),
        Some(d) => {
            let total = d.num_seconds().max(0);
            format!("{:02}:{:02}:{:02}", total / 3600, (total % 3600) / 60, total % 60)
        }
    }
}

/// Total duration in fractional minutes, for TMO arithmetic.
pub fn as_minutes(d: Duration) -> f64 {
    d.num_seconds() as f64 / 60.0
}
