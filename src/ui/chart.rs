//! Terminal chart renderings: the web dashboard's pie and bar charts become
//! proportional bars scaled to a configurable width.

use unicode_width::UnicodeWidthStr;

const BAR: &str = "█";

/// Horizontal bar chart, one labelled row per data point, bars scaled so the
/// largest value fills `width` cells. Values render with one decimal (the
/// TMO-by-day chart is in fractional minutes).
pub fn bar_chart(data: &[(String, f64)], width: usize) -> String {
    if data.is_empty() {
        return String::new();
    }

    let max_value = data.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);
    let label_width = data
        .iter()
        .map(|(l, _)| UnicodeWidthStr::width(l.as_str()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (label, value) in data {
        let cells = if max_value > 0.0 {
            ((value / max_value) * width as f64).round() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "{:<label_width$}  {} {:.1}\n",
            label,
            BAR.repeat(cells.max(if *value > 0.0 { 1 } else { 0 })),
            value,
        ));
    }
    out
}

/// Distribution bars: shares of a whole, with counts and percentages. The
/// textual equivalent of the status pie chart; an all-zero distribution
/// renders rows with empty bars instead of erroring.
pub fn distribution(data: &[(String, usize)], width: usize) -> String {
    let total: usize = data.iter().map(|(_, v)| v).sum();
    let label_width = data
        .iter()
        .map(|(l, _)| UnicodeWidthStr::width(l.as_str()))
        .max()
        .unwrap_or(0);

    let mut out = String::new();
    for (label, value) in data {
        let share = if total > 0 {
            *value as f64 / total as f64
        } else {
            0.0
        };
        let cells = (share * width as f64).round() as usize;
        out.push_str(&format!(
            "{:<label_width$}  {:<width$}  {:>5} ({:>5.1}%)\n",
            label,
            BAR.repeat(cells),
            value,
            share * 100.0,
        ));
    }
    out
}
