//! Formatting helpers for presenting summary figures.

/// One decimal place; an em dash when there is nothing to average.
pub fn format_average(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.1}")
    } else {
        "—".to_string()
    }
}

pub fn format_share(part: usize, whole: usize) -> String {
    if whole == 0 {
        return "—".to_string();
    }
    format!("{:.0}%", part as f64 * 100.0 / whole as f64)
}
