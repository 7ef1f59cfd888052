// Display formatting shared by the classifier templates and the ranker badges.

/// Placeholder shown wherever a number is missing or non-finite.
pub const NOT_AVAILABLE: &str = "n/a";

/// Format a blended score, gap, or combined total with one decimal place.
///
/// Non-finite values (NaN, infinities) render as `"n/a"` so templated
/// sentences never show `NaN`.
pub fn fmt_score(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.1}")
    } else {
        NOT_AVAILABLE.to_string()
    }
}

/// English ordinal suffix for a non-negative integer: 1st, 2nd, 3rd, 4th,
/// 11th, 12th, 13th, 21st, ...
pub fn ordinal(n: u32) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}

/// Format a percentile as an ordinal ("86th"), clamped to 0..=100.
///
/// Truncates rather than rounds: strength bands are half-open at their lower
/// edge, so the printed number stays in the same band as its label.
pub fn fmt_percentile(percentile: f64) -> String {
    if !percentile.is_finite() {
        return NOT_AVAILABLE.to_string();
    }
    let whole = percentile.floor().clamp(0.0, 100.0) as u32;
    ordinal(whole)
}

/// Prefix each line with its 1-based step number ("1. ...").
pub fn numbered(lines: &[String]) -> Vec<String> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| format!("{}. {}", i + 1, line))
        .collect()
}
