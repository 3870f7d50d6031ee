//! Text processing utilities.
//!
//! This module contains helpers for turning stored field values into display
//! text.

/// Format a compact `YYYYMMDD` date as `YYYY-MM-DD`.
///
/// Values that are not exactly eight ASCII digits are returned unchanged, so
/// half-typed or malformed input stays visible as entered.
pub fn format_yyyymmdd(date: &str) -> String {
    if date.len() == 8 && date.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}-{}-{}", &date[0..4], &date[4..6], &date[6..8])
    } else {
        date.to_string()
    }
}

/// Shorten text to `max` characters, ending with an ellipsis when cut.
///
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept)
}
