//! Common helper functions for output formatting.

use chrono::{DateTime, Local, Utc};
use owo_colors::OwoColorize;

/// Truncates an ID to 6 characters for display.
pub fn truncate_id(id: &str) -> String {
    id.chars().take(6).collect()
}

/// Truncates a string to a maximum number of characters.
pub fn truncate_str(s: &str, max_len: usize) -> String {
    if s.chars().count() > max_len {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    } else {
        s.to_string()
    }
}

/// Formats the completion checkbox.
pub fn format_status(is_complete: bool, use_colors: bool) -> String {
    let label = if is_complete { "[x]" } else { "[ ]" };
    if use_colors && is_complete {
        label.green().to_string()
    } else {
        label.to_string()
    }
}

/// Formats a summary, dimmed and struck through when complete.
pub fn format_summary(summary: &str, is_complete: bool, use_colors: bool) -> String {
    if use_colors && is_complete {
        summary.dimmed().strikethrough().to_string()
    } else {
        summary.to_string()
    }
}

/// Formats a save timestamp in local time.
pub fn format_saved_at(saved_at: Option<&DateTime<Utc>>) -> String {
    match saved_at {
        Some(at) => at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string(),
        None => "never".to_string(),
    }
}

/// Prints a table header, dimmed when colors are on.
pub fn push_header(output: &mut String, header: &str, use_colors: bool) {
    if use_colors {
        output.push_str(&format!("{}\n", header.dimmed()));
    } else {
        output.push_str(header);
        output.push('\n');
    }
}
