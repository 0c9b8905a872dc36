//! Human-readable formatting helpers.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::util::time;

/// Render an elapsed duration in seconds as a short "time ago" label.
pub fn relative_from_secs(seconds: u64) -> String {
    if seconds < 5 {
        "just now".to_owned()
    } else if seconds < 60 {
        format!("{seconds}s ago")
    } else if seconds < 3600 {
        format!("{}m ago", seconds / 60)
    } else {
        format!("{}h ago", seconds / 3600)
    }
}

/// "Time ago" label for an ISO-8601 timestamp, relative to now.
///
/// Falls back to the raw string when the timestamp cannot be parsed
/// (including on the server, where no clock-parsing is available).
pub fn time_ago(iso: &str) -> String {
    match time::parse_iso_ms(iso) {
        Some(then_ms) => {
            let elapsed_ms = time::now_ms().saturating_sub(then_ms);
            relative_from_secs(elapsed_ms / 1000)
        }
        None => iso.to_owned(),
    }
}
