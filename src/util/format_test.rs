use super::*;

// =============================================================
// relative_from_secs boundaries
// =============================================================

#[test]
fn under_five_seconds_is_just_now() {
    assert_eq!(relative_from_secs(0), "just now");
    assert_eq!(relative_from_secs(4), "just now");
}

#[test]
fn seconds_range() {
    assert_eq!(relative_from_secs(5), "5s ago");
    assert_eq!(relative_from_secs(59), "59s ago");
}

#[test]
fn minutes_range() {
    assert_eq!(relative_from_secs(60), "1m ago");
    assert_eq!(relative_from_secs(3599), "59m ago");
}

#[test]
fn hours_range() {
    assert_eq!(relative_from_secs(3600), "1h ago");
    assert_eq!(relative_from_secs(7200), "2h ago");
}

// =============================================================
// time_ago fallback
// =============================================================

#[test]
fn unparseable_timestamp_falls_back_to_raw_string() {
    // Native builds have no ISO parser, so any input takes the fallback.
    assert_eq!(time_ago("2024-01-01T00:00:00Z"), "2024-01-01T00:00:00Z");
}
