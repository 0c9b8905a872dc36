//! Wall-clock access that works in both the browser and native tests.

/// Current time in milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    #[cfg(feature = "hydrate")]
    {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let ms = js_sys::Date::now() as u64;
        ms
    }
    #[cfg(not(feature = "hydrate"))]
    {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .ok()
            .and_then(|d| u64::try_from(d.as_millis()).ok())
            .unwrap_or(u64::MAX)
    }
}

/// Parse an ISO-8601 timestamp to epoch milliseconds. Browser-only; returns
/// `None` on the server or for unparseable input.
pub fn parse_iso_ms(iso: &str) -> Option<u64> {
    #[cfg(feature = "hydrate")]
    {
        let ms = js_sys::Date::parse(iso);
        if ms.is_nan() {
            None
        } else {
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let ms = ms as u64;
            Some(ms)
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = iso;
        None
    }
}
