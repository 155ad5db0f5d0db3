//! Wire formatting for time-interval query parameters.

use std::time::Duration;

/// Format a duration the way the search engine parses time values.
///
/// Sub-millisecond durations are sent as whole nanoseconds, everything else
/// as whole milliseconds (the remainder is truncated).
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use opensearch_security_client::format::format_duration;
///
/// assert_eq!(format_duration(Duration::from_secs(5)), "5000ms");
/// assert_eq!(format_duration(Duration::from_micros(250)), "250000nanos");
/// ```
pub fn format_duration(duration: Duration) -> String {
    if duration < Duration::from_millis(1) {
        format!("{}nanos", duration.as_nanos())
    } else {
        format!("{}ms", duration.as_millis())
    }
}
