//! Time utilities: stored timestamp format, zero-time sentinel, elapsed spans.

use super::formatting::hm2readable;
use chrono::{Local, NaiveDateTime, Timelike};

/// Format used for every timestamp column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local time truncated to whole seconds.
pub fn now() -> NaiveDateTime {
    let n = Local::now().naive_local();
    n.with_nanosecond(0).unwrap_or(n)
}

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// True for the values legacy rows use to mean "never set".
pub fn is_zero_timestamp(s: &str) -> bool {
    let t = s.trim();
    t.is_empty() || t == "00:00:00" || t.starts_with("0000-00-00")
}

/// Parse a stored timestamp. The zero-time sentinel reads as `None`.
pub fn parse_timestamp(s: &str) -> Option<NaiveDateTime> {
    if is_zero_timestamp(s) {
        return None;
    }
    let t = s.trim();
    NaiveDateTime::parse_from_str(t, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(t, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}

/// Whole hours and remaining minutes between two instants.
/// Spans that run backwards count as zero.
pub fn hours_minutes_between(start: NaiveDateTime, end: NaiveDateTime) -> (i64, i64) {
    let minutes = (end - start).num_minutes().max(0);
    (minutes / 60, minutes % 60)
}

/// Human-readable elapsed time, e.g. "2 Hours 45 Minutes".
pub fn elapsed_readable(start: NaiveDateTime, end: NaiveDateTime) -> String {
    let (h, m) = hours_minutes_between(start, end);
    hm2readable(h, m)
}
