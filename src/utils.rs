//! Small helpers for time formatting and log-friendly strings.

use chrono::{Local, TimeZone};
use std::fmt::Display;

/// Minute-precision format used for the `ctime` column.
pub const CTIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Format raw epoch seconds as local time at minute precision.
///
/// Returns `None` when `raw` is not an integer or is out of range.
pub fn format_ctime(raw: &str) -> Option<String> {
    format_ctime_in(raw, &Local)
}

/// Same as [`format_ctime`] in an explicit time zone.
pub fn format_ctime_in<Tz>(raw: &str, tz: &Tz) -> Option<String>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let secs: i64 = raw.trim().parse().ok()?;
    let when = tz.timestamp_opt(secs, 0).single()?;
    Some(when.format(CTIME_FORMAT).to_string())
}

/// Truncate a string for logging purposes.
///
/// Strings longer than `max` characters are cut at a character boundary and
/// get `"…(+N bytes)"` appended, N being the number of bytes dropped.
pub fn truncate_for_log(s: &str, max: usize) -> String {
    match s.char_indices().nth(max) {
        None => s.to_string(),
        Some((cut, _)) => format!("{}…(+{} bytes)", &s[..cut], s.len() - cut),
    }
}
