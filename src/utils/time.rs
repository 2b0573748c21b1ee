//! Time utilities: strict HH:MM parsing, clock-time subtraction, formatting.

use crate::errors::FormatError;
use chrono::NaiveTime;

/// Parse a zero-padded 24-hour `HH:MM` clock time.
///
/// `chrono` alone would also accept `8:10`, so the shape is checked first.
pub fn parse_clock(t: &str) -> Result<NaiveTime, FormatError> {
    let b = t.as_bytes();
    let shaped = b.len() == 5
        && b[2] == b':'
        && b[..2].iter().all(u8::is_ascii_digit)
        && b[3..].iter().all(u8::is_ascii_digit);

    if !shaped {
        return Err(FormatError::InvalidTime(t.to_string()));
    }

    NaiveTime::parse_from_str(t, "%H:%M").map_err(|_| FormatError::InvalidTime(t.to_string()))
}

pub fn minutes_between(start: NaiveTime, end: NaiveTime) -> i64 {
    (end - start).num_minutes()
}

/// `end - start` in minutes for two clock times on the same day.
/// Negative when `end` precedes `start`; no day wrap-around.
pub fn diff_minutes(start: &str, end: &str) -> Result<i64, FormatError> {
    Ok(minutes_between(parse_clock(start)?, parse_clock(end)?))
}

/// Same delta as [`diff_minutes`], rendered as `H:MM`.
pub fn diff_readable(start: &str, end: &str) -> Result<String, FormatError> {
    Ok(format_h_mm(diff_minutes(start, end)?))
}

/// `528` → `8:48`, `-75` → `-1:15`.
pub fn format_h_mm(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{}:{:02}", sign, m / 60, m % 60)
}
