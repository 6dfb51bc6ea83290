//! Timestamp parsing for activity data and cutoff dates
//!
//! The admin API reports activity with up to nine fractional digits
//! (`2023-08-01T15:19:32.354230769Z`). Fractions are truncated to
//! microseconds before parsing; the comparison never needs more.

use std::borrow::Cow;

use chrono::{DateTime, Months, NaiveDate, NaiveDateTime, NaiveTime, Utc};

use crate::error::ConfigError;

/// Formats tried for timestamps without a UTC offset (assumed UTC).
const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M"];

/// Date-only formats accepted for an explicit cutoff.
const DATE_FORMATS: [&str; 2] = ["%d-%m-%Y", "%Y-%m-%d"];

const MAX_FRACTION_DIGITS: usize = 6;

/// Truncate the fractional-second part of a timestamp to six digits.
fn truncate_fraction(raw: &str) -> Cow<'_, str> {
    let Some(time_start) = raw.find('T') else {
        return Cow::Borrowed(raw);
    };
    let Some(dot) = raw[time_start..].find('.').map(|i| time_start + i) else {
        return Cow::Borrowed(raw);
    };

    let digits = raw[dot + 1..]
        .bytes()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits <= MAX_FRACTION_DIGITS {
        return Cow::Borrowed(raw);
    }

    let keep_until = dot + 1 + MAX_FRACTION_DIGITS;
    let rest = dot + 1 + digits;
    Cow::Owned(format!("{}{}", &raw[..keep_until], &raw[rest..]))
}

/// Parse an activity timestamp into a UTC instant.
///
/// Returns `None` for anything that cannot be read; callers treat that as
/// missing data.
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let normalized = truncate_fraction(raw);
    let normalized: &str = &normalized;

    if let Ok(dt) = DateTime::parse_from_rfc3339(normalized) {
        return Some(dt.with_timezone(&Utc));
    }

    let naive = normalized
        .strip_suffix('Z')
        .or_else(|| normalized.strip_suffix('z'))
        .unwrap_or(normalized);

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(naive, format).ok())
        .map(|dt| dt.and_utc())
}

/// Parse an operator-supplied cutoff.
///
/// Accepts `DD-MM-YYYY`, `YYYY-MM-DD` (both meaning midnight UTC) or any
/// timestamp [`parse_timestamp`] understands.
pub fn parse_cutoff(raw: &str) -> Result<DateTime<Utc>, ConfigError> {
    let trimmed = raw.trim();

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
    {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    parse_timestamp(trimmed).ok_or_else(|| ConfigError::InvalidDate(raw.to_string()))
}

/// Cutoff for accounts older than `months` calendar months before `now`.
pub fn cutoff_from_age(now: DateTime<Utc>, months: u32) -> DateTime<Utc> {
    now.checked_sub_months(Months::new(months))
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}
