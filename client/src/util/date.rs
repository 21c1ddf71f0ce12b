//! Fixed-format date and time rendering.
//!
//! SYSTEM CONTEXT
//! ==============
//! Dates are rendered on the server during SSR and again in the browser during
//! hydration. Both passes must produce the same bytes, so every string here is
//! computed from UTC calendar fields and a hard-coded English month table.
//! Nothing consults the host timezone, locale, or a timezone database.
//!
//! FORMATS
//! =======
//! - full:       `Jan 15, 2024, 2:30 PM`
//! - date only:  `Jan 15, 2024`
//! - time of day `2:30:00 PM` (status bar clock)

use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime, UtcOffset};

#[cfg(test)]
#[path = "date_test.rs"]
mod date_test;

/// Rendered in place of a date that could not be parsed.
pub const INVALID_DATE: &str = "Invalid Date";

const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Errors produced when a textual timestamp cannot be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    #[error("empty timestamp")]
    Empty,

    #[error("malformed timestamp: {0:?}")]
    Malformed(String),
}

/// A timestamp as callers hold it: API text or an already-parsed instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateInput<'a> {
    Text(&'a str),
    Instant(OffsetDateTime),
}

impl DateInput<'_> {
    /// Resolve to an instant normalized to UTC.
    pub fn resolve(self) -> Result<OffsetDateTime, DateError> {
        match self {
            Self::Text(raw) => parse_instant(raw),
            Self::Instant(instant) => Ok(instant.to_offset(UtcOffset::UTC)),
        }
    }
}

impl<'a> From<&'a str> for DateInput<'a> {
    fn from(raw: &'a str) -> Self {
        Self::Text(raw)
    }
}

impl<'a> From<&'a String> for DateInput<'a> {
    fn from(raw: &'a String) -> Self {
        Self::Text(raw.as_str())
    }
}

impl From<OffsetDateTime> for DateInput<'_> {
    fn from(instant: OffsetDateTime) -> Self {
        Self::Instant(instant)
    }
}

/// Parse an ISO-like timestamp into a UTC instant.
///
/// Accepts RFC 3339 (any offset, optional fractional seconds), a naive
/// `YYYY-MM-DDTHH:MM[:SS[.fff]]`, and a bare `YYYY-MM-DD`. Naive and
/// date-only forms are read as UTC.
pub fn parse_instant(raw: &str) -> Result<OffsetDateTime, DateError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(DateError::Empty);
    }

    if let Ok(instant) = OffsetDateTime::parse(trimmed, &Rfc3339) {
        return Ok(instant.to_offset(UtcOffset::UTC));
    }

    let naive_formats = [
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]"),
        format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]"),
        format_description!("[year]-[month]-[day]T[hour]:[minute]"),
    ];
    for format in naive_formats {
        if let Ok(naive) = PrimitiveDateTime::parse(trimmed, format) {
            return Ok(naive.assume_utc());
        }
    }

    if let Ok(date) = Date::parse(trimmed, format_description!("[year]-[month]-[day]")) {
        return Ok(date.midnight().assume_utc());
    }

    Err(DateError::Malformed(trimmed.to_owned()))
}

/// Format as `"<Mon> <Day>, <Year>, <H12>:<MM> <AM|PM>"` in UTC.
pub fn format_date<'a>(input: impl Into<DateInput<'a>>) -> Result<String, DateError> {
    let instant = input.into().resolve()?;
    let (hour12, meridiem) = twelve_hour(instant.hour());
    Ok(format!(
        "{}, {hour12}:{:02} {meridiem}",
        calendar_part(instant),
        instant.minute()
    ))
}

/// Format as `"<Mon> <Day>, <Year>"` in UTC.
pub fn format_date_only<'a>(input: impl Into<DateInput<'a>>) -> Result<String, DateError> {
    let instant = input.into().resolve()?;
    Ok(calendar_part(instant))
}

/// Format the time of day as `"<H12>:<MM>:<SS> <AM|PM>"` in UTC.
pub fn format_time_of_day(instant: OffsetDateTime) -> String {
    let instant = instant.to_offset(UtcOffset::UTC);
    let (hour12, meridiem) = twelve_hour(instant.hour());
    format!("{hour12}:{:02}:{:02} {meridiem}", instant.minute(), instant.second())
}

/// Like [`format_date`], but renders [`INVALID_DATE`] for unreadable input.
pub fn display_date<'a>(input: impl Into<DateInput<'a>>) -> String {
    format_date(input).unwrap_or_else(|e| invalid(&e))
}

/// Like [`format_date_only`], but renders [`INVALID_DATE`] for unreadable input.
pub fn display_date_only<'a>(input: impl Into<DateInput<'a>>) -> String {
    format_date_only(input).unwrap_or_else(|e| invalid(&e))
}

fn invalid(err: &DateError) -> String {
    leptos::logging::warn!("date formatting fell back: {err}");
    INVALID_DATE.to_owned()
}

fn calendar_part(instant: OffsetDateTime) -> String {
    let month = MONTH_NAMES[usize::from(u8::from(instant.month())) - 1];
    format!("{month} {}, {}", instant.day(), instant.year())
}

fn twelve_hour(hour: u8) -> (u8, &'static str) {
    let meridiem = if hour < 12 { "AM" } else { "PM" };
    match hour % 12 {
        0 => (12, meridiem),
        h => (h, meridiem),
    }
}
