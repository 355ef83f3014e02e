//! Timestamps, clocks and scheduled-time parsing.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use publicist_error::{PublishError, PublishErrorKind, PublishResult};
use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

/// Source of "now" for immediately published posts.
pub trait Clock: Send + Sync {
    /// Current wall-clock time, without zone information.
    fn now(&self) -> NaiveDateTime;
}

/// Reads the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Effective time of a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Timestamp {
    /// Wall-clock time without an offset.
    Naive(NaiveDateTime),
    /// Time with an explicit UTC offset.
    Offset(DateTime<FixedOffset>),
}

impl Timestamp {
    /// ISO-8601 rendering: `T` separator, microseconds only when non-zero,
    /// `±HH:MM` offset only when one is known.
    pub fn to_iso_string(&self) -> String {
        match self {
            Timestamp::Naive(dt) => iso_datetime(dt),
            Timestamp::Offset(dt) => {
                format!("{}{}", iso_datetime(&dt.naive_local()), dt.format("%:z"))
            }
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_iso_string())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

fn iso_datetime(dt: &NaiveDateTime) -> String {
    let base = dt.format("%Y-%m-%dT%H:%M:%S").to_string();
    match dt.nanosecond() / 1_000 {
        0 => base,
        micros => format!("{base}.{micros:06}"),
    }
}

static ISO_TIMESTAMP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<date>\d{4}-\d{2}-\d{2}|\d{8})",
        r"(?:[T ](?P<hour>\d{2})",
        r"(?::(?P<minute>\d{2})(?::(?P<second>\d{2})(?:\.(?P<fraction>\d+))?)?)?",
        r"(?P<offset>Z|[+-]\d{2}(?::?\d{2})?)?)?$",
    ))
    .expect("scheduled time pattern is valid")
});

/// Parse a scheduled time in ISO form.
///
/// The date is `YYYY-MM-DD` or `YYYYMMDD`. It may be followed by `T` or a
/// space and a time of `HH`, `HH:MM`, `HH:MM:SS` or `HH:MM:SS.f`, then an
/// optional `Z`, `±HH`, `±HHMM` or `±HH:MM` offset. Every field is
/// zero-padded. Fractions beyond microseconds are truncated.
///
/// # Errors
///
/// Returns [`PublishErrorKind::InvalidScheduledTime`] when the text does not
/// have that shape or names a date or time that does not exist.
///
/// # Examples
///
/// ```
/// use publicist_social::parse_scheduled_time;
///
/// let ts = parse_scheduled_time("2025-03-01 09:30:00").unwrap();
/// assert_eq!(ts.to_iso_string(), "2025-03-01T09:30:00");
///
/// let ts = parse_scheduled_time("2025-03-01T09:30:00Z").unwrap();
/// assert_eq!(ts.to_iso_string(), "2025-03-01T09:30:00+00:00");
/// ```
#[track_caller]
pub fn parse_scheduled_time(input: &str) -> PublishResult<Timestamp> {
    match timestamp_from_parts(input) {
        Some(ts) => Ok(ts),
        None => Err(PublishError::new(PublishErrorKind::InvalidScheduledTime(
            input.to_string(),
        ))),
    }
}

fn timestamp_from_parts(input: &str) -> Option<Timestamp> {
    let caps = ISO_TIMESTAMP.captures(input)?;
    let number = |name: &str| -> Option<u32> {
        caps.name(name).map_or(Some(0), |m| m.as_str().parse().ok())
    };

    let date_digits = caps.name("date")?.as_str().replace('-', "");
    let date = NaiveDate::from_ymd_opt(
        date_digits[..4].parse().ok()?,
        date_digits[4..6].parse().ok()?,
        date_digits[6..].parse().ok()?,
    )?;

    let micros = match caps.name("fraction") {
        Some(fraction) => {
            let digits: String = fraction.as_str().chars().take(6).collect();
            format!("{digits:0<6}").parse().ok()?
        }
        None => 0,
    };
    let time = NaiveTime::from_hms_micro_opt(
        number("hour")?,
        number("minute")?,
        number("second")?,
        micros,
    )?;
    let naive = date.and_time(time);

    match caps.name("offset").map(|m| m.as_str()) {
        None => Some(Timestamp::Naive(naive)),
        Some(offset) => {
            let offset = parse_offset(offset)?;
            naive
                .and_local_timezone(offset)
                .single()
                .map(Timestamp::Offset)
        }
    }
}

/// `Z`, `±HH`, `±HHMM` or `±HH:MM`, already shape-checked.
fn parse_offset(text: &str) -> Option<FixedOffset> {
    if text == "Z" {
        return FixedOffset::east_opt(0);
    }
    let sign = if text.starts_with('-') { -1 } else { 1 };
    let digits = text[1..].replace(':', "");
    let hours: i32 = digits[..2].parse().ok()?;
    let minutes: i32 = match digits.get(2..) {
        Some(rest) if !rest.is_empty() => rest.parse().ok()?,
        _ => 0,
    };
    if hours > 23 || minutes > 59 {
        return None;
    }
    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
}
