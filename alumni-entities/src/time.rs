use std::fmt;

use thiserror::Error;
use time::{format_description::FormatItem, macros::format_description, Date, OffsetDateTime};

/// Unix timestamp with **milli**second precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(i64);

impl Timestamp {
    pub fn now() -> Self {
        OffsetDateTime::now_utc().into()
    }

    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(self) -> i64 {
        self.0
    }
}

impl From<OffsetDateTime> for Timestamp {
    fn from(from: OffsetDateTime) -> Self {
        let millis = from.unix_timestamp_nanos() / 1_000_000;
        Self(millis as i64)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid date, expected YYYY-MM-DD")]
pub struct DateParseError;

/// Parses a calendar date in the `YYYY-MM-DD` notation.
pub fn parse_date(s: &str) -> Result<Date, DateParseError> {
    Date::parse(s.trim(), DATE_FORMAT).map_err(|_| DateParseError)
}

pub fn format_date(date: Date) -> String {
    // The format description only contains numeric components
    // that are available for every date.
    date.format(DATE_FORMAT).unwrap_or_default()
}
