//! Date window for a schedule fetch
//!
//! The portal takes calendar dates, the configuration supplies Unix
//! millisecond timestamps. This value object does the conversion once, in
//! the configured civil timezone, so a window boundary near midnight lands
//! on the day the institution means.

use chrono::{DateTime, NaiveDate};

use crate::{errors::DomainError, value_objects::CivilTimezone};

/// An inclusive local-date window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a window from two Unix-millisecond timestamps (as strings, the
    /// way the configuration carries them).
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidDateRange`] when either bound is not an
    /// integer or is outside the representable instant range.
    pub fn from_unix_millis(
        start_ms: &str,
        end_ms: &str,
        zone: CivilTimezone,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            start: local_date(start_ms, zone)?,
            end: local_date(end_ms, zone)?,
        })
    }

    /// First day of the window
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day of the window
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Start formatted as the portal's `YYYY-MM-DD` query value
    #[must_use]
    pub fn start_param(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    /// End formatted as the portal's `YYYY-MM-DD` query value
    #[must_use]
    pub fn end_param(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

fn local_date(raw_ms: &str, zone: CivilTimezone) -> Result<NaiveDate, DomainError> {
    let millis: i64 = raw_ms
        .trim()
        .parse()
        .map_err(|_| DomainError::InvalidDateRange(format!("not a unix timestamp: {raw_ms}")))?;
    let instant = DateTime::from_timestamp_millis(millis)
        .ok_or_else(|| DomainError::InvalidDateRange(format!("timestamp out of range: {raw_ms}")))?;
    Ok(instant.with_timezone(&zone.tz()).date_naive())
}
