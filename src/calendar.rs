//! Map mission-relative times (years after launch) onto calendar dates.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use solar_core::constants::DAYS_PER_YEAR;
use thiserror::Error;

const SECONDS_PER_DAY: f64 = 86_400.0;

#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("invalid launch date '{input}' (expected YYYY-MM-DD): {source}")]
    Parse {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
    #[error("offset of {0} years is outside the representable calendar range")]
    OutOfRange(f64),
}

/// Parse a launch date written as `YYYY-MM-DD`.
pub fn parse_launch_date(input: &str) -> Result<NaiveDate, CalendarError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d").map_err(|source| CalendarError::Parse {
        input: input.to_string(),
        source,
    })
}

/// Launch midnight plus `years` Julian years.
pub fn offset_date(launch: NaiveDate, years: f64) -> Result<NaiveDateTime, CalendarError> {
    let millis = years * DAYS_PER_YEAR * SECONDS_PER_DAY * 1_000.0;
    if !millis.is_finite() || millis.abs() > i64::MAX as f64 {
        return Err(CalendarError::OutOfRange(years));
    }
    let delta =
        TimeDelta::try_milliseconds(millis.round() as i64).ok_or(CalendarError::OutOfRange(years))?;
    launch
        .and_time(NaiveTime::MIN)
        .checked_add_signed(delta)
        .ok_or(CalendarError::OutOfRange(years))
}

/// `offset_date` rendered as `YYYY-MM-DD`.
pub fn format_offset(launch: NaiveDate, years: f64) -> Result<String, CalendarError> {
    Ok(offset_date(launch, years)?.format("%Y-%m-%d").to_string())
}
