//! Dataset accessor module
//!
//! Typed read operations over the station and measurement tables, plus the
//! date arithmetic the route handlers share. All dates travel as `YYYY-MM-DD`
//! strings; fixed-width formatting makes lexicographic and chronological
//! ordering identical, which the SQL `MAX(date)` lookups rely on.

mod accessor;
mod models;

pub use accessor::DatasetAccessor;
pub use models::{Measurement, Station, TempAggregate};

use chrono::{Duration, NaiveDate};

use crate::error::DatasetError;

/// Date format used throughout the dataset.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` string, rejecting anything else.
pub fn parse_date(input: &str) -> Result<NaiveDate, DatasetError> {
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| DatasetError::MalformedDate(input.to_string()))
}

/// The date exactly 365 days before `date`, back in string form.
pub fn year_before(date: &str) -> Result<String, DatasetError> {
    let parsed = parse_date(date)?;
    Ok((parsed - Duration::days(365)).format(DATE_FORMAT).to_string())
}
