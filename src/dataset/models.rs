//! Statically declared record types for the two dataset tables.
//!
//! The schema is known and fixed, so the rows are mapped into concrete
//! structs rather than discovered at runtime.

use serde::Serialize;
use sqlx::FromRow;

/// One dated observation at a station.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Measurement {
    /// Station identifier, references `Station::station`.
    pub station: String,
    /// Observation date, `YYYY-MM-DD`.
    pub date: String,
    /// Precipitation; absent on dry or unreported days.
    pub prcp: Option<f64>,
    /// Observed temperature.
    pub tobs: f64,
}

/// A physical observation site.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Station {
    /// Unique station identifier.
    pub station: String,
    /// Display name.
    pub name: String,
}

/// Result row for the min/avg/max temperature aggregate.
///
/// All fields are `None` when no measurement matched the filters; SQL
/// aggregates return NULL over empty input and that is preserved here.
#[derive(Debug, Clone, Copy, FromRow, Serialize)]
pub struct TempAggregate {
    pub tmin: Option<f64>,
    pub tavg: Option<f64>,
    pub tmax: Option<f64>,
}
