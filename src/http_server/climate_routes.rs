//! Climate HTTP Routes
//!
//! The five read-only endpoints over the climate dataset, plus the root
//! route listing and a health check.

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Html,
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::dataset::{parse_date, year_before, DatasetAccessor, DATE_FORMAT};
use crate::error::DatasetError;

// ==================
// Shared State
// ==================

/// Climate state shared across handlers
pub struct ClimateState {
    pub accessor: DatasetAccessor,
}

impl ClimateState {
    pub fn new(accessor: DatasetAccessor) -> Self {
        Self { accessor }
    }
}

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct StationEntry {
    #[serde(rename = "Station")]
    pub station: String,
    #[serde(rename = "Name")]
    pub name: String,
}

#[derive(Debug, Serialize)]
pub struct TobsEntry {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Temperature")]
    pub temperature: f64,
}

/// Aggregate temperature statistics; all fields are `null` when no
/// measurement matched the requested range.
#[derive(Debug, Serialize)]
pub struct TempStatsResponse {
    #[serde(rename = "TMIN")]
    pub tmin: Option<f64>,
    #[serde(rename = "TAVG")]
    pub tavg: Option<f64>,
    #[serde(rename = "TMAX")]
    pub tmax: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

// ==================
// Routers
// ==================

/// Create the climate dataset routes
pub fn climate_routes(state: Arc<ClimateState>) -> Router {
    Router::new()
        .route("/", get(home_handler))
        .route("/api/v1.0/precipitation", get(precipitation_handler))
        .route("/api/v1.0/stations", get(stations_handler))
        .route("/api/v1.0/tobs", get(tobs_handler))
        .route("/api/v1.0/:start", get(temps_from_start_handler))
        .route("/api/v1.0/:start/:end", get(temps_over_range_handler))
        .with_state(state)
}

/// Health check route at root level
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_handler))
}

// ==================
// Handlers
// ==================

const ROUTE_LISTING: &str = "Welcome!<br/>\
Available Routes:<br/>\
/api/v1.0/precipitation<br/>\
/api/v1.0/stations<br/>\
/api/v1.0/tobs<br/>\
/api/v1.0/&lt;start&gt;<br/>\
/api/v1.0/&lt;start&gt;/&lt;end&gt;";

/// Static listing of the available routes; touches no dataset state.
async fn home_handler() -> Html<&'static str> {
    Html(ROUTE_LISTING)
}

async fn health_handler() -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    (StatusCode::OK, Json(response))
}

/// Precipitation for the final year of the dataset, as a date -> prcp map.
/// Rows sharing a date collapse to the last one in iteration order.
async fn precipitation_handler(
    State(state): State<Arc<ClimateState>>,
) -> Result<Json<BTreeMap<String, Option<f64>>>, (StatusCode, Json<ErrorResponse>)> {
    let latest = state.accessor.max_date().await.map_err(error_response)?;
    let cutoff = year_before(&latest).map_err(error_response)?;
    let rows = state
        .accessor
        .range_by_date(&cutoff, None)
        .await
        .map_err(error_response)?;

    let mapping: BTreeMap<String, Option<f64>> =
        rows.into_iter().map(|row| (row.date, row.prcp)).collect();
    Ok(Json(mapping))
}

async fn stations_handler(
    State(state): State<Arc<ClimateState>>,
) -> Result<Json<Vec<StationEntry>>, (StatusCode, Json<ErrorResponse>)> {
    let stations = state.accessor.all_stations().await.map_err(error_response)?;

    let entries = stations
        .into_iter()
        .map(|s| StationEntry {
            station: s.station,
            name: s.name,
        })
        .collect();
    Ok(Json(entries))
}

/// Temperature observations from the most active station's final year.
async fn tobs_handler(
    State(state): State<Arc<ClimateState>>,
) -> Result<Json<Vec<TobsEntry>>, (StatusCode, Json<ErrorResponse>)> {
    let active = state
        .accessor
        .most_active_station()
        .await
        .map_err(error_response)?;
    let latest = state
        .accessor
        .max_date_for_station(&active)
        .await
        .map_err(error_response)?;
    let cutoff = year_before(&latest).map_err(error_response)?;
    let rows = state
        .accessor
        .range_for_station(&active, &cutoff)
        .await
        .map_err(error_response)?;

    let entries = rows
        .into_iter()
        .map(|row| TobsEntry {
            date: row.date,
            temperature: row.tobs,
        })
        .collect();
    Ok(Json(entries))
}

async fn temps_from_start_handler(
    State(state): State<Arc<ClimateState>>,
    Path(start): Path<String>,
) -> Result<Json<TempStatsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let start = canonical_date(&start).map_err(error_response)?;
    let aggregate = state
        .accessor
        .aggregate_temps(None, Some(&start), None)
        .await
        .map_err(error_response)?;
    Ok(Json(temp_stats(aggregate)))
}

async fn temps_over_range_handler(
    State(state): State<Arc<ClimateState>>,
    Path((start, end)): Path<(String, String)>,
) -> Result<Json<TempStatsResponse>, (StatusCode, Json<ErrorResponse>)> {
    let start = canonical_date(&start).map_err(error_response)?;
    let end = canonical_date(&end).map_err(error_response)?;
    let aggregate = state
        .accessor
        .aggregate_temps(None, Some(&start), Some(&end))
        .await
        .map_err(error_response)?;
    Ok(Json(temp_stats(aggregate)))
}

// ==================
// Helpers
// ==================

/// Validate a caller-supplied date and re-emit it zero-padded, so that the
/// string comparisons inside the queries stay chronological.
fn canonical_date(input: &str) -> Result<String, DatasetError> {
    Ok(parse_date(input)?.format(DATE_FORMAT).to_string())
}

fn temp_stats(aggregate: crate::dataset::TempAggregate) -> TempStatsResponse {
    TempStatsResponse {
        tmin: aggregate.tmin,
        tavg: aggregate.tavg,
        tmax: aggregate.tmax,
    }
}

fn error_response(err: DatasetError) -> (StatusCode, Json<ErrorResponse>) {
    let code = err.status();
    let status = StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    if status.is_server_error() {
        tracing::warn!("request failed: {err}");
    }
    (
        status,
        Json(ErrorResponse {
            error: err.to_string(),
            code,
        }),
    )
}
