//! # HTTP Server Module
//!
//! Axum server exposing the climate dataset queries.
//!
//! # Endpoints
//!
//! - `/` - Route listing
//! - `/health` - Health check
//! - `/api/v1.0/precipitation` - Final-year precipitation by date
//! - `/api/v1.0/stations` - Station listing
//! - `/api/v1.0/tobs` - Final-year temperatures at the most active station
//! - `/api/v1.0/:start[/:end]` - Aggregate temperature statistics

pub mod climate_routes;
pub mod config;
pub mod server;

pub use climate_routes::{climate_routes, health_routes, ClimateState};
pub use config::HttpServerConfig;
pub use server::HttpServer;
