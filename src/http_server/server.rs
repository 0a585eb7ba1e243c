//! # HTTP Server
//!
//! Main HTTP server combining the climate routes, CORS, and request tracing.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::climate_routes::{climate_routes, health_routes, ClimateState};
use super::config::HttpServerConfig;
use crate::dataset::DatasetAccessor;

/// HTTP server for the climate query API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new(accessor: DatasetAccessor) -> Self {
        Self::with_config(accessor, HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(accessor: DatasetAccessor, config: HttpServerConfig) -> Self {
        let router = Self::build_router(accessor, &config);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(accessor: DatasetAccessor, config: &HttpServerConfig) -> Router {
        let state = Arc::new(ClimateState::new(accessor));

        // Configure CORS from config; a read-only API defaults to permissive
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(Any)
                .allow_headers(Any)
        };

        Router::new()
            // Health check at root level
            .merge(health_routes())
            // Dataset query routes
            .merge(climate_routes(state))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), std::io::Error> {
        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("climate-api listening on {addr}");

        axum::serve(listener, self.router).await
    }
}
