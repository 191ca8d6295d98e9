//! Airport controller lookup HTTP microservice.
//!
//! Given an airport ICAO code, returns the radio controllers (frequencies,
//! callsigns, positions) relevant to that airport. The data directory is
//! loaded into memory once at startup; queries are read-only after that.
//!
//! # Endpoints
//!
//! - `GET /airport/{icao}` - Look up controllers for an airport
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe
//!
//! # Configuration
//!
//! - `ATCSCOPE_DATA_PATH` - Path to the JSON data directory (default: /data/atc)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//! - `SERVICE_PORT` - HTTP port (default: 8080)

use std::env;
use std::net::SocketAddr;

use tracing::{error, info};

use atcscope_service_airport::router;
use atcscope_service_shared::{init_logging, AppState, LoggingConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging (reads LOG_FORMAT from environment)
    let logging_config = LoggingConfig::from_env().with_service("airport");
    init_logging(&logging_config);

    // Load configuration from environment
    let data_path = env::var("ATCSCOPE_DATA_PATH").unwrap_or_else(|_| "/data/atc".to_string());
    let port: u16 = env::var("SERVICE_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);

    info!(data_path = %data_path, port = port, "starting airport lookup service");

    // Load application state
    let state = AppState::load(&data_path).map_err(|e| {
        error!(error = %e, path = %data_path, "failed to load application state");
        e
    })?;

    info!(
        airports = state.index().airport_count(),
        codes = state.index().indexed_code_count(),
        skipped = state.index().skipped().len(),
        "application state loaded"
    );

    // Bind and serve
    let app = router(state);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
