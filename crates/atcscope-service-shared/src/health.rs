//! Health check handlers for liveness/readiness probes.
//!
//! Provides `/health/live` and `/health/ready` endpoints returning JSON
//! status responses.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::AppState;

/// Health status response for liveness and readiness probes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthStatus {
    /// Status indicator: "ok" or "not_ready: <reason>".
    pub status: String,

    /// Service name for identification.
    pub service: String,

    /// Service version from build-time.
    pub version: String,

    /// Number of airports loaded (readiness check only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub airports_loaded: Option<usize>,

    /// Number of coverage codes with indexed positions (readiness check only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub codes_indexed: Option<usize>,
}

impl HealthStatus {
    /// Create a healthy liveness status.
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            airports_loaded: None,
            codes_indexed: None,
        }
    }

    /// Create a ready status with index information.
    pub fn ready(service: &str, version: &str, airports: usize, codes: usize) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            airports_loaded: Some(airports),
            codes_indexed: Some(codes),
        }
    }

    /// Create a not-ready status.
    pub fn not_ready(service: &str, version: &str, reason: &str) -> Self {
        Self {
            status: format!("not_ready: {}", reason),
            service: service.to_string(),
            version: version.to_string(),
            airports_loaded: None,
            codes_indexed: None,
        }
    }
}

/// Liveness probe handler.
///
/// Returns 200 OK if the service is running, without touching the index.
pub async fn health_live() -> impl IntoResponse {
    let status = HealthStatus::alive(env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler.
///
/// Returns 200 OK when the controller index holds data, 503 when nothing
/// was loaded at all.
pub async fn health_ready(State(state): State<AppState>) -> Response {
    let service = env!("CARGO_PKG_NAME");
    let version = env!("CARGO_PKG_VERSION");

    let index = state.index();
    if index.is_empty() {
        let status = HealthStatus::not_ready(service, version, "no data loaded");
        return (StatusCode::SERVICE_UNAVAILABLE, Json(status)).into_response();
    }

    let status = HealthStatus::ready(
        service,
        version,
        index.airport_count(),
        index.indexed_code_count(),
    );
    (StatusCode::OK, Json(status)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_status_alive() {
        let status = HealthStatus::alive("test-service", "1.0.0");
        assert_eq!(status.status, "ok");
        assert_eq!(status.service, "test-service");
        assert!(status.airports_loaded.is_none());
    }

    #[test]
    fn test_health_status_ready() {
        let status = HealthStatus::ready("test-service", "1.0.0", 120, 45);
        assert_eq!(status.status, "ok");
        assert_eq!(status.airports_loaded, Some(120));
        assert_eq!(status.codes_indexed, Some(45));
    }

    #[test]
    fn test_health_status_not_ready() {
        let status = HealthStatus::not_ready("test-service", "1.0.0", "no data loaded");
        assert!(status.status.starts_with("not_ready:"));
        assert!(status.status.contains("no data loaded"));
    }

    #[test]
    fn test_health_status_serialization() {
        let status = HealthStatus::alive("airport", "0.1.0");
        let json = serde_json::to_string(&status).unwrap();
        assert!(json.contains("\"status\":\"ok\""));
        assert!(!json.contains("airports_loaded")); // skip_serializing_if
    }
}
