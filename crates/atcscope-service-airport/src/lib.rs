//! Router and handler for the airport controller lookup service.
//!
//! Kept in a library target so integration tests can mount the exact app
//! the binary serves.

#![deny(warnings)]

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use serde::Serialize;
use tower_http::trace::TraceLayer;
use tracing::info;

use atcscope_lib::Position;
use atcscope_service_shared::{
    extract_or_generate_request_id, health_live, health_ready, AppState, ProblemDetails,
};

/// Lookup response returned to the caller.
#[derive(Debug, Serialize)]
pub struct AirportResponse {
    /// Uppercased ICAO code that was queried.
    pub airport: String,
    /// Controllers relevant to the airport, in first-seen order.
    pub controllers: Vec<Position>,
}

/// HTTP response - either success or RFC 9457 error.
#[derive(Debug)]
enum Response {
    Success(AirportResponse),
    Problem(ProblemDetails),
}

impl IntoResponse for Response {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::Success(body) => (StatusCode::OK, Json(body)).into_response(),
            Response::Problem(problem) => problem.into_response(),
        }
    }
}

/// Build the service router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/airport/{icao}", get(airport_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Handle GET /airport/{icao} requests.
async fn airport_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(icao): Path<String>,
) -> Response {
    let request_id = extract_or_generate_request_id(&headers);

    if icao.trim().is_empty() {
        return Response::Problem(ProblemDetails::bad_request(
            "The airport code cannot be blank",
            request_id.as_str(),
        ));
    }

    let airport = icao.to_ascii_uppercase();
    let controllers = state.index().resolve(&icao);

    info!(
        request_id = %request_id,
        airport = %airport,
        controllers = controllers.len(),
        "handled airport lookup"
    );

    if controllers.is_empty() {
        return Response::Problem(ProblemDetails::airport_not_found(
            &airport,
            request_id.as_str(),
        ));
    }

    Response::Success(AirportResponse {
        airport,
        controllers,
    })
}
