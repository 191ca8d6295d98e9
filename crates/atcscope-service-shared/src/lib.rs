//! Shared infrastructure for atcscope HTTP services.
//!
//! This crate provides the HTTP glue used by the service binaries:
//!
//! - [`AppState`]: Pre-loaded controller index for zero-latency lookups
//! - [`health`]: Health check handlers for liveness/readiness probes
//! - [`ProblemDetails`]: RFC 9457 Problem Details for consistent error responses
//! - [`logging`]: Structured JSON logging setup
//! - [`middleware`]: Request ID extraction/generation
//!
//! All business logic lives in `atcscope-lib`; handlers here only parse,
//! validate, call into the library, and format responses.
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides an in-memory fixture dataset and a
//! cached [`AppState`] for handler testing. Enable the `test-utils` feature
//! to access it from dependent crates.

#![deny(warnings)]

mod health;
pub mod logging;
pub mod middleware;
mod problem;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use middleware::{extract_or_generate_request_id, RequestId};
pub use problem::{
    ProblemDetails, PROBLEM_AIRPORT_NOT_FOUND, PROBLEM_INTERNAL_ERROR, PROBLEM_INVALID_REQUEST,
};
pub use state::{AppState, AppStateError};
