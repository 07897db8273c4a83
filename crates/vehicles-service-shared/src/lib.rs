//! Shared HTTP infrastructure for the vehicle query service.
//!
//! - [`AppState`]: Shared handle to the configured [`vehicles_lib::VehicleService`]
//! - [`health`]: Health check handlers for Kubernetes liveness/readiness probes
//! - [`ProblemDetails`]: RFC 9457 Problem Details for consistent error responses
//! - [`ServiceResponse`]: Wrapper for successful responses with content type
//! - [`metrics`]: Prometheus metrics infrastructure
//! - [`logging`]: Structured JSON logging setup
//! - [`middleware`]: Request tracking and metrics middleware
//! - Request parameter types with validation for each endpoint
//!
//! # Architecture
//!
//! Handlers stay thin; all query logic lives behind the service trait in
//! `vehicles-lib`:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  axum Handler                                               │
//! │  - Extract raw path/query parameters                        │
//! │  - Validate parameters             (400 on failure)         │
//! │  - Call VehicleService             (404 / 500 on failure)   │
//! │  - Format response                 (200)                    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Testing Support
//!
//! The [`test_utils`] module provides fixture and stub state for handler
//! testing. Enable the `test-utils` feature to access it from dependent crates.

#![deny(warnings)]

pub mod config;
mod health;
pub mod logging;
pub mod metrics;
pub mod middleware;
mod problem;
mod request;
mod response;
mod state;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use config::{ServiceBackend, ServiceConfig};
pub use health::{health_live, health_ready, HealthStatus};
pub use logging::{init_logging, LogFormat, LoggingConfig};
pub use metrics::{
    init_metrics, metrics_handler, record_vehicle_query, record_vehicle_query_failed,
    record_vehicles_returned, resolve_metrics_path, MetricsConfig, MetricsError,
    DEFAULT_METRICS_PATH,
};
pub use middleware::{
    extract_or_generate_request_id, route_label, MetricsLayer, RequestId, REQUEST_ID_HEADER,
    UNMATCHED_ROUTE,
};
pub use problem::{
    from_lib_error, from_validation_error, ProblemDetails, PROBLEM_INTERNAL_ERROR,
    PROBLEM_INVALID_REQUEST, PROBLEM_NO_VEHICLES,
};
pub use request::{
    parse_brand, parse_brand_and_year_range, parse_color_and_year, parse_weight_range,
    BrandParams, BrandYearRangeParams, ColorYearParams, Validate, ValidationError,
    WeightRangeParams,
};
pub use response::{
    AverageCapacityResponse, AverageSpeedResponse, ServiceResponse, VehiclesResponse,
};
pub use state::{AppState, AppStateError, DEFAULT_SERVICE_NAME};
