//! Health check handlers for Kubernetes probes.
//!
//! Provides `/health/live` and `/health/ready` endpoints that return JSON
//! status responses for Kubernetes liveness and readiness probes.

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

    /// Number of vehicles loaded, when the backend reports it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vehicles_loaded: Option<usize>,
}

impl HealthStatus {
    /// Create a healthy liveness status.
    pub fn alive(service: &str, version: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            vehicles_loaded: None,
        }
    }

    /// Create a ready status with dataset information.
    pub fn ready(service: &str, version: &str, vehicles: Option<usize>) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
            version: version.to_string(),
            vehicles_loaded: vehicles,
        }
    }

    /// Create a not-ready status.
    pub fn not_ready(service: &str, version: &str, reason: &str) -> Self {
        Self {
            status: format!("not_ready: {}", reason),
            service: service.to_string(),
            version: version.to_string(),
            vehicles_loaded: None,
        }
    }
}

/// Liveness probe handler.
///
/// Returns 200 OK if the service is running.
///
/// ```text
/// GET /health/live
/// {"status":"ok","service":"vehicles-service","version":"0.1.0"}
/// ```
pub async fn health_live(State(state): State<AppState>) -> impl IntoResponse {
    let status = HealthStatus::alive(state.service_name(), env!("CARGO_PKG_VERSION"));
    (StatusCode::OK, Json(status))
}

/// Readiness probe handler.
///
/// Returns 503 when the backing catalog is empty, 200 otherwise.
///
/// ```text
/// GET /health/ready
/// {"status":"ok","service":"vehicles-service","version":"0.1.0","vehicles_loaded":100}
/// ```
pub async fn health_ready(State(state): State<AppState>) -> Response {
    let service = state.service_name();
    let version = env!("CARGO_PKG_VERSION");

    let loaded = state.vehicles_loaded();
    if loaded == Some(0) {
        let status = HealthStatus::not_ready(service, version, "no vehicles loaded");
        return (StatusCode::SERVICE_UNAVAILABLE, Json(status)).into_response();
    }

    let status = HealthStatus::ready(service, version, loaded);
    (StatusCode::OK, Json(status)).into_response()
}
