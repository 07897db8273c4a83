//! Vehicle query HTTP service.
//!
//! # Endpoints
//!
//! - `GET /api/v1/vehicles/color/{color}/year/{year}`
//! - `GET /api/v1/vehicles/brand/{brand}/between/{start_year}/{end_year}`
//! - `GET /api/v1/vehicles/average_speed/brand/{brand}`
//! - `GET /api/v1/vehicles/average_capacity/brand/{brand}`
//! - `GET /api/v1/vehicles/weight?weight_min=<f64>&weight_max=<f64>`
//! - `GET /metrics` - Prometheus metrics endpoint
//! - `GET /health/live` - Kubernetes liveness probe
//! - `GET /health/ready` - Kubernetes readiness probe

#![deny(warnings)]

pub mod handlers;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

use vehicles_service_shared::{
    health_live, health_ready, metrics_handler, resolve_metrics_path, AppState, MetricsLayer,
};

/// Build the router with all vehicle, health and metrics routes.
///
/// `metrics_path` is where the Prometheus exposition is served. A path that
/// cannot be routed falls back to `/metrics`.
pub fn create_router(state: AppState, metrics_path: &str) -> Router {
    let metrics_path = resolve_metrics_path(metrics_path);

    Router::new()
        .route(
            "/api/v1/vehicles/color/{color}/year/{year}",
            get(handlers::find_by_color_and_year),
        )
        .route(
            "/api/v1/vehicles/brand/{brand}/between/{start_year}/{end_year}",
            get(handlers::find_by_brand_and_year_range),
        )
        .route(
            "/api/v1/vehicles/average_speed/brand/{brand}",
            get(handlers::average_max_speed_by_brand),
        )
        .route(
            "/api/v1/vehicles/average_capacity/brand/{brand}",
            get(handlers::average_capacity_by_brand),
        )
        .route(
            "/api/v1/vehicles/weight",
            get(handlers::search_by_weight_range),
        )
        .route(metrics_path, get(metrics_handler))
        .route("/health/live", get(health_live))
        .route("/health/ready", get(health_ready))
        .layer(TraceLayer::new_for_http())
        .layer(MetricsLayer)
        .with_state(state)
}
