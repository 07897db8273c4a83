//! Prometheus metrics for the vehicle service.
//!
//! This module provides:
//! - [`MetricsConfig`]: Configuration for the metrics system
//! - [`init_metrics`]: Initialize the Prometheus metrics recorder
//! - [`metrics_handler`]: Axum handler for the `/metrics` endpoint
//! - Business metric helpers for the vehicle query endpoints
//!
//! # Example
//!
//! ```no_run
//! use vehicles_service_shared::metrics::{MetricsConfig, init_metrics, metrics_handler};
//! use axum::{Router, routing::get};
//!
//! let config = MetricsConfig::default();
//! init_metrics(&config).expect("failed to initialize metrics");
//!
//! let app: Router = Router::new()
//!     .route("/metrics", get(metrics_handler));
//! ```

use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default path of the Prometheus endpoint.
pub const DEFAULT_METRICS_PATH: &str = "/metrics";

/// Path prefixes owned by the API and the health probes.
const RESERVED_PREFIXES: &[&str] = &["/api/", "/health/"];

/// Global Prometheus handle for rendering metrics.
static PROMETHEUS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Configuration for the metrics system.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsConfig {
    /// Whether metrics collection is enabled.
    pub enabled: bool,
    /// Path for the metrics endpoint (e.g., "/metrics").
    pub path: String,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: DEFAULT_METRICS_PATH.to_string(),
        }
    }
}

impl MetricsConfig {
    /// Create configuration from environment variables.
    ///
    /// - `METRICS_ENABLED`: "true" or "false" (default: true)
    /// - `METRICS_PATH`: Path for metrics endpoint (default: "/metrics").
    ///   Invalid values fall back to the default, see [`resolve_metrics_path`].
    pub fn from_env() -> Self {
        let enabled = std::env::var("METRICS_ENABLED")
            .map(|v| v.to_lowercase() != "false")
            .unwrap_or(true);

        let path = std::env::var("METRICS_PATH")
            .map(|p| resolve_metrics_path(&p).to_string())
            .unwrap_or_else(|_| DEFAULT_METRICS_PATH.to_string());

        Self { enabled, path }
    }
}

/// Return `path` if it can be routed as the metrics endpoint, otherwise
/// [`DEFAULT_METRICS_PATH`].
///
/// The path must start with `/`, be a plain static route (no `{`, `}` or
/// `*`), and stay clear of the `/api/` and `/health/` trees.
pub fn resolve_metrics_path(path: &str) -> &str {
    let valid = path.starts_with('/')
        && !path.contains(['{', '}', '*'])
        && !RESERVED_PREFIXES
            .iter()
            .any(|prefix| path.starts_with(prefix) || path == prefix.trim_end_matches('/'));

    if valid {
        path
    } else {
        tracing::warn!(
            path = path,
            fallback = DEFAULT_METRICS_PATH,
            "invalid metrics path, using default"
        );
        DEFAULT_METRICS_PATH
    }
}

/// Errors that can occur during metrics initialization.
#[derive(Debug, Clone, Error)]
pub enum MetricsError {
    /// Metrics are disabled in configuration.
    #[error("metrics are disabled")]
    Disabled,
    /// The recorder has already been installed.
    #[error("metrics recorder already initialized")]
    AlreadyInitialized,
    /// The Prometheus builder failed to install.
    #[error("failed to install metrics recorder: {0}")]
    InstallFailed(String),
}

/// Initialize the Prometheus metrics recorder.
///
/// Must be called once at startup before any metrics are recorded.
///
/// # Errors
///
/// Returns an error if metrics are disabled, the recorder is already
/// installed, or the Prometheus builder fails.
pub fn init_metrics(config: &MetricsConfig) -> Result<(), MetricsError> {
    if !config.enabled {
        return Err(MetricsError::Disabled);
    }

    let handle = PrometheusBuilder::new()
        .install_recorder()
        .map_err(|e| MetricsError::InstallFailed(e.to_string()))?;

    PROMETHEUS_HANDLE
        .set(handle)
        .map_err(|_| MetricsError::AlreadyInitialized)?;

    Ok(())
}

/// Axum handler for the `/metrics` endpoint.
///
/// Returns Prometheus exposition format text.
pub async fn metrics_handler() -> String {
    PROMETHEUS_HANDLE
        .get()
        .map(|h| h.render())
        .unwrap_or_else(|| "# Metrics not initialized\n".to_string())
}

/// Record a query received by a vehicle endpoint.
///
/// Increments `vehicles_queries_total`.
pub fn record_vehicle_query(endpoint: &str) {
    metrics::counter!(
        "vehicles_queries_total",
        "endpoint" => endpoint.to_string()
    )
    .increment(1);
}

/// Record a failed vehicle query.
///
/// Increments `vehicles_queries_failed_total`. `reason` is one of
/// `validation_error`, `not_found` or `internal_error`.
pub fn record_vehicle_query_failed(endpoint: &str, reason: &str) {
    metrics::counter!(
        "vehicles_queries_failed_total",
        "endpoint" => endpoint.to_string(),
        "reason" => reason.to_string()
    )
    .increment(1);
}

/// Record how many vehicles a lookup returned.
///
/// Records to the `vehicles_returned` histogram.
pub fn record_vehicles_returned(count: usize, endpoint: &str) {
    metrics::histogram!(
        "vehicles_returned",
        "endpoint" => endpoint.to_string()
    )
    .record(count as f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_config_default() {
        let config = MetricsConfig::default();
        assert!(config.enabled);
        assert_eq!(config.path, "/metrics");
    }

    #[test]
    fn test_resolve_metrics_path_keeps_valid_paths() {
        assert_eq!(resolve_metrics_path("/metrics"), "/metrics");
        assert_eq!(resolve_metrics_path("/internal/prometheus"), "/internal/prometheus");
    }

    #[test]
    fn test_resolve_metrics_path_rejects_unroutable_paths() {
        for path in [
            "",
            "metrics",
            "/health/live",
            "/health",
            "/api/v1/vehicles/weight",
            "/{any}",
            "/*rest",
        ] {
            assert_eq!(resolve_metrics_path(path), DEFAULT_METRICS_PATH, "{path:?}");
        }
    }

    #[test]
    fn test_disabled_metrics_are_not_installed() {
        let config = MetricsConfig {
            enabled: false,
            path: "/metrics".to_string(),
        };
        assert!(matches!(init_metrics(&config), Err(MetricsError::Disabled)));
    }

    #[tokio::test]
    async fn test_metrics_handler_returns_prometheus_format() {
        // Without an installed recorder the handler returns a comment line.
        let output = metrics_handler().await;
        assert!(output.contains('#') || output.is_empty());
    }

    #[test]
    fn test_business_metrics_record_without_recorder() {
        record_vehicle_query("color_year");
        record_vehicle_query_failed("weight_range", "validation_error");
        record_vehicles_returned(3, "brand_year_range");
    }

    #[test]
    fn test_metrics_error_display() {
        assert_eq!(MetricsError::Disabled.to_string(), "metrics are disabled");
        assert_eq!(
            MetricsError::AlreadyInitialized.to_string(),
            "metrics recorder already initialized"
        );
        assert!(MetricsError::InstallFailed("test error".to_string())
            .to_string()
            .contains("test error"));
    }
}
