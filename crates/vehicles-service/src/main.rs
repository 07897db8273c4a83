//! Vehicle query HTTP service entry point.
//!
//! # Configuration
//!
//! - `VEHICLES_DATA_PATH` - Path to the JSON vehicle dataset (default: /data/vehicles.json)
//! - `VEHICLES_BACKEND` - `catalog` (default) or `stub`
//! - `SERVICE_PORT` - HTTP port (default: 8080)
//! - `RUST_LOG` - Log level (default: info)
//! - `LOG_FORMAT` - Log format: json (default) or text
//! - `METRICS_ENABLED` / `METRICS_PATH` - Prometheus endpoint settings
//! - `SERVICE_NAME` - Name reported in logs and health probes (default: vehicles-service)

use std::net::SocketAddr;

use tokio::signal;
use tracing::{error, info, warn};

use vehicles_service::create_router;
use vehicles_service_shared::{
    init_logging, init_metrics, AppState, LoggingConfig, MetricsConfig, ServiceConfig,
    DEFAULT_SERVICE_NAME,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let logging_config = LoggingConfig::from_env().with_service(DEFAULT_SERVICE_NAME);
    init_logging(&logging_config);

    let metrics_config = MetricsConfig::from_env();
    if let Err(e) = init_metrics(&metrics_config) {
        // Metrics are optional; keep serving without them.
        warn!(error = %e, "failed to initialize metrics, continuing without metrics");
    }

    let config = ServiceConfig::from_env();
    info!(
        data_path = %config.data_path.display(),
        backend = ?config.backend,
        port = config.port,
        "starting vehicles service"
    );

    let service_name = logging_config
        .service
        .as_deref()
        .unwrap_or(DEFAULT_SERVICE_NAME);
    let state = AppState::from_config(&config)
        .map_err(|e| {
            error!(error = %e, path = %config.data_path.display(), "failed to load application state");
            e
        })?
        .with_service_name(service_name);

    info!(
        vehicles = ?state.vehicles_loaded(),
        "application state loaded"
    );

    let app = create_router(state, &metrics_config.path);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!(addr = %addr, "listening on");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server shutdown complete");
    Ok(())
}

/// Resolve when Ctrl+C or SIGTERM is received.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => info!("received Ctrl+C, shutting down"),
        _ = terminate => info!("received SIGTERM, shutting down"),
    }
}
