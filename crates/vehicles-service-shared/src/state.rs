//! Application state for the HTTP service.
//!
//! This module provides the shared state structure that axum handlers use to
//! reach the vehicle query service.

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;
use vehicles_lib::{Error as LibError, StubVehicleService, VehicleCatalog, VehicleService};

use crate::config::{ServiceBackend, ServiceConfig};

/// Default name reported by the health probes.
pub const DEFAULT_SERVICE_NAME: &str = "vehicles-service";

/// Error during application state initialization.
#[derive(Debug, Error)]
pub enum AppStateError {
    /// Failed to load the vehicle dataset, including a missing file.
    #[error("failed to load vehicle catalog: {0}")]
    CatalogLoad(#[from] LibError),
}

/// Shared application state for all axum handlers.
///
/// This struct is cheaply cloneable (using `Arc` internally) and should be
/// shared via axum's `State` extractor. The service behind it is read-only.
///
/// # Example
///
/// ```ignore
/// use axum::{Router, routing::get, extract::State};
/// use vehicles_service_shared::AppState;
///
/// async fn handler(State(state): State<AppState>) {
///     let service = state.service();
///     // ... query the service
/// }
///
/// let state = AppState::load("path/to/vehicles.json").unwrap();
/// let app = Router::new()
///     .route("/api/v1/vehicles/weight", get(handler))
///     .with_state(state);
/// ```
#[derive(Clone)]
pub struct AppState {
    service: Arc<dyn VehicleService>,
    service_name: Arc<str>,
}

impl AppState {
    /// Load application state from a JSON vehicle dataset.
    pub fn load(data_path: impl AsRef<Path>) -> Result<Self, AppStateError> {
        let data_path = data_path.as_ref();

        tracing::info!(path = %data_path.display(), "loading vehicle catalog");
        let catalog = VehicleCatalog::from_path(data_path)?;
        tracing::info!(
            vehicle_count = catalog.len(),
            "vehicle catalog loaded successfully"
        );

        Ok(Self::from_service(catalog))
    }

    /// Build state for the configured backend.
    pub fn from_config(config: &ServiceConfig) -> Result<Self, AppStateError> {
        match config.backend {
            ServiceBackend::Catalog => Self::load(&config.data_path),
            ServiceBackend::Stub => {
                tracing::warn!("using deterministic stub vehicle service");
                Ok(Self::stub())
            }
        }
    }

    /// Wrap an existing service implementation.
    pub fn from_service(service: impl VehicleService + 'static) -> Self {
        Self {
            service: Arc::new(service),
            service_name: Arc::from(DEFAULT_SERVICE_NAME),
        }
    }

    /// Override the name reported by the health probes.
    pub fn with_service_name(mut self, name: impl AsRef<str>) -> Self {
        self.service_name = Arc::from(name.as_ref());
        self
    }

    /// State backed by [`StubVehicleService`].
    pub fn stub() -> Self {
        Self::from_service(StubVehicleService::new())
    }

    /// Access the vehicle query service.
    pub fn service(&self) -> &dyn VehicleService {
        self.service.as_ref()
    }

    /// Name of the running service.
    pub fn service_name(&self) -> &str {
        &self.service_name
    }

    /// Number of vehicles loaded, when the backend knows it.
    pub fn vehicles_loaded(&self) -> Option<usize> {
        self.service.vehicle_count()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_name", &self.service_name)
            .field("vehicles_loaded", &self.vehicles_loaded())
            .finish()
    }
}
