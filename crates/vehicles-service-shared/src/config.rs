//! Service configuration read from the environment.
//!
//! # Environment Variables
//!
//! - `VEHICLES_DATA_PATH`: Path to the JSON vehicle dataset (default: `/data/vehicles.json`)
//! - `VEHICLES_BACKEND`: `catalog` (default) or `stub`
//! - `SERVICE_PORT`: HTTP port (default: 8080)

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Default location of the vehicle dataset.
pub const DEFAULT_DATA_PATH: &str = "/data/vehicles.json";

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 8080;

/// Which [`vehicles_lib::VehicleService`] implementation to serve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServiceBackend {
    /// JSON-backed in-memory catalog.
    #[default]
    Catalog,
    /// Deterministic stub driven by sentinel inputs.
    Stub,
}

impl ServiceBackend {
    /// Parse a backend name. Unknown values fall back to `Catalog`.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "stub" => ServiceBackend::Stub,
            _ => ServiceBackend::Catalog,
        }
    }
}

/// Runtime configuration for the HTTP service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub backend: ServiceBackend,
    pub data_path: PathBuf,
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            backend: ServiceBackend::Catalog,
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            port: DEFAULT_PORT,
        }
    }
}

impl ServiceConfig {
    /// Create configuration from environment variables.
    pub fn from_env() -> Self {
        let backend = std::env::var("VEHICLES_BACKEND")
            .map(|v| ServiceBackend::parse(&v))
            .unwrap_or_default();

        let data_path = std::env::var("VEHICLES_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_PATH));

        let port = std::env::var("SERVICE_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            backend,
            data_path,
            port,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backend_parse() {
        assert_eq!(ServiceBackend::parse("stub"), ServiceBackend::Stub);
        assert_eq!(ServiceBackend::parse("STUB"), ServiceBackend::Stub);
        assert_eq!(ServiceBackend::parse("catalog"), ServiceBackend::Catalog);
        assert_eq!(ServiceBackend::parse("anything"), ServiceBackend::Catalog);
    }

    #[test]
    fn test_service_config_default() {
        let config = ServiceConfig::default();
        assert_eq!(config.backend, ServiceBackend::Catalog);
        assert_eq!(config.data_path, PathBuf::from("/data/vehicles.json"));
        assert_eq!(config.port, 8080);
    }
}
