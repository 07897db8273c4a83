//! Response wrapper and payloads for successful HTTP responses.

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use vehicles_lib::VehicleMap;

/// Wrapper for successful responses with content type metadata.
///
/// This provides symmetry with `ProblemDetails` by including content type
/// information in the response body.
///
/// # Example
///
/// ```
/// use vehicles_service_shared::{AverageSpeedResponse, ServiceResponse};
///
/// let response = ServiceResponse::new(AverageSpeedResponse {
///     brand: "Fiat".to_string(),
///     average_max_speed: 146.7,
/// });
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceResponse<T> {
    /// The actual response payload.
    #[serde(flatten)]
    pub data: T,

    /// Content type for this response.
    pub content_type: String,
}

impl<T> ServiceResponse<T> {
    /// Create a new successful response with the default content type.
    pub fn new(data: T) -> Self {
        Self {
            data,
            content_type: "application/json".to_string(),
        }
    }
}

impl<T> From<T> for ServiceResponse<T> {
    fn from(data: T) -> Self {
        Self::new(data)
    }
}

/// Implement IntoResponse for axum to return ServiceResponse as HTTP responses.
impl<T: Serialize> IntoResponse for ServiceResponse<T> {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Vehicles matched by a lookup, keyed by id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VehiclesResponse {
    /// Number of vehicles returned.
    pub count: usize,
    pub vehicles: VehicleMap,
}

impl From<VehicleMap> for VehiclesResponse {
    fn from(vehicles: VehicleMap) -> Self {
        Self {
            count: vehicles.len(),
            vehicles,
        }
    }
}

/// Mean maximum speed for a brand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AverageSpeedResponse {
    pub brand: String,
    pub average_max_speed: f64,
}

/// Mean passenger capacity for a brand.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AverageCapacityResponse {
    pub brand: String,
    pub average_capacity: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use vehicles_lib::{Vehicle, VehicleAttributes};

    #[test]
    fn test_response_flatten_serialization() {
        let response = ServiceResponse::new(AverageCapacityResponse {
            brand: "Fiat".to_string(),
            average_capacity: 4,
        });
        let json = serde_json::to_string(&response).unwrap();

        // Fields should be at the top level, not nested under "data"
        assert!(json.contains("\"average_capacity\":4"));
        assert!(json.contains("\"content_type\":\"application/json\""));
        assert!(!json.contains("\"data\":{"));
    }

    #[test]
    fn test_vehicles_response_counts_entries() {
        let mut vehicles = VehicleMap::new();
        vehicles.insert(
            0,
            Vehicle {
                id: 0,
                attributes: VehicleAttributes {
                    color: "red".to_string(),
                    fabrication_year: 2010,
                    ..Default::default()
                },
            },
        );

        let response = VehiclesResponse::from(vehicles);
        assert_eq!(response.count, 1);

        let json = serde_json::to_value(ServiceResponse::new(response)).unwrap();
        assert_eq!(json["count"], 1);
        assert_eq!(json["vehicles"]["0"]["color"], "red");
        assert_eq!(json["vehicles"]["0"]["fabrication_year"], 2010);
    }

    #[test]
    fn test_empty_vehicles_response() {
        let response = VehiclesResponse::from(VehicleMap::new());
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["count"], 0);
        assert!(json["vehicles"].as_object().unwrap().is_empty());
    }

    #[test]
    fn test_response_from_trait() {
        let response: ServiceResponse<AverageSpeedResponse> = AverageSpeedResponse {
            brand: "Volvo".to_string(),
            average_max_speed: 220.0,
        }
        .into();
        assert_eq!(response.data.average_max_speed, 220.0);
        assert_eq!(response.content_type, "application/json");
    }
}
