//! Vehicle records and search value objects.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Identifier of a vehicle within a dataset or result mapping.
pub type VehicleId = u64;

/// Query results keyed by vehicle id. No ordering is implied.
pub type VehicleMap = HashMap<VehicleId, Vehicle>;

/// A single vehicle record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: VehicleId,
    #[serde(flatten)]
    pub attributes: VehicleAttributes,
}

/// Descriptive attributes of a vehicle.
///
/// Fields missing from a dataset entry fall back to their defaults so that
/// partial records (and the stub service's minimal records) stay valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VehicleAttributes {
    pub brand: String,
    pub model: String,
    pub registration: String,
    pub color: String,
    pub fabrication_year: i64,
    /// Passenger capacity.
    pub capacity: u32,
    /// Maximum speed in km/h.
    pub max_speed: f64,
    pub fuel_type: String,
    pub transmission: String,
    /// Weight in kilograms.
    pub weight: f64,
    pub dimensions: Dimensions,
}

/// Outer dimensions in metres.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Dimensions {
    pub height: f64,
    pub length: f64,
    pub width: f64,
}

/// Weight bounds for a range search.
///
/// `weight_min <= weight_max` is expected but not enforced here; an inverted
/// range simply matches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchQuery {
    pub weight_min: f64,
    pub weight_max: f64,
}

impl SearchQuery {
    pub fn new(weight_min: f64, weight_max: f64) -> Self {
        Self {
            weight_min,
            weight_max,
        }
    }

    /// Whether `weight` falls within the inclusive bounds.
    pub fn contains(&self, weight: f64) -> bool {
        weight >= self.weight_min && weight <= self.weight_max
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_query_bounds_are_inclusive() {
        let query = SearchQuery::new(200.0, 250.0);
        assert!(query.contains(200.0));
        assert!(query.contains(225.5));
        assert!(query.contains(250.0));
        assert!(!query.contains(199.9));
        assert!(!query.contains(250.1));
    }

    #[test]
    fn inverted_search_query_matches_nothing() {
        let query = SearchQuery::new(300.0, 100.0);
        assert!(!query.contains(200.0));
    }

    #[test]
    fn vehicle_serializes_attributes_flat() {
        let vehicle = Vehicle {
            id: 7,
            attributes: VehicleAttributes {
                color: "red".to_string(),
                fabrication_year: 2010,
                ..Default::default()
            },
        };
        let json = serde_json::to_value(&vehicle).unwrap();

        assert_eq!(json["id"], 7);
        assert_eq!(json["color"], "red");
        assert_eq!(json["fabrication_year"], 2010);
        assert!(json.get("attributes").is_none());
    }

    #[test]
    fn fabrication_year_beyond_32_bits_round_trips() {
        let vehicle: Vehicle =
            serde_json::from_str(r#"{"id":2,"fabrication_year":3000000000}"#).unwrap();
        assert_eq!(vehicle.attributes.fabrication_year, 3_000_000_000);
    }

    #[test]
    fn partial_record_uses_defaults() {
        let vehicle: Vehicle =
            serde_json::from_str(r#"{"id":1,"brand":"Fiat","weight":950.5}"#).unwrap();
        assert_eq!(vehicle.attributes.brand, "Fiat");
        assert_eq!(vehicle.attributes.weight, 950.5);
        assert_eq!(vehicle.attributes.capacity, 0);
        assert_eq!(vehicle.attributes.dimensions, Dimensions::default());
    }
}
