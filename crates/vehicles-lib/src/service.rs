//! The vehicle query service contract and its deterministic stub.

use crate::error::{Error, Result};
use crate::vehicle::{SearchQuery, Vehicle, VehicleAttributes, VehicleMap};

/// Read-only queries over a set of vehicle records.
///
/// Implementations are shared across request handlers, so they must be
/// `Send + Sync`. Calls are synchronous; an implementation that needs
/// timeouts or cancellation handles them internally.
pub trait VehicleService: Send + Sync {
    /// Vehicles of the given color built in the given year.
    fn find_by_color_and_year(&self, color: &str, fabrication_year: i64) -> Result<VehicleMap>;

    /// Vehicles of the given brand built between two years (inclusive).
    fn find_by_brand_and_year_range(
        &self,
        brand: &str,
        start_year: i64,
        end_year: i64,
    ) -> Result<VehicleMap>;

    /// Mean maximum speed across the brand's vehicles.
    fn average_max_speed_by_brand(&self, brand: &str) -> Result<f64>;

    /// Mean passenger capacity across the brand's vehicles.
    fn average_capacity_by_brand(&self, brand: &str) -> Result<u32>;

    /// Vehicles whose weight falls within the query bounds.
    fn search_by_weight_range(&self, query: SearchQuery) -> Result<VehicleMap>;

    /// Number of records backing this service, when known.
    fn vehicle_count(&self) -> Option<usize> {
        None
    }
}

/// Brand that makes the stub fail with an unclassified error.
pub const STUB_ERROR_BRAND: &str = "err";

/// Brand that makes the stub report that no vehicles exist.
pub const STUB_NOT_FOUND_BRAND: &str = "not found";

/// Color that makes the stub fail with an unclassified error.
pub const STUB_ERROR_COLOR: &str = "blue";

/// Deterministic in-memory service used to exercise handlers in isolation.
///
/// Outcomes are driven entirely by sentinel inputs:
///
/// | Operation | Sentinel | Outcome |
/// |---|---|---|
/// | color/year | color `"blue"` | generic error |
/// | brand/year range | brand `"err"` | generic error |
/// | averages | brand `"err"` | generic error |
/// | averages | brand `"not found"` | [`Error::NoVehicles`] |
/// | weight range | `weight_min == 0.0` | generic error |
///
/// Everything else succeeds. The color/year lookup echoes its inputs back as
/// a single vehicle keyed `0`; other lookups return empty or zero results.
#[derive(Debug, Clone, Copy, Default)]
pub struct StubVehicleService;

impl StubVehicleService {
    pub fn new() -> Self {
        Self
    }

    fn check_brand(brand: &str) -> Result<()> {
        match brand {
            STUB_ERROR_BRAND => Err(Error::unspecified("error")),
            STUB_NOT_FOUND_BRAND => Err(Error::NoVehicles),
            _ => Ok(()),
        }
    }
}

impl VehicleService for StubVehicleService {
    fn find_by_color_and_year(&self, color: &str, fabrication_year: i64) -> Result<VehicleMap> {
        if color == STUB_ERROR_COLOR {
            return Err(Error::unspecified("error"));
        }

        let mut vehicles = VehicleMap::new();
        vehicles.insert(
            0,
            Vehicle {
                id: 0,
                attributes: VehicleAttributes {
                    color: color.to_string(),
                    fabrication_year,
                    ..Default::default()
                },
            },
        );
        Ok(vehicles)
    }

    fn find_by_brand_and_year_range(
        &self,
        brand: &str,
        _start_year: i64,
        _end_year: i64,
    ) -> Result<VehicleMap> {
        if brand == STUB_ERROR_BRAND {
            return Err(Error::unspecified("error"));
        }
        Ok(VehicleMap::new())
    }

    fn average_max_speed_by_brand(&self, brand: &str) -> Result<f64> {
        Self::check_brand(brand)?;
        Ok(0.0)
    }

    fn average_capacity_by_brand(&self, brand: &str) -> Result<u32> {
        Self::check_brand(brand)?;
        Ok(0)
    }

    fn search_by_weight_range(&self, query: SearchQuery) -> Result<VehicleMap> {
        if query.weight_min == 0.0 {
            return Err(Error::unspecified("error"));
        }
        Ok(VehicleMap::new())
    }
}
