//! In-memory vehicle catalog loaded from a JSON dataset.
//!
//! The dataset is a JSON array of vehicle records (see [`Vehicle`]). Records
//! are indexed by id; duplicate ids are rejected at load time.

use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::service::VehicleService;
use crate::vehicle::{SearchQuery, Vehicle, VehicleId, VehicleMap};

/// Collection of vehicles backing the production query service.
#[derive(Debug, Clone, Default)]
pub struct VehicleCatalog {
    vehicles: HashMap<VehicleId, Vehicle>,
    source: Option<PathBuf>,
}

impl VehicleCatalog {
    /// Load a catalog from a JSON file.
    pub fn from_path(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::DatasetNotFound {
                path: path.to_path_buf(),
            });
        }

        let file = fs::File::open(path)?;
        let mut catalog = Self::from_reader(file)?;
        catalog.source = Some(path.to_path_buf());

        tracing::debug!(
            path = %path.display(),
            vehicles = catalog.len(),
            "vehicle catalog loaded"
        );
        Ok(catalog)
    }

    /// Load a catalog from a reader (e.g. file or in-memory buffer).
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let records: Vec<Vehicle> = serde_json::from_reader(reader)?;
        Self::from_vehicles(records)
    }

    /// Build a catalog from already-parsed records.
    pub fn from_vehicles(records: impl IntoIterator<Item = Vehicle>) -> Result<Self> {
        let mut vehicles = HashMap::new();
        for vehicle in records {
            let id = vehicle.id;
            if vehicles.insert(id, vehicle).is_some() {
                return Err(Error::DuplicateVehicleId { id });
            }
        }

        Ok(Self {
            vehicles,
            source: None,
        })
    }

    /// Number of vehicles in the catalog.
    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Look up a vehicle by id.
    pub fn get(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(&id)
    }

    /// Path the catalog was loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    fn filter<F>(&self, predicate: F) -> VehicleMap
    where
        F: Fn(&Vehicle) -> bool,
    {
        self.vehicles
            .iter()
            .filter(|(_, vehicle)| predicate(vehicle))
            .map(|(&id, vehicle)| (id, vehicle.clone()))
            .collect()
    }

    fn by_brand<'a>(&'a self, brand: &'a str) -> impl Iterator<Item = &'a Vehicle> + 'a {
        self.vehicles
            .values()
            .filter(move |v| v.attributes.brand.eq_ignore_ascii_case(brand))
    }
}

impl VehicleService for VehicleCatalog {
    fn find_by_color_and_year(&self, color: &str, fabrication_year: i64) -> Result<VehicleMap> {
        Ok(self.filter(|v| {
            v.attributes.color.eq_ignore_ascii_case(color)
                && v.attributes.fabrication_year == fabrication_year
        }))
    }

    fn find_by_brand_and_year_range(
        &self,
        brand: &str,
        start_year: i64,
        end_year: i64,
    ) -> Result<VehicleMap> {
        Ok(self.filter(|v| {
            v.attributes.brand.eq_ignore_ascii_case(brand)
                && (start_year..=end_year).contains(&v.attributes.fabrication_year)
        }))
    }

    fn average_max_speed_by_brand(&self, brand: &str) -> Result<f64> {
        let (count, total) = self
            .by_brand(brand)
            .fold((0usize, 0.0f64), |(count, total), v| {
                (count + 1, total + v.attributes.max_speed)
            });

        if count == 0 {
            return Err(Error::NoVehicles);
        }
        Ok(total / count as f64)
    }

    fn average_capacity_by_brand(&self, brand: &str) -> Result<u32> {
        let (count, total) = self
            .by_brand(brand)
            .fold((0u64, 0u64), |(count, total), v| {
                (count + 1, total + u64::from(v.attributes.capacity))
            });

        if count == 0 {
            return Err(Error::NoVehicles);
        }
        // Mean of u32 values always fits in u32.
        Ok((total / count) as u32)
    }

    fn search_by_weight_range(&self, query: SearchQuery) -> Result<VehicleMap> {
        Ok(self.filter(|v| query.contains(v.attributes.weight)))
    }

    fn vehicle_count(&self) -> Option<usize> {
        Some(self.len())
    }
}
