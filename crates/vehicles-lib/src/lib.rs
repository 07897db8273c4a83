//! Vehicle library entry points.
//!
//! This crate defines the vehicle record types, the [`VehicleService`] query
//! contract, a deterministic [`StubVehicleService`] for contract testing, and
//! the JSON-backed [`VehicleCatalog`]. Higher-level consumers (the HTTP
//! service) should only depend on the items exported here.

#![deny(warnings)]

pub mod catalog;
pub mod error;
pub mod service;
pub mod vehicle;

pub use catalog::VehicleCatalog;
pub use error::{Error, ErrorKind, Result};
pub use service::{
    StubVehicleService, VehicleService, STUB_ERROR_BRAND, STUB_ERROR_COLOR, STUB_NOT_FOUND_BRAND,
};
pub use vehicle::{Dimensions, SearchQuery, Vehicle, VehicleAttributes, VehicleId, VehicleMap};
