//! Test utilities for handler testing.
//!
//! Provides state backed by the fixture dataset or by the sentinel-driven
//! stub service.

use std::path::PathBuf;
use std::sync::OnceLock;

use crate::state::AppState;

/// Path to the test fixture dataset.
pub const TEST_FIXTURE_PATH: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../../docs/fixtures/vehicles.json"
);

static TEST_STATE: OnceLock<AppState> = OnceLock::new();

/// Get a shared AppState loaded from the fixture dataset.
///
/// # Panics
///
/// Panics if the fixture dataset cannot be loaded. This indicates a test
/// configuration issue.
pub fn test_state() -> AppState {
    TEST_STATE
        .get_or_init(|| {
            let path = PathBuf::from(TEST_FIXTURE_PATH);
            AppState::load(&path)
                .unwrap_or_else(|e| panic!("failed to load test fixture from {:?}: {}", path, e))
        })
        .clone()
}

/// AppState backed by the deterministic stub service.
pub fn stub_state() -> AppState {
    AppState::stub()
}

/// Known values in the fixture dataset.
pub mod fixture_vehicles {
    /// Brand with three vehicles (2010, 2012, 2015).
    pub const FIAT: &str = "Fiat";

    /// Brand with two vehicles (2010, 2019).
    pub const VOLVO: &str = "Volvo";

    /// Number of records in the fixture.
    pub const COUNT: usize = 6;
}
