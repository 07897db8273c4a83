use std::io::Write;
use std::path::PathBuf;

use tempfile::NamedTempFile;
use vehicles_lib::{Error, ErrorKind, SearchQuery, VehicleCatalog, VehicleService};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../docs/fixtures/vehicles.json")
}

fn fixture_catalog() -> VehicleCatalog {
    VehicleCatalog::from_path(&fixture_path()).expect("fixture should load")
}

fn sorted_ids(map: &vehicles_lib::VehicleMap) -> Vec<u64> {
    let mut ids: Vec<u64> = map.keys().copied().collect();
    ids.sort();
    ids
}

#[test]
fn loads_fixture_catalog() {
    let catalog = fixture_catalog();

    assert_eq!(catalog.len(), 6);
    assert_eq!(catalog.vehicle_count(), Some(6));
    assert_eq!(catalog.source(), Some(fixture_path().as_path()));

    let uno = catalog.get(1).expect("vehicle 1 present");
    assert_eq!(uno.attributes.model, "Uno");
    assert_eq!(uno.attributes.dimensions.length, 3.69);
}

#[test]
fn finds_by_color_and_year_case_insensitively() {
    let catalog = fixture_catalog();

    let red_2010 = catalog.find_by_color_and_year("RED", 2010).unwrap();
    assert_eq!(sorted_ids(&red_2010), vec![1, 5]);

    let red_2015 = catalog.find_by_color_and_year("red", 2015).unwrap();
    assert_eq!(sorted_ids(&red_2015), vec![3]);
}

#[test]
fn unmatched_color_returns_empty_map() {
    let catalog = fixture_catalog();
    let none = catalog.find_by_color_and_year("green", 2010).unwrap();
    assert!(none.is_empty());
}

#[test]
fn finds_by_brand_and_inclusive_year_range() {
    let catalog = fixture_catalog();

    let fiat = catalog
        .find_by_brand_and_year_range("fiat", 2010, 2012)
        .unwrap();
    assert_eq!(sorted_ids(&fiat), vec![1, 2]);

    let inverted = catalog
        .find_by_brand_and_year_range("fiat", 2015, 2010)
        .unwrap();
    assert!(inverted.is_empty());
}

#[test]
fn averages_by_brand() {
    let catalog = fixture_catalog();

    let speed = catalog.average_max_speed_by_brand("Fiat").unwrap();
    assert!((speed - 440.0 / 3.0).abs() < 1e-9);

    assert_eq!(catalog.average_capacity_by_brand("Fiat").unwrap(), 4);
    assert_eq!(catalog.average_capacity_by_brand("volvo").unwrap(), 6);
    assert_eq!(catalog.average_max_speed_by_brand("Volvo").unwrap(), 220.0);
}

#[test]
fn averages_for_unknown_brand_are_not_found() {
    let catalog = fixture_catalog();

    let err = catalog.average_max_speed_by_brand("Tesla").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);

    let err = catalog.average_capacity_by_brand("Tesla").unwrap_err();
    assert!(matches!(err, Error::NoVehicles));
}

#[test]
fn searches_by_inclusive_weight_range() {
    let catalog = fixture_catalog();

    let light = catalog
        .search_by_weight_range(SearchQuery::new(200.0, 250.0))
        .unwrap();
    assert_eq!(sorted_ids(&light), vec![6]);

    let mid = catalog
        .search_by_weight_range(SearchQuery::new(950.0, 1430.0))
        .unwrap();
    assert_eq!(sorted_ids(&mid), vec![1, 3, 5]);
}

#[test]
fn rejects_duplicate_ids() {
    let json = r#"[{"id":1,"brand":"A"},{"id":1,"brand":"B"}]"#;

    let err = VehicleCatalog::from_reader(json.as_bytes()).expect_err("should reject duplicates");
    match err {
        Error::DuplicateVehicleId { id } => assert_eq!(id, 1),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn rejects_malformed_json() {
    let err = VehicleCatalog::from_reader("{not json".as_bytes()).unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert_eq!(err.kind(), ErrorKind::Generic);
}

#[test]
fn missing_dataset_is_reported() {
    let err = VehicleCatalog::from_path(&PathBuf::from("/nonexistent/vehicles.json")).unwrap_err();
    match err {
        Error::DatasetNotFound { path } => assert!(path.ends_with("vehicles.json")),
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn loads_from_temporary_file() {
    let mut file = NamedTempFile::new().expect("tempfile");
    write!(
        file,
        r#"[{{"id":42,"brand":"Seat","color":"grey","fabrication_year":2001,"weight":1100}}]"#
    )
    .expect("write dataset");

    let catalog = VehicleCatalog::from_path(file.path()).expect("load temp dataset");
    assert_eq!(catalog.len(), 1);
    assert_eq!(catalog.get(42).unwrap().attributes.weight, 1100.0);
}
