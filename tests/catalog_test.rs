//! Integration tests for catalog and configuration loading from files

use discover_andhra::{
    filter_places, Catalog, CatalogError, Config, FilterState, PlaceType, Region, ALL_DISTRICTS,
    ALL_TYPES,
};
use std::io::Write;
use tempfile::Builder;

const CSV_HEADER: &str = "id,name,type,state,district,description,tags,image,bestTimeToVisit,timings,entryFee,locationDetails,nearestRailwayStation,nearestAirport,contactInfo,lat,lng";

fn write_temp(suffix: &str, content: &str) -> tempfile::NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_csv_catalog_and_filter() {
    let content = format!(
        "{}\n{}\n{}\n",
        CSV_HEADER,
        "a,Simhachalam Temple,Temple,AP,Visakhapatnam,Hill temple,Narasimha|Hilltop,,Oct-Mar,7-9,Free,Simhachalam,Vizag,Vizag,https://example.org,17.7666,83.25",
        "b,St. Joseph's Cathedral,Church,TS,Hyderabad,Historic church,Cathedral,,Dec,6-8,Free,Abids,Hyderabad,Hyderabad,040-1234567,17.393,78.474",
    );
    let file = write_temp(".csv", &content);

    let catalog = Catalog::load(file.path()).unwrap();
    assert_eq!(catalog.len(), 2);
    assert_eq!(catalog.get("b").unwrap().state, Region::Telangana);
    assert_eq!(catalog.get("a").unwrap().place_type, PlaceType::Temple);

    let temples = filter_places(catalog.places(), &FilterState::new(ALL_DISTRICTS, "Temple", ""));
    assert_eq!(temples.len(), 1);
    assert_eq!(temples[0].id, "a");

    let churches = filter_places(catalog.places(), &FilterState::new("Hyderabad", ALL_TYPES, "church"));
    assert_eq!(churches.len(), 1);
    assert_eq!(churches[0].id, "b");

    let none = filter_places(catalog.places(), &FilterState::new(ALL_DISTRICTS, ALL_TYPES, "xyz-no-match"));
    assert!(none.is_empty());
}

#[test]
fn test_load_json_catalog_list() {
    let content = r#"[
  {
    "id": "rk-beach",
    "name": "Ramakrishna Beach",
    "type": "Beach",
    "state": "AP",
    "district": "Visakhapatnam",
    "description": "City beach",
    "tags": ["Sea"],
    "bestTimeToVisit": "October to March",
    "timings": "Open 24 hours",
    "entryFee": "Free",
    "locationDetails": "Beach Road",
    "nearestRailwayStation": "Visakhapatnam",
    "nearestAirport": "Visakhapatnam",
    "coordinates": { "lat": 17.7142, "lng": 83.3237 }
  }
]"#;
    let file = write_temp(".json", content);

    let catalog = Catalog::load(file.path()).unwrap();
    let place = catalog.get("rk-beach").unwrap();
    assert_eq!(place.contact_info, None);
    assert_eq!(place.display_image(), "assets/sample-tourist-place.jpg");
}

#[test]
fn test_unknown_type_is_rejected() {
    let content = format!(
        "{}\n{}\n",
        CSV_HEADER,
        "v,Volcano,Volcano,AP,Guntur,Hot,,,-,-,-,-,-,-,,16.3,80.4",
    );
    let file = write_temp(".csv", &content);
    assert!(matches!(Catalog::load(file.path()), Err(CatalogError::Csv(_))));
}

#[test]
fn test_unsupported_extension() {
    let file = write_temp(".yaml", "places: []");
    assert!(matches!(
        Catalog::load(file.path()),
        Err(CatalogError::UnsupportedFormat(_))
    ));
}

#[test]
fn test_missing_file() {
    let result = Catalog::load(std::path::Path::new("/nonexistent/places.json"));
    assert!(matches!(result, Err(CatalogError::Io { .. })));
}

#[test]
fn test_load_config_from_file() {
    let file = write_temp(
        ".toml",
        r#"
[catalog]
path = "data/custom.csv"

[server]
bind_address = "127.0.0.1"
port = 8088

[logging]
level = "debug"
file = "discover.log"

[navigation]
enabled = false
"#,
    );

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.server_addr(), "127.0.0.1:8088");
    assert_eq!(config.logging.level, "debug");
    assert!(!config.navigation.enabled);
    assert_eq!(
        config.catalog.path.as_deref(),
        Some(std::path::Path::new("data/custom.csv"))
    );
}

#[test]
fn test_invalid_config_falls_back_to_defaults() {
    let file = write_temp(".toml", "[server]\nport = \"not a number\"\n");
    assert!(Config::from_file(file.path()).is_err());

    let config = Config::load_from_path(file.path());
    assert_eq!(config.server.port, 3000);
}
