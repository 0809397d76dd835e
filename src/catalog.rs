// 📚 Place Catalog - static, read-only collection of places
//
// Loaded once at startup from the embedded dataset or from a JSON/CSV file, validated,
// then shared read-only by every front-end.

use crate::error::{CatalogError, CatalogResult};
use crate::filter::{ALL_DISTRICTS, ALL_TYPES};
use crate::place::{Coordinates, Place, PlaceType, Region};
use serde::Deserialize;
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

const BUILTIN_CATALOG: &str = include_str!("../data/places.json");

/// Separator for the `tags` column of CSV catalogs
pub const CSV_TAG_SEPARATOR: char = '|';

// ============================================================================
// FILE SHAPES
// ============================================================================

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogDocument {
    List(Vec<Place>),
    Wrapped { places: Vec<Place> },
}

impl CatalogDocument {
    fn into_places(self) -> Vec<Place> {
        match self {
            CatalogDocument::List(places) => places,
            CatalogDocument::Wrapped { places } => places,
        }
    }
}

/// One CSV row; nested fields are flattened into columns
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvPlace {
    id: String,
    name: String,
    #[serde(rename = "type")]
    place_type: PlaceType,
    state: Region,
    district: String,
    description: String,
    #[serde(default)]
    tags: String,
    #[serde(default)]
    image: String,
    best_time_to_visit: String,
    timings: String,
    entry_fee: String,
    location_details: String,
    nearest_railway_station: String,
    nearest_airport: String,
    #[serde(default)]
    contact_info: String,
    lat: f64,
    lng: f64,
}

impl From<CsvPlace> for Place {
    fn from(row: CsvPlace) -> Self {
        let tags = row
            .tags
            .split(CSV_TAG_SEPARATOR)
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();
        let contact_info = Some(row.contact_info.trim().to_string()).filter(|c| !c.is_empty());

        Place {
            id: row.id,
            name: row.name,
            place_type: row.place_type,
            state: row.state,
            district: row.district,
            description: row.description,
            tags,
            image: row.image,
            best_time_to_visit: row.best_time_to_visit,
            timings: row.timings,
            entry_fee: row.entry_fee,
            location_details: row.location_details,
            nearest_railway_station: row.nearest_railway_station,
            nearest_airport: row.nearest_airport,
            contact_info,
            coordinates: Coordinates::new(row.lat, row.lng),
        }
    }
}

// ============================================================================
// CATALOG
// ============================================================================

#[derive(Debug, Clone)]
pub struct Catalog {
    places: Vec<Place>,
    districts: Vec<String>,
}

impl Catalog {
    /// Build a catalog from records, rejecting any that break the catalog invariants
    pub fn from_places(places: Vec<Place>) -> CatalogResult<Self> {
        let mut seen = HashSet::new();

        for place in &places {
            validate_place(place)?;
            if !seen.insert(place.id.as_str()) {
                return Err(CatalogError::DuplicateId(place.id.clone()));
            }
        }

        let districts: BTreeSet<&str> = places.iter().map(|p| p.district.as_str()).collect();
        let districts = districts.into_iter().map(str::to_string).collect();

        Ok(Catalog { places, districts })
    }

    /// The dataset compiled into the binary
    pub fn builtin() -> CatalogResult<Self> {
        let catalog = Self::from_json_str(BUILTIN_CATALOG)?;
        debug!(places = catalog.len(), "builtin catalog loaded");
        Ok(catalog)
    }

    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let document: CatalogDocument = serde_json::from_str(json)?;
        Self::from_places(document.into_places())
    }

    pub fn from_csv_reader<R: Read>(reader: R) -> CatalogResult<Self> {
        let mut rdr = csv::Reader::from_reader(reader);
        let mut places = Vec::new();

        for result in rdr.deserialize() {
            let row: CsvPlace = result?;
            places.push(Place::from(row));
        }

        Self::from_places(places)
    }

    /// Load a catalog file, picking the format from the extension
    pub fn load(path: &Path) -> CatalogResult<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let catalog = match extension.as_deref() {
            Some("json") => {
                let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_json_str(&text)?
            }
            Some("csv") => {
                let file = fs::File::open(path).map_err(|source| CatalogError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                Self::from_csv_reader(file)?
            }
            _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        };

        info!(path = %path.display(), places = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    /// Use the file at `path` when given, the builtin dataset otherwise
    pub fn load_or_builtin(path: Option<&Path>) -> CatalogResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::builtin(),
        }
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Place> {
        self.places.iter().find(|p| p.id == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.places.iter().position(|p| p.id == id)
    }

    /// Distinct districts, sorted
    pub fn districts(&self) -> &[String] {
        &self.districts
    }

    /// District choices for a selector, sentinel first
    pub fn district_options(&self) -> Vec<String> {
        std::iter::once(ALL_DISTRICTS.to_string())
            .chain(self.districts.iter().cloned())
            .collect()
    }

    /// Type choices for a selector, sentinel first
    pub fn type_options() -> Vec<String> {
        std::iter::once(ALL_TYPES.to_string())
            .chain(PlaceType::ALL.iter().map(|t| t.label().to_string()))
            .collect()
    }
}

fn validate_place(place: &Place) -> CatalogResult<()> {
    if place.id.trim().is_empty() {
        return Err(CatalogError::MissingField {
            id: place.name.clone(),
            field: "id",
        });
    }
    if place.name.trim().is_empty() {
        return Err(CatalogError::MissingField {
            id: place.id.clone(),
            field: "name",
        });
    }
    if place.district == ALL_DISTRICTS {
        return Err(CatalogError::ReservedValue {
            id: place.id.clone(),
            field: "district",
            value: place.district.clone(),
        });
    }
    if !place.coordinates.is_valid() {
        return Err(CatalogError::InvalidCoordinates {
            id: place.id.clone(),
            lat: place.coordinates.lat,
            lng: place.coordinates.lng,
        });
    }
    Ok(())
}
