// 🛕 Place Entity - one touristic or religious site
//
// Places are immutable once the catalog is loaded. The `PlaceType` enumeration is
// closed: it drives both the type filter and the badge styling.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// PLACE TYPE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaceType {
    Temple,
    Church,
    Mosque,
    Beach,
    Waterfall,
    Cave,
    Fort,
    Dam,
    Museum,
    Mall,
    #[serde(rename = "Hill Station")]
    HillStation,
    Sanctuary,
    Lake,
    #[serde(rename = "Historical Site")]
    HistoricalSite,
    #[serde(rename = "Natural Wonder")]
    NaturalWonder,
    #[serde(rename = "Modern Marvel")]
    ModernMarvel,
    Entertainment,
    Park,
    #[serde(rename = "Art & Culture")]
    ArtAndCulture,
    Wildlife,
    Zoo,
    #[serde(rename = "Shopping Mall")]
    ShoppingMall,
    #[serde(rename = "Coastal Attraction")]
    CoastalAttraction,
    #[serde(rename = "Buddhist Site")]
    BuddhistSite,
    #[serde(rename = "Islamic Shrine")]
    IslamicShrine,
    #[serde(rename = "Christian Church")]
    ChristianChurch,
    #[serde(rename = "Hindu Temple")]
    HinduTemple,
}

impl PlaceType {
    /// Every type in display order
    pub const ALL: [PlaceType; 27] = [
        PlaceType::Temple,
        PlaceType::Church,
        PlaceType::Mosque,
        PlaceType::Beach,
        PlaceType::Waterfall,
        PlaceType::Cave,
        PlaceType::Fort,
        PlaceType::Dam,
        PlaceType::Museum,
        PlaceType::Mall,
        PlaceType::HillStation,
        PlaceType::Sanctuary,
        PlaceType::Lake,
        PlaceType::HistoricalSite,
        PlaceType::NaturalWonder,
        PlaceType::ModernMarvel,
        PlaceType::Entertainment,
        PlaceType::Park,
        PlaceType::ArtAndCulture,
        PlaceType::Wildlife,
        PlaceType::Zoo,
        PlaceType::ShoppingMall,
        PlaceType::CoastalAttraction,
        PlaceType::BuddhistSite,
        PlaceType::IslamicShrine,
        PlaceType::ChristianChurch,
        PlaceType::HinduTemple,
    ];

    /// Display label, also the value matched by the type filter
    pub fn label(&self) -> &'static str {
        match self {
            PlaceType::Temple => "Temple",
            PlaceType::Church => "Church",
            PlaceType::Mosque => "Mosque",
            PlaceType::Beach => "Beach",
            PlaceType::Waterfall => "Waterfall",
            PlaceType::Cave => "Cave",
            PlaceType::Fort => "Fort",
            PlaceType::Dam => "Dam",
            PlaceType::Museum => "Museum",
            PlaceType::Mall => "Mall",
            PlaceType::HillStation => "Hill Station",
            PlaceType::Sanctuary => "Sanctuary",
            PlaceType::Lake => "Lake",
            PlaceType::HistoricalSite => "Historical Site",
            PlaceType::NaturalWonder => "Natural Wonder",
            PlaceType::ModernMarvel => "Modern Marvel",
            PlaceType::Entertainment => "Entertainment",
            PlaceType::Park => "Park",
            PlaceType::ArtAndCulture => "Art & Culture",
            PlaceType::Wildlife => "Wildlife",
            PlaceType::Zoo => "Zoo",
            PlaceType::ShoppingMall => "Shopping Mall",
            PlaceType::CoastalAttraction => "Coastal Attraction",
            PlaceType::BuddhistSite => "Buddhist Site",
            PlaceType::IslamicShrine => "Islamic Shrine",
            PlaceType::ChristianChurch => "Christian Church",
            PlaceType::HinduTemple => "Hindu Temple",
        }
    }

    pub fn from_label(label: &str) -> Option<PlaceType> {
        PlaceType::ALL.iter().copied().find(|t| t.label() == label)
    }

    pub fn group(&self) -> FaithGroup {
        match self {
            PlaceType::Temple | PlaceType::HinduTemple => FaithGroup::Temple,
            PlaceType::Church | PlaceType::ChristianChurch => FaithGroup::Church,
            PlaceType::Mosque | PlaceType::IslamicShrine => FaithGroup::Mosque,
            _ => FaithGroup::Tourist,
        }
    }
}

impl fmt::Display for PlaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ============================================================================
// FAITH GROUP
// ============================================================================

/// Coarse grouping used for statistics and default imagery
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FaithGroup {
    Temple,
    Church,
    Mosque,
    Tourist,
}

impl FaithGroup {
    pub fn sample_image(&self) -> &'static str {
        match self {
            FaithGroup::Temple => "assets/sample-temple.jpg",
            FaithGroup::Church => "assets/sample-church.jpg",
            FaithGroup::Mosque => "assets/sample-mosque.jpg",
            FaithGroup::Tourist => "assets/sample-tourist-place.jpg",
        }
    }
}

// ============================================================================
// REGION
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "AP")]
    AndhraPradesh,
    #[serde(rename = "TS", alias = "TG")]
    Telangana,
}

impl Region {
    pub fn code(&self) -> &'static str {
        match self {
            Region::AndhraPradesh => "AP",
            Region::Telangana => "TS",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Region::AndhraPradesh => "Andhra Pradesh",
            Region::Telangana => "Telangana",
        }
    }
}

// ============================================================================
// COORDINATES
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Coordinates { lat, lng }
    }

    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lng)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.lat, self.lng)
    }
}

// ============================================================================
// PLACE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub place_type: PlaceType,
    pub state: Region,
    pub district: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: String,
    pub best_time_to_visit: String,
    pub timings: String,
    pub entry_fee: String,
    pub location_details: String,
    pub nearest_railway_station: String,
    pub nearest_airport: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact_info: Option<String>,
    pub coordinates: Coordinates,
}

impl Place {
    /// Image to display, falling back to the group's sample picture
    pub fn display_image(&self) -> &str {
        if self.image.trim().is_empty() {
            self.place_type.group().sample_image()
        } else {
            &self.image
        }
    }

    /// Contact value if it is a web address
    pub fn website(&self) -> Option<&str> {
        self.contact_info
            .as_deref()
            .filter(|contact| contact.starts_with("http"))
    }

    /// Contact value if it is present and not a web address (usually a phone number)
    pub fn phone(&self) -> Option<&str> {
        self.contact_info
            .as_deref()
            .filter(|contact| !contact.is_empty() && !contact.starts_with("http"))
    }

    /// First three tags for a summary card plus how many were left out
    pub fn card_tags(&self) -> (&[String], usize) {
        let shown = self.tags.len().min(3);
        (&self.tags[..shown], self.tags.len() - shown)
    }
}
