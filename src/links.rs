// 🔗 External links built from a place's coordinates and contact field
//
// Only string construction lives here; opening them is the navigator's job.

use crate::place::{Coordinates, Place};
use serde::Serialize;

const SEARCH_BASE: &str = "https://www.google.com/search?q=";

/// What the user asked to open from the detail view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkAction {
    Directions,
    Map,
    Website,
    Call,
}

impl LinkAction {
    pub fn label(&self) -> &'static str {
        match self {
            LinkAction::Directions => "Get Directions",
            LinkAction::Map => "View on Map",
            LinkAction::Website => "Visit Website",
            LinkAction::Call => "Call",
        }
    }

    pub fn parse(value: &str) -> Option<LinkAction> {
        match value.to_ascii_lowercase().as_str() {
            "directions" | "dir" => Some(LinkAction::Directions),
            "map" | "view" => Some(LinkAction::Map),
            "website" | "web" | "search" => Some(LinkAction::Website),
            "call" | "phone" | "tel" => Some(LinkAction::Call),
            _ => None,
        }
    }
}

/// Website button target: the place's own site, or a web search for it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "url", rename_all = "lowercase")]
pub enum WebsiteTarget {
    Official(String),
    Search(String),
}

impl WebsiteTarget {
    pub fn url(&self) -> &str {
        match self {
            WebsiteTarget::Official(url) | WebsiteTarget::Search(url) => url,
        }
    }

    /// Button caption matching the target
    pub fn caption(&self) -> &'static str {
        match self {
            WebsiteTarget::Official(_) => "Visit Website",
            WebsiteTarget::Search(_) => "Search Online",
        }
    }
}

pub fn directions_url(coordinates: &Coordinates) -> String {
    format!("https://www.google.com/maps/dir//{}", coordinates)
}

pub fn map_view_url(coordinates: &Coordinates) -> String {
    format!("https://www.google.com/maps/place/{}", coordinates)
}

/// Coordinate-only query used when a richer map link could not be opened
pub fn fallback_map_url(coordinates: &Coordinates) -> String {
    format!("https://maps.google.com/?q={}", coordinates)
}

pub fn search_url(place: &Place) -> String {
    let query = format!("{} {} official website", place.name, place.district);
    format!("{}{}", SEARCH_BASE, urlencoding::encode(&query))
}

pub fn website_target(place: &Place) -> WebsiteTarget {
    match place.website() {
        Some(url) => WebsiteTarget::Official(url.to_string()),
        None => WebsiteTarget::Search(search_url(place)),
    }
}

pub fn phone_url(place: &Place) -> Option<String> {
    place.phone().map(|phone| format!("tel:{}", phone))
}

/// URL for an action; `None` when the place has nothing to call
pub fn url_for(place: &Place, action: LinkAction) -> Option<String> {
    match action {
        LinkAction::Directions => Some(directions_url(&place.coordinates)),
        LinkAction::Map => Some(map_view_url(&place.coordinates)),
        LinkAction::Website => Some(website_target(place).url().to_string()),
        LinkAction::Call => phone_url(place),
    }
}

/// Every link the detail view offers for one place
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaceLinks {
    pub directions: String,
    pub map: String,
    pub website: WebsiteTarget,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub fallback: String,
}

impl PlaceLinks {
    pub fn for_place(place: &Place) -> Self {
        PlaceLinks {
            directions: directions_url(&place.coordinates),
            map: map_view_url(&place.coordinates),
            website: website_target(place),
            phone: phone_url(place),
            fallback: fallback_map_url(&place.coordinates),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::place::tests::sample_place;
    use crate::place::PlaceType;

    fn tirumala() -> Place {
        let mut place = sample_place("t", "Sri Venkateswara Temple", "Tirupati", PlaceType::Temple);
        place.coordinates = Coordinates::new(13.6833, 79.3474);
        place
    }

    #[test]
    fn test_map_urls() {
        let place = tirumala();
        assert_eq!(
            directions_url(&place.coordinates),
            "https://www.google.com/maps/dir//13.6833,79.3474"
        );
        assert_eq!(
            map_view_url(&place.coordinates),
            "https://www.google.com/maps/place/13.6833,79.3474"
        );
        assert_eq!(
            fallback_map_url(&place.coordinates),
            "https://maps.google.com/?q=13.6833,79.3474"
        );
    }

    #[test]
    fn test_website_uses_contact_url() {
        let mut place = tirumala();
        place.contact_info = Some("https://example.org".to_string());
        assert_eq!(
            website_target(&place),
            WebsiteTarget::Official("https://example.org".to_string())
        );
        assert_eq!(website_target(&place).caption(), "Visit Website");
    }

    #[test]
    fn test_website_falls_back_to_search() {
        let mut place = tirumala();
        place.contact_info = Some("040-1234567".to_string());

        let target = website_target(&place);
        assert!(matches!(target, WebsiteTarget::Search(_)));
        assert_eq!(target.caption(), "Search Online");
        assert_eq!(
            target.url(),
            "https://www.google.com/search?q=Sri%20Venkateswara%20Temple%20Tirupati%20official%20website"
        );
        assert_eq!(phone_url(&place), Some("tel:040-1234567".to_string()));
    }

    #[test]
    fn test_call_requires_phone() {
        let place = tirumala();
        assert_eq!(url_for(&place, LinkAction::Call), None);
        assert!(url_for(&place, LinkAction::Website).unwrap().starts_with(SEARCH_BASE));
    }

    #[test]
    fn test_parse_action() {
        assert_eq!(LinkAction::parse("Directions"), Some(LinkAction::Directions));
        assert_eq!(LinkAction::parse("map"), Some(LinkAction::Map));
        assert_eq!(LinkAction::parse("tel"), Some(LinkAction::Call));
        assert_eq!(LinkAction::parse("teleport"), None);
    }
}
