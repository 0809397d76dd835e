// 🔍 Filter Engine - district / type / free-text filtering over the catalog
//
// Pure functions: the same catalog and filter state always give the same subset,
// in catalog order, so callers may cache the result per state.

use crate::place::Place;
use serde::{Deserialize, Serialize};

/// Reserved district label meaning "no district constraint"
pub const ALL_DISTRICTS: &str = "All Districts";

/// Reserved type label meaning "no type constraint"
pub const ALL_TYPES: &str = "All Types";

// ============================================================================
// FACET
// ============================================================================

/// One categorical constraint: either neutral or an exact label
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facet {
    #[default]
    Any,
    Exactly(String),
}

impl Facet {
    /// Map a selector label to a facet; the sentinel (or an empty label) is neutral
    pub fn from_label(label: &str, sentinel: &str) -> Self {
        if label.is_empty() || label == sentinel {
            Facet::Any
        } else {
            Facet::Exactly(label.to_string())
        }
    }

    pub fn accepts(&self, value: &str) -> bool {
        match self {
            Facet::Any => true,
            Facet::Exactly(expected) => expected == value,
        }
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Facet::Any)
    }

    /// Selector label, using the sentinel for a neutral facet
    pub fn label<'a>(&'a self, sentinel: &'a str) -> &'a str {
        match self {
            Facet::Any => sentinel,
            Facet::Exactly(value) => value,
        }
    }
}

// ============================================================================
// FILTER STATE
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    pub district: Facet,
    pub place_type: Facet,
    pub query: String,
}

impl FilterState {
    /// Build a state from selector labels as the UI shows them
    pub fn new(district: &str, place_type: &str, query: &str) -> Self {
        FilterState {
            district: Facet::from_label(district, ALL_DISTRICTS),
            place_type: Facet::from_label(place_type, ALL_TYPES),
            query: query.to_string(),
        }
    }

    pub fn district_label(&self) -> &str {
        self.district.label(ALL_DISTRICTS)
    }

    pub fn type_label(&self) -> &str {
        self.place_type.label(ALL_TYPES)
    }

    /// True when no predicate constrains the result
    pub fn is_idle(&self) -> bool {
        self.district.is_any() && self.place_type.is_any() && self.query.is_empty()
    }

    /// Results line shown above the grid
    pub fn describe(&self, count: usize) -> String {
        let mut line = format!("Showing {} places", count);
        if let Facet::Exactly(district) = &self.district {
            line.push_str(&format!(" in {}", district));
        }
        if let Facet::Exactly(place_type) = &self.place_type {
            line.push_str(&format!(" • {}", place_type));
        }
        if !self.query.is_empty() {
            line.push_str(&format!(" • matching \"{}\"", self.query));
        }
        line
    }
}

// ============================================================================
// PREDICATES
// ============================================================================

fn matches_text(place: &Place, needle: &str) -> bool {
    place.name.to_lowercase().contains(needle)
        || place.district.to_lowercase().contains(needle)
        || place.description.to_lowercase().contains(needle)
        || place.tags.iter().any(|tag| tag.to_lowercase().contains(needle))
}

/// Whether a single place passes every active predicate
pub fn matches(place: &Place, state: &FilterState) -> bool {
    state.district.accepts(&place.district)
        && state.place_type.accepts(place.place_type.label())
        && (state.query.is_empty() || matches_text(place, &state.query.to_lowercase()))
}

/// Visible subset of `places`, in catalog order
pub fn filter_places<'a>(places: &'a [Place], state: &FilterState) -> Vec<&'a Place> {
    filter_indices(places, state)
        .into_iter()
        .map(|i| &places[i])
        .collect()
}

/// Catalog positions of the visible subset, in catalog order
pub fn filter_indices(places: &[Place], state: &FilterState) -> Vec<usize> {
    if state.query.is_empty() {
        return places
            .iter()
            .enumerate()
            .filter(|(_, place)| matches(place, state))
            .map(|(i, _)| i)
            .collect();
    }

    // Lowercase the needle once for the whole pass
    let needle = state.query.to_lowercase();
    places
        .iter()
        .enumerate()
        .filter(|(_, place)| {
            state.district.accepts(&place.district)
                && state.place_type.accepts(place.place_type.label())
                && matches_text(place, &needle)
        })
        .map(|(i, _)| i)
        .collect()
}
