// 📊 Catalog statistics shown in the hero banner and above the listing

use crate::place::{FaithGroup, Place};
use serde::Serialize;

/// Fixed headline figures printed on the hero banner
pub const HERO_HEADLINES: [(&str, &str); 4] = [
    ("500+", "Sacred Temples"),
    ("200+", "Historic Churches"),
    ("150+", "Beautiful Mosques"),
    ("300+", "Tourist Places"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CatalogStats {
    pub temples: usize,
    pub churches: usize,
    pub mosques: usize,
    pub tourist_places: usize,
    pub total: usize,
}

impl CatalogStats {
    pub fn compute(places: &[Place]) -> Self {
        let mut stats = CatalogStats {
            total: places.len(),
            ..Default::default()
        };

        for place in places {
            match place.place_type.group() {
                FaithGroup::Temple => stats.temples += 1,
                FaithGroup::Church => stats.churches += 1,
                FaithGroup::Mosque => stats.mosques += 1,
                FaithGroup::Tourist => stats.tourist_places += 1,
            }
        }

        stats
    }

    /// Listing counters as (value, caption) pairs, in banner order
    pub fn counters(&self) -> [(String, &'static str); 4] {
        [
            (format!("{}+", self.temples), "Sacred Temples"),
            (format!("{}+", self.churches), "Historic Churches"),
            (format!("{}+", self.mosques), "Beautiful Mosques"),
            (format!("{}+", self.tourist_places), "Tourist Places"),
        ]
    }
}
