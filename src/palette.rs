// 🎨 Type badge styles - one table shared by the summary cards and the detail view

use crate::place::PlaceType;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BadgeStyle {
    /// CSS utility classes used by the web page
    pub css: &'static str,
    /// Terminal background colour
    pub background: (u8, u8, u8),
    /// Terminal foreground colour
    pub foreground: (u8, u8, u8),
}

const TEMPLE_GOLD: (u8, u8, u8) = (212, 160, 23);
const EARTH_BROWN: (u8, u8, u8) = (92, 64, 51);

/// Style for types missing from the table
pub const SECONDARY: BadgeStyle = BadgeStyle {
    css: "bg-secondary text-secondary-foreground",
    background: (226, 232, 240),
    foreground: (30, 41, 59),
};

static BADGES: [(PlaceType, BadgeStyle); 27] = [
    (PlaceType::Temple, BadgeStyle { css: "bg-temple-gold text-earth-brown", background: TEMPLE_GOLD, foreground: EARTH_BROWN }),
    (PlaceType::Church, BadgeStyle { css: "bg-blue-100 text-blue-800", background: (219, 234, 254), foreground: (30, 64, 175) }),
    (PlaceType::Mosque, BadgeStyle { css: "bg-green-100 text-green-800", background: (220, 252, 231), foreground: (22, 101, 52) }),
    (PlaceType::Beach, BadgeStyle { css: "bg-cyan-100 text-cyan-800", background: (207, 250, 254), foreground: (21, 94, 117) }),
    (PlaceType::Waterfall, BadgeStyle { css: "bg-blue-200 text-blue-900", background: (191, 219, 254), foreground: (30, 58, 138) }),
    (PlaceType::Cave, BadgeStyle { css: "bg-gray-100 text-gray-800", background: (243, 244, 246), foreground: (31, 41, 55) }),
    (PlaceType::Fort, BadgeStyle { css: "bg-amber-100 text-amber-800", background: (254, 243, 199), foreground: (146, 64, 14) }),
    (PlaceType::Dam, BadgeStyle { css: "bg-indigo-100 text-indigo-800", background: (224, 231, 255), foreground: (55, 48, 163) }),
    (PlaceType::Museum, BadgeStyle { css: "bg-purple-100 text-purple-800", background: (243, 232, 255), foreground: (107, 33, 168) }),
    (PlaceType::Mall, BadgeStyle { css: "bg-pink-100 text-pink-800", background: (252, 231, 243), foreground: (157, 23, 77) }),
    (PlaceType::HillStation, BadgeStyle { css: "bg-emerald-100 text-emerald-800", background: (209, 250, 229), foreground: (6, 95, 70) }),
    (PlaceType::Sanctuary, BadgeStyle { css: "bg-lime-100 text-lime-800", background: (236, 252, 203), foreground: (63, 98, 18) }),
    (PlaceType::Lake, BadgeStyle { css: "bg-sky-100 text-sky-800", background: (224, 242, 254), foreground: (7, 89, 133) }),
    (PlaceType::HistoricalSite, BadgeStyle { css: "bg-orange-100 text-orange-800", background: (255, 237, 213), foreground: (154, 52, 18) }),
    (PlaceType::NaturalWonder, BadgeStyle { css: "bg-teal-100 text-teal-800", background: (204, 251, 241), foreground: (17, 94, 89) }),
    (PlaceType::ModernMarvel, BadgeStyle { css: "bg-violet-100 text-violet-800", background: (237, 233, 254), foreground: (91, 33, 182) }),
    (PlaceType::Entertainment, BadgeStyle { css: "bg-rose-100 text-rose-800", background: (255, 228, 230), foreground: (159, 18, 57) }),
    (PlaceType::Park, BadgeStyle { css: "bg-green-200 text-green-900", background: (187, 247, 208), foreground: (20, 83, 45) }),
    (PlaceType::ArtAndCulture, BadgeStyle { css: "bg-yellow-100 text-yellow-800", background: (254, 249, 195), foreground: (133, 77, 14) }),
    (PlaceType::Wildlife, BadgeStyle { css: "bg-emerald-200 text-emerald-900", background: (167, 243, 208), foreground: (6, 78, 59) }),
    (PlaceType::Zoo, BadgeStyle { css: "bg-orange-200 text-orange-900", background: (254, 215, 170), foreground: (124, 45, 18) }),
    (PlaceType::ShoppingMall, BadgeStyle { css: "bg-pink-200 text-pink-900", background: (251, 207, 232), foreground: (131, 24, 67) }),
    (PlaceType::CoastalAttraction, BadgeStyle { css: "bg-cyan-200 text-cyan-900", background: (165, 243, 252), foreground: (22, 78, 99) }),
    (PlaceType::BuddhistSite, BadgeStyle { css: "bg-amber-200 text-amber-900", background: (253, 230, 138), foreground: (120, 53, 15) }),
    (PlaceType::IslamicShrine, BadgeStyle { css: "bg-green-200 text-green-900", background: (187, 247, 208), foreground: (20, 83, 45) }),
    (PlaceType::ChristianChurch, BadgeStyle { css: "bg-blue-200 text-blue-900", background: (191, 219, 254), foreground: (30, 58, 138) }),
    (PlaceType::HinduTemple, BadgeStyle { css: "bg-temple-gold text-earth-brown", background: TEMPLE_GOLD, foreground: EARTH_BROWN }),
];

pub fn badge_style(place_type: PlaceType) -> BadgeStyle {
    BADGES
        .iter()
        .find(|(t, _)| *t == place_type)
        .map(|(_, style)| *style)
        .unwrap_or(SECONDARY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_type_has_a_style() {
        for place_type in PlaceType::ALL {
            assert_ne!(badge_style(place_type), SECONDARY, "{place_type} unstyled");
        }
    }

    #[test]
    fn test_styles_previously_missing_from_detail_view() {
        assert_eq!(badge_style(PlaceType::Fort).css, "bg-amber-100 text-amber-800");
        assert_eq!(badge_style(PlaceType::HillStation).css, "bg-emerald-100 text-emerald-800");
        assert_eq!(badge_style(PlaceType::Museum).css, "bg-purple-100 text-purple-800");
    }

    #[test]
    fn test_temple_variants_share_style() {
        assert_eq!(badge_style(PlaceType::Temple), badge_style(PlaceType::HinduTemple));
    }

    #[test]
    fn test_zoo_style() {
        assert_eq!(badge_style(PlaceType::Zoo).css, "bg-orange-200 text-orange-900");
    }
}
