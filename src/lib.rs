// Discover Andhra - Core Library
// Exposes the catalog, filter engine and presentation shell to the CLI, TUI and web server

pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod links;
pub mod logging;
pub mod navigator;
pub mod palette;
pub mod place;
pub mod shell;
pub mod stats;

#[cfg(feature = "server")]
pub mod api;

// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
pub mod ui;

// Re-export commonly used types
pub use catalog::Catalog;
pub use config::Config;
pub use error::{CatalogError, ConfigError, NavigationError};
pub use filter::{filter_places, matches, Facet, FilterState, ALL_DISTRICTS, ALL_TYPES};
pub use links::{LinkAction, PlaceLinks, WebsiteTarget};
pub use navigator::{perform, NavigationOutcome, Navigator, SystemNavigator};
pub use palette::{badge_style, BadgeStyle};
pub use place::{Coordinates, FaithGroup, Place, PlaceType, Region};
pub use shell::{Shell, ShellPhase, View};
pub use stats::CatalogStats;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
