// ⚠️ Error types for catalog loading, configuration and navigation

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a place catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid CSV catalog: {0}")]
    Csv(#[from] csv::Error),

    #[error("unsupported catalog format for {0} (expected .json or .csv)")]
    UnsupportedFormat(PathBuf),

    #[error("duplicate place id '{0}'")]
    DuplicateId(String),

    #[error("place '{id}' has invalid coordinates ({lat}, {lng})")]
    InvalidCoordinates { id: String, lat: f64, lng: f64 },

    #[error("place '{id}' uses reserved value '{value}' for {field}")]
    ReservedValue {
        id: String,
        field: &'static str,
        value: String,
    },

    #[error("place '{id}' is missing required field {field}")]
    MissingField { id: String, field: &'static str },
}

/// Errors raised while loading configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Errors raised when handing a URL to the browser environment
#[derive(Error, Debug)]
pub enum NavigationError {
    #[error("failed to launch opener for {url}: {source}")]
    Launch {
        url: String,
        #[source]
        source: std::io::Error,
    },

    #[error("no opener available on this platform for {0}")]
    Unsupported(String),
}

pub type CatalogResult<T> = std::result::Result<T, CatalogError>;
