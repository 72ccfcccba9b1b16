//! Error types for the nutri_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for nutri_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Nutrient name outside the ranking allow-list
    #[error("Invalid nutrient '{0}'. Choose from: protein, calcium, iron, fiber, vitamin_c, vitamin_a")]
    InvalidNutrient(String),

    /// No catalog entry carries this food code
    #[error("Food not found: {0}")]
    FoodNotFound(String),

    /// A query was issued before the catalog finished building
    #[error("Food catalog has not been built yet")]
    CatalogNotReady,

    /// Caller-supplied argument rejected before reaching the engine
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
