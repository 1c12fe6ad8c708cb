//! Error types for the plan_core library.
//!
//! The engines are total and never return these. Errors only come from the
//! file edges: config TOML, profile and catalog JSON, and exports.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading a profile/catalog/config or writing an export failed
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Malformed profile or catalog JSON, or JSON output failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Malformed `config.toml`
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    /// `Catalog::validate` reported problems
    #[error("Catalog validation error: {0}")]
    CatalogValidation(String),

    #[error("Profile error: {0}")]
    Profile(String),

    /// Unknown export format or an export that could not be finished
    #[error("Export error: {0}")]
    Export(String),

    #[error("{0}")]
    Other(String),
}
