//! Unified error types for the Longan library.
//!
//! Each pipeline stage carries its own error type (`ConfigError`,
//! `RenderError`, `FetchError`); this module defines the crate-wide enum
//! they all convert into, so callers can treat the whole pipeline as one
//! fallible operation.
use thiserror::Error;

/// Main error type for Longan operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Template configuration is invalid
    #[error("Configuration error: {0}")]
    Config(crate::config::ConfigError),

    /// A fatal rendering failure that halted the run
    #[error("Render error: {0}")]
    Render(crate::render::RenderError),

    /// An image could not be downloaded
    #[error("Fetch error: {0}")]
    Fetch(crate::render::FetchError),

    /// Generated-content JSON could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

/// Result type for Longan operations.
pub type Result<T> = std::result::Result<T, Error>;
