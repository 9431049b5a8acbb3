//! Error conversion implementations.
//!
//! This module contains From trait implementations to convert from
//! stage-level error types to the unified Error type.

use super::types::Error;

// Conversions from stage-level error types

impl From<crate::config::ConfigError> for Error {
    fn from(err: crate::config::ConfigError) -> Self {
        match err {
            crate::config::ConfigError::Io(e) => Error::Io(e),
            other => Error::Config(other),
        }
    }
}

impl From<crate::render::RenderError> for Error {
    fn from(err: crate::render::RenderError) -> Self {
        Error::Render(err)
    }
}

impl From<crate::render::FetchError> for Error {
    fn from(err: crate::render::FetchError) -> Self {
        Error::Fetch(err)
    }
}
