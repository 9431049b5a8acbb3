//! Common types shared across the rendering pipeline.
//!
//! This module provides the unified error type used by the configuration,
//! schema, and rendering stages, ensuring a consistent API for users.

// Submodule declarations
pub mod error;

// Re-exports for convenience
pub use error::{Error, Result};
