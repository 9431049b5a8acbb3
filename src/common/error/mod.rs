//! Unified error types for the Longan library.
//!
//! This module provides a unified error type that encompasses errors from
//! configuration loading, schema building, and template rendering,
//! presenting a consistent API to users.

// Submodule declarations
pub mod conversions;
pub mod types;

// Re-exports
pub use types::{Error, Result};
