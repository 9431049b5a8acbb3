//! Generator-facing schema construction.
//!
//! Converts a validated [`crate::config::TemplateConfig`] into the JSON
//! Schema document that guides the external content generator.

// Submodule declarations
pub mod builder;

// Re-exports
pub use builder::SchemaBuilder;
