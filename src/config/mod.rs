//! Template configuration: the YAML `type_map` and page-block model.
//!
//! A configuration maps each slide type to a template slide index and
//! declares, per slide type, the fields the external generator must fill.
//! Validation happens at construction, so a [`TemplateConfig`] in hand is
//! always internally consistent.

// Submodule declarations
pub mod error;
mod loader;
pub mod types;

// Re-exports
pub use error::ConfigError;
pub use types::{FieldKind, FieldSpec, PageBlock, TemplateConfig};
