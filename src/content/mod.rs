//! Generated-content document model.
//!
//! The external generator fills the schema produced by [`crate::schema`]
//! and returns a JSON document of slide objects; this module models those
//! payloads and their `content_type`-tagged rich variants.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{
    BasicImage, Content, GeneratedDocument, ImageContent, Item, Paragraph, SlideContent,
    TableContent, TextContent,
};
