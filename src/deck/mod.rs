//! In-memory slide deck model.
//!
//! The renderer needs exactly two operations from a deck: "duplicate the
//! slide at index N" and "address shapes by name on a slide". This module
//! supplies a concrete model with named shapes (text frames with outline
//! paragraphs, table grids, pictures, groups) so the whole pipeline works
//! end to end without an external presentation library.

// Submodule declarations
mod prs;
pub mod shape;
pub mod slide;

// Re-exports
pub use prs::Deck;
pub use shape::{Picture, Shape, ShapeContent, ShapeGeometry, Table, TextFrame};
pub use slide::Slide;
