//! Longan - A Rust library for schema-driven slide generation
//!
//! This library turns a YAML template configuration into two connected
//! artifacts: a JSON Schema that constrains what a content generator may
//! produce, and a renderer that binds generated content onto duplicated
//! template slides. The configuration is the single source of truth for
//! both, so anything the schema admits the renderer can place.
//!
//! # Features
//!
//! - **Template configuration**: Parse YAML `type_map` + page-block files
//!   into a validated field model
//! - **Schema builder**: Emit a JSON Schema (draft 2020-12) with one
//!   `oneOf` variant per slide type, discriminated by `type`
//! - **Renderer**: Duplicate template slides and bind str / int / content /
//!   list / image fields onto named placeholder shapes
//! - **Structured reports**: Per-slide outcomes plus non-fatal warnings, so
//!   one bad slide never sinks the run
//!
//! # Example - Building a schema
//!
//! ```
//! use longan::config::TemplateConfig;
//! use longan::schema::SchemaBuilder;
//!
//! # fn main() -> longan::Result<()> {
//! let yaml = "\
//! type_map:
//!   - title: 0
//! title_page:
//!   type: title
//!   title:
//!     type: str
//!     max_len: 40
//! ";
//! let config = TemplateConfig::from_yaml_str(yaml)?;
//! let schema = SchemaBuilder::new(&config).build()?;
//! assert_eq!(schema["properties"]["slides"]["type"], "array");
//! # Ok(())
//! # }
//! ```
//!
//! # Example - Rendering generated content
//!
//! ```
//! use longan::config::TemplateConfig;
//! use longan::content::GeneratedDocument;
//! use longan::deck::{Deck, Shape, Slide};
//! use longan::render::TemplateRenderer;
//!
//! # fn main() -> longan::Result<()> {
//! let yaml = "\
//! type_map:
//!   - title: 0
//! title_page:
//!   type: title
//!   title:
//!     type: str
//! ";
//! let config = TemplateConfig::from_yaml_str(yaml)?;
//!
//! // The base deck would normally come from a parsed template file.
//! let mut base = Deck::new();
//! base.add_slide(Slide::with_shapes(vec![Shape::placeholder("title")]));
//!
//! let doc = GeneratedDocument::from_json_str(
//!     r#"{"slides": [{"type": "title", "title": "Quarterly Review"}]}"#,
//! )?;
//! let report = TemplateRenderer::new(&config, &base).render(&doc.slides)?;
//! assert!(report.is_clean());
//!
//! let title = report.deck.slide(0).unwrap().find_shape("title").unwrap();
//! assert_eq!(title.text().as_deref(), Some("Quarterly Review"));
//! # Ok(())
//! # }
//! ```

pub mod common;
pub mod config;
pub mod content;
pub mod deck;
pub mod render;
pub mod schema;

pub use common::{Error, Result};
pub use config::TemplateConfig;
pub use content::{GeneratedDocument, SlideContent};
pub use deck::{Deck, Shape, Slide};
pub use render::{RenderReport, TemplateRenderer};
pub use schema::SchemaBuilder;
