//! Error types for template configuration loading and validation.
use thiserror::Error;

/// Errors raised while loading or validating a template configuration.
///
/// All of these are fatal and surface before any rendering starts: a broken
/// configuration means the schema/generator contract cannot be honored.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error while reading a configuration file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The YAML document could not be parsed
    #[error("YAML error: {0}")]
    Yaml(String),

    /// A page block references a slide type that `type_map` does not declare
    #[error("page block '{block}' references slide type '{slide_type}' which is not in type_map")]
    DanglingType { block: String, slide_type: String },

    /// Two page blocks declare the same slide type
    #[error("slide type '{slide_type}' is declared by more than one page block")]
    DuplicateSlideType { slide_type: String },

    /// A slide type appears more than once in `type_map`
    #[error("slide type '{slide_type}' appears more than once in type_map")]
    DuplicateTypeMapEntry { slide_type: String },

    /// A `type_map` entry is not a single-key `name: index` mapping
    #[error("type_map entry {index} must be a single-key mapping of slide type to slide index")]
    InvalidTypeMapEntry { index: usize },

    /// A field declares a `type` string that is not a recognized field kind
    #[error("field '{field}' in page block '{block}' has unrecognized kind '{kind}'")]
    UnknownFieldKind {
        block: String,
        field: String,
        kind: String,
    },

    /// A top-level key is neither `type_map` nor a `*_page` block
    #[error("unexpected top-level key '{key}' (expected 'type_map' or a '*_page' block)")]
    UnexpectedKey { key: String },

    /// Two fields in the same page block would bind to the same shape name
    #[error(
        "fields '{field}' and '{other}' in page block '{block}' both target shape '{shape}'"
    )]
    TargetCollision {
        block: String,
        field: String,
        other: String,
        shape: String,
    },
}
