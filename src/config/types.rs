//! Template configuration model: field kinds, field specs, page blocks,
//! and the validated `TemplateConfig` aggregate.
use std::collections::BTreeMap;

use super::error::ConfigError;

/// The kind of value a template field accepts.
///
/// Determines both the schema emitted for the external generator and how
/// the renderer binds the generated value onto placeholder shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// A plain string, bound as text to the identically named shape.
    Str,
    /// An integer, stringified losslessly and bound as text.
    Int,
    /// A rich content payload (text paragraphs, image, or table).
    Content,
    /// A list of content payloads bound to `<field>1`, `<field>2`, ...
    ContentList,
    /// A list of title/content items bound to `item_title{n}` / `item_content{n}`.
    ItemList,
    /// A list of strings bound to `label{n}`.
    StrList,
    /// A single image, downloaded and substituted for the named placeholder.
    Image,
}

impl FieldKind {
    /// Parse the configuration `type` string into a kind.
    ///
    /// Returns `None` for unrecognized strings; the loader turns that into
    /// [`ConfigError::UnknownFieldKind`].
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "str" => Some(Self::Str),
            "int" => Some(Self::Int),
            "content" => Some(Self::Content),
            "content_list" => Some(Self::ContentList),
            "item_list" => Some(Self::ItemList),
            "str_list" => Some(Self::StrList),
            "image" => Some(Self::Image),
            _ => None,
        }
    }

    /// Canonical configuration string for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Str => "str",
            Self::Int => "int",
            Self::Content => "content",
            Self::ContentList => "content_list",
            Self::ItemList => "item_list",
            Self::StrList => "str_list",
            Self::Image => "image",
        }
    }

    /// Whether values of this kind are sequences bound to numbered shapes.
    #[inline]
    pub fn is_list(&self) -> bool {
        matches!(self, Self::ContentList | Self::ItemList | Self::StrList)
    }

    /// Numbered shape-name prefixes this kind claims when declared under
    /// `field_name`.
    ///
    /// A list field at position `n` binds to `<prefix>{n}`; non-list kinds
    /// claim no numbered family (they bind a single literal shape name).
    fn placeholder_families<'a>(&self, field_name: &'a str) -> Vec<&'a str> {
        match self {
            Self::ContentList => vec![field_name],
            Self::ItemList => vec!["item_title", "item_content"],
            Self::StrList => vec!["label"],
            _ => Vec::new(),
        }
    }
}

/// Declaration of a single field within a page block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldSpec {
    /// What kind of value this field accepts.
    pub kind: FieldKind,
    /// Human-readable hint forwarded into the generated schema.
    pub description: Option<String>,
    /// Minimum length: characters for strings, elements for list kinds.
    pub min_len: Option<u64>,
    /// Maximum length: characters for strings, elements for list kinds.
    pub max_len: Option<u64>,
    /// When true the field may be omitted by the generator.
    pub optional: bool,
}

impl FieldSpec {
    /// Create a required field of the given kind with no constraints.
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            description: None,
            min_len: None,
            max_len: None,
            optional: false,
        }
    }

    /// Builder method: set the description.
    #[inline]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Builder method: set the minimum length.
    #[inline]
    pub fn with_min_len(mut self, min_len: u64) -> Self {
        self.min_len = Some(min_len);
        self
    }

    /// Builder method: set the maximum length.
    #[inline]
    pub fn with_max_len(mut self, max_len: u64) -> Self {
        self.max_len = Some(max_len);
        self
    }

    /// Builder method: mark the field optional.
    #[inline]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Schema for all fields expected on slides of one type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageBlock {
    /// Human-readable description of the slide type.
    pub description: Option<String>,
    /// The slide type this block declares; must exist in `type_map`.
    pub slide_type: String,
    /// Field name to specification. Field names are unique per block.
    pub fields: BTreeMap<String, FieldSpec>,
}

impl PageBlock {
    /// Create an empty block for the given slide type.
    pub fn new(slide_type: &str) -> Self {
        Self {
            description: None,
            slide_type: slide_type.to_string(),
            fields: BTreeMap::new(),
        }
    }

    /// Builder method: set the description.
    #[inline]
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    /// Builder method: add a field declaration.
    pub fn with_field(mut self, name: &str, spec: FieldSpec) -> Self {
        self.fields.insert(name.to_string(), spec);
        self
    }
}

/// A validated template configuration.
///
/// Holds the ordered `type_map` (slide type to template slide index) and
/// the page blocks describing each slide type's fields. Construction
/// validates referential integrity, so holders of a `TemplateConfig` can
/// rely on every block's type resolving to a template index.
///
/// # Examples
///
/// ```rust
/// use longan::config::{FieldKind, FieldSpec, PageBlock, TemplateConfig};
///
/// let config = TemplateConfig::new(
///     vec![("title".to_string(), 0)],
///     [(
///         "title_page".to_string(),
///         PageBlock::new("title").with_field("title", FieldSpec::new(FieldKind::Str)),
///     )]
///     .into_iter()
///     .collect(),
/// )?;
/// assert_eq!(config.slide_index("title"), Some(0));
/// # Ok::<(), longan::config::ConfigError>(())
/// ```
#[derive(Debug, Clone)]
pub struct TemplateConfig {
    /// Ordered slide type -> template slide index.
    type_map: Vec<(String, usize)>,
    /// Block name (e.g. `title_page`) -> block.
    blocks: BTreeMap<String, PageBlock>,
    /// Slide type -> block name, derived at construction.
    by_type: BTreeMap<String, String>,
}

impl TemplateConfig {
    /// Build a configuration from a type map and page blocks, validating
    /// the invariants the rest of the pipeline relies on:
    ///
    /// - every block's slide type appears in `type_map`;
    /// - no slide type is declared twice (in `type_map` or across blocks);
    /// - no two fields in one block can bind to the same shape name.
    pub fn new(
        type_map: Vec<(String, usize)>,
        blocks: BTreeMap<String, PageBlock>,
    ) -> Result<Self, ConfigError> {
        let mut seen = BTreeMap::new();
        for (slide_type, _) in &type_map {
            if seen.insert(slide_type.clone(), ()).is_some() {
                return Err(ConfigError::DuplicateTypeMapEntry {
                    slide_type: slide_type.clone(),
                });
            }
        }

        let mut by_type = BTreeMap::new();
        for (block_name, block) in &blocks {
            if !seen.contains_key(&block.slide_type) {
                return Err(ConfigError::DanglingType {
                    block: block_name.clone(),
                    slide_type: block.slide_type.clone(),
                });
            }
            if by_type
                .insert(block.slide_type.clone(), block_name.clone())
                .is_some()
            {
                return Err(ConfigError::DuplicateSlideType {
                    slide_type: block.slide_type.clone(),
                });
            }
            check_target_collisions(block_name, block)?;
        }

        Ok(Self {
            type_map,
            blocks,
            by_type,
        })
    }

    /// Resolve a slide type to its template slide index.
    pub fn slide_index(&self, slide_type: &str) -> Option<usize> {
        self.type_map
            .iter()
            .find(|(name, _)| name == slide_type)
            .map(|(_, index)| *index)
    }

    /// The ordered slide type -> slide index mapping.
    #[inline]
    pub fn type_map(&self) -> &[(String, usize)] {
        &self.type_map
    }

    /// Look up the page block declaring the given slide type.
    pub fn block_for_type(&self, slide_type: &str) -> Option<&PageBlock> {
        let name = self.by_type.get(slide_type)?;
        self.blocks.get(name)
    }

    /// Iterate page blocks as `(block name, block)` in name order.
    pub fn blocks(&self) -> impl Iterator<Item = (&str, &PageBlock)> {
        self.blocks.iter().map(|(name, block)| (name.as_str(), block))
    }

    /// Number of declared page blocks.
    #[inline]
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}

/// Reject field sets where two fields would bind the same output shape.
///
/// Field names themselves are unique (map keys), so a collision can only
/// arise through the numbered families list kinds claim: two list fields
/// sharing a prefix (`label{n}`, `item_title{n}`), or a literal field name
/// that reads as `<prefix><digits>` of some list field.
fn check_target_collisions(block_name: &str, block: &PageBlock) -> Result<(), ConfigError> {
    // prefix -> owning field
    let mut families: BTreeMap<&str, &str> = BTreeMap::new();

    for (field, spec) in &block.fields {
        for prefix in spec.kind.placeholder_families(field) {
            if let Some(other) = families.insert(prefix, field.as_str()) {
                return Err(ConfigError::TargetCollision {
                    block: block_name.to_string(),
                    field: field.clone(),
                    other: other.to_string(),
                    shape: format!("{prefix}1"),
                });
            }
        }
    }

    for (field, spec) in &block.fields {
        if spec.kind.is_list() {
            continue;
        }
        // Literal target is the field name itself.
        for (prefix, owner) in &families {
            if is_numbered_member(field, prefix) {
                return Err(ConfigError::TargetCollision {
                    block: block_name.to_string(),
                    field: field.clone(),
                    other: (*owner).to_string(),
                    shape: field.clone(),
                });
            }
        }
    }

    Ok(())
}

/// True when `name` is `<prefix><digits>` with at least one digit.
fn is_numbered_member(name: &str, prefix: &str) -> bool {
    match name.strip_prefix(prefix) {
        Some(rest) => !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_map() -> Vec<(String, usize)> {
        vec![("title".to_string(), 0), ("content".to_string(), 1)]
    }

    #[test]
    fn test_field_kind_parse_round_trip() {
        for s in [
            "str",
            "int",
            "content",
            "content_list",
            "item_list",
            "str_list",
            "image",
        ] {
            let kind = FieldKind::parse(s).unwrap();
            assert_eq!(kind.as_str(), s);
        }
        assert!(FieldKind::parse("string").is_none());
    }

    #[test]
    fn test_valid_config() {
        let blocks = [(
            "title_page".to_string(),
            PageBlock::new("title").with_field("title", FieldSpec::new(FieldKind::Str)),
        )]
        .into_iter()
        .collect();
        let config = TemplateConfig::new(type_map(), blocks).unwrap();
        assert_eq!(config.slide_index("title"), Some(0));
        assert_eq!(config.slide_index("content"), Some(1));
        assert_eq!(config.slide_index("missing"), None);
        assert!(config.block_for_type("title").is_some());
    }

    #[test]
    fn test_dangling_type_rejected() {
        let blocks = [(
            "intro_page".to_string(),
            PageBlock::new("intro").with_field("title", FieldSpec::new(FieldKind::Str)),
        )]
        .into_iter()
        .collect();
        let err = TemplateConfig::new(type_map(), blocks).unwrap_err();
        assert!(matches!(err, ConfigError::DanglingType { .. }));
    }

    #[test]
    fn test_duplicate_slide_type_rejected() {
        let blocks = [
            (
                "a_page".to_string(),
                PageBlock::new("title").with_field("title", FieldSpec::new(FieldKind::Str)),
            ),
            (
                "b_page".to_string(),
                PageBlock::new("title").with_field("other", FieldSpec::new(FieldKind::Str)),
            ),
        ]
        .into_iter()
        .collect();
        let err = TemplateConfig::new(type_map(), blocks).unwrap_err();
        assert!(matches!(err, ConfigError::DuplicateSlideType { .. }));
    }

    #[test]
    fn test_two_str_lists_collide() {
        let blocks = [(
            "content_page".to_string(),
            PageBlock::new("content")
                .with_field("points", FieldSpec::new(FieldKind::StrList))
                .with_field("tags", FieldSpec::new(FieldKind::StrList)),
        )]
        .into_iter()
        .collect();
        let err = TemplateConfig::new(type_map(), blocks).unwrap_err();
        assert!(matches!(err, ConfigError::TargetCollision { .. }));
    }

    #[test]
    fn test_literal_field_colliding_with_numbered_family() {
        let blocks = [(
            "content_page".to_string(),
            PageBlock::new("content")
                .with_field("section", FieldSpec::new(FieldKind::ContentList))
                .with_field("section2", FieldSpec::new(FieldKind::Str)),
        )]
        .into_iter()
        .collect();
        let err = TemplateConfig::new(type_map(), blocks).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::TargetCollision { ref shape, .. } if shape == "section2"
        ));
    }

    #[test]
    fn test_numbered_member_matching() {
        assert!(is_numbered_member("label1", "label"));
        assert!(is_numbered_member("label12", "label"));
        assert!(!is_numbered_member("label", "label"));
        assert!(!is_numbered_member("label1a", "label"));
        assert!(!is_numbered_member("tag1", "label"));
    }
}
