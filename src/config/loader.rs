//! YAML loading for template configurations.
//!
//! The input document has two top-level parts: a `type_map` (ordered list
//! of single-key `name: index` mappings) and any number of `<name>_page`
//! blocks, each carrying `description`, `type`, and field declarations.
//!
//! ```yaml
//! type_map:
//!   - title: 0
//!   - content: 1
//! title_page:
//!   description: Opening slide
//!   type: title
//!   title:
//!     type: str
//!     max_len: 40
//! ```
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::Value;

use super::error::ConfigError;
use super::types::{FieldKind, FieldSpec, PageBlock, TemplateConfig};

/// A field declaration as it appears in YAML, before kind validation.
#[derive(Debug, Deserialize)]
struct RawFieldSpec {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    min_len: Option<u64>,
    #[serde(default)]
    max_len: Option<u64>,
    #[serde(default)]
    optional: Option<bool>,
}

/// A page block as it appears in YAML. Every key other than `description`
/// and `type` is a field declaration.
#[derive(Debug, Deserialize)]
struct RawPageBlock {
    #[serde(default)]
    description: Option<String>,
    #[serde(rename = "type")]
    slide_type: String,
    #[serde(flatten)]
    fields: BTreeMap<String, RawFieldSpec>,
}

impl TemplateConfig {
    /// Load and validate a template configuration from YAML text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use longan::config::TemplateConfig;
    ///
    /// let yaml = r#"
    /// type_map:
    ///   - title: 0
    /// title_page:
    ///   type: title
    ///   title:
    ///     type: str
    /// "#;
    /// let config = TemplateConfig::from_yaml_str(yaml)?;
    /// assert_eq!(config.slide_index("title"), Some(0));
    /// # Ok::<(), longan::config::ConfigError>(())
    /// ```
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let doc: Value =
            serde_saphyr::from_str(yaml).map_err(|e| ConfigError::Yaml(e.to_string()))?;
        let Value::Object(entries) = doc else {
            return Err(ConfigError::Yaml(
                "top level must be a mapping".to_string(),
            ));
        };

        let mut type_map = None;
        let mut blocks = BTreeMap::new();

        for (key, value) in entries {
            if key == "type_map" {
                type_map = Some(parse_type_map(value)?);
            } else if key.ends_with("_page") {
                let raw: RawPageBlock = serde_json::from_value(value)
                    .map_err(|e| ConfigError::Yaml(format!("page block '{key}': {e}")))?;
                let block = build_block(&key, raw)?;
                blocks.insert(key, block);
            } else {
                return Err(ConfigError::UnexpectedKey { key });
            }
        }

        let type_map = type_map
            .ok_or_else(|| ConfigError::Yaml("missing required key 'type_map'".to_string()))?;
        TemplateConfig::new(type_map, blocks)
    }

    /// Load and validate a template configuration from a YAML file.
    pub fn from_yaml_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }
}

/// Parse the `type_map` list of single-key `name: index` mappings,
/// preserving declaration order.
fn parse_type_map(value: Value) -> Result<Vec<(String, usize)>, ConfigError> {
    let Value::Array(entries) = value else {
        return Err(ConfigError::Yaml(
            "type_map must be a list of single-key mappings".to_string(),
        ));
    };

    let mut type_map = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let Value::Object(map) = entry else {
            return Err(ConfigError::InvalidTypeMapEntry { index });
        };
        if map.len() != 1 {
            return Err(ConfigError::InvalidTypeMapEntry { index });
        }
        let (name, slide_index) = map.into_iter().next().unwrap_or_default();
        let slide_index = slide_index
            .as_u64()
            .ok_or(ConfigError::InvalidTypeMapEntry { index })?;
        type_map.push((name, slide_index as usize));
    }
    Ok(type_map)
}

/// Turn a raw page block into a validated [`PageBlock`], resolving each
/// field's kind string.
fn build_block(block_name: &str, raw: RawPageBlock) -> Result<PageBlock, ConfigError> {
    let mut fields = BTreeMap::new();
    for (field_name, raw_field) in raw.fields {
        let kind =
            FieldKind::parse(&raw_field.kind).ok_or_else(|| ConfigError::UnknownFieldKind {
                block: block_name.to_string(),
                field: field_name.clone(),
                kind: raw_field.kind.clone(),
            })?;
        fields.insert(
            field_name,
            FieldSpec {
                kind,
                description: raw_field.description,
                min_len: raw_field.min_len,
                max_len: raw_field.max_len,
                optional: raw_field.optional.unwrap_or(false),
            },
        );
    }
    Ok(PageBlock {
        description: raw.description,
        slide_type: raw.slide_type,
        fields,
    })
}
