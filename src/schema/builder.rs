//! JSON Schema generation from a template configuration.
//!
//! The emitted document describes the `{"slides": [...]}` payload the
//! external generator must produce: one `oneOf` variant per declared slide
//! type, discriminated by the `type` property, with rich payload shapes
//! shared through `$defs` so every page block reusing a structure
//! validates identically.
use serde_json::{Map, Value, json};

use crate::config::{ConfigError, FieldKind, FieldSpec, PageBlock, TemplateConfig};

/// Builds the generator-facing JSON Schema for a template configuration.
///
/// # Examples
///
/// ```rust
/// use longan::config::TemplateConfig;
/// use longan::schema::SchemaBuilder;
///
/// let config = TemplateConfig::from_yaml_str(
///     "type_map:\n  - title: 0\ntitle_page:\n  type: title\n  title:\n    type: str\n",
/// )?;
/// let schema = SchemaBuilder::new(&config).build()?;
/// assert!(schema["properties"]["slides"].is_object());
/// # Ok::<(), longan::Error>(())
/// ```
#[derive(Debug)]
pub struct SchemaBuilder<'a> {
    config: &'a TemplateConfig,
}

impl<'a> SchemaBuilder<'a> {
    /// Create a builder over the given configuration.
    #[inline]
    pub fn new(config: &'a TemplateConfig) -> Self {
        Self { config }
    }

    /// Build the schema document.
    ///
    /// Variants appear in `type_map` order. Although a validated
    /// [`TemplateConfig`] cannot hold a dangling slide type, the lookup is
    /// still checked here so a broken mapping surfaces as
    /// [`ConfigError::DanglingType`] rather than a missing variant.
    pub fn build(&self) -> Result<Value, ConfigError> {
        let mut variants = Vec::with_capacity(self.config.block_count());
        for (slide_type, _) in self.config.type_map() {
            let Some(block) = self.config.block_for_type(slide_type) else {
                // Slide types without a page block carry no fields and
                // are not offered to the generator.
                continue;
            };
            self.config
                .slide_index(slide_type)
                .ok_or_else(|| ConfigError::DanglingType {
                    block: slide_type.clone(),
                    slide_type: slide_type.clone(),
                })?;
            variants.push(variant_schema(slide_type, block));
        }

        Ok(json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "title": "Generated slide content",
            "type": "object",
            "properties": {
                "slides": {
                    "type": "array",
                    "items": { "oneOf": variants },
                },
            },
            "required": ["slides"],
            "$defs": shared_defs(),
        }))
    }

    /// Build the schema and serialize it as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, crate::Error> {
        let schema = self.build()?;
        Ok(serde_json::to_string_pretty(&schema)?)
    }
}

/// Schema variant for one slide type.
fn variant_schema(slide_type: &str, block: &PageBlock) -> Value {
    let mut properties = Map::new();
    properties.insert("type".to_string(), json!({ "const": slide_type }));

    let mut required = vec![Value::from("type")];
    for (name, spec) in &block.fields {
        properties.insert(name.clone(), field_schema(spec));
        if !spec.optional {
            required.push(Value::from(name.as_str()));
        }
    }

    let mut variant = Map::new();
    variant.insert("type".to_string(), json!("object"));
    if let Some(description) = &block.description {
        variant.insert("description".to_string(), json!(description));
    }
    variant.insert("properties".to_string(), Value::Object(properties));
    variant.insert("required".to_string(), Value::Array(required));
    Value::Object(variant)
}

/// Schema for one field declaration.
fn field_schema(spec: &FieldSpec) -> Value {
    let mut schema = match spec.kind {
        FieldKind::Str => {
            let mut s = Map::new();
            s.insert("type".to_string(), json!("string"));
            if let Some(min) = spec.min_len {
                s.insert("minLength".to_string(), json!(min));
            }
            if let Some(max) = spec.max_len {
                s.insert("maxLength".to_string(), json!(max));
            }
            s
        },
        FieldKind::Int => {
            let mut s = Map::new();
            s.insert("type".to_string(), json!("integer"));
            s
        },
        FieldKind::Content => {
            let mut s = Map::new();
            s.insert("$ref".to_string(), json!("#/$defs/content"));
            s
        },
        FieldKind::ContentList => list_schema(spec, json!({ "$ref": "#/$defs/content" })),
        FieldKind::ItemList => list_schema(spec, json!({ "$ref": "#/$defs/content_item" })),
        FieldKind::StrList => list_schema(spec, json!({ "type": "string" })),
        FieldKind::Image => {
            let mut s = Map::new();
            s.insert("$ref".to_string(), json!("#/$defs/basic_image"));
            s
        },
    };

    if let Some(description) = &spec.description {
        schema.insert("description".to_string(), json!(description));
    }
    Value::Object(schema)
}

/// Array schema with element-count constraints from `min_len`/`max_len`.
fn list_schema(spec: &FieldSpec, items: Value) -> Map<String, Value> {
    let mut s = Map::new();
    s.insert("type".to_string(), json!("array"));
    s.insert("items".to_string(), items);
    if let Some(min) = spec.min_len {
        s.insert("minItems".to_string(), json!(min));
    }
    if let Some(max) = spec.max_len {
        s.insert("maxItems".to_string(), json!(max));
    }
    s
}

/// The shared `$defs` table for rich payload shapes.
fn shared_defs() -> Value {
    json!({
        "content": {
            "oneOf": [
                { "$ref": "#/$defs/text_content" },
                { "$ref": "#/$defs/image_content" },
                { "$ref": "#/$defs/table_content" },
            ],
        },
        "text_content": {
            "type": "object",
            "properties": {
                "content_type": { "const": "text" },
                "paragraphs": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "text": { "type": "string" },
                            "bullet": { "type": "boolean" },
                            "level": { "type": "integer", "minimum": 0 },
                        },
                        "required": ["text", "bullet", "level"],
                    },
                },
            },
            "required": ["content_type", "paragraphs"],
        },
        "image_content": {
            "type": "object",
            "properties": {
                "content_type": { "const": "image" },
                "image_url": { "type": "string" },
                "caption": { "type": "string" },
            },
            "required": ["content_type", "image_url"],
        },
        "table_content": {
            "type": "object",
            "properties": {
                "content_type": { "const": "table" },
                "header": { "type": "array", "items": { "type": "string" } },
                "rows": {
                    "type": "array",
                    "items": { "type": "array", "items": { "type": "string" } },
                },
                "n_rows": { "type": "integer", "minimum": 1 },
                "n_cols": { "type": "integer", "minimum": 1 },
                "caption": { "type": "string" },
            },
            "required": ["content_type", "header", "rows", "n_rows", "n_cols"],
        },
        "content_item": {
            "type": "object",
            "properties": {
                "title": { "type": "string" },
                "content": { "type": "string" },
            },
            "required": ["title", "content"],
        },
        "basic_image": {
            "type": "object",
            "properties": {
                "image_url": { "type": "string" },
            },
            "required": ["image_url"],
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: &str = r#"
type_map:
  - title: 0
  - insight_grid: 1

title_page:
  description: Opening slide
  type: title
  title:
    type: str
    min_len: 1
    max_len: 40
  subtitle:
    type: str
    optional: true

insight_grid_page:
  description: Grid of short insights
  type: insight_grid
  heading:
    type: str
  insights:
    type: item_list
    min_len: 2
    max_len: 4
  details:
    type: content_list
  figure:
    type: image
    optional: true
"#;

    fn schema() -> Value {
        let config = TemplateConfig::from_yaml_str(CONFIG).unwrap();
        SchemaBuilder::new(&config).build().unwrap()
    }

    #[test]
    fn test_top_level_shape() {
        let schema = schema();
        assert_eq!(schema["required"], json!(["slides"]));
        let variants = schema["properties"]["slides"]["items"]["oneOf"]
            .as_array()
            .unwrap();
        assert_eq!(variants.len(), 2);
        // Variants follow type_map order.
        assert_eq!(variants[0]["properties"]["type"]["const"], json!("title"));
        assert_eq!(
            variants[1]["properties"]["type"]["const"],
            json!("insight_grid")
        );
    }

    #[test]
    fn test_string_length_constraints() {
        let schema = schema();
        let title = &schema["properties"]["slides"]["items"]["oneOf"][0]["properties"]["title"];
        assert_eq!(title["type"], json!("string"));
        assert_eq!(title["minLength"], json!(1));
        assert_eq!(title["maxLength"], json!(40));
    }

    #[test]
    fn test_optional_fields_excluded_from_required() {
        let schema = schema();
        let required = schema["properties"]["slides"]["items"]["oneOf"][0]["required"]
            .as_array()
            .unwrap();
        assert!(required.contains(&json!("type")));
        assert!(required.contains(&json!("title")));
        assert!(!required.contains(&json!("subtitle")));
    }

    #[test]
    fn test_list_constraints_map_to_items() {
        let schema = schema();
        let insights =
            &schema["properties"]["slides"]["items"]["oneOf"][1]["properties"]["insights"];
        assert_eq!(insights["type"], json!("array"));
        assert_eq!(insights["items"]["$ref"], json!("#/$defs/content_item"));
        assert_eq!(insights["minItems"], json!(2));
        assert_eq!(insights["maxItems"], json!(4));
    }

    #[test]
    fn test_complex_kinds_are_referenced_not_inlined() {
        let schema = schema();
        let variant = &schema["properties"]["slides"]["items"]["oneOf"][1]["properties"];
        assert_eq!(variant["details"]["items"]["$ref"], json!("#/$defs/content"));
        assert_eq!(variant["figure"]["$ref"], json!("#/$defs/basic_image"));
        // The referenced definitions exist.
        for def in [
            "content",
            "text_content",
            "image_content",
            "table_content",
            "content_item",
            "basic_image",
        ] {
            assert!(schema["$defs"][def].is_object(), "missing $defs/{def}");
        }
    }

    #[test]
    fn test_type_without_block_is_skipped() {
        let yaml = "type_map:\n  - title: 0\n  - blank: 1\ntitle_page:\n  type: title\n  title:\n    type: str\n";
        let config = TemplateConfig::from_yaml_str(yaml).unwrap();
        let schema = SchemaBuilder::new(&config).build().unwrap();
        let variants = schema["properties"]["slides"]["items"]["oneOf"]
            .as_array()
            .unwrap();
        assert_eq!(variants.len(), 1);
    }
}
