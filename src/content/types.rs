//! Generated-content payload types.
//!
//! These model the JSON the external generator emits against the schema:
//! a `slides` array of objects, each tagged with a slide `type` plus the
//! fields its page block declares. Rich payloads are discriminated by a
//! `content_type` tag.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One paragraph of slide text, with outline structure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph text.
    pub text: String,
    /// Whether the paragraph is a bullet item.
    #[serde(default)]
    pub bullet: bool,
    /// Outline indentation level, 0 for top level.
    #[serde(default)]
    pub level: u32,
}

impl Paragraph {
    /// Create a plain (non-bullet, level 0) paragraph.
    pub fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            bullet: false,
            level: 0,
        }
    }

    /// Create a bullet paragraph at the given outline level.
    pub fn bullet(text: &str, level: u32) -> Self {
        Self {
            text: text.to_string(),
            bullet: true,
            level,
        }
    }
}

/// Rich text payload: an ordered sequence of paragraphs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextContent {
    pub paragraphs: Vec<Paragraph>,
}

/// Image payload referencing an external URL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageContent {
    pub image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// Table payload with declared dimensions.
///
/// `n_rows` counts the full grid including the header row; `rows` holds
/// only the body rows, so a conforming payload has
/// `rows.len() + 1 == n_rows` and every row (header included) of length
/// `n_cols`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableContent {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub n_rows: usize,
    pub n_cols: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

/// A rich content payload, discriminated by its `content_type` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "content_type", rename_all = "lowercase")]
pub enum Content {
    /// Text paragraphs written into a text frame.
    Text(TextContent),
    /// An external image substituted for the placeholder shape.
    Image(ImageContent),
    /// A table grid created in place of the placeholder shape.
    Table(TableContent),
}

impl Content {
    /// The `content_type` tag strings the schema recognizes.
    pub const TAGS: [&'static str; 3] = ["text", "image", "table"];
}

/// A short title/content pair used by `item_list` fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub title: String,
    pub content: String,
}

/// A bare image reference used by `image` fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BasicImage {
    pub image_url: String,
}

/// One generated slide: its type tag plus the field values for that type.
///
/// Field values stay loosely typed (`serde_json::Value`) until bind time,
/// so a malformed payload fails that slide alone instead of failing the
/// whole document parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideContent {
    /// Slide type; must match a page block's declared type.
    #[serde(rename = "type")]
    pub slide_type: String,
    /// Field name -> generated value.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl SlideContent {
    /// Create a slide content object with no fields.
    pub fn new(slide_type: &str) -> Self {
        Self {
            slide_type: slide_type.to_string(),
            fields: Map::new(),
        }
    }

    /// Builder method: set a field value.
    pub fn with_field(mut self, name: &str, value: Value) -> Self {
        self.fields.insert(name.to_string(), value);
        self
    }

    /// Look up a generated field value.
    #[inline]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// The full generated document: an ordered sequence of slides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedDocument {
    pub slides: Vec<SlideContent>,
}

impl GeneratedDocument {
    /// Parse a generated document from JSON text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use longan::content::GeneratedDocument;
    ///
    /// let doc = GeneratedDocument::from_json_str(
    ///     r#"{"slides": [{"type": "title", "title": "Hello"}]}"#,
    /// )?;
    /// assert_eq!(doc.slides.len(), 1);
    /// assert_eq!(doc.slides[0].slide_type, "title");
    /// # Ok::<(), serde_json::Error>(())
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
