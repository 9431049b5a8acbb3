//! Shape types for the in-memory deck model.
use bytes::Bytes;

use crate::content::Paragraph;

/// Shape position and size in EMUs (914400 EMU = 1 inch).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShapeGeometry {
    /// X position (left edge) in EMUs
    pub x: i64,
    /// Y position (top edge) in EMUs
    pub y: i64,
    /// Width in EMUs
    pub width: i64,
    /// Height in EMUs
    pub height: i64,
}

/// A text frame holding ordered paragraphs with outline structure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextFrame {
    /// Paragraphs in display order.
    pub paragraphs: Vec<Paragraph>,
}

impl TextFrame {
    /// Create a text frame with a single plain paragraph.
    pub fn from_text(text: &str) -> Self {
        Self {
            paragraphs: vec![Paragraph::plain(text)],
        }
    }

    /// All paragraph text joined with newlines.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for para in &self.paragraphs {
            if !out.is_empty() {
                out.push('\n');
            }
            out.push_str(&para.text);
        }
        out
    }
}

/// A table grid with fixed dimensions. Cells are stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    n_rows: usize,
    n_cols: usize,
    cells: Vec<String>,
}

impl Table {
    /// Create an empty grid of the given dimensions.
    pub fn new(n_rows: usize, n_cols: usize) -> Self {
        Self {
            n_rows,
            n_cols,
            cells: vec![String::new(); n_rows * n_cols],
        }
    }

    /// Number of rows, header row included.
    #[inline]
    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    /// Number of columns.
    #[inline]
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    /// Cell text at `(row, col)`, or `None` when out of range.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        if row < self.n_rows && col < self.n_cols {
            Some(self.cells[row * self.n_cols + col].as_str())
        } else {
            None
        }
    }

    /// Write cell text at `(row, col)`. Returns false when out of range.
    pub fn set_cell(&mut self, row: usize, col: usize, text: &str) -> bool {
        if row < self.n_rows && col < self.n_cols {
            self.cells[row * self.n_cols + col] = text.to_string();
            true
        } else {
            false
        }
    }
}

/// An image placed on a slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture {
    /// Raw image bytes.
    pub data: Bytes,
    /// URL the image was fetched from, when known.
    pub source_url: Option<String>,
    /// Caption / alternative text.
    pub caption: Option<String>,
}

impl Picture {
    /// Create a picture from raw bytes.
    pub fn new(data: Bytes) -> Self {
        Self {
            data,
            source_url: None,
            caption: None,
        }
    }

    /// Builder method: record the source URL.
    #[inline]
    pub fn with_source_url(mut self, url: &str) -> Self {
        self.source_url = Some(url.to_string());
        self
    }

    /// Builder method: set the caption.
    #[inline]
    pub fn with_caption(mut self, caption: &str) -> Self {
        self.caption = Some(caption.to_string());
        self
    }
}

/// What a shape holds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShapeContent {
    /// An empty named region awaiting content.
    Placeholder,
    /// A text frame.
    TextFrame(TextFrame),
    /// A table grid.
    Table(Table),
    /// A placed image.
    Picture(Picture),
    /// A group of child shapes.
    Group(Vec<Shape>),
}

/// A named shape on a slide.
///
/// Shape names are the binding targets for rendering: a generated field
/// named `title` is written into the shape named `title` on the duplicated
/// slide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    /// Shape name, unique within its slide for unambiguous binding.
    name: String,
    /// Position and size.
    geometry: ShapeGeometry,
    /// Shape content.
    content: ShapeContent,
}

impl Shape {
    /// Create a shape with explicit geometry and content.
    pub fn new(name: &str, geometry: ShapeGeometry, content: ShapeContent) -> Self {
        Self {
            name: name.to_string(),
            geometry,
            content,
        }
    }

    /// Create an empty placeholder shape.
    pub fn placeholder(name: &str) -> Self {
        Self::new(name, ShapeGeometry::default(), ShapeContent::Placeholder)
    }

    /// Create a text box shape with a single plain paragraph.
    pub fn text_box(name: &str, text: &str) -> Self {
        Self::new(
            name,
            ShapeGeometry::default(),
            ShapeContent::TextFrame(TextFrame::from_text(text)),
        )
    }

    /// Create a group shape from child shapes.
    pub fn group(name: &str, children: Vec<Shape>) -> Self {
        Self::new(name, ShapeGeometry::default(), ShapeContent::Group(children))
    }

    /// Builder method: set the geometry.
    #[inline]
    pub fn with_geometry(mut self, geometry: ShapeGeometry) -> Self {
        self.geometry = geometry;
        self
    }

    /// Get the shape name.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the geometry.
    #[inline]
    pub fn geometry(&self) -> ShapeGeometry {
        self.geometry
    }

    /// Get the content.
    #[inline]
    pub fn content(&self) -> &ShapeContent {
        &self.content
    }

    /// Get the content mutably.
    #[inline]
    pub fn content_mut(&mut self) -> &mut ShapeContent {
        &mut self.content
    }

    /// Replace whatever the shape holds with a single plain paragraph.
    pub fn set_text(&mut self, text: &str) {
        self.content = ShapeContent::TextFrame(TextFrame::from_text(text));
    }

    /// Replace whatever the shape holds with the given paragraphs.
    pub fn set_paragraphs(&mut self, paragraphs: Vec<Paragraph>) {
        self.content = ShapeContent::TextFrame(TextFrame { paragraphs });
    }

    /// Replace whatever the shape holds with a table grid.
    pub fn set_table(&mut self, table: Table) {
        self.content = ShapeContent::Table(table);
    }

    /// Substitute a picture for this shape's content.
    ///
    /// The placeholder's name and geometry survive, so later lookups and
    /// layout stay valid; the previous content is discarded (replacement,
    /// not overlay).
    pub fn set_picture(&mut self, picture: Picture) {
        self.content = ShapeContent::Picture(picture);
    }

    /// Text currently held by the shape, if it holds a text frame.
    pub fn text(&self) -> Option<String> {
        match &self.content {
            ShapeContent::TextFrame(frame) => Some(frame.text()),
            _ => None,
        }
    }

    /// The table grid, if the shape holds one.
    pub fn table(&self) -> Option<&Table> {
        match &self.content {
            ShapeContent::Table(table) => Some(table),
            _ => None,
        }
    }

    /// The placed picture, if the shape holds one.
    pub fn picture(&self) -> Option<&Picture> {
        match &self.content {
            ShapeContent::Picture(picture) => Some(picture),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_frame_join() {
        let frame = TextFrame {
            paragraphs: vec![Paragraph::plain("a"), Paragraph::bullet("b", 1)],
        };
        assert_eq!(frame.text(), "a\nb");
    }

    #[test]
    fn test_table_cells() {
        let mut table = Table::new(2, 3);
        assert!(table.set_cell(0, 0, "h1"));
        assert!(table.set_cell(1, 2, "x"));
        assert!(!table.set_cell(2, 0, "oob"));
        assert_eq!(table.cell(0, 0), Some("h1"));
        assert_eq!(table.cell(1, 2), Some("x"));
        assert_eq!(table.cell(1, 1), Some(""));
        assert_eq!(table.cell(2, 0), None);
    }

    #[test]
    fn test_picture_replacement_keeps_name_and_geometry() {
        let geometry = ShapeGeometry {
            x: 10,
            y: 20,
            width: 300,
            height: 400,
        };
        let mut shape = Shape::placeholder("figure").with_geometry(geometry);
        shape.set_picture(Picture::new(Bytes::from_static(b"\x89PNG")));
        assert_eq!(shape.name(), "figure");
        assert_eq!(shape.geometry(), geometry);
        assert!(shape.picture().is_some());
    }
}
