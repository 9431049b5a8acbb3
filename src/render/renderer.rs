//! The template renderer: duplicates template slides and binds generated
//! field values onto named placeholder shapes.
use serde_json::Value;

use crate::config::{FieldKind, FieldSpec, TemplateConfig};
use crate::content::{BasicImage, Content, Item, SlideContent, TableContent};
use crate::deck::{Deck, Picture, Slide, Table};

use super::error::{RenderError, SlideError};
use super::fetch::{ImageFetcher, NullFetcher};
use super::report::{RenderReport, RenderWarning, SlideOutcome, SlideStatus};

/// Renders generated slide content against a base template deck.
///
/// For each generated object, in input order: resolve its `type` through
/// the configuration's `type_map`, deep-copy the template slide at that
/// index onto the output deck, and bind each field value onto the shape(s)
/// its kind targets. The base deck is never mutated.
///
/// # Examples
///
/// ```rust
/// use longan::config::TemplateConfig;
/// use longan::content::GeneratedDocument;
/// use longan::deck::{Deck, Shape, Slide};
/// use longan::render::TemplateRenderer;
///
/// let config = TemplateConfig::from_yaml_str(
///     "type_map:\n  - title: 0\ntitle_page:\n  type: title\n  title:\n    type: str\n",
/// )?;
/// let mut base = Deck::new();
/// base.add_slide(Slide::with_shapes(vec![Shape::placeholder("title")]));
///
/// let doc = GeneratedDocument::from_json_str(
///     r#"{"slides": [{"type": "title", "title": "Hello"}]}"#,
/// )?;
/// let report = TemplateRenderer::new(&config, &base).render(&doc.slides)?;
/// let title = report.deck.slide(0).unwrap().find_shape("title").unwrap();
/// assert_eq!(title.text().as_deref(), Some("Hello"));
/// # Ok::<(), longan::Error>(())
/// ```
pub struct TemplateRenderer<'a> {
    config: &'a TemplateConfig,
    base: &'a Deck,
    fetcher: &'a dyn ImageFetcher,
}

impl<'a> TemplateRenderer<'a> {
    /// Create a renderer without an image fetcher.
    ///
    /// Image fields will degrade to recorded fetch failures; use
    /// [`with_fetcher`](Self::with_fetcher) to enable downloads.
    pub fn new(config: &'a TemplateConfig, base: &'a Deck) -> Self {
        Self {
            config,
            base,
            fetcher: &NullFetcher,
        }
    }

    /// Builder method: set the image fetcher.
    pub fn with_fetcher(mut self, fetcher: &'a dyn ImageFetcher) -> Self {
        self.fetcher = fetcher;
        self
    }

    /// Render a sequence of generated slide objects into a new deck.
    ///
    /// Returns `Err` only for run-fatal failures (a slide type missing
    /// from `type_map`, or a template index outside the base deck); all
    /// per-slide and per-field problems are recorded in the returned
    /// [`RenderReport`] instead.
    pub fn render(&self, slides: &[SlideContent]) -> Result<RenderReport, RenderError> {
        let mut deck = Deck::with_dimensions(self.base.slide_width(), self.base.slide_height());
        let mut warnings = Vec::new();
        let mut outcomes = Vec::with_capacity(slides.len());

        for (slide_no, generated) in slides.iter().enumerate() {
            let mut outcome = SlideOutcome::new(slide_no, generated.slide_type.clone());

            let index = self.config.slide_index(&generated.slide_type).ok_or_else(|| {
                RenderError::UnknownSlideType {
                    slide_type: generated.slide_type.clone(),
                }
            })?;
            let template =
                self.base
                    .slide(index)
                    .ok_or_else(|| RenderError::TemplateIndexOutOfRange {
                        slide_type: generated.slide_type.clone(),
                        index,
                        slide_count: self.base.slide_count(),
                    })?;

            let mut slide = template.clone();
            outcome.status = SlideStatus::SlideDuplicated;

            match self.bind_slide(&mut slide, generated, slide_no, &mut warnings) {
                Ok(()) => {
                    outcome.status = SlideStatus::FieldsBound;
                    outcome.status = SlideStatus::Done;
                },
                Err(err) => {
                    log::warn!("slide {slide_no} ({}): {err}", generated.slide_type);
                    outcome.errors.push(err);
                },
            }

            deck.add_slide(slide);
            outcomes.push(outcome);
        }

        Ok(RenderReport {
            deck,
            outcomes,
            warnings,
        })
    }

    /// Bind all fields of one generated object onto its duplicated slide.
    fn bind_slide(
        &self,
        slide: &mut Slide,
        generated: &SlideContent,
        slide_no: usize,
        warnings: &mut Vec<RenderWarning>,
    ) -> Result<(), SlideError> {
        let Some(block) = self.config.block_for_type(&generated.slide_type) else {
            // The type is mapped but declares no fields; anything the
            // generator sent along has nowhere to go.
            for field in generated.fields.keys() {
                self.undeclared(slide_no, field, warnings);
            }
            return Ok(());
        };

        // The generator is not trusted to conform to the schema:
        // re-validate that every required field is present.
        for (name, spec) in &block.fields {
            if !spec.optional && !generated.fields.contains_key(name) {
                return Err(SlideError::MissingField { field: name.clone() });
            }
        }

        for (name, value) in &generated.fields {
            match block.fields.get(name) {
                Some(spec) => self.bind_field(slide, slide_no, name, spec, value, warnings)?,
                None => self.undeclared(slide_no, name, warnings),
            }
        }
        Ok(())
    }

    /// Bind one field value according to its declared kind.
    fn bind_field(
        &self,
        slide: &mut Slide,
        slide_no: usize,
        name: &str,
        spec: &FieldSpec,
        value: &Value,
        warnings: &mut Vec<RenderWarning>,
    ) -> Result<(), SlideError> {
        match spec.kind {
            FieldKind::Str => {
                let text = value
                    .as_str()
                    .ok_or_else(|| malformed(name, "expected a string"))?;
                self.bind_text(slide, slide_no, name, name, text, warnings);
                Ok(())
            },
            FieldKind::Int => {
                let mut buf = itoa::Buffer::new();
                let text = if let Some(signed) = value.as_i64() {
                    buf.format(signed)
                } else if let Some(unsigned) = value.as_u64() {
                    buf.format(unsigned)
                } else {
                    return Err(malformed(name, "expected an integer"));
                };
                self.bind_text(slide, slide_no, name, name, text, warnings);
                Ok(())
            },
            FieldKind::Content => self.bind_content(slide, slide_no, name, name, value, warnings),
            FieldKind::ContentList => {
                let entries = value
                    .as_array()
                    .ok_or_else(|| malformed(name, "expected a list of content payloads"))?;
                for (position, entry) in entries.iter().enumerate() {
                    let target = format!("{name}{}", position + 1);
                    if !slide.contains_shape(&target) {
                        // Extra entries beyond the available numbered
                        // placeholders are skipped, never fabricated.
                        self.miss(slide_no, name, &target, warnings);
                        continue;
                    }
                    self.bind_content(slide, slide_no, name, &target, entry, warnings)?;
                }
                Ok(())
            },
            FieldKind::ItemList => {
                let entries = value
                    .as_array()
                    .ok_or_else(|| malformed(name, "expected a list of items"))?;
                for (position, entry) in entries.iter().enumerate() {
                    let item: Item = serde_json::from_value(entry.clone())
                        .map_err(|e| malformed(name, &e.to_string()))?;
                    let n = position + 1;
                    self.bind_text(
                        slide,
                        slide_no,
                        name,
                        &format!("item_title{n}"),
                        &item.title,
                        warnings,
                    );
                    self.bind_text(
                        slide,
                        slide_no,
                        name,
                        &format!("item_content{n}"),
                        &item.content,
                        warnings,
                    );
                }
                Ok(())
            },
            FieldKind::StrList => {
                let entries = value
                    .as_array()
                    .ok_or_else(|| malformed(name, "expected a list of strings"))?;
                for (position, entry) in entries.iter().enumerate() {
                    let text = entry
                        .as_str()
                        .ok_or_else(|| malformed(name, "expected a list of strings"))?;
                    self.bind_text(
                        slide,
                        slide_no,
                        name,
                        &format!("label{}", position + 1),
                        text,
                        warnings,
                    );
                }
                Ok(())
            },
            FieldKind::Image => {
                let image: BasicImage = serde_json::from_value(value.clone())
                    .map_err(|e| malformed(name, &e.to_string()))?;
                self.bind_image(
                    slide,
                    slide_no,
                    name,
                    name,
                    &image.image_url,
                    None,
                    warnings,
                );
                Ok(())
            },
        }
    }

    /// Bind a rich content payload, dispatching on its `content_type` tag.
    fn bind_content(
        &self,
        slide: &mut Slide,
        slide_no: usize,
        field: &str,
        target: &str,
        value: &Value,
        warnings: &mut Vec<RenderWarning>,
    ) -> Result<(), SlideError> {
        match parse_content(field, value)? {
            Content::Text(text) => {
                match slide.find_shape_mut(target) {
                    Some(shape) => shape.set_paragraphs(text.paragraphs),
                    None => self.miss(slide_no, field, target, warnings),
                }
                Ok(())
            },
            Content::Image(image) => {
                self.bind_image(
                    slide,
                    slide_no,
                    field,
                    target,
                    &image.image_url,
                    image.caption.as_deref(),
                    warnings,
                );
                Ok(())
            },
            Content::Table(table) => {
                self.bind_table(slide, slide_no, field, target, &table, warnings)
            },
        }
    }

    /// Write text into the named shape, or record a lookup miss.
    fn bind_text(
        &self,
        slide: &mut Slide,
        slide_no: usize,
        field: &str,
        target: &str,
        text: &str,
        warnings: &mut Vec<RenderWarning>,
    ) {
        match slide.find_shape_mut(target) {
            Some(shape) => shape.set_text(text),
            None => self.miss(slide_no, field, target, warnings),
        }
    }

    /// Create a table grid in place of the named shape.
    ///
    /// Dimensions are validated before the shape lookup: a payload whose
    /// grid disagrees with its declared `n_rows`/`n_cols` is an error even
    /// when the target shape is missing.
    fn bind_table(
        &self,
        slide: &mut Slide,
        slide_no: usize,
        field: &str,
        target: &str,
        payload: &TableContent,
        warnings: &mut Vec<RenderWarning>,
    ) -> Result<(), SlideError> {
        let got_rows = payload.rows.len() + 1; // header occupies row 0
        let dims_ok = got_rows == payload.n_rows
            && payload.header.len() == payload.n_cols
            && payload.rows.iter().all(|row| row.len() == payload.n_cols);
        if !dims_ok {
            let got_cols = payload
                .rows
                .iter()
                .map(Vec::len)
                .chain([payload.header.len()])
                .max()
                .unwrap_or(0);
            return Err(SlideError::TableDimensionMismatch {
                field: field.to_string(),
                n_rows: payload.n_rows,
                n_cols: payload.n_cols,
                got_rows,
                got_cols,
            });
        }

        let Some(shape) = slide.find_shape_mut(target) else {
            self.miss(slide_no, field, target, warnings);
            return Ok(());
        };

        let mut table = Table::new(payload.n_rows, payload.n_cols);
        for (col, cell) in payload.header.iter().enumerate() {
            table.set_cell(0, col, cell);
        }
        for (row, cells) in payload.rows.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                table.set_cell(row + 1, col, cell);
            }
        }
        shape.set_table(table);
        Ok(())
    }

    /// Download an image and substitute it for the named placeholder.
    ///
    /// A failed download leaves the placeholder intact and records the
    /// failure; the rest of the slide still renders.
    fn bind_image(
        &self,
        slide: &mut Slide,
        slide_no: usize,
        field: &str,
        target: &str,
        url: &str,
        caption: Option<&str>,
        warnings: &mut Vec<RenderWarning>,
    ) {
        // Confirm the placeholder exists before paying for a download.
        if !slide.contains_shape(target) {
            self.miss(slide_no, field, target, warnings);
            return;
        }

        match self.fetcher.fetch(url) {
            Ok(bytes) => {
                let mut picture = Picture::new(bytes).with_source_url(url);
                if let Some(caption) = caption {
                    picture = picture.with_caption(caption);
                }
                if let Some(shape) = slide.find_shape_mut(target) {
                    shape.set_picture(picture);
                }
            },
            Err(err) => {
                log::warn!("slide {slide_no}: image download for field '{field}' failed: {err}");
                warnings.push(RenderWarning::ImageFetchFailed {
                    slide: slide_no,
                    field: field.to_string(),
                    url: url.to_string(),
                    reason: err.to_string(),
                });
            },
        }
    }

    fn miss(
        &self,
        slide_no: usize,
        field: &str,
        shape: &str,
        warnings: &mut Vec<RenderWarning>,
    ) {
        log::warn!("slide {slide_no}: no shape named '{shape}' for field '{field}'");
        warnings.push(RenderWarning::ShapeLookupMiss {
            slide: slide_no,
            field: field.to_string(),
            shape: shape.to_string(),
        });
    }

    fn undeclared(&self, slide_no: usize, field: &str, warnings: &mut Vec<RenderWarning>) {
        log::warn!("slide {slide_no}: generated field '{field}' is not declared");
        warnings.push(RenderWarning::UndeclaredField {
            slide: slide_no,
            field: field.to_string(),
        });
    }
}

/// Parse a rich content payload, distinguishing a missing or unknown
/// `content_type` tag from an otherwise malformed body.
fn parse_content(field: &str, value: &Value) -> Result<Content, SlideError> {
    let Some(tag) = value.get("content_type").and_then(Value::as_str) else {
        return Err(SlideError::MissingContentTag {
            field: field.to_string(),
        });
    };
    if !Content::TAGS.contains(&tag) {
        return Err(SlideError::UnknownContentTag {
            field: field.to_string(),
            tag: tag.to_string(),
        });
    }
    serde_json::from_value(value.clone()).map_err(|e| SlideError::MalformedPayload {
        field: field.to_string(),
        reason: e.to_string(),
    })
}

fn malformed(field: &str, reason: &str) -> SlideError {
    SlideError::MalformedPayload {
        field: field.to_string(),
        reason: reason.to_string(),
    }
}
