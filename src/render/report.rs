//! Structured diagnostics produced by a render run.
use crate::deck::Deck;

use super::error::SlideError;

/// Progress of one generated slide through the render pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideStatus {
    /// Not yet processed.
    Pending,
    /// The template slide was duplicated onto the output deck.
    SlideDuplicated,
    /// All fields were visited without a slide-level error.
    FieldsBound,
    /// The slide finished cleanly.
    Done,
}

/// Per-slide outcome: final status plus any slide-local errors.
#[derive(Debug, Clone)]
pub struct SlideOutcome {
    /// Position of the generated object in the input sequence.
    pub index: usize,
    /// The slide's declared type.
    pub slide_type: String,
    /// How far the slide progressed.
    pub status: SlideStatus,
    /// Slide-local errors, empty for a clean slide.
    pub errors: Vec<SlideError>,
}

impl SlideOutcome {
    pub(crate) fn new(index: usize, slide_type: String) -> Self {
        Self {
            index,
            slide_type,
            status: SlideStatus::Pending,
            errors: Vec::new(),
        }
    }

    /// Whether the slide finished cleanly.
    #[inline]
    pub fn is_done(&self) -> bool {
        self.status == SlideStatus::Done
    }
}

/// Non-fatal per-field problems, surfaced at end of run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderWarning {
    /// A shape named by the payload is absent on the duplicated slide.
    ///
    /// Covers both literal targets and numbered list targets, so a list
    /// with more entries than placeholders records one miss per skipped
    /// entry. Absence of shapes is a template-authoring problem, not a
    /// data problem.
    ShapeLookupMiss {
        slide: usize,
        field: String,
        shape: String,
    },
    /// The generated object carries a field its page block never declared.
    UndeclaredField { slide: usize, field: String },
    /// An image download failed; the placeholder shape was left intact.
    ImageFetchFailed {
        slide: usize,
        field: String,
        url: String,
        reason: String,
    },
}

/// The result of a render run: the output deck plus diagnostics.
///
/// Per-field problems degrade to partial output; the caller inspects the
/// outcomes and warnings to decide whether to retry generation or accept
/// partial slides.
#[derive(Debug)]
pub struct RenderReport {
    /// The rendered output deck.
    pub deck: Deck,
    /// One outcome per generated slide, in input order.
    pub outcomes: Vec<SlideOutcome>,
    /// Warnings accumulated over the run, in detection order.
    pub warnings: Vec<RenderWarning>,
}

impl RenderReport {
    /// True when every slide finished cleanly and no warnings were raised.
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty() && self.outcomes.iter().all(SlideOutcome::is_done)
    }

    /// Total number of slide-local errors across all outcomes.
    pub fn error_count(&self) -> usize {
        self.outcomes.iter().map(|o| o.errors.len()).sum()
    }
}
