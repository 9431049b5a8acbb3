//! The slide deck container.
use super::slide::Slide;

/// A slide deck: indexable slides plus page dimensions.
///
/// The renderer uses two decks: the base template deck, borrowed immutably
/// and never modified, and the output deck it appends duplicated slides
/// to. Duplication is a deep copy (`Clone`), so the template slide stays
/// reusable however often it is instantiated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    /// Slides in presentation order.
    slides: Vec<Slide>,
    /// Slide width in EMUs (914400 EMU = 1 inch)
    slide_width: i64,
    /// Slide height in EMUs
    slide_height: i64,
}

impl Deck {
    /// Create an empty deck with default dimensions.
    ///
    /// Default size is 10" x 7.5" (standard 4:3 aspect ratio).
    pub fn new() -> Self {
        Self {
            slides: Vec::new(),
            slide_width: 9144000,  // 10 inches
            slide_height: 6858000, // 7.5 inches
        }
    }

    /// Create an empty deck with explicit dimensions in EMUs.
    pub fn with_dimensions(slide_width: i64, slide_height: i64) -> Self {
        Self {
            slides: Vec::new(),
            slide_width,
            slide_height,
        }
    }

    /// Append a slide.
    pub fn add_slide(&mut self, slide: Slide) {
        self.slides.push(slide);
    }

    /// Get a slide by index (0-based).
    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    /// Get a mutable slide by index (0-based).
    pub fn slide_mut(&mut self, index: usize) -> Option<&mut Slide> {
        self.slides.get_mut(index)
    }

    /// Slides in presentation order.
    #[inline]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Number of slides.
    #[inline]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    /// Slide width in EMUs.
    #[inline]
    pub fn slide_width(&self) -> i64 {
        self.slide_width
    }

    /// Slide height in EMUs.
    #[inline]
    pub fn slide_height(&self) -> i64 {
        self.slide_height
    }
}

impl Default for Deck {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Shape;

    #[test]
    fn test_create_deck() {
        let deck = Deck::new();
        assert_eq!(deck.slide_count(), 0);
        assert_eq!(deck.slide_width(), 9144000);
        assert_eq!(deck.slide_height(), 6858000);
    }

    #[test]
    fn test_duplication_is_a_deep_copy() {
        let mut base = Deck::new();
        base.add_slide(Slide::with_shapes(vec![Shape::placeholder("title")]));

        let mut duplicate = base.slide(0).unwrap().clone();
        duplicate.find_shape_mut("title").unwrap().set_text("Hello");

        // The template slide is untouched.
        assert!(base.slide(0).unwrap().find_shape("title").unwrap().text().is_none());
        assert_eq!(
            duplicate.find_shape("title").unwrap().text().as_deref(),
            Some("Hello")
        );
    }
}
