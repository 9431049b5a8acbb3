//! Slide type for the in-memory deck model.
use super::shape::{Shape, ShapeContent};

/// A slide: an ordered collection of named shapes.
///
/// Shape lookup descends into group shapes, so a placeholder nested inside
/// a group is still addressable by name from the slide.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slide {
    /// Shapes on the slide, in z-order.
    shapes: Vec<Shape>,
}

impl Slide {
    /// Create an empty slide.
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Create a slide from shapes.
    pub fn with_shapes(shapes: Vec<Shape>) -> Self {
        Self { shapes }
    }

    /// Add a shape to the slide.
    pub fn add_shape(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Shapes on the slide, in z-order.
    #[inline]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Number of top-level shapes.
    #[inline]
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    /// Find a shape by name, descending into groups.
    pub fn find_shape(&self, name: &str) -> Option<&Shape> {
        find_in(&self.shapes, name)
    }

    /// Find a shape by name mutably, descending into groups.
    pub fn find_shape_mut(&mut self, name: &str) -> Option<&mut Shape> {
        let mut path = Vec::new();
        if !find_path(&self.shapes, name, &mut path) {
            return None;
        }

        let mut shapes = &mut self.shapes;
        for (depth, &index) in path.iter().enumerate() {
            if depth + 1 == path.len() {
                return Some(&mut shapes[index]);
            }
            match shapes[index].content_mut() {
                ShapeContent::Group(children) => shapes = children,
                _ => return None,
            }
        }
        None
    }

    /// Whether a shape with the given name exists anywhere on the slide.
    #[inline]
    pub fn contains_shape(&self, name: &str) -> bool {
        self.find_shape(name).is_some()
    }
}

/// Recursive shape lookup over a shape list.
fn find_in<'a>(shapes: &'a [Shape], name: &str) -> Option<&'a Shape> {
    for shape in shapes {
        if shape.name() == name {
            return Some(shape);
        }
        if let ShapeContent::Group(children) = shape.content() {
            if let Some(found) = find_in(children, name) {
                return Some(found);
            }
        }
    }
    None
}

/// Record the index path to the named shape, descending into groups.
fn find_path(shapes: &[Shape], name: &str, path: &mut Vec<usize>) -> bool {
    for (index, shape) in shapes.iter().enumerate() {
        if shape.name() == name {
            path.push(index);
            return true;
        }
        if let ShapeContent::Group(children) = shape.content() {
            path.push(index);
            if find_path(children, name, path) {
                return true;
            }
            path.pop();
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grouped_slide() -> Slide {
        Slide::with_shapes(vec![
            Shape::text_box("title", "Heading"),
            Shape::group(
                "grid",
                vec![
                    Shape::placeholder("item_title1"),
                    Shape::placeholder("item_content1"),
                ],
            ),
        ])
    }

    #[test]
    fn test_find_top_level_shape() {
        let slide = grouped_slide();
        assert!(slide.find_shape("title").is_some());
        assert!(slide.find_shape("missing").is_none());
    }

    #[test]
    fn test_find_shape_inside_group() {
        let slide = grouped_slide();
        assert!(slide.contains_shape("item_title1"));
        assert!(slide.contains_shape("item_content1"));
    }

    #[test]
    fn test_find_shape_mut_inside_group() {
        let mut slide = grouped_slide();
        let shape = slide.find_shape_mut("item_title1").unwrap();
        shape.set_text("First");
        assert_eq!(
            slide.find_shape("item_title1").unwrap().text().as_deref(),
            Some("First")
        );
    }
}
