use crate::shape::DrawnShape;

/// Shapes drawn so far, oldest first.
///
/// This is the source of truth for the canvas: replaying it onto an empty
/// buffer reproduces what the user sees.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeHistory {
    shapes: Vec<DrawnShape>,
}

impl ShapeHistory {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self { shapes: Vec::new() }
    }

    /// Record a finished shape
    pub fn append(&mut self, shape: DrawnShape) {
        self.shapes.push(shape);
    }

    /// Drop the most recent shape. Does nothing on an empty history.
    pub fn remove_last(&mut self) -> Option<DrawnShape> {
        self.shapes.pop()
    }

    /// Forget every shape
    pub fn clear(&mut self) {
        self.shapes.clear();
    }

    /// Returns true if there is a shape that can be undone
    pub fn can_undo(&self) -> bool {
        !self.shapes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn last(&self) -> Option<&DrawnShape> {
        self.shapes.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DrawnShape> {
        self.shapes.iter()
    }

    pub fn as_slice(&self) -> &[DrawnShape] {
        &self.shapes
    }
}

impl<'a> IntoIterator for &'a ShapeHistory {
    type Item = &'a DrawnShape;
    type IntoIter = std::slice::Iter<'a, DrawnShape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}
