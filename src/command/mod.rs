mod history;

use crate::shape::{Rgb, ShapeKind, StrokeWidth};

pub use history::ShapeHistory;

/// Discrete commands coming from the toolbar and keyboard shortcuts
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EditorCommand {
    /// Pick the shape drawn by the next drag
    SelectTool(ShapeKind),
    /// Use a new drawing color
    SelectColor(Rgb),
    /// Switch between filled and outlined shapes
    SetFilled(bool),
    /// Use a new outline width
    SelectStrokeWidth(StrokeWidth),
    /// Remove the most recently drawn shape
    Undo,
    /// Remove every shape and wipe the canvas
    Clear,
}

impl EditorCommand {
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectTool(_) => "select tool",
            Self::SelectColor(_) => "select color",
            Self::SetFilled(_) => "toggle fill",
            Self::SelectStrokeWidth(_) => "select stroke width",
            Self::Undo => "undo",
            Self::Clear => "clear",
        }
    }
}
