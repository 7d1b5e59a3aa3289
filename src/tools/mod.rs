use crate::shape::{CanvasPoint, DrawnShape, Rgb, ShapeKind, StrokeWidth};
use serde::{Deserialize, Serialize};

/// Everything the toolbar controls, as one value.
///
/// Commands never edit a configuration in place: each one produces a new
/// value that replaces the old one wholesale.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct ToolConfig {
    tool: Option<ShapeKind>,
    color: Rgb,
    filled: bool,
    stroke_width: StrokeWidth,
}

impl ToolConfig {
    pub fn new(
        tool: Option<ShapeKind>,
        color: Rgb,
        filled: bool,
        stroke_width: StrokeWidth,
    ) -> Self {
        Self {
            tool,
            color,
            filled,
            stroke_width,
        }
    }

    pub fn tool(&self) -> Option<ShapeKind> {
        self.tool
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    pub fn filled(&self) -> bool {
        self.filled
    }

    pub fn stroke_width(&self) -> StrokeWidth {
        self.stroke_width
    }

    pub fn with_tool(self, tool: ShapeKind) -> Self {
        Self {
            tool: Some(tool),
            ..self
        }
    }

    pub fn with_color(self, color: Rgb) -> Self {
        Self { color, ..self }
    }

    pub fn with_filled(self, filled: bool) -> Self {
        Self { filled, ..self }
    }

    pub fn with_stroke_width(self, stroke_width: StrokeWidth) -> Self {
        Self {
            stroke_width,
            ..self
        }
    }

    /// Zero-extent shape at `anchor` in the current style, or `None` when no tool is picked
    pub fn start_shape(&self, anchor: CanvasPoint) -> Option<DrawnShape> {
        let kind = self.tool?;
        Some(DrawnShape::new(
            kind.geometry(anchor, anchor),
            self.color,
            self.filled,
            self.stroke_width,
        ))
    }
}
