use crate::error::ConfigError;
use egui::Color32;
use serde::{Deserialize, Serialize};

/// Integer position on the canvas, measured from the top-left corner of the buffer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CanvasPoint {
    pub x: i32,
    pub y: i32,
}

impl CanvasPoint {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset this point, clamping at the integer range instead of wrapping
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

/// Normalized placement of a shape. Extents are unsigned, so they can never be negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Bounds {
    pub x: i32,
    pub y: i32,
    pub w: u32,
    pub h: u32,
}

impl Bounds {
    pub const fn new(x: i32, y: i32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Bounds spanned by two arbitrary corners
    pub fn from_corners(a: CanvasPoint, b: CanvasPoint) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            w: a.x.abs_diff(b.x),
            h: a.y.abs_diff(b.y),
        }
    }

    /// Both extents are zero: a single point, invisible however it is painted
    pub fn is_empty(&self) -> bool {
        self.w == 0 && self.h == 0
    }

    /// At least one extent is zero. Such a shape has no area to fill,
    /// but its outline still strokes as a line.
    pub fn is_flat(&self) -> bool {
        self.w == 0 || self.h == 0
    }
}

/// The two shapes the editor can draw
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Rectangle,
    Ellipse,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 2] = [ShapeKind::Rectangle, ShapeKind::Ellipse];

    pub fn label(self) -> &'static str {
        match self {
            Self::Rectangle => "Rectangle",
            Self::Ellipse => "Ellipse",
        }
    }

    /// Build a normalized geometry from the drag anchor and the current pointer position.
    /// Dragging in any direction yields the same geometry as the forward drag.
    pub fn geometry(self, anchor: CanvasPoint, current: CanvasPoint) -> Geometry {
        let bounds = Bounds::from_corners(anchor, current);
        match self {
            Self::Rectangle => Geometry::Rectangle(bounds),
            Self::Ellipse => Geometry::Ellipse(bounds),
        }
    }

    /// Same as [`ShapeKind::geometry`], with the free corner given as a signed width and height
    pub fn geometry_from_drag(self, anchor: CanvasPoint, dx: i32, dy: i32) -> Geometry {
        self.geometry(anchor, anchor.offset(dx, dy))
    }
}

/// Shape outline plus its placement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    Rectangle(Bounds),
    Ellipse(Bounds),
}

impl Geometry {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Self::Rectangle(_) => ShapeKind::Rectangle,
            Self::Ellipse(_) => ShapeKind::Ellipse,
        }
    }

    pub fn bounds(&self) -> Bounds {
        match self {
            Self::Rectangle(bounds) | Self::Ellipse(bounds) => *bounds,
        }
    }
}

/// Opaque drawing color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const BLUE: Rgb = Rgb::new(0, 0, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<Rgb> for Color32 {
    fn from(color: Rgb) -> Self {
        Color32::from_rgb(color.r, color.g, color.b)
    }
}

impl From<Color32> for Rgb {
    fn from(color: Color32) -> Self {
        // Alpha is dropped: the picker only hands out opaque colors
        Rgb::new(color.r(), color.g(), color.b())
    }
}

/// Outline thickness in canvas pixels. Always positive and finite.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f32", into = "f32")]
pub struct StrokeWidth(f32);

impl StrokeWidth {
    /// Widths offered in the toolbar
    pub const PRESETS: [StrokeWidth; 5] = [
        StrokeWidth(1.0),
        StrokeWidth(2.0),
        StrokeWidth(3.0),
        StrokeWidth(5.0),
        StrokeWidth(8.0),
    ];

    pub fn new(width: f32) -> Result<Self, ConfigError> {
        if width.is_finite() && width > 0.0 {
            Ok(Self(width))
        } else {
            Err(ConfigError::InvalidStrokeWidth(width))
        }
    }

    pub fn get(self) -> f32 {
        self.0
    }
}

impl Default for StrokeWidth {
    fn default() -> Self {
        Self(2.0)
    }
}

impl TryFrom<f32> for StrokeWidth {
    type Error = ConfigError;

    fn try_from(width: f32) -> Result<Self, Self::Error> {
        Self::new(width)
    }
}

impl From<StrokeWidth> for f32 {
    fn from(width: StrokeWidth) -> Self {
        width.0
    }
}

/// A finished (or in-progress) shape with the style it was drawn with.
/// There are no setters: a drawn shape is never edited after it is created.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawnShape {
    geometry: Geometry,
    color: Rgb,
    filled: bool,
    stroke_width: StrokeWidth,
}

impl DrawnShape {
    pub fn new(geometry: Geometry, color: Rgb, filled: bool, stroke_width: StrokeWidth) -> Self {
        Self {
            geometry,
            color,
            filled,
            stroke_width,
        }
    }

    pub fn geometry(&self) -> Geometry {
        self.geometry
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

    /// Same style, new outline. Used while a drag reshapes the preview.
    pub fn reshaped(&self, geometry: Geometry) -> Self {
        Self { geometry, ..*self }
    }
}
