use crate::shape::{Bounds, DrawnShape, Geometry, Rgb, StrokeWidth};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Stroke, Transform};

/// How a shape's area is painted
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintMode {
    Fill,
    Stroke(StrokeWidth),
}

impl PaintMode {
    pub fn for_shape(shape: &DrawnShape) -> Self {
        if shape.filled() {
            Self::Fill
        } else {
            Self::Stroke(shape.stroke_width())
        }
    }
}

/// Drawing primitives a backend has to provide for shapes to be composited onto it
pub trait RenderSurface {
    /// Flood the whole surface with a flat color
    fn fill_background(&mut self, color: Rgb);

    fn draw_rect(&mut self, bounds: Bounds, color: Rgb, mode: PaintMode);

    fn draw_ellipse(&mut self, bounds: Bounds, color: Rgb, mode: PaintMode);
}

/// Draw one shape onto a surface.
/// Fills need area; outlines of flat shapes still show up as a line.
pub fn paint_shape<S: RenderSurface + ?Sized>(surface: &mut S, shape: &DrawnShape) {
    let geometry = shape.geometry();
    let bounds = geometry.bounds();
    let mode = PaintMode::for_shape(shape);

    let invisible = match mode {
        PaintMode::Fill => bounds.is_flat(),
        PaintMode::Stroke(_) => bounds.is_empty(),
    };
    if invisible {
        return;
    }

    match geometry {
        Geometry::Rectangle(bounds) => surface.draw_rect(bounds, shape.color(), mode),
        Geometry::Ellipse(bounds) => surface.draw_ellipse(bounds, shape.color(), mode),
    }
}

fn paint_for(color: Rgb) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, 255);
    paint.anti_alias = true;
    paint
}

fn skia_rect(bounds: Bounds) -> Option<tiny_skia::Rect> {
    tiny_skia::Rect::from_xywh(
        bounds.x as f32,
        bounds.y as f32,
        bounds.w as f32,
        bounds.h as f32,
    )
}

/// Outline of a shape with no area: the segment between its corners
fn flat_outline(bounds: Bounds) -> Option<tiny_skia::Path> {
    let (x, y) = (bounds.x as f32, bounds.y as f32);
    let mut builder = PathBuilder::new();
    builder.move_to(x, y);
    builder.line_to(x + bounds.w as f32, y + bounds.h as f32);
    builder.finish()
}

fn draw_path(pixmap: &mut Pixmap, path: &tiny_skia::Path, color: Rgb, mode: PaintMode) {
    let paint = paint_for(color);
    match mode {
        PaintMode::Fill => {
            pixmap.fill_path(path, &paint, FillRule::Winding, Transform::identity(), None);
        }
        PaintMode::Stroke(width) => {
            let stroke = Stroke {
                width: width.get(),
                ..Default::default()
            };
            pixmap.stroke_path(path, &paint, &stroke, Transform::identity(), None);
        }
    }
}

impl RenderSurface for Pixmap {
    fn fill_background(&mut self, color: Rgb) {
        self.fill(tiny_skia::Color::from_rgba8(color.r, color.g, color.b, 255));
    }

    fn draw_rect(&mut self, bounds: Bounds, color: Rgb, mode: PaintMode) {
        match mode {
            PaintMode::Fill => {
                if let Some(rect) = skia_rect(bounds) {
                    self.fill_rect(rect, &paint_for(color), Transform::identity(), None);
                }
            }
            PaintMode::Stroke(_) => {
                let path = if bounds.is_flat() {
                    flat_outline(bounds)
                } else {
                    skia_rect(bounds).map(PathBuilder::from_rect)
                };
                if let Some(path) = path {
                    draw_path(self, &path, color, mode);
                }
            }
        }
    }

    fn draw_ellipse(&mut self, bounds: Bounds, color: Rgb, mode: PaintMode) {
        let path = match mode {
            PaintMode::Stroke(_) if bounds.is_flat() => flat_outline(bounds),
            _ => skia_rect(bounds).and_then(PathBuilder::from_oval),
        };
        if let Some(path) = path {
            draw_path(self, &path, color, mode);
        }
    }
}
