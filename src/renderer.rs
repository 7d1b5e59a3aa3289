mod surface;

use crate::error::CompositorError;
use crate::shape::{DrawnShape, Rgb};
use tiny_skia::Pixmap;

pub use surface::{paint_shape, PaintMode, RenderSurface};

/// Size and background of the drawing canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasSettings {
    pub width: u32,
    pub height: u32,
    pub background: Rgb,
}

impl Default for CanvasSettings {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: Rgb::WHITE,
        }
    }
}

/// Owns the persistent canvas buffer. Shapes are only ever added to it;
/// removing one means resetting and replaying whatever should remain.
#[derive(Debug, Clone)]
pub struct RasterCompositor {
    buffer: Pixmap,
    background: Rgb,
    // Bumped on every change to `buffer`, lets the UI skip redundant texture uploads
    revision: u64,
}

impl RasterCompositor {
    /// Allocates a buffer of the requested size, filled with the background color
    pub fn new(settings: CanvasSettings) -> Result<Self, CompositorError> {
        let CanvasSettings {
            width,
            height,
            background,
        } = settings;

        let mut buffer = Pixmap::new(width, height)
            .ok_or(CompositorError::InvalidDimensions { width, height })?;
        buffer.fill_background(background);

        Ok(Self {
            buffer,
            background,
            revision: 0,
        })
    }

    /// Draw a finished shape permanently into the buffer
    pub fn commit(&mut self, shape: &DrawnShape) {
        paint_shape(&mut self.buffer, shape);
        self.revision += 1;
    }

    /// Discard all drawing and flood the buffer with `background`
    pub fn reset(&mut self, background: Rgb) {
        self.background = background;
        self.buffer.fill_background(background);
        self.revision += 1;
    }

    /// Rebuild the buffer from scratch out of `shapes`, in order
    pub fn replay<'a, I>(&mut self, shapes: I)
    where
        I: IntoIterator<Item = &'a DrawnShape>,
    {
        self.buffer.fill_background(self.background);
        for shape in shapes {
            paint_shape(&mut self.buffer, shape);
        }
        self.revision += 1;
    }

    /// Composite the buffer with an optional in-progress shape on top.
    /// The persistent buffer itself is left untouched.
    pub fn render(&self, overlay: Option<&DrawnShape>) -> Pixmap {
        let mut frame = self.buffer.clone();
        if let Some(shape) = overlay {
            paint_shape(&mut frame, shape);
        }
        frame
    }

    pub fn buffer(&self) -> &Pixmap {
        &self.buffer
    }

    pub fn background(&self) -> Rgb {
        self.background
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shape::{CanvasPoint, ShapeKind, StrokeWidth};

    fn small_canvas() -> RasterCompositor {
        RasterCompositor::new(CanvasSettings {
            width: 120,
            height: 90,
            background: Rgb::WHITE,
        })
        .unwrap()
    }

    fn filled(kind: ShapeKind, from: (i32, i32), to: (i32, i32), color: Rgb) -> DrawnShape {
        DrawnShape::new(
            kind.geometry(CanvasPoint::new(from.0, from.1), CanvasPoint::new(to.0, to.1)),
            color,
            true,
            StrokeWidth::default(),
        )
    }

    fn rgb_at(pixmap: &Pixmap, x: u32, y: u32) -> (u8, u8, u8) {
        let pixel = pixmap.pixel(x, y).unwrap();
        (pixel.red(), pixel.green(), pixel.blue())
    }

    #[test]
    fn test_zero_sized_canvas_is_rejected() {
        let result = RasterCompositor::new(CanvasSettings {
            width: 0,
            height: 600,
            background: Rgb::WHITE,
        });
        assert_eq!(
            result.unwrap_err(),
            CompositorError::InvalidDimensions { width: 0, height: 600 }
        );
    }

    #[test]
    fn test_new_buffer_is_background() {
        let compositor = small_canvas();
        assert_eq!((compositor.width(), compositor.height()), (120, 90));
        assert!(compositor
            .buffer()
            .pixels()
            .iter()
            .all(|p| (p.red(), p.green(), p.blue(), p.alpha()) == (255, 255, 255, 255)));
    }

    #[test]
    fn test_commit_draws_permanently() {
        let mut compositor = small_canvas();
        let before = compositor.revision();
        compositor.commit(&filled(ShapeKind::Rectangle, (10, 10), (50, 40), Rgb::RED));

        assert!(compositor.revision() > before);
        assert_eq!(rgb_at(compositor.buffer(), 30, 25), (255, 0, 0));
        assert_eq!(rgb_at(compositor.buffer(), 5, 5), (255, 255, 255));
    }

    #[test]
    fn test_render_overlay_leaves_buffer_alone() {
        let mut compositor = small_canvas();
        compositor.commit(&filled(ShapeKind::Rectangle, (0, 0), (60, 60), Rgb::RED));
        let snapshot = compositor.buffer().clone();
        let revision = compositor.revision();

        let overlay = filled(ShapeKind::Rectangle, (20, 20), (40, 40), Rgb::BLUE);
        let frame = compositor.render(Some(&overlay));

        // Overlay wins over committed shapes
        assert_eq!(rgb_at(&frame, 30, 30), (0, 0, 255));
        assert_eq!(rgb_at(&frame, 5, 5), (255, 0, 0));
        assert_eq!(compositor.buffer().data(), snapshot.data());
        assert_eq!(compositor.revision(), revision);
    }

    #[test]
    fn test_render_without_overlay_matches_buffer() {
        let mut compositor = small_canvas();
        compositor.commit(&filled(ShapeKind::Ellipse, (10, 10), (80, 60), Rgb::BLUE));
        assert_eq!(compositor.render(None).data(), compositor.buffer().data());
    }

    #[test]
    fn test_replay_matches_incremental_commits() {
        let shapes = vec![
            filled(ShapeKind::Rectangle, (5, 5), (70, 50), Rgb::RED),
            DrawnShape::new(
                ShapeKind::Ellipse.geometry(CanvasPoint::new(100, 80), CanvasPoint::new(30, 20)),
                Rgb::BLUE,
                false,
                StrokeWidth::new(5.0).unwrap(),
            ),
            filled(ShapeKind::Ellipse, (60, 10), (110, 85), Rgb::new(0, 128, 0)),
        ];

        let mut incremental = small_canvas();
        for shape in &shapes {
            incremental.commit(shape);
        }

        let mut replayed = small_canvas();
        replayed.commit(&filled(ShapeKind::Rectangle, (0, 0), (120, 90), Rgb::BLACK));
        replayed.replay(&shapes);

        assert_eq!(incremental.buffer().data(), replayed.buffer().data());
    }

    #[test]
    fn test_reset_changes_background() {
        let mut compositor = small_canvas();
        compositor.commit(&filled(ShapeKind::Rectangle, (0, 0), (50, 50), Rgb::RED));
        compositor.reset(Rgb::BLACK);

        assert_eq!(compositor.background(), Rgb::BLACK);
        assert_eq!(rgb_at(compositor.buffer(), 10, 10), (0, 0, 0));

        // Later replays start from the new background
        compositor.replay(&Vec::new());
        assert_eq!(rgb_at(compositor.buffer(), 100, 80), (0, 0, 0));
    }
}
