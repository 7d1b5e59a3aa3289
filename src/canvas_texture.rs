use crate::controller::Controller;
use egui::{ColorImage, Context, TextureHandle, TextureId, TextureOptions};
use tiny_skia::Pixmap;

/// Convert a rendered frame into an image egui can upload
pub fn frame_image(frame: &Pixmap) -> ColorImage {
    ColorImage::from_rgba_premultiplied(
        [frame.width() as usize, frame.height() as usize],
        frame.data(),
    )
}

/// Keeps the GPU copy of the canvas in step with the compositor
#[derive(Default)]
pub struct CanvasTexture {
    handle: Option<TextureHandle>,
    /// Compositor revision currently on the GPU. `None` when the texture holds a preview frame.
    uploaded_revision: Option<u64>,
    uploads: u64,
}

impl CanvasTexture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upload the current frame if it changed since the last call, and return the texture to paint
    pub fn sync(&mut self, ctx: &Context, controller: &Controller) -> TextureId {
        let revision = controller.compositor().revision();
        let previewing = controller.active_shape().is_some();

        if !previewing && self.uploaded_revision == Some(revision) {
            if let Some(handle) = &self.handle {
                return handle.id();
            }
        }

        let image = frame_image(&controller.render());
        let handle = match self.handle.take() {
            Some(mut handle) => {
                handle.set(image, TextureOptions::NEAREST);
                handle
            }
            None => ctx.load_texture("canvas", image, TextureOptions::NEAREST),
        };
        let id = handle.id();

        self.handle = Some(handle);
        self.uploaded_revision = (!previewing).then_some(revision);
        self.uploads += 1;
        id
    }

    /// Number of uploads so far
    pub fn uploads(&self) -> u64 {
        self.uploads
    }
}

impl std::fmt::Debug for CanvasTexture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasTexture")
            .field("uploaded_revision", &self.uploaded_revision)
            .field("uploads", &self.uploads)
            .finish()
    }
}
