use crate::canvas_texture::CanvasTexture;
use crate::components::{ColorChoice, ColorPickerDialog};
use crate::controller::{Controller, Damage};
use crate::error::EditorError;
use crate::input::InputHandler;
use crate::panels;
use crate::renderer::CanvasSettings;
use crate::tools::ToolConfig;

/// The editor window: toolbar on top, canvas in the middle, status bar below
#[derive(Debug)]
pub struct ShapeApp {
    controller: Controller,
    input: InputHandler,
    canvas_texture: CanvasTexture,
    color_picker: ColorPickerDialog,
}

impl ShapeApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Result<Self, EditorError> {
        // Tool settings survive restarts; the drawing itself never does
        let config: ToolConfig = cc
            .storage
            .and_then(|storage| eframe::get_value(storage, eframe::APP_KEY))
            .unwrap_or_default();
        log::info!("Starting with tool settings {:?}", config);

        Self::with_settings(CanvasSettings::default(), config)
    }

    pub fn with_settings(
        settings: CanvasSettings,
        config: ToolConfig,
    ) -> Result<Self, EditorError> {
        Ok(Self {
            controller: Controller::new(settings, config)?,
            input: InputHandler::new(),
            canvas_texture: CanvasTexture::new(),
            color_picker: ColorPickerDialog::new(),
        })
    }

    pub fn controller(&self) -> &Controller {
        &self.controller
    }

    pub fn input_mut(&mut self) -> &mut InputHandler {
        &mut self.input
    }

    pub fn color_picker_mut(&mut self) -> &mut ColorPickerDialog {
        &mut self.color_picker
    }

    /// Feed every queued event to the controller
    pub fn dispatch_input(&mut self) -> Damage {
        let damage = self.controller.pump(&mut self.input);
        if damage == Damage::Canvas {
            log::debug!(
                "Canvas changed, {} shapes in history",
                self.controller.history().len()
            );
        }
        damage
    }

    pub fn sync_canvas_texture(&mut self, ctx: &egui::Context) -> egui::TextureId {
        self.canvas_texture.sync(ctx, &self.controller)
    }

    fn show_color_picker(&mut self, ctx: &egui::Context) {
        match self.color_picker.show(ctx) {
            Some(ColorChoice::Picked(color)) => {
                log::info!("Color selected from UI: {:?}", color);
                self.input.push_command(crate::command::EditorCommand::SelectColor(color));
            }
            Some(ColorChoice::Cancelled) => {
                log::debug!(
                    "Color selection cancelled, keeping {:?}",
                    self.controller.config().color()
                );
            }
            None => {}
        }
    }
}

impl eframe::App for ShapeApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self.controller.config());
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.input.capture_shortcuts(ctx);

        // Side panels have to be laid out before the central one
        panels::tools_panel(self, ctx);
        panels::status_bar(self, ctx);
        self.show_color_picker(ctx);
        panels::central_panel(self, ctx);
    }
}
