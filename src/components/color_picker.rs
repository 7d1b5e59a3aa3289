use crate::shape::Rgb;
use eframe::egui;

/// Outcome of a color picker session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorChoice {
    Picked(Rgb),
    Cancelled,
}

/// Modal-style window for choosing the drawing color.
///
/// The edited color is a draft: nothing changes until OK is pressed, and
/// closing the window any other way (Cancel, Escape, the title bar) reports
/// [`ColorChoice::Cancelled`].
#[derive(Debug, Default)]
pub struct ColorPickerDialog {
    open: bool,
    draft: egui::Color32,
}

impl ColorPickerDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open the dialog starting from `current`
    pub fn open(&mut self, current: Rgb) {
        self.open = true;
        self.draft = current.into();
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Close the dialog, keeping the draft only when confirmed
    pub fn close(&mut self, confirmed: bool) -> ColorChoice {
        self.open = false;
        if confirmed {
            ColorChoice::Picked(Rgb::from(self.draft))
        } else {
            ColorChoice::Cancelled
        }
    }

    /// Draw the dialog if open. Returns a choice on the frame the user closes it.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<ColorChoice> {
        if !self.open {
            return None;
        }

        let mut window_open = true;
        let mut confirmed = None;

        egui::Window::new("Choose Drawing Color")
            .open(&mut window_open)
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
            .show(ctx, |ui| {
                egui::color_picker::color_picker_color32(
                    ui,
                    &mut self.draft,
                    egui::color_picker::Alpha::Opaque,
                );
                ui.separator();
                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() {
                        confirmed = Some(true);
                    }
                    if ui.button("Cancel").clicked() {
                        confirmed = Some(false);
                    }
                });
            });

        let escape = ctx.input(|input| input.key_pressed(egui::Key::Escape));
        if confirmed.is_none() && (escape || !window_open) {
            confirmed = Some(false);
        }
        confirmed.map(|confirmed| self.close(confirmed))
    }
}
