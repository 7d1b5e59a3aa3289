use crate::shape::ShapeKind;
use eframe::egui;

/// Toolbar button for one shape tool, drawn with a small glyph of the shape
pub struct ToolButton {
    pub kind: ShapeKind,
    pub selected: bool,
}

impl ToolButton {
    pub fn new(kind: ShapeKind, selected: bool) -> Self {
        Self { kind, selected }
    }

    pub fn show(&self, ui: &mut egui::Ui) -> egui::Response {
        let button_size = egui::vec2(96.0, 28.0);
        let (rect, response) = ui.allocate_exact_size(button_size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let bg_color = if self.selected {
                egui::Color32::from_rgb(100, 181, 246) // Light blue when selected
            } else if response.hovered() {
                egui::Color32::from_gray(70)
            } else {
                egui::Color32::from_gray(50)
            };
            let fg_color = if self.selected {
                egui::Color32::BLACK
            } else {
                egui::Color32::WHITE
            };

            ui.painter().rect_filled(rect, 4.0, bg_color);

            // Glyph on the left, label on the right
            let glyph = egui::Rect::from_center_size(
                egui::pos2(rect.left() + 16.0, rect.center().y),
                egui::vec2(16.0, 12.0),
            );
            let glyph_stroke = egui::Stroke::new(1.5, fg_color);
            match self.kind {
                ShapeKind::Rectangle => {
                    ui.painter().rect_stroke(glyph, 0.0, glyph_stroke);
                }
                ShapeKind::Ellipse => {
                    ui.painter().add(egui::Shape::ellipse_stroke(
                        glyph.center(),
                        glyph.size() / 2.0,
                        glyph_stroke,
                    ));
                }
            }

            ui.painter().text(
                egui::pos2(rect.left() + 30.0, rect.center().y),
                egui::Align2::LEFT_CENTER,
                self.kind.label(),
                egui::FontId::proportional(14.0),
                fg_color,
            );

            if self.selected {
                ui.painter().rect_stroke(
                    rect,
                    4.0,
                    egui::Stroke::new(2.0, egui::Color32::from_rgb(33, 150, 243)),
                );
            }
        }

        response.on_hover_text(format!("Draw a {}", self.kind.label().to_lowercase()))
    }
}
