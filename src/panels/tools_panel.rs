use crate::command::EditorCommand;
use crate::components::ToolButton;
use crate::shape::{ShapeKind, StrokeWidth};
use crate::ShapeApp;

pub fn tools_panel(app: &mut ShapeApp, ctx: &egui::Context) {
    let config = *app.controller().config();
    let can_undo = app.controller().history().can_undo();

    let mut commands = Vec::new();
    let mut open_color_picker = false;

    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            for kind in ShapeKind::ALL {
                let selected = config.tool() == Some(kind);
                if ToolButton::new(kind, selected).show(ui).clicked() {
                    log::info!("Tool selected from UI: {}", kind.label());
                    commands.push(EditorCommand::SelectTool(kind));
                }
            }
            ui.separator();

            // Swatch of the current color next to the picker button
            let (swatch, _) = ui.allocate_exact_size(egui::vec2(18.0, 18.0), egui::Sense::hover());
            ui.painter().rect_filled(swatch, 3.0, egui::Color32::from(config.color()));
            if ui.button("Color…").clicked() {
                open_color_picker = true;
            }

            ui.label(" Stroke: ");
            let mut width = config.stroke_width();
            egui::ComboBox::from_id_salt("stroke_width")
                .selected_text(format!("{:.1}", width.get()))
                .show_ui(ui, |ui| {
                    for preset in StrokeWidth::PRESETS {
                        ui.selectable_value(&mut width, preset, format!("{:.1}", preset.get()));
                    }
                });
            if width != config.stroke_width() {
                log::info!("Stroke width selected from UI: {}", width.get());
                commands.push(EditorCommand::SelectStrokeWidth(width));
            }

            let mut filled = config.filled();
            if ui.checkbox(&mut filled, "Fill Shape").changed() {
                commands.push(EditorCommand::SetFilled(filled));
            }
            ui.separator();

            if ui.add_enabled(can_undo, egui::Button::new("Undo")).clicked() {
                commands.push(EditorCommand::Undo);
            }
            if ui.button("Clear").clicked() {
                commands.push(EditorCommand::Clear);
            }
        });
    });

    if open_color_picker {
        app.color_picker_mut().open(config.color());
    }
    for command in commands {
        app.input_mut().push_command(command);
    }
}
