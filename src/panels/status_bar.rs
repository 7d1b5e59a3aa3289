use crate::controller::Controller;
use crate::ShapeApp;

/// One-line summary of what the editor is doing
pub fn status_text(controller: &Controller) -> String {
    let activity = match controller.active_shape() {
        Some(shape) => format!("Drawing {}", shape.geometry().kind().label()),
        None => "Ready".to_owned(),
    };

    let config = controller.config();
    let tool = config.tool().map_or("none", |kind| kind.label());
    let fill = if config.filled() { "filled" } else { "outline" };

    format!(
        "{} | Shapes: {} | Tool: {} | Stroke: {:.1} | {}",
        activity,
        controller.history().len(),
        tool,
        config.stroke_width().get(),
        fill
    )
}

pub fn status_bar(app: &ShapeApp, ctx: &egui::Context) {
    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        ui.label(status_text(app.controller()));
    });
}
