use crate::ShapeApp;

pub fn central_panel(app: &mut ShapeApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::both().show(ui, |ui| {
            let compositor = app.controller().compositor();
            let size = egui::vec2(compositor.width() as f32, compositor.height() as f32);
            let (response, painter) = ui.allocate_painter(size, egui::Sense::drag());
            let canvas_rect = response.rect;

            // Handle input, then paint the frame it produced
            app.input_mut().capture_canvas(ctx, &response, canvas_rect.min);
            app.dispatch_input();

            let texture = app.sync_canvas_texture(ctx);
            painter.image(
                texture,
                canvas_rect,
                egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0)),
                egui::Color32::WHITE,
            );

            if app.controller().state().is_dragging() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::Crosshair);
            }
        });
    });
}
