use eframe_shapes::{
    Bounds, CanvasPoint, CanvasSettings, Controller, Damage, DrawnShape, EditorCommand, Geometry,
    InputEvent, RasterCompositor, Rgb, ShapeKind, StrokeWidth, ToolConfig,
};
use tiny_skia::{Pixmap, PremultipliedColorU8};

fn new_controller() -> Controller {
    Controller::new(CanvasSettings::default(), ToolConfig::default()).unwrap()
}

fn pt(x: i32, y: i32) -> CanvasPoint {
    CanvasPoint::new(x, y)
}

// Helper to drag out a shape with the given style, the way the canvas would report it
fn draw(
    controller: &mut Controller,
    kind: ShapeKind,
    color: Rgb,
    filled: bool,
    width: f32,
    from: CanvasPoint,
    to: CanvasPoint,
) {
    let mut events = vec![
        InputEvent::Command(EditorCommand::SelectTool(kind)),
        InputEvent::Command(EditorCommand::SelectColor(color)),
        InputEvent::Command(EditorCommand::SetFilled(filled)),
        InputEvent::Command(EditorCommand::SelectStrokeWidth(StrokeWidth::new(width).unwrap())),
        InputEvent::PointerDown(from),
        InputEvent::PointerMove(pt((from.x + to.x) / 2, (from.y + to.y) / 2)),
        InputEvent::PointerMove(to),
        InputEvent::PointerUp(to),
    ];
    assert_eq!(controller.pump(&mut events), Damage::Canvas);
}

fn is_background(pixmap: &Pixmap, background: Rgb) -> bool {
    pixmap.pixels().iter().all(|p| is_color(p, background))
}

fn is_color(pixel: &PremultipliedColorU8, color: Rgb) -> bool {
    (pixel.red(), pixel.green(), pixel.blue(), pixel.alpha()) == (color.r, color.g, color.b, 255)
}

#[test]
fn test_draw_filled_red_rectangle() {
    let mut controller = new_controller();
    draw(&mut controller, ShapeKind::Rectangle, Rgb::RED, true, 2.0, pt(10, 10), pt(50, 40));

    assert_eq!(controller.history().len(), 1);
    let shape = controller.history().last().unwrap();
    assert_eq!(shape.geometry(), Geometry::Rectangle(Bounds::new(10, 10, 40, 30)));
    assert_eq!(shape.color(), Rgb::RED);
    assert!(shape.filled());
    assert_eq!(shape.stroke_width().get(), 2.0);

    let pixel = controller.compositor().buffer().pixel(30, 25).unwrap();
    assert_eq!((pixel.red(), pixel.green(), pixel.blue()), (255, 0, 0));
}

#[test]
fn test_reverse_drag_normalizes() {
    let mut forward = new_controller();
    draw(&mut forward, ShapeKind::Rectangle, Rgb::RED, true, 2.0, pt(10, 10), pt(50, 40));

    let mut reverse = new_controller();
    draw(&mut reverse, ShapeKind::Rectangle, Rgb::RED, true, 2.0, pt(50, 40), pt(10, 10));

    assert_eq!(
        reverse.history().last().unwrap().geometry(),
        Geometry::Rectangle(Bounds::new(10, 10, 40, 30))
    );
    assert_eq!(forward.history(), reverse.history());
    assert_eq!(forward.compositor().buffer().data(), reverse.compositor().buffer().data());
}

#[test]
fn test_undo_leaves_only_first_shape() {
    let mut controller = new_controller();
    draw(&mut controller, ShapeKind::Rectangle, Rgb::RED, true, 2.0, pt(10, 10), pt(120, 90));
    draw(&mut controller, ShapeKind::Ellipse, Rgb::BLUE, false, 5.0, pt(200, 150), pt(60, 40));

    assert_eq!(controller.apply(EditorCommand::Undo), Damage::Canvas);
    assert_eq!(controller.history().len(), 1);

    // Same pixels as a canvas that only ever saw the first shape
    let mut expected = RasterCompositor::new(CanvasSettings::default()).unwrap();
    expected.commit(&controller.history().as_slice()[0]);
    assert_eq!(controller.compositor().buffer().data(), expected.buffer().data());
}

#[test]
fn test_clear_resets_to_background() {
    let mut controller = new_controller();
    draw(&mut controller, ShapeKind::Ellipse, Rgb::BLUE, true, 3.0, pt(100, 100), pt(300, 200));
    assert!(!is_background(controller.compositor().buffer(), Rgb::WHITE));

    assert_eq!(controller.apply(EditorCommand::Clear), Damage::Canvas);
    assert!(controller.history().is_empty());
    assert!(is_background(controller.compositor().buffer(), Rgb::WHITE));
}

#[test]
fn test_clear_on_empty_canvas_is_harmless() {
    let mut controller = new_controller();
    controller.apply(EditorCommand::Clear);
    controller.apply(EditorCommand::Undo);
    assert!(controller.history().is_empty());
    assert!(is_background(controller.compositor().buffer(), Rgb::WHITE));
}

#[test]
fn test_replay_reproduces_incremental_buffer() {
    let mut controller = new_controller();
    let mut incremental = RasterCompositor::new(CanvasSettings::default()).unwrap();

    let colors = [Rgb::RED, Rgb::BLUE, Rgb::new(30, 160, 60), Rgb::BLACK];
    for i in 0..12 {
        let kind = ShapeKind::ALL[i % 2];
        let from = pt(37 * i as i32 % 700, 53 * i as i32 % 500);
        let to = pt(from.x + 90 - 15 * i as i32, from.y - 40 + 11 * i as i32);
        let width = StrokeWidth::PRESETS[i % StrokeWidth::PRESETS.len()].get();
        draw(&mut controller, kind, colors[i % colors.len()], i % 3 == 0, width, from, to);
        incremental.commit(controller.history().last().unwrap());
    }
    assert_eq!(controller.compositor().buffer().data(), incremental.buffer().data());

    let mut replayed = RasterCompositor::new(CanvasSettings::default()).unwrap();
    replayed.replay(controller.history());
    assert_eq!(replayed.buffer().data(), incremental.buffer().data());
}

#[test]
fn test_undo_every_shape_returns_to_blank_canvas() {
    let mut controller = new_controller();
    for i in 0..4 {
        let corner = pt(i * 20, i * 20);
        let filled = i % 2 == 0;
        let opposite = corner.offset(60, 30);
        draw(&mut controller, ShapeKind::Rectangle, Rgb::RED, filled, 8.0, corner, opposite);
    }
    for remaining in (0..4).rev() {
        controller.apply(EditorCommand::Undo);
        assert_eq!(controller.history().len(), remaining);
    }
    assert!(is_background(controller.compositor().buffer(), Rgb::WHITE));
    assert_eq!(controller.apply(EditorCommand::Undo), Damage::None);
}

#[test]
fn test_preview_is_drawn_above_history_but_not_committed() {
    let mut controller = new_controller();
    draw(&mut controller, ShapeKind::Rectangle, Rgb::RED, true, 2.0, pt(0, 0), pt(100, 100));
    let committed = controller.compositor().buffer().clone();

    controller.apply(EditorCommand::SelectColor(Rgb::BLUE));
    controller.handle_event(InputEvent::PointerDown(pt(20, 20)));
    controller.handle_event(InputEvent::PointerMove(pt(60, 60)));

    let frame = controller.render();
    let pixel = frame.pixel(40, 40).unwrap();
    assert_eq!((pixel.red(), pixel.green(), pixel.blue()), (0, 0, 255));
    assert_eq!(controller.compositor().buffer().data(), committed.data());

    controller.handle_event(InputEvent::PointerCancel);
    assert_eq!(controller.render().data(), committed.data());
    assert_eq!(controller.history().len(), 1);
}

#[test]
fn test_zero_size_shape_is_recorded_but_invisible() {
    let mut controller = new_controller();
    controller.apply(EditorCommand::SelectTool(ShapeKind::Ellipse));
    controller.handle_event(InputEvent::PointerDown(pt(40, 40)));
    controller.handle_event(InputEvent::PointerUp(pt(40, 40)));

    assert_eq!(controller.history().len(), 1);
    let shape: &DrawnShape = controller.history().last().unwrap();
    assert!(shape.geometry().bounds().is_empty());
    assert!(is_background(controller.compositor().buffer(), Rgb::WHITE));
}

#[test]
fn test_flat_outline_draws_a_line() {
    let mut controller = new_controller();
    draw(&mut controller, ShapeKind::Rectangle, Rgb::BLUE, false, 8.0, pt(100, 100), pt(100, 300));

    assert_eq!(controller.history().len(), 1);
    let buffer = controller.compositor().buffer();
    assert!(is_color(&buffer.pixel(100, 200).unwrap(), Rgb::BLUE));
    assert!(is_color(&buffer.pixel(120, 200).unwrap(), Rgb::WHITE));
}

#[test]
fn test_flat_filled_shape_paints_nothing() {
    let mut controller = new_controller();
    draw(&mut controller, ShapeKind::Ellipse, Rgb::BLUE, true, 8.0, pt(100, 100), pt(300, 100));

    assert_eq!(controller.history().len(), 1);
    assert!(is_background(controller.compositor().buffer(), Rgb::WHITE));
}
