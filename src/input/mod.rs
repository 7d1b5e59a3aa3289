use crate::command::EditorCommand;
use crate::shape::CanvasPoint;
use egui::{Context, Key, KeyboardShortcut, Modifiers, PointerButton, Pos2, Response};

/// Events the interaction controller understands.
/// Pointer positions are already translated into canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed on the canvas
    PointerDown(CanvasPoint),
    /// Pointer moved while the primary button is held
    PointerMove(CanvasPoint),
    /// Primary button released
    PointerUp(CanvasPoint),
    /// The current drag was abandoned (Escape, or released with no known position)
    PointerCancel,
    /// A toolbar or keyboard command
    Command(EditorCommand),
}

/// Anything that can hand the controller a batch of queued events
pub trait InputSource {
    /// Take every queued event, oldest first
    fn drain_events(&mut self) -> Vec<InputEvent>;
}

impl InputSource for Vec<InputEvent> {
    fn drain_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(self)
    }
}

const UNDO_SHORTCUT: KeyboardShortcut = KeyboardShortcut::new(Modifiers::COMMAND, Key::Z);

/// Turns egui input on the canvas widget into [`InputEvent`]s, and queues
/// commands raised by the panels so everything is dispatched in one place.
#[derive(Debug, Default)]
pub struct InputHandler {
    pending: Vec<InputEvent>,
    last_pointer: Option<CanvasPoint>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a command raised by a widget
    pub fn push_command(&mut self, command: EditorCommand) {
        self.pending.push(InputEvent::Command(command));
    }

    /// Translate a screen position into canvas coordinates
    pub fn to_canvas(pos: Pos2, canvas_origin: Pos2) -> CanvasPoint {
        let local = pos - canvas_origin;
        CanvasPoint::new(local.x.round() as i32, local.y.round() as i32)
    }

    /// Inspect this frame's pointer activity on the canvas widget
    pub fn capture_canvas(&mut self, ctx: &Context, response: &Response, canvas_origin: Pos2) {
        let (press_origin, pointer_pos, escape) = ctx.input(|input| {
            (
                input.pointer.press_origin(),
                input.pointer.interact_pos(),
                input.key_pressed(Key::Escape),
            )
        });
        let pointer = pointer_pos.map(|pos| Self::to_canvas(pos, canvas_origin));

        if response.drag_started_by(PointerButton::Primary) {
            // Anchor at the press position, not where the drag was recognised
            let anchor = press_origin
                .map(|pos| Self::to_canvas(pos, canvas_origin))
                .or(pointer);
            if let Some(anchor) = anchor {
                self.pending.push(InputEvent::PointerDown(anchor));
                self.last_pointer = Some(anchor);
            }
        }

        if response.dragged_by(PointerButton::Primary) {
            if let Some(point) = pointer {
                if self.last_pointer != Some(point) {
                    self.pending.push(InputEvent::PointerMove(point));
                    self.last_pointer = Some(point);
                }
            }
        }

        // Checked before the release so a cancelled drag never commits
        if escape && self.last_pointer.is_some() {
            log::debug!("Drag cancelled from keyboard");
            self.pending.push(InputEvent::PointerCancel);
            self.last_pointer = None;
        }

        if response.drag_stopped_by(PointerButton::Primary) {
            self.pending.push(Self::stop_event(pointer, self.last_pointer));
            self.last_pointer = None;
        }
    }

    /// Event for a released drag. Without any known position the drag is abandoned.
    fn stop_event(pointer: Option<CanvasPoint>, last: Option<CanvasPoint>) -> InputEvent {
        match pointer.or(last) {
            Some(point) => InputEvent::PointerUp(point),
            None => InputEvent::PointerCancel,
        }
    }

    /// Keyboard shortcuts that map onto editor commands
    pub fn capture_shortcuts(&mut self, ctx: &Context) {
        if ctx.input_mut(|input| input.consume_shortcut(&UNDO_SHORTCUT)) {
            self.push_command(EditorCommand::Undo);
        }
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}

impl InputSource for InputHandler {
    fn drain_events(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.pending)
    }
}
