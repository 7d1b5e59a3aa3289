use crate::command::{EditorCommand, ShapeHistory};
use crate::error::CompositorError;
use crate::input::{InputEvent, InputSource};
use crate::renderer::{CanvasSettings, RasterCompositor};
use crate::shape::{CanvasPoint, DrawnShape};
use crate::state::EditorState;
use crate::tools::ToolConfig;
use tiny_skia::Pixmap;

/// What an event changed, so the UI knows how much to redraw
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Damage {
    /// Nothing visible changed
    None,
    /// Only the live preview moved
    Overlay,
    /// The persistent buffer changed
    Canvas,
}

/// Owns the history and the persistent buffer, and is the only thing that mutates them.
#[derive(Debug, Clone)]
pub struct Controller {
    config: ToolConfig,
    state: EditorState,
    history: ShapeHistory,
    compositor: RasterCompositor,
}

impl Controller {
    pub fn new(settings: CanvasSettings, config: ToolConfig) -> Result<Self, CompositorError> {
        Ok(Self {
            config,
            state: EditorState::Idle,
            history: ShapeHistory::new(),
            compositor: RasterCompositor::new(settings)?,
        })
    }

    /// Dispatch every event queued in `source`, returning the largest damage seen
    pub fn pump<S: InputSource + ?Sized>(&mut self, source: &mut S) -> Damage {
        source
            .drain_events()
            .into_iter()
            .map(|event| self.handle_event(event))
            .max()
            .unwrap_or(Damage::None)
    }

    pub fn handle_event(&mut self, event: InputEvent) -> Damage {
        let before = self.state.name();
        let damage = match event {
            InputEvent::PointerDown(point) => self.begin_drag(point),
            InputEvent::PointerMove(point) => self.update_drag(point),
            InputEvent::PointerUp(point) => self.finish_drag(point),
            InputEvent::PointerCancel => self.abort_drag(),
            InputEvent::Command(command) => self.apply(command),
        };

        let after = self.state.name();
        if before != after {
            log::debug!("State {} -> {}", before, after);
        }
        damage
    }

    pub fn apply(&mut self, command: EditorCommand) -> Damage {
        log::debug!("Applying command: {}", command.name());
        match command {
            EditorCommand::SelectTool(kind) => {
                self.config = self.config.with_tool(kind);
                Damage::None
            }
            EditorCommand::SelectColor(color) => {
                self.config = self.config.with_color(color);
                Damage::None
            }
            EditorCommand::SetFilled(filled) => {
                self.config = self.config.with_filled(filled);
                Damage::None
            }
            EditorCommand::SelectStrokeWidth(width) => {
                self.config = self.config.with_stroke_width(width);
                Damage::None
            }
            EditorCommand::Undo => self.undo(),
            EditorCommand::Clear => self.clear(),
        }
    }

    fn begin_drag(&mut self, anchor: CanvasPoint) -> Damage {
        if self.state.is_dragging() {
            log::debug!("Pointer down while already dragging, ignored");
            return Damage::None;
        }

        match self.config.start_shape(anchor) {
            Some(active) => {
                log::debug!("Started {} at {:?}", active.geometry().kind().label(), anchor);
                self.state = EditorState::Dragging { anchor, active };
                Damage::Overlay
            }
            None => {
                log::debug!("Pointer down with no tool selected, ignored");
                Damage::None
            }
        }
    }

    fn update_drag(&mut self, point: CanvasPoint) -> Damage {
        match &mut self.state {
            EditorState::Dragging { anchor, active } => {
                // The shape kind is fixed when the drag starts
                *active = active.reshaped(active.geometry().kind().geometry(*anchor, point));
                Damage::Overlay
            }
            EditorState::Idle => Damage::None,
        }
    }

    fn finish_drag(&mut self, point: CanvasPoint) -> Damage {
        let EditorState::Dragging { anchor, active } = std::mem::take(&mut self.state) else {
            return Damage::None;
        };

        let shape = active.reshaped(active.geometry().kind().geometry(anchor, point));
        log::debug!("Committed {:?}", shape.geometry());
        self.compositor.commit(&shape);
        self.history.append(shape);
        Damage::Canvas
    }

    fn abort_drag(&mut self) -> Damage {
        if std::mem::take(&mut self.state).is_dragging() {
            log::debug!("Drag aborted, preview discarded");
            Damage::Overlay
        } else {
            Damage::None
        }
    }

    fn undo(&mut self) -> Damage {
        if self.history.remove_last().is_none() {
            return Damage::None;
        }

        // The buffer cannot subtract a shape, so rebuild it from what is left
        self.compositor.replay(&self.history);
        log::info!("Undo, {} shapes remain", self.history.len());
        Damage::Canvas
    }

    fn clear(&mut self) -> Damage {
        self.history.clear();
        let background = self.compositor.background();
        self.compositor.reset(background);
        log::info!("Canvas cleared");
        Damage::Canvas
    }

    /// Current frame: the persistent buffer with any in-progress shape on top
    pub fn render(&self) -> Pixmap {
        self.compositor.render(self.state.active_shape())
    }

    pub fn config(&self) -> &ToolConfig {
        &self.config
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn active_shape(&self) -> Option<&DrawnShape> {
        self.state.active_shape()
    }

    pub fn history(&self) -> &ShapeHistory {
        &self.history
    }

    pub fn compositor(&self) -> &RasterCompositor {
        &self.compositor
    }
}
