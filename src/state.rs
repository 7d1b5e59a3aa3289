//! The interaction state machine for the shape editor.
//!
//! Only pointer events move the editor between states. Commands (undo,
//! clear, tool settings) are accepted in either state and never change it.
//!
//! ```text
//!               pointer-down (tool picked)
//!   ┌──────────┐ ───────────────────────► ┌────────────┐ ◄─┐
//!   │   Idle   │                          │  Dragging  │   │ pointer-move
//!   └──────────┘ ◄─────────────────────── └────────────┘ ──┘
//!                pointer-up (commit) or
//!                cancel (discard)
//! ```

use crate::shape::{CanvasPoint, DrawnShape};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EditorState {
    /// Waiting for the pointer to go down on the canvas
    #[default]
    Idle,
    /// A shape is being dragged out
    Dragging {
        /// Where the pointer went down; one corner of the shape
        anchor: CanvasPoint,
        /// Live preview. Not part of the history until the pointer is released.
        active: DrawnShape,
    },
}

impl EditorState {
    pub fn active_shape(&self) -> Option<&DrawnShape> {
        match self {
            Self::Dragging { active, .. } => Some(active),
            Self::Idle => None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "Idle",
            Self::Dragging { .. } => "Dragging",
        }
    }
}
