#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas_texture;
pub mod command;
pub mod components;
pub mod controller;
pub mod error;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod shape;
pub mod state;
pub mod tools;

pub use app::ShapeApp;
pub use command::{EditorCommand, ShapeHistory};
pub use controller::{Controller, Damage};
pub use error::{CompositorError, ConfigError, EditorError};
pub use input::{InputEvent, InputHandler, InputSource};
pub use renderer::{CanvasSettings, RasterCompositor, RenderSurface};
pub use shape::{Bounds, CanvasPoint, DrawnShape, Geometry, Rgb, ShapeKind, StrokeWidth};
pub use state::EditorState;
pub use tools::ToolConfig;
