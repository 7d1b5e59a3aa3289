mod color_picker;
mod tool_button;

pub use color_picker::{ColorChoice, ColorPickerDialog};
pub use tool_button::ToolButton;
