mod central_panel;
mod status_bar;
mod tools_panel;

pub use central_panel::central_panel;
pub use status_bar::{status_bar, status_text};
pub use tools_panel::tools_panel;
