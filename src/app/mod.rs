pub mod render;
pub mod session;

pub use render::{render, render_json, render_text, OutputFormat};
pub use session::{Command, Session};
