//! Geoviz demo viewer
//!
//! Renders the sample scene to a standalone plotly HTML page. The scene
//! builder and HTML helpers live in the library so they stay testable
//! outside the binary.

pub mod html;
pub mod scene;

pub use html::{render_html, save_html, DEFAULT_HTML_FILE};
pub use scene::demo_scene;
