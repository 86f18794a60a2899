//! Renderer implementations for the results area.

pub mod html;
pub mod text;

// Re-export for convenience
pub use html::{escape_html, HtmlRenderer};
pub use text::TextRenderer;
