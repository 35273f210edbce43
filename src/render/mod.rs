//! Canvas renderers.
//!
//! Every renderer reads a [`Canvas`] and produces a `String`:
//! - [`TerminalRenderer`]: minimal ANSI escape stream for display or saving
//! - [`TextRenderer`]: characters only
//! - [`JsonRenderer`]: structured cell data
//! - [`HtmlRenderer`]: `<pre>` block with inline CSS colors

pub mod html;
pub mod json;
pub mod terminal;
pub mod text;

pub use html::HtmlRenderer;
pub use json::{JsonMode, JsonRenderer};
pub use terminal::TerminalRenderer;
pub use text::TextRenderer;

use crate::canvas::Canvas;

/// Serialize a canvas to text.
///
/// Renderers only read the canvas and never fail: every canvas has a
/// valid rendering.
pub trait Render {
    fn render(&self, canvas: &Canvas) -> String;
}
