//! BBS ANSI Art Library
//!
//! Parse, edit and render BBS-era ANSI artwork: CP437 text-mode files with
//! embedded escape sequences and an optional SAUCE metadata trailer.
//!
//! - [`codec`] - CP437 to Unicode and back
//! - [`parser`] - escape sequences into a [`Canvas`] of styled cells
//! - [`render`] - a canvas back out as ANSI, plain text or JSON
//! - [`pixel`] - half-block pixel editing, 16-color and true color
//! - [`repair`] - stripping sequences that break modern terminals
//! - [`sauce`] - reading and writing SAUCE records
//! - [`document`] - files on disk tying the above together

pub mod ansi_text;
pub mod canvas;
pub mod codec;
pub mod config;
pub mod document;
pub mod parser;
pub mod pixel;
pub mod render;
pub mod repair;
pub mod sauce;

pub use canvas::{Canvas, CanvasError, Cell, Color, Pen, Rgb};
pub use config::Config;
pub use document::{AnsiDocument, DocumentError, DocumentFormat};
pub use parser::{AnsiParser, Attributes};
pub use pixel::{HalfBlockCanvas, Pixel, PixelCanvas, PixelError, PixelSurface};
pub use render::{HtmlRenderer, JsonMode, JsonRenderer, Render, TerminalRenderer, TextRenderer};
pub use repair::{clean_bytes, clean_with, CleanOptions, CleanResult};
pub use sauce::SauceRecord;
