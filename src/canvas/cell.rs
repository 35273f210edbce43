//! A single character position on the canvas.

use super::color::{nearest_palette_index, palette_index_to_bg, palette_index_to_fg, Color};

/// One grid position: glyph, colors and style flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub ch: char,
    pub fg: Color,
    pub bg: Color,
    pub bold: bool,
    pub blink: bool,
    pub reverse: bool,
}

impl Default for Cell {
    fn default() -> Self {
        Self {
            ch: ' ',
            fg: Color::DEFAULT_FG,
            bg: Color::DEFAULT_BG,
            bold: false,
            blink: false,
            reverse: false,
        }
    }
}

impl Cell {
    /// A cell holding `ch` with default attributes.
    pub fn new(ch: char) -> Self {
        Self {
            ch,
            ..Self::default()
        }
    }

    pub fn with_colors(ch: char, fg: Color, bg: Color) -> Self {
        Self {
            ch,
            fg,
            bg,
            ..Self::default()
        }
    }

    /// True for a blank cell with default colors and no style flags.
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// True when either color slot carries 24-bit color.
    pub fn is_true_color(&self) -> bool {
        self.fg.is_rgb() || self.bg.is_rgb()
    }

    /// Same cell with every true color quantized to the nearest 16-color code.
    pub fn to_ansi_16(&self) -> Cell {
        let fg = match self.fg {
            Color::Rgb(rgb) => Color::Indexed(palette_index_to_fg(nearest_palette_index(rgb))),
            indexed => indexed,
        };
        let bg = match self.bg {
            Color::Rgb(rgb) => Color::Indexed(palette_index_to_bg(nearest_palette_index(rgb))),
            indexed => indexed,
        };
        Cell { fg, bg, ..*self }
    }
}
