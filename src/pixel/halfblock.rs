//! Pixel view over a 16-color cell grid.

use super::{Pixel, PixelError, PixelSurface, FULL_BLOCK, LOWER_HALF, UPPER_HALF};
use crate::canvas::color::{nearest_palette_index, palette_index_to_bg, palette_index_to_fg};
use crate::canvas::{Canvas, Cell, Color, Rgb};
use crate::render::{Render, TerminalRenderer};

/// Colors of the `(top, bottom)` pixels a cell shows.
///
/// Glyphs other than blocks and space read like an upper half block.
pub fn cell_pixels(cell: &Cell) -> (Rgb, Rgb) {
    let fg = cell.fg.to_rgb();
    let bg = cell.bg.to_rgb();
    match cell.ch {
        FULL_BLOCK => (fg, fg),
        LOWER_HALF => (bg, fg),
        ' ' => (bg, bg),
        _ => (fg, bg),
    }
}

/// Edits a [`Canvas`] two pixels per cell.
///
/// Writes quantize both halves of the touched cell to the 16-color
/// palette and redraw it as `█` (halves equal) or `▀`.
pub struct HalfBlockCanvas<'a> {
    canvas: &'a mut Canvas,
}

impl<'a> HalfBlockCanvas<'a> {
    pub fn new(canvas: &'a mut Canvas) -> Self {
        Self { canvas }
    }

    pub fn canvas(&self) -> &Canvas {
        self.canvas
    }
}

impl PixelSurface for HalfBlockCanvas<'_> {
    fn width(&self) -> usize {
        self.canvas.width()
    }

    fn pixel_height(&self) -> usize {
        self.canvas.height() * 2
    }

    fn get_pixel(&self, x: usize, y: usize) -> Result<Pixel, PixelError> {
        let cell = self.canvas.get(x, y / 2)?;
        let (top, bottom) = cell_pixels(&cell);
        Ok(Pixel::from(if y % 2 == 0 { top } else { bottom }))
    }

    /// Transparent pixels leave the cell untouched.
    fn set_pixel(&mut self, x: usize, y: usize, pixel: Pixel) -> Result<(), PixelError> {
        if pixel.transparent {
            return Ok(());
        }
        let cell = self.canvas.get_mut(x, y / 2)?;
        let (mut top, mut bottom) = cell_pixels(cell);
        if y % 2 == 0 {
            top = pixel.color();
        } else {
            bottom = pixel.color();
        }

        let top = nearest_palette_index(top);
        let bottom = nearest_palette_index(bottom);
        *cell = if top == bottom {
            Cell::with_colors(
                FULL_BLOCK,
                Color::Indexed(palette_index_to_fg(top)),
                Color::DEFAULT_BG,
            )
        } else {
            Cell::with_colors(
                UPPER_HALF,
                Color::Indexed(palette_index_to_fg(top)),
                Color::Indexed(palette_index_to_bg(bottom)),
            )
        };
        Ok(())
    }

    fn render(&self) -> String {
        TerminalRenderer::default().render(self.canvas)
    }
}
