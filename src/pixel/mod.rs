//! Pixel-level editing.
//!
//! Half-block glyphs split a character cell into two vertical pixels, so
//! a canvas `h` rows tall is `2h` pixels tall. Two surfaces implement
//! [`PixelSurface`]:
//! - [`HalfBlockCanvas`]: a view over a 16-color [`Canvas`](crate::Canvas);
//!   colors are quantized to the palette on write
//! - [`PixelCanvas`]: a true-color pixel grid with transparency, stored
//!   as 24-bit escape sequences

mod halfblock;
mod truecolor;

pub use halfblock::{cell_pixels, HalfBlockCanvas};
pub use truecolor::PixelCanvas;

use crate::canvas::{CanvasError, Rgb};

/// Top pixel in fg, bottom pixel in bg.
pub const UPPER_HALF: char = '▀';
/// Bottom pixel in fg, top pixel in bg.
pub const LOWER_HALF: char = '▄';
/// Both pixels in fg.
pub const FULL_BLOCK: char = '█';

/// Errors from pixel coordinate access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PixelError {
    #[error("pixel ({x}, {y}) out of bounds ({width}x{height})")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },

    #[error(transparent)]
    Canvas(#[from] CanvasError),
}

/// One logical pixel. Transparent pixels carry no color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub transparent: bool,
}

impl Pixel {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self {
            r,
            g,
            b,
            transparent: false,
        }
    }

    pub const fn transparent() -> Self {
        Self {
            r: 0,
            g: 0,
            b: 0,
            transparent: true,
        }
    }

    pub fn color(&self) -> Rgb {
        Rgb::new(self.r, self.g, self.b)
    }

    /// Mix `other` into this pixel by `alpha` (0.0 keeps self, 1.0 gives other).
    ///
    /// A transparent side yields the other pixel unchanged.
    pub fn blend(&self, other: Pixel, alpha: f32) -> Pixel {
        if self.transparent {
            return other;
        }
        if other.transparent {
            return *self;
        }
        let alpha = alpha.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (f32::from(a) * (1.0 - alpha) + f32::from(b) * alpha) as u8;
        Pixel::rgb(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

impl From<Rgb> for Pixel {
    fn from(rgb: Rgb) -> Self {
        Pixel::rgb(rgb.r, rgb.g, rgb.b)
    }
}

/// A grid addressable by pixel.
pub trait PixelSurface {
    /// Width in pixels (equal to columns).
    fn width(&self) -> usize;

    /// Height in pixels (twice the cell rows).
    fn pixel_height(&self) -> usize;

    fn get_pixel(&self, x: usize, y: usize) -> Result<Pixel, PixelError>;

    fn set_pixel(&mut self, x: usize, y: usize, pixel: Pixel) -> Result<(), PixelError>;

    /// Serialize to ANSI text.
    fn render(&self) -> String;

    /// Plot a line with Bresenham's algorithm. Points outside the surface are skipped.
    fn draw_line(&mut self, from: (usize, usize), to: (usize, usize), pixel: Pixel) {
        let (mut x, mut y) = (from.0 as i64, from.1 as i64);
        let (x1, y1) = (to.0 as i64, to.1 as i64);
        let dx = (x1 - x).abs();
        let dy = (y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let mut err = dx - dy;
        loop {
            let _ = self.set_pixel(x as usize, y as usize, pixel);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 > -dy {
                err -= dy;
                x += sx;
            }
            if e2 < dx {
                err += dx;
                y += sy;
            }
        }
    }
}
