//! True-color pixel grid and its pixel-native text format.
//!
//! Each terminal row packs two pixel rows into half blocks, colored with
//! 24-bit SGR sequences:
//!
//! | top         | bottom      | glyph | fg     | bg      |
//! |-------------|-------------|-------|--------|---------|
//! | transparent | transparent | space | -      | `49`    |
//! | transparent | opaque      | `▄`   | bottom | `49`    |
//! | opaque      | transparent | `▀`   | top    | `49`    |
//! | opaque      | opaque      | `▀`   | top    | bottom  |
//!
//! Every line ends with a reset and the text ends with a newline.
//! [`PixelCanvas::parse`] reads canonical output back exactly.

use std::fmt::Write;

use super::halfblock::cell_pixels;
use super::{Pixel, PixelError, PixelSurface, LOWER_HALF, UPPER_HALF};
use crate::ansi_text::{self, Token, RESET};
use crate::canvas::color::{color256_to_rgb, sgr_to_rgb};
use crate::canvas::{Canvas, Rgb};
use crate::parser::DEFAULT_WIDTH;

const WHITE: Rgb = Rgb::new(255, 255, 255);
const BLACK: Rgb = Rgb::new(0, 0, 0);

/// Fixed-size grid of true-color pixels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCanvas {
    width: usize,
    height: usize,
    pixels: Vec<Vec<Pixel>>,
}

impl PixelCanvas {
    /// A `width` x `height` grid of opaque black pixels.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![vec![Pixel::default(); width]; height],
        }
    }

    /// Pixels shown by a cell canvas, two per cell.
    pub fn from_canvas(canvas: &Canvas) -> Self {
        let mut pixels = Vec::with_capacity(canvas.height() * 2);
        for row in canvas.rows() {
            let (top, bottom): (Vec<Pixel>, Vec<Pixel>) = row
                .iter()
                .map(|cell| {
                    let (top, bottom) = cell_pixels(cell);
                    (Pixel::from(top), Pixel::from(bottom))
                })
                .unzip();
            pixels.push(top);
            pixels.push(bottom);
        }
        Self {
            width: canvas.width(),
            height: pixels.len(),
            pixels,
        }
    }

    /// Rows of output text.
    pub fn terminal_height(&self) -> usize {
        self.height.div_ceil(2)
    }

    pub fn fill(&mut self, pixel: Pixel) {
        for row in &mut self.pixels {
            row.fill(pixel);
        }
    }

    /// Fill a rectangle, clipped to the grid.
    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, pixel: Pixel) {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        for row in self.pixels.iter_mut().take(y_end).skip(y) {
            if x < x_end {
                row[x..x_end].fill(pixel);
            }
        }
    }

    /// Change dimensions in place, keeping the overlapping pixels.
    pub fn resize(&mut self, width: usize, height: usize) {
        let mut pixels = vec![vec![Pixel::default(); width]; height];
        for (dst, src) in pixels.iter_mut().zip(&self.pixels) {
            let n = width.min(self.width);
            dst[..n].copy_from_slice(&src[..n]);
        }
        self.width = width;
        self.height = height;
        self.pixels = pixels;
    }

    /// Copy a rectangle out, clipped to the grid.
    pub fn copy_region(&self, x: usize, y: usize, w: usize, h: usize) -> Vec<Vec<Pixel>> {
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        self.pixels
            .iter()
            .take(y_end)
            .skip(y)
            .map(|row| row.get(x..x_end).map(<[Pixel]>::to_vec).unwrap_or_default())
            .collect()
    }

    /// Paste `region` with its top-left corner at `(x, y)`. Parts falling
    /// outside the grid are dropped.
    pub fn paste_region(&mut self, x: usize, y: usize, region: &[Vec<Pixel>]) {
        for (dy, src) in region.iter().enumerate() {
            let Some(row) = self.pixels.get_mut(y + dy) else {
                break;
            };
            for (dx, &pixel) in src.iter().enumerate() {
                match row.get_mut(x + dx) {
                    Some(slot) => *slot = pixel,
                    None => break,
                }
            }
        }
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> + '_ {
        self.pixels.iter().map(Vec::as_slice)
    }

    /// Read pixel-native text.
    ///
    /// Width is the longest line's visible length, height twice the line
    /// count after dropping trailing blank lines. Empty input gives an
    /// 80x2 grid.
    pub fn parse(text: &str) -> Self {
        let mut lines: Vec<&str> = text
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();
        while lines.last().is_some_and(|line| line.trim().is_empty()) {
            lines.pop();
        }
        if lines.is_empty() {
            return Self::new(DEFAULT_WIDTH, 2);
        }

        let width = lines
            .iter()
            .map(|line| ansi_text::visible_len(line))
            .max()
            .filter(|&w| w > 0)
            .unwrap_or(DEFAULT_WIDTH);
        let mut canvas = Self::new(width, lines.len() * 2);

        for (row, line) in lines.iter().enumerate() {
            let mut pen = LinePen::default();
            let mut x = 0;
            for token in ansi_text::tokens(line) {
                match token {
                    Token::Escape(seq) => {
                        let params = seq.strip_prefix("\x1b[").and_then(|s| s.strip_suffix('m'));
                        if let Some(params) = params {
                            pen.apply_sgr(params);
                        }
                    }
                    Token::Char(ch) => {
                        if x < width {
                            let (top, bottom) = pen.pixels(ch);
                            canvas.pixels[row * 2][x] = top;
                            canvas.pixels[row * 2 + 1][x] = bottom;
                        }
                        x += 1;
                    }
                }
            }
        }
        canvas
    }

    fn bounds_check(&self, x: usize, y: usize) -> Result<(), PixelError> {
        if x >= self.width || y >= self.height {
            return Err(PixelError::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    fn render_line(&self, row: usize) -> String {
        let mut line = String::new();
        let mut last_fg: Option<Rgb> = None;
        let mut last_bg: Option<Rgb> = None;
        let mut bg_transparent = false;

        for x in 0..self.width {
            let top = self.pixels[row * 2][x];
            let bottom = self
                .pixels
                .get(row * 2 + 1)
                .map(|r| r[x])
                .unwrap_or_else(Pixel::transparent);

            let (ch, fg, bg) = match (top.transparent, bottom.transparent) {
                (true, true) => (' ', None, None),
                (true, false) => (LOWER_HALF, Some(bottom.color()), None),
                (false, true) => (UPPER_HALF, Some(top.color()), None),
                (false, false) => (UPPER_HALF, Some(top.color()), Some(bottom.color())),
            };

            if let Some(fg) = fg {
                if last_fg != Some(fg) {
                    let _ = write!(line, "\x1b[38;2;{};{};{}m", fg.r, fg.g, fg.b);
                    last_fg = Some(fg);
                }
            }
            match bg {
                None if !bg_transparent => {
                    line.push_str("\x1b[49m");
                    bg_transparent = true;
                }
                Some(bg) if bg_transparent || last_bg != Some(bg) => {
                    let _ = write!(line, "\x1b[48;2;{};{};{}m", bg.r, bg.g, bg.b);
                    last_bg = Some(bg);
                    bg_transparent = false;
                }
                _ => {}
            }
            line.push(ch);
        }
        line.push_str(RESET);
        line
    }
}

impl PixelSurface for PixelCanvas {
    fn width(&self) -> usize {
        self.width
    }

    fn pixel_height(&self) -> usize {
        self.height
    }

    fn get_pixel(&self, x: usize, y: usize) -> Result<Pixel, PixelError> {
        self.bounds_check(x, y)?;
        Ok(self.pixels[y][x])
    }

    fn set_pixel(&mut self, x: usize, y: usize, pixel: Pixel) -> Result<(), PixelError> {
        self.bounds_check(x, y)?;
        self.pixels[y][x] = pixel;
        Ok(())
    }

    fn render(&self) -> String {
        let mut out = (0..self.terminal_height())
            .map(|row| self.render_line(row))
            .collect::<Vec<_>>()
            .join("\n");
        out.push('\n');
        out
    }
}

/// Color state while reading one line of pixel-native text.
#[derive(Debug, Clone, Copy)]
struct LinePen {
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    bg_transparent: bool,
}

impl Default for LinePen {
    fn default() -> Self {
        Self {
            fg: None,
            bg: None,
            bg_transparent: true,
        }
    }
}

impl LinePen {
    fn apply_sgr(&mut self, params: &str) {
        if params.is_empty() {
            *self = Self::default();
            return;
        }
        let codes: Vec<u16> = params
            .split(';')
            .map(|p| p.parse().unwrap_or(0))
            .collect();
        let mut iter = codes.into_iter();
        while let Some(code) = iter.next() {
            match code {
                0 => *self = Self::default(),
                38 => {
                    if let Some(rgb) = extended_color(&mut iter) {
                        self.fg = Some(rgb);
                    }
                }
                39 => self.fg = None,
                48 => {
                    if let Some(rgb) = extended_color(&mut iter) {
                        self.bg = Some(rgb);
                        self.bg_transparent = false;
                    }
                }
                49 => {
                    self.bg = None;
                    self.bg_transparent = true;
                }
                30..=37 | 90..=97 => self.fg = Some(sgr_to_rgb(code as u8)),
                40..=47 | 100..=107 => {
                    self.bg = Some(sgr_to_rgb(code as u8));
                    self.bg_transparent = false;
                }
                _ => {}
            }
        }
    }

    fn fg_pixel(&self) -> Pixel {
        Pixel::from(self.fg.unwrap_or(WHITE))
    }

    fn bg_pixel(&self) -> Pixel {
        if self.bg_transparent {
            Pixel::transparent()
        } else {
            Pixel::from(self.bg.unwrap_or(BLACK))
        }
    }

    /// `(top, bottom)` pixels of a glyph drawn with this pen.
    fn pixels(&self, ch: char) -> (Pixel, Pixel) {
        match ch {
            LOWER_HALF => (self.bg_pixel(), self.fg_pixel()),
            ' ' => (self.bg_pixel(), self.bg_pixel()),
            _ => (self.fg_pixel(), self.bg_pixel()),
        }
    }
}

fn extended_color(iter: &mut impl Iterator<Item = u16>) -> Option<Rgb> {
    match iter.next()? {
        2 => {
            let r = iter.next()?;
            let g = iter.next()?;
            let b = iter.next()?;
            Some(Rgb::new(clamp(r), clamp(g), clamp(b)))
        }
        5 => iter.next().map(|n| color256_to_rgb(clamp(n))),
        _ => None,
    }
}

fn clamp(value: u16) -> u8 {
    value.min(255) as u8
}
