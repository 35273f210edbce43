//! SGR (Select Graphic Rendition) handler.
//!
//! 16-color codes are stored as-is (bright variants are not folded into
//! bold). `38;5;N`/`48;5;N` below 16 map onto the matching 16-color code;
//! higher indices are expanded to true color. `38;2`/`48;2` carry RGB.

use super::super::performer::AnsiPerformer;
use super::super::Attributes;
use crate::canvas::color::{color256_to_rgb, palette_index_to_bg, palette_index_to_fg};
use crate::canvas::{Color, Rgb};

impl AnsiPerformer<'_> {
    /// Handle SGR (CSI m). Parameters apply left to right; unknown codes are skipped.
    pub fn handle_sgr(&mut self, params: &[u16]) {
        if params.is_empty() {
            *self.attrs = Attributes::default();
            return;
        }

        let mut iter = params.iter().peekable();

        while let Some(&param) = iter.next() {
            match param {
                0 => *self.attrs = Attributes::default(),
                1 => self.attrs.bold = true,
                5 => self.attrs.blink = true,
                22 => self.attrs.bold = false,
                25 => self.attrs.blink = false,
                30..=37 | 90..=97 => self.attrs.fg = Color::Indexed(param as u8),
                38 => {
                    if let Some(color) = parse_extended_color(&mut iter, true) {
                        self.attrs.fg = color;
                    }
                }
                39 => self.attrs.fg = Color::DEFAULT_FG,
                40..=47 | 100..=107 => self.attrs.bg = Color::Indexed(param as u8),
                48 => {
                    if let Some(color) = parse_extended_color(&mut iter, false) {
                        self.attrs.bg = color;
                    }
                }
                49 => self.attrs.bg = Color::DEFAULT_BG,
                _ => {}
            }
        }
    }
}

/// Parse the tail of a `38`/`48` extended color (256-color or RGB).
fn parse_extended_color(
    iter: &mut std::iter::Peekable<std::slice::Iter<'_, u16>>,
    is_foreground: bool,
) -> Option<Color> {
    match iter.next().copied()? {
        5 => {
            let index = channel(*iter.next()?);
            if index < 16 {
                let code = if is_foreground {
                    palette_index_to_fg(index as usize)
                } else {
                    palette_index_to_bg(index as usize)
                };
                Some(Color::Indexed(code))
            } else {
                Some(Color::Rgb(color256_to_rgb(index)))
            }
        }
        2 => {
            let r = channel(iter.next().copied().unwrap_or(0));
            let g = channel(iter.next().copied().unwrap_or(0));
            let b = channel(iter.next().copied().unwrap_or(0));
            Some(Color::Rgb(Rgb::new(r, g, b)))
        }
        _ => None,
    }
}

fn channel(value: u16) -> u8 {
    value.min(255) as u8
}
