//! Color representation and palette math.
//!
//! A cell color is either an indexed SGR code (`Indexed`) or a 24-bit
//! true color (`Rgb`). The variant makes it explicit which one a renderer
//! must honour.

use std::fmt;

use serde::{Serialize, Serializer};

/// Default foreground SGR code (white).
pub const DEFAULT_FG: u8 = 37;
/// Default background SGR code (black).
pub const DEFAULT_BG: u8 = 40;

/// A 24-bit RGB triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Squared Euclidean distance in RGB space.
    pub fn distance_sq(self, other: Rgb) -> u32 {
        let dr = i32::from(self.r) - i32::from(other.r);
        let dg = i32::from(self.g) - i32::from(other.g);
        let db = i32::from(self.b) - i32::from(other.b);
        (dr * dr + dg * dg + db * db) as u32
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self { r, g, b }
    }
}

/// Classic DOS/VGA 16-color palette, indexed 0-15.
pub const PALETTE_16: [Rgb; 16] = [
    Rgb::new(0, 0, 0),       // black
    Rgb::new(170, 0, 0),     // red
    Rgb::new(0, 170, 0),     // green
    Rgb::new(170, 85, 0),    // brown / yellow
    Rgb::new(0, 0, 170),     // blue
    Rgb::new(170, 0, 170),   // magenta
    Rgb::new(0, 170, 170),   // cyan
    Rgb::new(170, 170, 170), // light gray
    Rgb::new(85, 85, 85),    // dark gray
    Rgb::new(255, 85, 85),   // bright red
    Rgb::new(85, 255, 85),   // bright green
    Rgb::new(255, 255, 85),  // bright yellow
    Rgb::new(85, 85, 255),   // bright blue
    Rgb::new(255, 85, 255),  // bright magenta
    Rgb::new(85, 255, 255),  // bright cyan
    Rgb::new(255, 255, 255), // white
];

/// Index of the palette entry nearest to `rgb`.
///
/// Ties resolve to the lowest index.
pub fn nearest_palette_index(rgb: Rgb) -> usize {
    let mut best = 0;
    let mut best_distance = u32::MAX;
    for (idx, entry) in PALETTE_16.iter().enumerate() {
        let distance = rgb.distance_sq(*entry);
        if distance < best_distance {
            best_distance = distance;
            best = idx;
        }
    }
    best
}

/// Foreground SGR code for a palette index (0-15).
pub fn palette_index_to_fg(index: usize) -> u8 {
    let index = (index & 0x0F) as u8;
    if index < 8 {
        30 + index
    } else {
        90 + index - 8
    }
}

/// Background SGR code for a palette index (0-15).
pub fn palette_index_to_bg(index: usize) -> u8 {
    palette_index_to_fg(index) + 10
}

/// Palette index of a 16-color SGR code (fg or bg domain).
pub fn sgr_to_palette_index(code: u8) -> Option<usize> {
    match code {
        30..=37 => Some((code - 30) as usize),
        40..=47 => Some((code - 40) as usize),
        90..=97 => Some((code - 90 + 8) as usize),
        100..=107 => Some((code - 100 + 8) as usize),
        _ => None,
    }
}

/// RGB for a 16-color SGR code. Unknown codes fall back to light gray.
pub fn sgr_to_rgb(code: u8) -> Rgb {
    sgr_to_palette_index(code)
        .map(|idx| PALETTE_16[idx])
        .unwrap_or(PALETTE_16[7])
}

/// Expand an xterm 256-color index to RGB.
///
/// 0-15 use the 16-color palette, 16-231 the 6x6x6 cube and 232-255 the
/// grayscale ramp.
pub fn color256_to_rgb(index: u8) -> Rgb {
    match index {
        0..=15 => PALETTE_16[index as usize],
        16..=231 => {
            let idx = index - 16;
            let level = |v: u8| if v == 0 { 0 } else { 55 + v * 40 };
            Rgb::new(level(idx / 36), level((idx / 6) % 6), level(idx % 6))
        }
        232..=255 => {
            let gray = 8 + (index - 232) * 10;
            Rgb::new(gray, gray, gray)
        }
    }
}

/// A cell color slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// 16-color SGR code (30-37/90-97 foreground, 40-47/100-107 background).
    Indexed(u8),
    /// 24-bit true color.
    Rgb(Rgb),
}

impl Color {
    pub const DEFAULT_FG: Color = Color::Indexed(DEFAULT_FG);
    pub const DEFAULT_BG: Color = Color::Indexed(DEFAULT_BG);

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgb(Rgb::new(r, g, b))
    }

    pub fn is_rgb(self) -> bool {
        matches!(self, Color::Rgb(_))
    }

    /// Approximate display RGB of this color.
    pub fn to_rgb(self) -> Rgb {
        match self {
            Color::Indexed(code) => sgr_to_rgb(code),
            Color::Rgb(rgb) => rgb,
        }
    }

    /// SGR parameters selecting this color as foreground.
    pub fn fg_params(self) -> String {
        match self {
            Color::Indexed(code) => code.to_string(),
            Color::Rgb(Rgb { r, g, b }) => format!("38;2;{r};{g};{b}"),
        }
    }

    /// SGR parameters selecting this color as background.
    ///
    /// Indexed black is written as `49` (terminal default background):
    /// literal black shows up as dark gray on many modern color schemes.
    pub fn bg_params(self) -> String {
        match self {
            Color::Indexed(DEFAULT_BG) => "49".to_string(),
            Color::Indexed(code) => code.to_string(),
            Color::Rgb(Rgb { r, g, b }) => format!("48;2;{r};{g};{b}"),
        }
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Color::Indexed(code) => serializer.serialize_u8(*code),
            Color::Rgb(rgb) => serializer.collect_str(rgb),
        }
    }
}
