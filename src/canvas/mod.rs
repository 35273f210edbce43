//! Canvas data model.
//!
//! A [`Canvas`] is a fixed-width grid of [`Cell`]s whose row list grows on
//! demand. Writes below the last row expand the canvas; reads below it see
//! default cells. Columns are checked and never clamped.

mod cell;
pub mod color;

pub use cell::Cell;
pub use color::{Color, Rgb};

/// Errors from canvas coordinate access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CanvasError {
    #[error("x={x} out of bounds (width={width})")]
    OutOfBounds { x: usize, width: usize },
}

/// Optional attribute overrides for [`Canvas::put_char`] and [`Canvas::put_text`].
///
/// `None` fields leave the target cell's attribute unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pen {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub bold: Option<bool>,
}

impl Pen {
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    pub fn bold(mut self, bold: bool) -> Self {
        self.bold = Some(bold);
        self
    }
}

/// A 2D grid of cells representing one artwork.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: usize,
    rows: Vec<Vec<Cell>>,
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(80)
    }
}

impl Canvas {
    /// Create a canvas with a single empty row.
    pub fn new(width: usize) -> Self {
        Self::with_height(width, 1)
    }

    /// Create a canvas with `height` empty rows (at least one).
    pub fn with_height(width: usize, height: usize) -> Self {
        Self {
            width,
            rows: vec![vec![Cell::default(); width]; height.max(1)],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Current number of rows.
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Grow the row list until row `y` exists. Never truncates.
    pub fn ensure_row(&mut self, y: usize) {
        if self.rows.len() <= y {
            self.rows.resize(y + 1, vec![Cell::default(); self.width]);
        }
    }

    fn check_x(&self, x: usize) -> Result<(), CanvasError> {
        if x >= self.width {
            return Err(CanvasError::OutOfBounds {
                x,
                width: self.width,
            });
        }
        Ok(())
    }

    /// Cell at `(x, y)`. Rows past the end read as default cells.
    pub fn get(&self, x: usize, y: usize) -> Result<Cell, CanvasError> {
        self.check_x(x)?;
        Ok(self
            .rows
            .get(y)
            .map(|row| row[x])
            .unwrap_or_default())
    }

    /// Mutable cell at `(x, y)`, expanding rows as needed.
    pub fn get_mut(&mut self, x: usize, y: usize) -> Result<&mut Cell, CanvasError> {
        self.check_x(x)?;
        self.ensure_row(y);
        Ok(&mut self.rows[y][x])
    }

    /// Store a copy of `cell` at `(x, y)`, expanding rows as needed.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> Result<(), CanvasError> {
        *self.get_mut(x, y)? = cell;
        Ok(())
    }

    /// Replace the glyph at `(x, y)`, applying any overrides from `pen`.
    pub fn put_char(&mut self, x: usize, y: usize, ch: char, pen: Pen) -> Result<(), CanvasError> {
        let cell = self.get_mut(x, y)?;
        cell.ch = ch;
        if let Some(fg) = pen.fg {
            cell.fg = fg;
        }
        if let Some(bg) = pen.bg {
            cell.bg = bg;
        }
        if let Some(bold) = pen.bold {
            cell.bold = bold;
        }
        Ok(())
    }

    /// Write `text` left to right from `(x, y)`, stopping at the right edge.
    pub fn put_text(&mut self, x: usize, y: usize, text: &str, pen: Pen) -> Result<(), CanvasError> {
        self.check_x(x)?;
        for (col, ch) in (x..self.width).zip(text.chars()) {
            self.put_char(col, y, ch, pen)?;
        }
        Ok(())
    }

    /// Fill a rectangle with copies of `cell`. Columns are clamped to the width.
    pub fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, cell: Cell) {
        let x_end = x.saturating_add(w).min(self.width);
        for row in y..y.saturating_add(h) {
            self.ensure_row(row);
            for col in x.min(x_end)..x_end {
                self.rows[row][col] = cell;
            }
        }
    }

    /// Reset every cell to default, keeping the dimensions.
    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.fill(Cell::default());
        }
    }

    /// New canvas of `width` x `height` holding the overlapping region of this one.
    pub fn resize(&self, width: usize, height: usize) -> Canvas {
        let mut resized = Canvas::with_height(width, height);
        for (y, row) in self.rows.iter().enumerate().take(resized.height()) {
            let cols = row.len().min(width);
            resized.rows[y][..cols].copy_from_slice(&row[..cols]);
        }
        resized
    }

    /// Copy of the `w` x `h` rectangle at `(x, y)`.
    ///
    /// Parts of the rectangle outside this canvas come back as default cells.
    pub fn region(&self, x: usize, y: usize, w: usize, h: usize) -> Canvas {
        let mut region = Canvas::with_height(w, h);
        for dy in 0..h {
            let Some(src) = self.rows.get(y + dy) else {
                break;
            };
            for dx in 0..w {
                if let Some(cell) = src.get(x + dx) {
                    region.rows[dy][dx] = *cell;
                }
            }
        }
        region
    }

    /// Rows spanning the first to last row with any non-default cell.
    ///
    /// The width is kept. A canvas without content trims to one empty row.
    pub fn trim(&self) -> Canvas {
        let has_content = |row: &Vec<Cell>| row.iter().any(|c| !c.is_default());
        let first = self.rows.iter().position(has_content);
        let last = self.rows.iter().rposition(has_content);
        match (first, last) {
            (Some(first), Some(last)) => Canvas {
                width: self.width,
                rows: self.rows[first..=last].to_vec(),
            },
            _ => Canvas::new(self.width),
        }
    }

    /// Mutable row `y`, expanding rows as needed.
    pub fn row_mut(&mut self, y: usize) -> &mut [Cell] {
        self.ensure_row(y);
        &mut self.rows[y]
    }

    /// Row slices, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.rows.iter().map(|row| row.as_slice())
    }

    /// A single row, if it exists.
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        self.rows.get(y).map(|row| row.as_slice())
    }

    /// Every cell as `(x, y, cell)`, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, &Cell)> + '_ {
        self.rows
            .iter()
            .enumerate()
            .flat_map(|(y, row)| row.iter().enumerate().map(move |(x, cell)| (x, y, cell)))
    }

    /// Characters only, one line per row, trailing spaces kept.
    pub fn plain_lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.iter().map(|c| c.ch).collect())
            .collect()
    }
}
