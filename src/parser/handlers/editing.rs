//! Erase operation handlers.
//!
//! - J: Erase in Display
//! - K: Erase in Line

use std::ops::Range;

use super::super::performer::AnsiPerformer;
use crate::canvas::{Canvas, Cell};

impl AnsiPerformer<'_> {
    /// Handle Erase in Display (CSI J).
    /// Mode 0: cursor to end of canvas
    /// Mode 1: start of canvas to cursor (inclusive)
    /// Mode 2: replace the canvas and home the cursor
    pub fn handle_erase_display(&mut self, mode: u16) {
        match mode {
            0 => {
                self.clear_cols(self.cursor.y, self.cursor.x..self.width);
                for y in self.cursor.y + 1..self.canvas.height() {
                    self.clear_cols(y, 0..self.width);
                }
            }
            1 => {
                for y in 0..self.cursor.y.min(self.canvas.height()) {
                    self.clear_cols(y, 0..self.width);
                }
                self.clear_cols(self.cursor.y, 0..self.cursor.x + 1);
            }
            2 => {
                *self.canvas = Canvas::new(self.width);
                self.cursor.x = 0;
                self.cursor.y = 0;
            }
            _ => {}
        }
    }

    /// Handle Erase in Line (CSI K).
    /// Mode 0: cursor to end of line
    /// Mode 1: start of line to cursor (inclusive)
    /// Mode 2: whole line
    pub fn handle_erase_line(&mut self, mode: u16) {
        match mode {
            0 => self.clear_cols(self.cursor.y, self.cursor.x..self.width),
            1 => self.clear_cols(self.cursor.y, 0..self.cursor.x + 1),
            2 => self.clear_cols(self.cursor.y, 0..self.width),
            _ => {}
        }
    }

    /// Reset the cells of row `y` in `cols` (clamped to the width).
    fn clear_cols(&mut self, y: usize, cols: Range<usize>) {
        let row = self.canvas.row_mut(y);
        let end = cols.end.min(row.len());
        let start = cols.start.min(end);
        row[start..end].fill(Cell::default());
    }
}
