//! Cursor movement and positioning handlers.
//!
//! - A/B/C/D: relative movement
//! - H/f: absolute position
//! - s/u and ESC 7/8: save and restore

use super::super::performer::AnsiPerformer;

impl AnsiPerformer<'_> {
    /// CSI A. Stops at the top row.
    pub fn handle_cursor_up(&mut self, n: usize) {
        self.cursor.y = self.cursor.y.saturating_sub(n);
    }

    /// CSI B. Moving below the last row grows the canvas.
    pub fn handle_cursor_down(&mut self, n: usize) {
        self.cursor.y += n;
        self.canvas.ensure_row(self.cursor.y);
    }

    /// CSI C. At or past the right margin the cursor wraps first, then moves.
    pub fn handle_cursor_forward(&mut self, n: usize) {
        if self.cursor.x >= self.width {
            self.wrap();
        }
        self.cursor.x = (self.cursor.x + n).min(self.width);
    }

    /// CSI D. Stops at column 0.
    pub fn handle_cursor_back(&mut self, n: usize) {
        self.cursor.x = self.cursor.x.saturating_sub(n);
    }

    /// CSI H / CSI f. Parameters are 1-indexed; the column is clamped to the width.
    pub fn handle_cursor_position(&mut self, row: usize, col: usize) {
        self.cursor.y = row.saturating_sub(1);
        self.cursor.x = col.saturating_sub(1).min(self.width - 1);
        self.canvas.ensure_row(self.cursor.y);
    }

    /// CSI s / ESC 7.
    pub fn handle_save_cursor(&mut self) {
        *self.saved_cursor = Some((self.cursor.x, self.cursor.y));
    }

    /// CSI u / ESC 8. Without a saved position the cursor goes home.
    pub fn handle_restore_cursor(&mut self) {
        let (x, y) = self.saved_cursor.unwrap_or_default();
        self.cursor.x = x;
        self.cursor.y = y;
    }
}
