//! Canvas to plain text.

use super::Render;
use crate::canvas::Canvas;

/// Characters only, no styling.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextRenderer {
    /// Keep trailing spaces on each row and trailing empty rows.
    pub preserve_whitespace: bool,
}

impl TextRenderer {
    pub fn new(preserve_whitespace: bool) -> Self {
        Self {
            preserve_whitespace,
        }
    }
}

impl Render for TextRenderer {
    fn render(&self, canvas: &Canvas) -> String {
        let lines = canvas.plain_lines();
        if self.preserve_whitespace {
            return lines.join("\n");
        }
        let mut lines: Vec<&str> = lines.iter().map(|l| l.trim_end_matches(' ')).collect();
        while lines.last().is_some_and(|l| l.is_empty()) {
            lines.pop();
        }
        lines.join("\n")
    }
}
