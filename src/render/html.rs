//! Canvas to an HTML `<pre>` block.
//!
//! Each row becomes a run of `<span>`s with inline CSS colors. Bold on a
//! normal foreground shows as the bright palette entry, the way DOS
//! displayed it.

use super::Render;
use crate::canvas::color::{sgr_to_rgb, PALETTE_16};
use crate::canvas::{Canvas, Cell, Color, Rgb};

/// Render a canvas as HTML with inline styles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlRenderer {
    pub css_class: String,
    pub font_family: String,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        Self {
            css_class: "ansi-art".to_string(),
            font_family: "monospace".to_string(),
        }
    }
}

/// Attributes shared by every cell in one span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SpanStyle {
    fg: Rgb,
    bg: Option<Rgb>,
    bold: bool,
}

impl SpanStyle {
    fn of(cell: &Cell) -> Self {
        let fg = foreground(cell.fg, cell.bold);
        let bg = background(cell.bg);
        let (fg, bg) = if cell.reverse {
            (bg.unwrap_or(PALETTE_16[0]), Some(fg))
        } else {
            (fg, bg)
        };
        Self {
            fg,
            bg,
            bold: cell.bold,
        }
    }

    fn css(&self) -> String {
        let mut parts = vec![format!("color: {}", self.fg)];
        if let Some(bg) = self.bg {
            parts.push(format!("background: {bg}"));
        }
        if self.bold {
            parts.push("font-weight: bold".to_string());
        }
        parts.join("; ")
    }
}

fn foreground(color: Color, bold: bool) -> Rgb {
    match color {
        Color::Rgb(rgb) => rgb,
        Color::Indexed(code @ 30..=37) if bold => PALETTE_16[usize::from(code - 30) + 8],
        Color::Indexed(code @ (30..=37 | 90..=97)) => sgr_to_rgb(code),
        Color::Indexed(_) => PALETTE_16[7],
    }
}

/// `None` for the default black, which the `<pre>` background already shows.
fn background(color: Color) -> Option<Rgb> {
    match color {
        Color::Rgb(rgb) => Some(rgb),
        Color::DEFAULT_BG => None,
        Color::Indexed(code @ (40..=47 | 100..=107)) => Some(sgr_to_rgb(code)),
        Color::Indexed(_) => None,
    }
}

fn push_escaped(out: &mut String, ch: char) {
    match ch {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        ' ' => out.push_str("&nbsp;"),
        _ => out.push(ch),
    }
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    text.chars().for_each(|c| push_escaped(&mut out, c));
    out
}

impl HtmlRenderer {
    fn render_row(row: &[Cell]) -> String {
        let used = row.iter().rposition(|c| !c.is_default()).map_or(0, |x| x + 1);
        let mut line = String::new();
        let mut current: Option<(SpanStyle, String)> = None;

        for cell in &row[..used] {
            let style = SpanStyle::of(cell);
            match current.as_mut() {
                Some((open, text)) if *open == style => push_escaped(text, cell.ch),
                _ => {
                    if let Some((open, text)) = current.take() {
                        line.push_str(&span(&open, &text));
                    }
                    let mut text = String::new();
                    push_escaped(&mut text, cell.ch);
                    current = Some((style, text));
                }
            }
        }
        if let Some((open, text)) = current {
            line.push_str(&span(&open, &text));
        }
        line
    }
}

fn span(style: &SpanStyle, text: &str) -> String {
    format!("<span style=\"{}\">{}</span>", style.css(), text)
}

impl Render for HtmlRenderer {
    fn render(&self, canvas: &Canvas) -> String {
        let body = canvas
            .rows()
            .map(Self::render_row)
            .collect::<Vec<_>>()
            .join("\n");
        format!(
            "<pre class=\"{}\" style=\"font-family: {}; background: #000; padding: 1em;\">\n{}\n</pre>",
            escape(&self.css_class),
            escape(&self.font_family),
            body
        )
    }
}
