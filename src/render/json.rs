//! Canvas to structured JSON.
//!
//! Two layouts are available. `Runs` groups each row into runs of cells
//! sharing attributes and skips empty rows. `Sparse` lists non-default
//! cells individually. Colors appear as SGR integers (`31`, `104`) or
//! `"#rrggbb"` strings for true color.

use serde::Serialize;

use super::Render;
use crate::canvas::{Canvas, Cell, Color};

/// Output layout for [`JsonRenderer`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum JsonMode {
    #[default]
    Runs,
    Sparse,
}

/// Render a canvas as JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonRenderer {
    pub mode: JsonMode,
    pub pretty: bool,
}

impl Default for JsonRenderer {
    fn default() -> Self {
        Self {
            mode: JsonMode::Runs,
            pretty: true,
        }
    }
}

#[derive(Debug, Serialize)]
struct RunsDocument {
    width: usize,
    height: usize,
    rows: Vec<RowRuns>,
}

#[derive(Debug, Serialize)]
struct RowRuns {
    y: usize,
    runs: Vec<Run>,
}

#[derive(Debug, Serialize)]
struct Run {
    x: usize,
    text: String,
    fg: Color,
    bg: Color,
    #[serde(skip_serializing_if = "is_false")]
    bold: bool,
    #[serde(skip_serializing_if = "is_false")]
    blink: bool,
    #[serde(skip_serializing_if = "is_false")]
    reverse: bool,
}

#[derive(Debug, Serialize)]
struct SparseDocument {
    width: usize,
    height: usize,
    cells: Vec<SparseCell>,
}

#[derive(Debug, Serialize)]
struct SparseCell {
    x: usize,
    y: usize,
    #[serde(rename = "char")]
    ch: char,
    fg: Color,
    bg: Color,
    #[serde(skip_serializing_if = "is_false")]
    bold: bool,
    #[serde(skip_serializing_if = "is_false")]
    blink: bool,
    #[serde(skip_serializing_if = "is_false")]
    reverse: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Run {
    fn start(x: usize, cell: &Cell) -> Self {
        Self {
            x,
            text: cell.ch.to_string(),
            fg: cell.fg,
            bg: cell.bg,
            bold: cell.bold,
            blink: cell.blink,
            reverse: cell.reverse,
        }
    }

    fn matches(&self, cell: &Cell) -> bool {
        self.fg == cell.fg
            && self.bg == cell.bg
            && self.bold == cell.bold
            && self.blink == cell.blink
            && self.reverse == cell.reverse
    }
}

impl JsonRenderer {
    pub fn new(mode: JsonMode, pretty: bool) -> Self {
        Self { mode, pretty }
    }

    fn runs(canvas: &Canvas) -> RunsDocument {
        let mut rows = Vec::new();
        for (y, row) in canvas.rows().enumerate() {
            let used = row.iter().rposition(|c| !c.is_default()).map_or(0, |x| x + 1);
            let mut runs: Vec<Run> = Vec::new();
            for (x, cell) in row[..used].iter().enumerate() {
                match runs.last_mut() {
                    Some(run) if run.matches(cell) => run.text.push(cell.ch),
                    _ => runs.push(Run::start(x, cell)),
                }
            }
            if !runs.is_empty() {
                rows.push(RowRuns { y, runs });
            }
        }
        RunsDocument {
            width: canvas.width(),
            height: canvas.height(),
            rows,
        }
    }

    fn sparse(canvas: &Canvas) -> SparseDocument {
        let cells = canvas
            .cells()
            .filter(|(_, _, cell)| !cell.is_default())
            .map(|(x, y, cell)| SparseCell {
                x,
                y,
                ch: cell.ch,
                fg: cell.fg,
                bg: cell.bg,
                bold: cell.bold,
                blink: cell.blink,
                reverse: cell.reverse,
            })
            .collect();
        SparseDocument {
            width: canvas.width(),
            height: canvas.height(),
            cells,
        }
    }

    /// Structured value for embedding in a larger JSON document.
    pub fn to_value(&self, canvas: &Canvas) -> serde_json::Value {
        let value = match self.mode {
            JsonMode::Runs => serde_json::to_value(Self::runs(canvas)),
            JsonMode::Sparse => serde_json::to_value(Self::sparse(canvas)),
        };
        // Plain structs with string keys always serialize
        value.unwrap_or(serde_json::Value::Null)
    }
}

fn to_json<T: Serialize>(value: &T, pretty: bool) -> String {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    rendered.unwrap_or_default()
}

impl Render for JsonRenderer {
    fn render(&self, canvas: &Canvas) -> String {
        match self.mode {
            JsonMode::Runs => to_json(&Self::runs(canvas), self.pretty),
            JsonMode::Sparse => to_json(&Self::sparse(canvas), self.pretty),
        }
    }
}
