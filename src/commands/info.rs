//! Info command handler

use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use bbs_ansi_art::document::DocumentFormat;
use bbs_ansi_art::sauce::SauceRecord;
use bbs_ansi_art::{AnsiDocument, Config};

use super::load_document;

/// Everything `info` reports about a file.
#[derive(Debug, Serialize)]
pub struct InfoReport<'a> {
    pub file: String,
    pub format: &'static str,
    pub width: usize,
    pub height: usize,
    /// Columns up to the rightmost non-blank cell
    pub content_width: usize,
    /// Rows between the first and last non-blank rows
    pub content_height: usize,
    pub sauce: Option<&'a SauceRecord>,
}

impl<'a> InfoReport<'a> {
    pub fn new(file: &Path, doc: &'a AnsiDocument) -> Self {
        let trimmed = doc.canvas.trim();
        let content_width = trimmed
            .rows()
            .filter_map(|row| row.iter().rposition(|c| !c.is_default()))
            .map(|x| x + 1)
            .max()
            .unwrap_or(0);
        let content_height = if content_width == 0 { 0 } else { trimmed.height() };

        Self {
            file: file.display().to_string(),
            format: match doc.format() {
                DocumentFormat::Ansi => "ansi",
                DocumentFormat::Art => "art",
            },
            width: doc.canvas.width(),
            height: doc.canvas.height(),
            content_width,
            content_height,
            sauce: doc.sauce.as_ref(),
        }
    }

    pub fn summary(&self) -> String {
        let mut lines = vec![
            format!("File:    {}", self.file),
            format!("Format:  {}", self.format),
            format!("Canvas:  {} x {}", self.width, self.height),
            format!("Content: {} x {}", self.content_width, self.content_height),
        ];
        match self.sauce {
            Some(sauce) => {
                lines.push(String::new());
                lines.push(sauce.to_string());
                for comment in &sauce.comments {
                    lines.push(format!("Comment: {}", comment));
                }
            }
            None => lines.push("SAUCE:   none".to_string()),
        }
        lines.join("\n")
    }
}

/// Print SAUCE metadata and dimensions.
#[cfg(not(tarpaulin_include))]
pub fn handle(file: &Path, json: bool, config: &Config) -> Result<()> {
    let doc = load_document(file, None, config)?;
    let report = InfoReport::new(file, &doc);
    if json {
        let out = serde_json::to_string_pretty(&report).context("Failed to serialize report")?;
        println!("{}", out);
    } else {
        println!("{}", report.summary());
    }
    Ok(())
}
