//! Convert command handler

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use bbs_ansi_art::{AnsiDocument, Config};

use super::load_document;
use crate::cli::ConvertFormat;

/// Serialize a document in the requested format.
pub fn convert_bytes(doc: &AnsiDocument, to: ConvertFormat) -> Vec<u8> {
    match to {
        ConvertFormat::Ans => doc.to_bytes(true),
        ConvertFormat::Txt => format!("{}\n", doc.render_text()).into_bytes(),
        ConvertFormat::Json => format!("{}\n", doc.render_json()).into_bytes(),
        ConvertFormat::Html => format!("{}\n", doc.render_html()).into_bytes(),
        ConvertFormat::Art => doc.to_art().into_bytes(),
    }
}

/// Convert a file and write the result to `output`.
#[cfg(not(tarpaulin_include))]
pub fn handle(
    file: &Path,
    to: ConvertFormat,
    output: &Path,
    width: Option<usize>,
    config: &Config,
) -> Result<()> {
    let doc = load_document(file, width, config)?;
    let data = convert_bytes(&doc, to);
    fs::write(output, &data).with_context(|| format!("Failed to write {:?}", output))?;
    println!(
        "Wrote {} ({})",
        output.display(),
        humansize::format_size(data.len() as u64, humansize::BINARY)
    );
    Ok(())
}
