//! Art files on disk: a canvas plus its SAUCE record.
//!
//! Two formats are understood:
//! - classic ANSI (`.ans`, `.asc`, `.diz`, `.nfo`, ...): CP437 bytes, 16
//!   colors, optional SAUCE trailer
//! - pixel-native art (`.art`, `.utf8ans`): UTF-8 text in the half-block
//!   true-color layout written by [`PixelCanvas`]

use std::fs;
use std::path::{Path, PathBuf};

use crate::ansi_text;
use crate::canvas::Canvas;
use crate::codec::cp437;
use crate::parser::{AnsiParser, DEFAULT_WIDTH};
use crate::pixel::{PixelCanvas, PixelSurface};
use crate::render::{HtmlRenderer, JsonRenderer, Render, TerminalRenderer, TextRenderer};
use crate::sauce::{self, DataType, FileType, SauceRecord};

const ANSI_EXTENSIONS: &[&str] = &["ans", "asc", "diz", "nfo", "ice", "txt", "cia", "drk", "lit"];
const ART_EXTENSIONS: &[&str] = &["art", "utf8ans"];

/// Errors from loading or saving documents.
#[derive(Debug, thiserror::Error)]
pub enum DocumentError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),
}

/// On-disk encoding of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// CP437 bytes with escape sequences.
    Ansi,
    /// UTF-8 true-color half-block text.
    Art,
}

impl DocumentFormat {
    /// Format implied by the file extension. No extension means ANSI.
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let Some(ext) = path.extension() else {
            return Ok(Self::Ansi);
        };
        let ext = ext.to_string_lossy().to_ascii_lowercase();
        if ANSI_EXTENSIONS.contains(&ext.as_str()) {
            Ok(Self::Ansi)
        } else if ART_EXTENSIONS.contains(&ext.as_str()) {
            Ok(Self::Art)
        } else {
            Err(DocumentError::UnsupportedFormat(format!(".{ext}")))
        }
    }
}

/// A loaded artwork.
#[derive(Debug, Clone, Default)]
pub struct AnsiDocument {
    pub canvas: Canvas,
    pub sauce: Option<SauceRecord>,
    pub source_path: Option<PathBuf>,
    /// Original text of pixel-native art, kept for lossless display.
    pub raw_text: Option<String>,
    /// The canvas width was forced by the caller rather than taken from SAUCE.
    pub width_overridden: bool,
}

impl AnsiDocument {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            ..Default::default()
        }
    }

    /// Parse CP437 file bytes. SAUCE `tinfo1` sets the width when present,
    /// otherwise `default_width` does.
    pub fn from_bytes(data: &[u8], default_width: usize) -> Self {
        Self::from_bytes_with(data, default_width, None)
    }

    /// Like [`from_bytes`](Self::from_bytes), but `width_override` wins
    /// over the SAUCE width.
    pub fn from_bytes_with(data: &[u8], default_width: usize, width_override: Option<usize>) -> Self {
        let (content, sauce) = sauce::split(data);
        let width = width_override
            .or_else(|| sauce.as_ref().map(|s| s.tinfo1 as usize).filter(|&w| w > 0))
            .unwrap_or(default_width);
        tracing::debug!(has_sauce = sauce.is_some(), width, "parsing ANSI content");

        Self {
            canvas: AnsiParser::parse(content, width),
            sauce,
            source_path: None,
            raw_text: None,
            width_overridden: width_override.is_some(),
        }
    }

    /// Read pixel-native art text. The canvas is as wide as the longest line.
    pub fn from_art_text(text: &str) -> Self {
        let width = text
            .lines()
            .map(ansi_text::visible_len)
            .max()
            .filter(|&w| w > 0)
            .unwrap_or(DEFAULT_WIDTH);
        let mut parser = AnsiParser::new(width);
        parser.feed_str(text);

        Self {
            canvas: parser.into_canvas(),
            sauce: None,
            source_path: None,
            raw_text: Some(text.to_string()),
            width_overridden: false,
        }
    }

    /// Load a file, using the default width when it has no SAUCE width.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DocumentError> {
        Self::load_with(path, DEFAULT_WIDTH, None)
    }

    /// Load a file. ANSI width is `width_override`, else the SAUCE width,
    /// else `default_width`. Pixel-native art sizes itself.
    pub fn load_with(
        path: impl AsRef<Path>,
        default_width: usize,
        width_override: Option<usize>,
    ) -> Result<Self, DocumentError> {
        let path = path.as_ref();
        let format = DocumentFormat::from_path(path)?;
        let data = fs::read(path).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut doc = match format {
            DocumentFormat::Ansi => Self::from_bytes_with(&data, default_width, width_override),
            DocumentFormat::Art => Self::from_art_text(&String::from_utf8_lossy(&data)),
        };
        doc.source_path = Some(path.to_path_buf());
        Ok(doc)
    }

    pub fn format(&self) -> DocumentFormat {
        if self.raw_text.is_some() {
            DocumentFormat::Art
        } else {
            DocumentFormat::Ansi
        }
    }

    /// Terminal output. Pixel-native art is shown from its original text.
    pub fn render(&self) -> String {
        self.render_with(&TerminalRenderer::default())
    }

    pub fn render_with(&self, renderer: &TerminalRenderer) -> String {
        match &self.raw_text {
            Some(text) => text.trim_end_matches('\n').to_string(),
            None => renderer.render(&self.canvas),
        }
    }

    pub fn render_text(&self) -> String {
        TextRenderer::default().render(&self.canvas)
    }

    pub fn render_json(&self) -> String {
        JsonRenderer::default().render(&self.canvas)
    }

    pub fn render_html(&self) -> String {
        HtmlRenderer::default().render(&self.canvas)
    }

    /// Pixel-native art text. Classic art goes through its half-block view.
    pub fn to_art(&self) -> String {
        match &self.raw_text {
            Some(text) => text.clone(),
            None => PixelCanvas::from_canvas(&self.canvas).render(),
        }
    }

    /// CP437 file bytes, optionally followed by a SAUCE trailer.
    pub fn to_bytes(&self, include_sauce: bool) -> Vec<u8> {
        let stem = self
            .source_path
            .as_deref()
            .and_then(Path::file_stem)
            .map(|s| s.to_string_lossy().into_owned());
        self.encode(include_sauce, stem.as_deref())
    }

    /// Write to `path` in the format its extension names.
    pub fn save(&self, path: impl AsRef<Path>, include_sauce: bool) -> Result<(), DocumentError> {
        let path = path.as_ref();
        let data = match DocumentFormat::from_path(path)? {
            DocumentFormat::Art => self.to_art().into_bytes(),
            DocumentFormat::Ansi => {
                let stem = path.file_stem().map(|s| s.to_string_lossy().into_owned());
                self.encode(include_sauce, stem.as_deref())
            }
        };
        fs::write(path, data).map_err(|source| DocumentError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    fn encode(&self, include_sauce: bool, title: Option<&str>) -> Vec<u8> {
        let content = cp437::encode(&TerminalRenderer::for_file().render(&self.canvas));
        if !include_sauce {
            return content;
        }
        let mut record = self.sauce.clone().unwrap_or_else(|| SauceRecord {
            title: title.unwrap_or_default().chars().take(35).collect(),
            data_type: DataType::Character,
            file_type: FileType::Ansi,
            tinfo1: clamp_u16(self.canvas.width()),
            tinfo2: clamp_u16(self.canvas.height()),
            ..Default::default()
        });
        // Content is re-rendered, so a loaded record's size is stale
        record.file_size = u32::try_from(content.len()).unwrap_or(u32::MAX);
        sauce::append(&content, &record)
    }

    /// SAUCE title, else the file stem, else "Untitled".
    pub fn title(&self) -> String {
        if let Some(title) = self.sauce.as_ref().map(|s| &s.title).filter(|t| !t.is_empty()) {
            return title.clone();
        }
        self.source_path
            .as_deref()
            .and_then(Path::file_stem)
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "Untitled".to_string())
    }

    pub fn author(&self) -> &str {
        self.sauce.as_ref().map_or("", |s| s.author.as_str())
    }

    pub fn group(&self) -> &str {
        self.sauce.as_ref().map_or("", |s| s.group.as_str())
    }

    /// SAUCE width when set and not overridden, otherwise the canvas width.
    pub fn width(&self) -> usize {
        if self.width_overridden {
            return self.canvas.width();
        }
        match self.sauce.as_ref().map(|s| s.tinfo1 as usize) {
            Some(w) if w > 0 => w,
            _ => self.canvas.width(),
        }
    }

    pub fn height(&self) -> usize {
        self.canvas.height()
    }
}

fn clamp_u16(value: usize) -> u16 {
    value.min(u16::MAX as usize) as u16
}
