//! SAUCE record type.

use std::fmt;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// What kind of data the file holds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    None,
    #[default]
    Character,
    Bitmap,
    Vector,
    Audio,
    BinaryText,
    XBin,
    Archive,
    Executable,
}

impl DataType {
    /// Unknown values read as `None`.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            1 => Self::Character,
            2 => Self::Bitmap,
            3 => Self::Vector,
            4 => Self::Audio,
            5 => Self::BinaryText,
            6 => Self::XBin,
            7 => Self::Archive,
            8 => Self::Executable,
            _ => Self::None,
        }
    }

    pub fn to_byte(self) -> u8 {
        self as u8
    }
}

/// File type within the `Character` data type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Ascii,
    #[default]
    Ansi,
    Ansimation,
    Rip,
    PcBoard,
    Avatar,
    Html,
    Source,
    TundraDraw,
}

impl FileType {
    /// Unknown values read as `Ascii`.
    pub fn from_byte(byte: u8) -> Self {
        match byte {
            1 => Self::Ansi,
            2 => Self::Ansimation,
            3 => Self::Rip,
            4 => Self::PcBoard,
            5 => Self::Avatar,
            6 => Self::Html,
            7 => Self::Source,
            8 => Self::TundraDraw,
            _ => Self::Ascii,
        }
    }

    pub fn to_byte(self) -> u8 {
        self as u8
    }
}

/// One SAUCE record.
///
/// For character art `tinfo1` is the width in columns and `tinfo2` the
/// height in rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SauceRecord {
    pub title: String,
    pub author: String,
    pub group: String,
    #[serde(serialize_with = "serialize_date")]
    pub date: Option<NaiveDate>,
    pub file_size: u32,
    pub data_type: DataType,
    pub file_type: FileType,
    pub tinfo1: u16,
    pub tinfo2: u16,
    pub tinfo3: u16,
    pub tinfo4: u16,
    pub comments: Vec<String>,
    pub tflags: u8,
    pub tinfos: String,
}

impl SauceRecord {
    /// Width in columns (`tinfo1`).
    pub fn width(&self) -> u16 {
        self.tinfo1
    }

    /// Height in rows (`tinfo2`).
    pub fn height(&self) -> u16 {
        self.tinfo2
    }
}

impl fmt::Display for SauceRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if !self.title.is_empty() {
            parts.push(format!("Title: {}", self.title));
        }
        if !self.author.is_empty() {
            parts.push(format!("Author: {}", self.author));
        }
        if !self.group.is_empty() {
            parts.push(format!("Group: {}", self.group));
        }
        if let Some(date) = self.date {
            parts.push(format!("Date: {}", date.format("%Y-%m-%d")));
        }
        if self.tinfo1 > 0 {
            parts.push(format!("Width: {}", self.tinfo1));
        }
        if self.tinfo2 > 0 {
            parts.push(format!("Height: {}", self.tinfo2));
        }
        if parts.is_empty() {
            write!(f, "(No SAUCE metadata)")
        } else {
            write!(f, "{}", parts.join("\n"))
        }
    }
}

fn serialize_date<S: Serializer>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error> {
    match date {
        Some(date) => serializer.collect_str(&date.format("%Y-%m-%d")),
        None => serializer.serialize_none(),
    }
}
