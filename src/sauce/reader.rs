//! Locating and decoding the SAUCE trailer.

use chrono::NaiveDate;

use super::record::{DataType, FileType, SauceRecord};
use super::{COMMENT_LINE_SIZE, COMNT_ID, RECORD_SIZE, SAUCE_ID};
use crate::codec::cp437;
use crate::parser::EOF_MARKER;

/// Read the SAUCE record at the end of `data`, if there is one.
pub fn parse(data: &[u8]) -> Option<SauceRecord> {
    locate(data).map(|(record, _)| record)
}

/// Split a file into its art content and SAUCE record.
///
/// Content ends at the first `0x1A` before the trailer (or at the
/// trailer itself when the marker is missing).
pub fn split(data: &[u8]) -> (&[u8], Option<SauceRecord>) {
    let (record, block_start) = match locate(data) {
        Some((record, start)) => (Some(record), start),
        None => (None, data.len()),
    };
    let body = &data[..block_start];
    let end = body
        .iter()
        .position(|&b| b == EOF_MARKER)
        .unwrap_or(body.len());
    (&body[..end], record)
}

/// Decode the record and return it with the offset where the trailer
/// (comment block included) begins.
fn locate(data: &[u8]) -> Option<(SauceRecord, usize)> {
    let record_start = data.len().checked_sub(RECORD_SIZE)?;
    let raw = &data[record_start..];
    if !raw.starts_with(SAUCE_ID) {
        return None;
    }

    let mut record = SauceRecord {
        title: text_field(&raw[7..42]),
        author: text_field(&raw[42..62]),
        group: text_field(&raw[62..82]),
        date: date_field(&raw[82..90]),
        file_size: u32::from_le_bytes([raw[90], raw[91], raw[92], raw[93]]),
        data_type: DataType::from_byte(raw[94]),
        file_type: FileType::from_byte(raw[95]),
        tinfo1: u16_field(raw, 96),
        tinfo2: u16_field(raw, 98),
        tinfo3: u16_field(raw, 100),
        tinfo4: u16_field(raw, 102),
        comments: Vec::new(),
        tflags: raw[105],
        tinfos: cp437::decode(trim_end(&raw[106..128], &[0])),
    };

    let mut block_start = record_start;
    let count = raw[104] as usize;
    if count > 0 {
        let block_size = COMNT_ID.len() + count * COMMENT_LINE_SIZE;
        if let Some(start) = record_start.checked_sub(block_size) {
            let block = &data[start..record_start];
            if block.starts_with(COMNT_ID) {
                record.comments = block[COMNT_ID.len()..]
                    .chunks(COMMENT_LINE_SIZE)
                    .map(text_field)
                    .collect();
                block_start = start;
            }
        }
    }

    tracing::debug!(
        title = %record.title,
        width = record.tinfo1,
        comments = record.comments.len(),
        "found SAUCE record"
    );
    Some((record, block_start))
}

fn trim_end<'a>(bytes: &'a [u8], padding: &[u8]) -> &'a [u8] {
    let end = bytes
        .iter()
        .rposition(|b| !padding.contains(b))
        .map_or(0, |pos| pos + 1);
    &bytes[..end]
}

fn text_field(bytes: &[u8]) -> String {
    cp437::decode(trim_end(bytes, &[0, b' ']))
}

fn date_field(bytes: &[u8]) -> Option<NaiveDate> {
    if !bytes.iter().all(u8::is_ascii_digit) {
        return None;
    }
    let text = std::str::from_utf8(bytes).ok()?;
    NaiveDate::parse_from_str(text, "%Y%m%d").ok()
}

fn u16_field(raw: &[u8], offset: usize) -> u16 {
    u16::from_le_bytes([raw[offset], raw[offset + 1]])
}
