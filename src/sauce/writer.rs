//! Encoding and appending the SAUCE trailer.

use chrono::{Local, NaiveDate};

use super::record::SauceRecord;
use super::{COMMENT_LINE_SIZE, COMNT_ID, RECORD_SIZE, SAUCE_ID};
use crate::codec::cp437;
use crate::parser::EOF_MARKER;

const VERSION: &[u8; 2] = b"00";
const MAX_COMMENTS: usize = 255;

/// Encode `record` as exactly 128 bytes.
///
/// Text fields are CP437-encoded, cut to size and space-padded. A record
/// without a date is stamped with today's date.
pub fn to_bytes(record: &SauceRecord) -> Vec<u8> {
    let mut out = Vec::with_capacity(RECORD_SIZE);
    out.extend_from_slice(SAUCE_ID);
    out.extend_from_slice(VERSION);
    push_padded(&mut out, &record.title, 35, b' ');
    push_padded(&mut out, &record.author, 20, b' ');
    push_padded(&mut out, &record.group, 20, b' ');

    let date: NaiveDate = record.date.unwrap_or_else(|| Local::now().date_naive());
    out.extend_from_slice(date.format("%Y%m%d").to_string().as_bytes());

    out.extend_from_slice(&record.file_size.to_le_bytes());
    out.push(record.data_type.to_byte());
    out.push(record.file_type.to_byte());
    for tinfo in [record.tinfo1, record.tinfo2, record.tinfo3, record.tinfo4] {
        out.extend_from_slice(&tinfo.to_le_bytes());
    }
    out.push(record.comments.len().min(MAX_COMMENTS) as u8);
    out.push(record.tflags);
    push_padded(&mut out, &record.tinfos, 22, 0);
    out
}

/// Append the EOF marker, comment block (if any) and record to `content`.
pub fn append(content: &[u8], record: &SauceRecord) -> Vec<u8> {
    let mut out = Vec::with_capacity(content.len() + RECORD_SIZE + 1);
    out.extend_from_slice(content);
    out.push(EOF_MARKER);
    if !record.comments.is_empty() {
        out.extend_from_slice(COMNT_ID);
        for comment in record.comments.iter().take(MAX_COMMENTS) {
            push_padded(&mut out, comment, COMMENT_LINE_SIZE, b' ');
        }
    }
    out.extend(to_bytes(record));
    out
}

fn push_padded(out: &mut Vec<u8>, text: &str, len: usize, pad: u8) {
    let mut field = cp437::encode(text);
    field.resize(len, pad);
    out.extend_from_slice(&field);
}
