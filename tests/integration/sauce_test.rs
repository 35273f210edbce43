//! SAUCE records on real file layouts.

use chrono::NaiveDate;

use bbs_ansi_art::sauce::{self, DataType, FileType, SauceRecord, RECORD_SIZE};

fn sample() -> SauceRecord {
    SauceRecord {
        title: "Acid Logo".into(),
        author: "artist".into(),
        group: "ACiD".into(),
        date: NaiveDate::from_ymd_opt(1996, 7, 4),
        file_size: 1234,
        data_type: DataType::Character,
        file_type: FileType::Ansi,
        tinfo1: 80,
        tinfo2: 25,
        comments: vec!["first line".into(), "second line".into()],
        tflags: 1,
        tinfos: "IBM VGA".into(),
        ..Default::default()
    }
}

#[test]
fn appended_record_reads_back() {
    let data = sauce::append(b"\x1b[1;31mHi", &sample());
    assert_eq!(data.len(), 10 + 1 + 5 + 2 * 64 + RECORD_SIZE);
    assert_eq!(sauce::parse(&data), Some(sample()));
}

#[test]
fn split_separates_art_from_trailer() {
    let data = sauce::append(b"art", &sample());
    let (content, record) = sauce::split(&data);
    assert_eq!(content, b"art");
    assert_eq!(record.unwrap().width(), 80);
}

#[test]
fn file_without_sauce_stops_at_eof_marker() {
    let (content, record) = sauce::split(b"art\x1agarbage");
    assert_eq!(content, b"art");
    assert!(record.is_none());
    assert!(sauce::parse(b"short").is_none());
}

#[test]
fn missing_comment_header_drops_comments() {
    let mut record = sample();
    record.comments.clear();
    let mut bytes = sauce::to_bytes(&record);
    // Claim two comment lines without a COMNT block
    bytes[104] = 2;
    let mut data = b"art\x1a".to_vec();
    data.extend_from_slice(&bytes);

    let parsed = sauce::parse(&data).unwrap();
    assert!(parsed.comments.is_empty());
    assert_eq!(parsed.title, "Acid Logo");
}

#[test]
fn display_and_json() {
    let record = sample();
    let text = record.to_string();
    assert!(text.contains("Title: Acid Logo"));
    assert!(text.contains("Date: 1996-07-04"));
    assert!(text.contains("Width: 80"));

    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json["date"], "1996-07-04");
    assert_eq!(json["data_type"], "character");
    assert_eq!(json["tinfo2"], 25);
}

#[test]
fn empty_record_display() {
    assert_eq!(SauceRecord::default().to_string(), "(No SAUCE metadata)");
}
