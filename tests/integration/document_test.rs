//! Loading and saving documents on disk.

use std::fs;

use tempfile::TempDir;

use bbs_ansi_art::sauce::{self, SauceRecord};
use bbs_ansi_art::{AnsiDocument, DocumentError, DocumentFormat};

#[test]
fn save_then_load_keeps_art_and_metadata() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("logo.ans");

    let doc = AnsiDocument::from_bytes(b"\x1b[1;36m\xdb\xdb\x1b[0m ok\r\n\x1b[45mline two", 40);
    doc.save(&path, true).unwrap();

    let loaded = AnsiDocument::load(&path).unwrap();
    assert_eq!(loaded.canvas.width(), 40);
    assert_eq!(loaded.render_text(), "██ ok\nline two");
    assert_eq!(loaded.title(), "logo");

    let sauce = loaded.sauce.unwrap();
    assert_eq!(sauce.title, "logo");
    assert_eq!(sauce.width(), 40);
    assert_eq!(sauce.height(), 2);
}

#[test]
fn existing_sauce_is_written_back() {
    let dir = TempDir::new().unwrap();
    let src = dir.path().join("in.ans");
    let record = SauceRecord {
        title: "Original".into(),
        author: "someone".into(),
        tinfo1: 20,
        ..Default::default()
    };
    fs::write(&src, sauce::append(b"hello", &record)).unwrap();

    let doc = AnsiDocument::load(&src).unwrap();
    assert_eq!(doc.canvas.width(), 20);
    assert_eq!(doc.author(), "someone");

    let dst = dir.path().join("out.ans");
    doc.save(&dst, true).unwrap();
    let written = fs::read(&dst).unwrap();
    let (content, parsed) = sauce::split(&written);
    assert_eq!(content, b"hello");
    assert_eq!(parsed.unwrap().title, "Original");
}

#[test]
fn save_without_sauce_is_bare_content() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bare.ans");
    AnsiDocument::from_bytes(b"\x1b[31mred", 80)
        .save(&path, false)
        .unwrap();
    assert_eq!(fs::read(&path).unwrap(), b"\x1b[31mred");
}

#[test]
fn art_files_load_as_pixel_native() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("pic.art");
    let text = "\x1b[38;2;255;0;0m\x1b[48;2;0;0;255m▀▀\x1b[0m\n";
    fs::write(&path, text).unwrap();

    let doc = AnsiDocument::load(&path).unwrap();
    assert_eq!(doc.format(), DocumentFormat::Art);
    assert_eq!(doc.canvas.width(), 2);
    assert_eq!(doc.to_art(), text);
    assert!(doc.sauce.is_none());
}

#[test]
fn classic_art_saves_as_pixel_native() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.art");
    AnsiDocument::from_bytes(b"\x1b[31;44m\xdf", 2)
        .save(&path, true)
        .unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "\x1b[38;2;170;0;0m\x1b[48;2;0;0;170m▀\x1b[38;2;0;0;0m\x1b[48;2;0;0;0m▀\x1b[0m\n"
    );
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = TempDir::new().unwrap();
    let err = AnsiDocument::load(dir.path().join("nope.ans")).unwrap_err();
    assert!(matches!(err, DocumentError::Io { .. }));
}

#[test]
fn unknown_extension_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("image.png");
    fs::write(&path, b"\x89PNG").unwrap();
    let err = AnsiDocument::load(&path).unwrap_err();
    assert_eq!(err.to_string(), "Unsupported file format: .png");
}
