//! CP437 decoding and encoding.

use bbs_ansi_art::codec::{decode, encode, is_glyph};

#[test]
fn box_drawing_and_shading() {
    assert_eq!(decode(b"\xc9\xcd\xbb\xb0\xb1\xb2\xdb"), "╔═╗░▒▓█");
    assert_eq!(encode("╔═╗░▒▓█"), b"\xc9\xcd\xbb\xb0\xb1\xb2\xdb");
}

#[test]
fn every_high_byte_round_trips() {
    let bytes: Vec<u8> = (0x80..=0xFF).collect();
    assert_eq!(encode(&decode(&bytes)), bytes);
}

#[test]
fn unmappable_chars_become_question_marks() {
    assert_eq!(encode("a€b"), b"a?b");
    assert!(!is_glyph('€'));
    assert!(is_glyph('▒'));
}

#[test]
fn escape_sequences_pass_through_encode() {
    assert_eq!(encode("\x1b[31mA\r\n"), b"\x1b[31mA\r\n");
}
