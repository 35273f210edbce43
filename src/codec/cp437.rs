//! CP437 (IBM PC code page 437) conversion.
//!
//! Decoding is a straight 256-entry table lookup. Encoding uses the inverse
//! table; characters without a CP437 byte become `?` (0x3F).

use std::collections::HashMap;
use std::sync::OnceLock;

/// Byte substituted for characters that have no CP437 representation.
pub const SUBSTITUTE: u8 = b'?';

/// CP437 byte to Unicode table.
///
/// 0x00-0x1F and 0x7F map to the glyphs the IBM PC displays for them.
#[rustfmt::skip]
pub const CP437_TO_UNICODE: [char; 256] = [
    // 0x00-0x1F
    '\u{0000}', '\u{263A}', '\u{263B}', '\u{2665}', '\u{2666}', '\u{2663}', '\u{2660}', '\u{2022}',
    '\u{25D8}', '\u{25CB}', '\u{25D9}', '\u{2642}', '\u{2640}', '\u{266A}', '\u{266B}', '\u{263C}',
    '\u{25BA}', '\u{25C4}', '\u{2195}', '\u{203C}', '\u{00B6}', '\u{00A7}', '\u{25AC}', '\u{21A8}',
    '\u{2191}', '\u{2193}', '\u{2192}', '\u{2190}', '\u{221F}', '\u{2194}', '\u{25B2}', '\u{25BC}',
    // 0x20-0x7F
    ' ', '!', '"', '#', '$', '%', '&', '\'', '(', ')', '*', '+', ',', '-', '.', '/',
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', ':', ';', '<', '=', '>', '?',
    '@', 'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z', '[', '\\', ']', '^', '_',
    '`', 'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o',
    'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z', '{', '|', '}', '~', '\u{2302}',
    // 0x80-0xFF
    '\u{00C7}', '\u{00FC}', '\u{00E9}', '\u{00E2}', '\u{00E4}', '\u{00E0}', '\u{00E5}', '\u{00E7}',
    '\u{00EA}', '\u{00EB}', '\u{00E8}', '\u{00EF}', '\u{00EE}', '\u{00EC}', '\u{00C4}', '\u{00C5}',
    '\u{00C9}', '\u{00E6}', '\u{00C6}', '\u{00F4}', '\u{00F6}', '\u{00F2}', '\u{00FB}', '\u{00F9}',
    '\u{00FF}', '\u{00D6}', '\u{00DC}', '\u{00A2}', '\u{00A3}', '\u{00A5}', '\u{20A7}', '\u{0192}',
    '\u{00E1}', '\u{00ED}', '\u{00F3}', '\u{00FA}', '\u{00F1}', '\u{00D1}', '\u{00AA}', '\u{00BA}',
    '\u{00BF}', '\u{2310}', '\u{00AC}', '\u{00BD}', '\u{00BC}', '\u{00A1}', '\u{00AB}', '\u{00BB}',
    '\u{2591}', '\u{2592}', '\u{2593}', '\u{2502}', '\u{2524}', '\u{2561}', '\u{2562}', '\u{2556}',
    '\u{2555}', '\u{2563}', '\u{2551}', '\u{2557}', '\u{255D}', '\u{255C}', '\u{255B}', '\u{2510}',
    '\u{2514}', '\u{2534}', '\u{252C}', '\u{251C}', '\u{2500}', '\u{253C}', '\u{255E}', '\u{255F}',
    '\u{255A}', '\u{2554}', '\u{2569}', '\u{2566}', '\u{2560}', '\u{2550}', '\u{256C}', '\u{2567}',
    '\u{2568}', '\u{2564}', '\u{2565}', '\u{2559}', '\u{2558}', '\u{2552}', '\u{2553}', '\u{256B}',
    '\u{256A}', '\u{2518}', '\u{250C}', '\u{2588}', '\u{2584}', '\u{258C}', '\u{2590}', '\u{2580}',
    '\u{03B1}', '\u{00DF}', '\u{0393}', '\u{03C0}', '\u{03A3}', '\u{03C3}', '\u{00B5}', '\u{03C4}',
    '\u{03A6}', '\u{0398}', '\u{03A9}', '\u{03B4}', '\u{221E}', '\u{03C6}', '\u{03B5}', '\u{2229}',
    '\u{2261}', '\u{00B1}', '\u{2265}', '\u{2264}', '\u{2320}', '\u{2321}', '\u{00F7}', '\u{2248}',
    '\u{00B0}', '\u{2219}', '\u{00B7}', '\u{221A}', '\u{207F}', '\u{00B2}', '\u{25A0}', '\u{00A0}',
];

/// Bytes the ANSI parser interprets as controls. Their glyphs are not
/// encoded back to these bytes, otherwise re-parsing would execute them.
const INTERPRETED_CONTROLS: [u8; 5] = [0x09, 0x0A, 0x0D, 0x1A, 0x1B];

fn unicode_to_cp437() -> &'static HashMap<char, u8> {
    static MAP: OnceLock<HashMap<char, u8>> = OnceLock::new();
    MAP.get_or_init(|| {
        CP437_TO_UNICODE
            .iter()
            .enumerate()
            .map(|(byte, &c)| (c, byte as u8))
            .collect()
    })
}

/// True when `c` is one of the 256 CP437 display glyphs.
pub fn is_glyph(c: char) -> bool {
    unicode_to_cp437().contains_key(&c)
}

/// Decode a single CP437 byte.
#[inline]
pub fn decode_byte(byte: u8) -> char {
    CP437_TO_UNICODE[byte as usize]
}

/// Decode CP437 bytes to a Unicode string, one char per byte.
pub fn decode(data: &[u8]) -> String {
    data.iter().map(|&b| decode_byte(b)).collect()
}

/// Encode one character, or `None` when CP437 has no byte for it.
///
/// ASCII control characters (ESC, CR, LF, TAB, ...) pass through as their
/// own byte so rendered escape sequences survive encoding.
pub fn encode_char(c: char) -> Option<u8> {
    match unicode_to_cp437().get(&c) {
        Some(byte) if !INTERPRETED_CONTROLS.contains(byte) => Some(*byte),
        _ if c.is_ascii_control() => Some(c as u8),
        _ => None,
    }
}

/// Encode a Unicode string to CP437, substituting `?` for unmappable chars.
pub fn encode(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| encode_char(c).unwrap_or(SUBSTITUTE))
        .collect()
}
