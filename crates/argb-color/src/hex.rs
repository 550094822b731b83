//! Hexadecimal color codec
//!
//! Accepted input is any text containing exactly 3, 6 or 8 hex digits once
//! every non-hex character (`#`, punctuation, whitespace) is discarded:
//!
//! - `rgb` - each digit duplicated to a byte, alpha 255
//! - `rrggbb` - three bytes, alpha 255
//! - `aarrggbb` - four bytes in alpha, red, green, blue order
//!
//! Output is always the canonical 8-digit lowercase `aarrggbb` form.

use crate::channel;
use crate::error::{ColorError, ColorResult};
use crate::ArgbColor;

/// Number of digits in the canonical hex form
pub const CANONICAL_DIGITS: usize = 8;

/// Keep only the hex digits of `text`, lower-cased
pub fn scan_digits(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_hexdigit)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        // scan_digits only yields lowercase hex digits
        _ => 0,
    }
}

fn byte_at(digits: &[u8], i: usize) -> u8 {
    nibble(digits[i]) << 4 | nibble(digits[i + 1])
}

/// Decode hex text into `[a, r, g, b]` bytes
pub fn decode(text: &str) -> ColorResult<[u8; 4]> {
    let digits = scan_digits(text);
    let d = digits.as_bytes();

    match d.len() {
        3 => Ok([255, nibble(d[0]) * 17, nibble(d[1]) * 17, nibble(d[2]) * 17]),
        6 => Ok([255, byte_at(d, 0), byte_at(d, 2), byte_at(d, 4)]),
        8 => Ok([byte_at(d, 0), byte_at(d, 2), byte_at(d, 4), byte_at(d, 6)]),
        n => Err(ColorError::unsupported_hex(text, n)),
    }
}

/// Format `[a, r, g, b]` bytes as 8 lowercase hex digits
pub fn encode_bytes(argb: [u8; 4]) -> String {
    let [a, r, g, b] = argb;
    format!("{:02x}{:02x}{:02x}{:02x}", a, r, g, b)
}

/// Canonical hex of a color: each channel rounded and clamped to a byte
pub fn encode(color: &ArgbColor) -> String {
    encode_bytes([
        channel::to_byte(color.a()),
        channel::to_byte(color.r()),
        channel::to_byte(color.g()),
        channel::to_byte(color.b()),
    ])
}

/// Normalize hex text into a 6- or 8-digit lowercase key.
///
/// Three digits expand to six. No alpha digits are added.
pub fn normalize_hex_key(text: &str) -> ColorResult<String> {
    let digits = scan_digits(text);
    match digits.len() {
        3 => Ok(digits.chars().flat_map(|c| [c, c]).collect()),
        6 | 8 => Ok(digits),
        n => Err(ColorError::unsupported_hex(text, n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_widths() {
        assert_eq!(decode("#f0a").unwrap(), [255, 255, 0, 170]);
        assert_eq!(decode("FF00AA").unwrap(), [255, 255, 0, 170]);
        assert_eq!(decode("80ff00aa").unwrap(), [128, 255, 0, 170]);
        assert_eq!(decode("  #12-34-56 ").unwrap(), [255, 0x12, 0x34, 0x56]);
    }

    #[test]
    fn test_decode_bad_width() {
        for text in ["", "#ff", "ffff", "fffff", "fffffff", "fffffffff", "#xyz"] {
            match decode(text) {
                Err(ColorError::UnsupportedHexFormat { digits, .. }) => {
                    assert_eq!(digits, scan_digits(text).len());
                }
                other => panic!("expected UnsupportedHexFormat for {:?}, got {:?}", text, other),
            }
        }
    }

    #[test]
    fn test_encode_bytes_roundtrip() {
        for &argb in &[[0, 0, 0, 0], [255, 255, 255, 255], [1, 2, 3, 4], [128, 17, 200, 99]] {
            let text = encode_bytes(argb);
            assert_eq!(text.len(), CANONICAL_DIGITS);
            assert_eq!(decode(&text).unwrap(), argb);
        }
    }

    #[test]
    fn test_normalize_hex_key() {
        assert_eq!(normalize_hex_key("#F0A").unwrap(), "ff00aa");
        assert_eq!(normalize_hex_key("#FF00AA").unwrap(), "ff00aa");
        assert_eq!(normalize_hex_key("80FF00AA").unwrap(), "80ff00aa");
        assert!(matches!(
            normalize_hex_key("abcd"),
            Err(ColorError::UnsupportedHexFormat { digits: 4, .. })
        ));
    }
}
