//! Reversal and binary/hex/Base64 encodings

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Characters in reverse order
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

/// Unicode scalar value of each character in binary, zero-padded to at
/// least 8 bits, space-separated
///
/// Characters above U+00FF render wider than 8 bits instead of being
/// truncated to a byte.
pub fn to_binary(text: &str) -> String {
    text.chars()
        .map(|c| format!("{:08b}", c as u32))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Unicode scalar value of each character in uppercase hex, zero-padded to
/// at least two digits, space-separated
pub fn to_hex(text: &str) -> String {
    text.chars()
        .map(|c| format!("{:02X}", c as u32))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Standard Base64 of the UTF-8 byte sequence
///
/// Encoding the UTF-8 bytes directly cannot fail, unlike byte-oriented
/// codecs that reject characters outside Latin-1.
pub fn to_base64(text: &str) -> String {
    STANDARD.encode(text.as_bytes())
}
