//! Mode dispatch: one entry point for every conversion

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::core::{cyr_to_lat, lat_to_cyr};
use crate::transform::{case, encode};

/// Available conversion modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionMode {
    CyrillicToLatin,
    LatinToCyrillic,
    Uppercase,
    Lowercase,
    TitleCase,
    SentenceCase,
    Reverse,
    Binary,
    Hex,
    Base64,
}

impl ConversionMode {
    /// All modes, in menu order
    pub const ALL: [ConversionMode; 10] = [
        ConversionMode::CyrillicToLatin,
        ConversionMode::LatinToCyrillic,
        ConversionMode::Uppercase,
        ConversionMode::Lowercase,
        ConversionMode::TitleCase,
        ConversionMode::SentenceCase,
        ConversionMode::Reverse,
        ConversionMode::Binary,
        ConversionMode::Hex,
        ConversionMode::Base64,
    ];

    /// CLI name of the mode
    pub fn name(&self) -> &'static str {
        match self {
            ConversionMode::CyrillicToLatin => "cyrillic-to-latin",
            ConversionMode::LatinToCyrillic => "latin-to-cyrillic",
            ConversionMode::Uppercase => "uppercase",
            ConversionMode::Lowercase => "lowercase",
            ConversionMode::TitleCase => "title-case",
            ConversionMode::SentenceCase => "sentence-case",
            ConversionMode::Reverse => "reverse",
            ConversionMode::Binary => "binary",
            ConversionMode::Hex => "hex",
            ConversionMode::Base64 => "base64",
        }
    }

    /// Uzbek menu label, as shown by the original converter UI
    pub fn label(&self) -> &'static str {
        match self {
            ConversionMode::CyrillicToLatin => "LOTINCHAGA OTKAZISH",
            ConversionMode::LatinToCyrillic => "KIRILLCHAGA OTKAZISH",
            ConversionMode::Uppercase => "KATTA HARF",
            ConversionMode::Lowercase => "KICHIK HARF",
            ConversionMode::TitleCase => "SARLAVHA HARFI",
            ConversionMode::SentenceCase => "GAP BOSHI HARFI",
            ConversionMode::Reverse => "TESKARI",
            ConversionMode::Binary => "IKKILIK",
            ConversionMode::Hex => "HEX",
            ConversionMode::Base64 => "BASE64",
        }
    }
}

impl fmt::Display for ConversionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown mode name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseModeError {
    name: String,
}

impl fmt::Display for ParseModeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown conversion mode: {}", self.name)
    }
}

impl std::error::Error for ParseModeError {}

impl FromStr for ConversionMode {
    type Err = ParseModeError;

    /// Accepts the CLI names (`cyrillic-to-latin`), underscore variants,
    /// a few short aliases, and the Uzbek menu labels
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        let mode = match normalized.as_str() {
            "cyrillic-to-latin" | "c2l" | "lotin" | "lotinchaga otkazish" => {
                ConversionMode::CyrillicToLatin
            }
            "latin-to-cyrillic" | "l2c" | "kirill" | "kirillchaga otkazish" => {
                ConversionMode::LatinToCyrillic
            }
            "uppercase" | "upper" | "katta harf" => ConversionMode::Uppercase,
            "lowercase" | "lower" | "kichik harf" => ConversionMode::Lowercase,
            "title-case" | "title" | "sarlavha harfi" => ConversionMode::TitleCase,
            "sentence-case" | "sentence" | "gap boshi harfi" => ConversionMode::SentenceCase,
            "reverse" | "teskari" => ConversionMode::Reverse,
            "binary" | "ikkilik" => ConversionMode::Binary,
            "hex" => ConversionMode::Hex,
            "base64" => ConversionMode::Base64,
            _ => {
                return Err(ParseModeError {
                    name: s.to_string(),
                })
            }
        };
        Ok(mode)
    }
}

/// Convert `text` under the given mode
///
/// Stateless and total: every mode is a pure function of the input, and
/// characters no table knows pass through unchanged.
pub fn convert(text: &str, mode: ConversionMode) -> String {
    if text.is_empty() {
        return String::new();
    }

    match mode {
        ConversionMode::CyrillicToLatin => cyr_to_lat::transliterate(text),
        ConversionMode::LatinToCyrillic => lat_to_cyr::transliterate(text),
        ConversionMode::Uppercase => case::to_uppercase(text),
        ConversionMode::Lowercase => case::to_lowercase(text),
        ConversionMode::TitleCase => case::to_title_case(text),
        ConversionMode::SentenceCase => case::to_sentence_case(text),
        ConversionMode::Reverse => encode::reverse(text),
        ConversionMode::Binary => encode::to_binary(text),
        ConversionMode::Hex => encode::to_hex(text),
        ConversionMode::Base64 => encode::to_base64(text),
    }
}
