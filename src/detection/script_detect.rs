//! Script detection for auto-selecting a transliteration direction

use std::fmt;

/// Dominant script of a text sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Cyrillic,
    Latin,
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Script::Cyrillic => f.write_str("cyrillic"),
            Script::Latin => f.write_str("latin"),
        }
    }
}

/// Detect the dominant script of a text sample
///
/// Counts Cyrillic letters against ASCII Latin letters, ignoring everything
/// else. Ties favor Cyrillic, so the caller gets a stable default direction
/// while text is still being typed.
pub fn detect_script(text: &str) -> Script {
    let mut cyrillic = 0usize;
    let mut latin = 0usize;

    for c in text.chars() {
        if ('\u{0400}'..='\u{04FF}').contains(&c) {
            cyrillic += 1;
        } else if c.is_ascii_alphabetic() {
            latin += 1;
        }
    }

    if cyrillic >= latin {
        Script::Cyrillic
    } else {
        Script::Latin
    }
}
