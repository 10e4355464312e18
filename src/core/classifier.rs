//! Cyrillic character classification

use crate::core::alphabet;

/// Class of a character within the Uzbek Cyrillic alphabet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Vowel (а, е, ё, и, о, у, э, ю, я, ў)
    Vowel,
    /// Hard or soft sign (ъ, ь)
    Sign,
    /// Any other letter of the alphabet
    Consonant,
    /// Not a letter the alphabet knows
    Other,
}

/// Case class of a character
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseClass {
    Upper,
    Lower,
    /// Digits, punctuation, anything without a case distinction
    Caseless,
}

const CYRILLIC_VOWELS: [char; 10] = ['а', 'е', 'ё', 'и', 'о', 'у', 'э', 'ю', 'я', 'ў'];

/// Lowercase form of a character (first char of the lowercase expansion)
pub fn lowered(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

/// Classify a character against the Uzbek Cyrillic alphabet
///
/// Total over all of Unicode: unknown characters classify as [`CharClass::Other`].
pub fn classify(c: char) -> CharClass {
    let lc = lowered(c);
    if CYRILLIC_VOWELS.contains(&lc) {
        CharClass::Vowel
    } else if lc == 'ъ' || lc == 'ь' {
        CharClass::Sign
    } else if alphabet::latin_of(lc).is_some() {
        CharClass::Consonant
    } else {
        CharClass::Other
    }
}

/// Case class of a character
pub fn case_of(c: char) -> CaseClass {
    if c.is_uppercase() {
        CaseClass::Upper
    } else if c.is_lowercase() {
        CaseClass::Lower
    } else {
        CaseClass::Caseless
    }
}

/// Character is an Uzbek Cyrillic vowel (either case)
pub fn is_cyrillic_vowel(c: char) -> bool {
    classify(c) == CharClass::Vowel
}

/// Character is a hard or soft sign (either case)
pub fn is_cyrillic_sign(c: char) -> bool {
    classify(c) == CharClass::Sign
}

/// Character is a letter of the Uzbek Cyrillic alphabet (either case)
pub fn is_cyrillic_letter(c: char) -> bool {
    classify(c) != CharClass::Other
}

/// Character is an uppercase letter of any script
pub fn is_uppercase_letter(c: char) -> bool {
    c.is_alphabetic() && c.is_uppercase()
}
