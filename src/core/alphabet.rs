//! Uzbek Cyrillic/Latin alphabet tables
//!
//! All tables are fixed process-wide constants. Characters absent from the
//! tables pass through both transliteration directions unchanged.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Cyrillic letter (lowercase) -> Latin rendering (1-2 characters)
///
/// The soft sign maps to an empty rendering and is dropped on output.
pub static CYR_TO_LAT: LazyLock<HashMap<char, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ('а', "a"),
        ('б', "b"),
        ('в', "v"),
        ('г', "g"),
        ('д', "d"),
        ('е', "e"),
        ('ё', "yo"),
        ('ж', "j"),
        ('з', "z"),
        ('и', "i"),
        ('й', "y"),
        ('к', "k"),
        ('л', "l"),
        ('м', "m"),
        ('н', "n"),
        ('о', "o"),
        ('п', "p"),
        ('р', "r"),
        ('с', "s"),
        ('т', "t"),
        ('у', "u"),
        ('ф', "f"),
        ('х', "x"),
        ('ц', "ts"),
        ('ч', "ch"),
        ('ш', "sh"),
        ('ъ', "'"),
        ('ь', ""),
        ('э', "e"),
        ('ю', "yu"),
        ('я', "ya"),
        ('ў', "o'"),
        ('қ', "q"),
        ('ғ', "g'"),
        ('ҳ', "h"),
    ])
});

/// Latin rendering of a lowercase Cyrillic letter, `None` if the letter is
/// not part of the alphabet
pub fn latin_of(c: char) -> Option<&'static str> {
    CYR_TO_LAT.get(&c).copied()
}

/// Two-character Latin sequence -> Cyrillic letter
///
/// Both inputs must already be lowercased and apostrophe-normalized.
/// Consulted before the single-letter table so that digraphs are never
/// split (longest match first).
pub fn digraph_to_cyrillic(first: char, second: char) -> Option<char> {
    match (first, second) {
        ('o', '\'') => Some('ў'),
        ('g', '\'') => Some('ғ'),
        ('s', 'h') => Some('ш'),
        ('c', 'h') => Some('ч'),
        ('y', 'o') => Some('ё'),
        ('y', 'u') => Some('ю'),
        ('y', 'a') => Some('я'),
        ('y', 'e') => Some('е'),
        ('t', 's') => Some('ц'),
        _ => None,
    }
}

/// Single Latin character -> Cyrillic letter
///
/// Input must already be lowercased and apostrophe-normalized.
/// A lone apostrophe is the hard sign.
pub fn single_to_cyrillic(c: char) -> Option<char> {
    match c {
        'a' => Some('а'),
        'b' => Some('б'),
        'd' => Some('д'),
        'e' => Some('е'),
        'f' => Some('ф'),
        'g' => Some('г'),
        'h' => Some('ҳ'),
        'i' => Some('и'),
        'j' => Some('ж'),
        'k' => Some('к'),
        'l' => Some('л'),
        'm' => Some('м'),
        'n' => Some('н'),
        'o' => Some('о'),
        'p' => Some('п'),
        'q' => Some('қ'),
        'r' => Some('р'),
        's' => Some('с'),
        't' => Some('т'),
        'u' => Some('у'),
        'v' => Some('в'),
        'x' => Some('х'),
        'y' => Some('й'),
        'z' => Some('з'),
        '\'' => Some('ъ'),
        _ => None,
    }
}

/// Fold the typographic apostrophes used in Uzbek Latin text
/// (U+2018, U+2019, U+02BB) into the ASCII apostrophe
pub fn normalize_apostrophe(c: char) -> char {
    match c {
        '\u{2018}' | '\u{2019}' | '\u{02BB}' => '\'',
        _ => c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_cyrillic_letter_mapped() {
        // 35 letters of the Uzbek Cyrillic alphabet
        assert_eq!(CYR_TO_LAT.len(), 35);
        for letter in "абвгдеёжзийклмнопрстуфхцчшъьэюяўқғҳ".chars() {
            assert!(latin_of(letter).is_some(), "missing entry for {}", letter);
        }
    }

    #[test]
    fn test_digraph_renderings() {
        assert_eq!(latin_of('ш'), Some("sh"));
        assert_eq!(latin_of('ц'), Some("ts"));
        assert_eq!(latin_of('ё'), Some("yo"));
        assert_eq!(latin_of('ў'), Some("o'"));
        assert_eq!(latin_of('ғ'), Some("g'"));
    }

    #[test]
    fn test_signs() {
        assert_eq!(latin_of('ъ'), Some("'"));
        assert_eq!(latin_of('ь'), Some(""));
    }

    #[test]
    fn test_unmapped() {
        assert_eq!(latin_of('a'), None);
        assert_eq!(latin_of('1'), None);
        assert_eq!(latin_of('щ'), None); // not in the Uzbek alphabet
    }

    #[test]
    fn test_digraph_to_cyrillic() {
        assert_eq!(digraph_to_cyrillic('s', 'h'), Some('ш'));
        assert_eq!(digraph_to_cyrillic('o', '\''), Some('ў'));
        assert_eq!(digraph_to_cyrillic('y', 'e'), Some('е'));
        assert_eq!(digraph_to_cyrillic('s', 's'), None);
    }

    #[test]
    fn test_single_to_cyrillic() {
        assert_eq!(single_to_cyrillic('a'), Some('а'));
        assert_eq!(single_to_cyrillic('q'), Some('қ'));
        assert_eq!(single_to_cyrillic('\''), Some('ъ'));
        assert_eq!(single_to_cyrillic('c'), None); // only valid inside "ch"
        assert_eq!(single_to_cyrillic('w'), None);
    }

    #[test]
    fn test_normalize_apostrophe() {
        assert_eq!(normalize_apostrophe('\u{2019}'), '\'');
        assert_eq!(normalize_apostrophe('\u{02BB}'), '\'');
        assert_eq!(normalize_apostrophe('a'), 'a');
    }
}
