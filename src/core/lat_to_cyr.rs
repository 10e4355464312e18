//! Latin -> Cyrillic transliteration
//!
//! Greedy longest-match pass: at every position a two-character digraph
//! match is attempted before the single-letter table, so "sh" is never
//! split into с + ҳ.

use crate::core::alphabet;
use crate::core::classifier::lowered;

/// Transliterate Uzbek Latin text to Cyrillic script
///
/// Matching is case-insensitive; the case of the first matched Latin
/// character decides the case of the Cyrillic letter. Typographic
/// apostrophes (o‘, g‘, oʻ) are accepted alongside the ASCII one.
pub fn transliterate(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len());

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        let lc = alphabet::normalize_apostrophe(lowered(c));

        if let Some(&next) = chars.get(i + 1) {
            let lnext = alphabet::normalize_apostrophe(lowered(next));
            if let Some(cyr) = alphabet::digraph_to_cyrillic(lc, lnext) {
                result.push(apply_case(cyr, c.is_uppercase()));
                i += 2;
                continue;
            }
        }

        if let Some(cyr) = alphabet::single_to_cyrillic(lc) {
            result.push(apply_case(cyr, c.is_uppercase()));
        } else {
            result.push(c);
        }
        i += 1;
    }

    result
}

/// Uppercase the Cyrillic letter when the source was uppercase
fn apply_case(cyr: char, upper: bool) -> char {
    if upper {
        cyr.to_uppercase().next().unwrap_or(cyr)
    } else {
        cyr
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_mapping() {
        assert_eq!(transliterate("abvgd"), "абвгд");
        assert_eq!(transliterate("salom"), "салом");
    }

    #[test]
    fn test_digraphs() {
        assert_eq!(transliterate("shahar"), "шаҳар");
        assert_eq!(transliterate("choy"), "чой");
        assert_eq!(transliterate("tsirk"), "цирк");
        assert_eq!(transliterate("yosh"), "ёш");
        assert_eq!(transliterate("yulduz"), "юлдуз");
        assert_eq!(transliterate("yangi"), "янги");
        assert_eq!(transliterate("yer"), "ер");
    }

    #[test]
    fn test_apostrophe_letters() {
        assert_eq!(transliterate("o'zbekiston"), "ўзбекистон");
        assert_eq!(transliterate("g'alaba"), "ғалаба");
        // hard sign
        assert_eq!(transliterate("ma'no"), "маъно");
    }

    #[test]
    fn test_typographic_apostrophes() {
        assert_eq!(transliterate("o\u{2018}zbekiston"), "ўзбекистон");
        assert_eq!(transliterate("o\u{2019}zbekiston"), "ўзбекистон");
        assert_eq!(transliterate("o\u{02BB}zbekiston"), "ўзбекистон");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(transliterate("Shahar"), "Шаҳар");
        assert_eq!(transliterate("Choy"), "Чой");
        assert_eq!(transliterate("Yosh"), "Ёш");
        assert_eq!(transliterate("O'zbekiston"), "Ўзбекистон");
    }

    #[test]
    fn test_all_caps() {
        assert_eq!(transliterate("SHAHAR"), "ШАҲАР");
        assert_eq!(transliterate("CHOY"), "ЧОЙ");
        assert_eq!(transliterate("YOSH"), "ЁШ");
    }

    #[test]
    fn test_mixed_case() {
        assert_eq!(transliterate("Salom DUNYO"), "Салом ДУНЁ");
    }

    #[test]
    fn test_passthrough() {
        assert_eq!(transliterate("salom 123! @#$"), "салом 123! @#$");
        assert_eq!(transliterate("123 😊"), "123 😊");
        // c and w exist only inside digraphs
        assert_eq!(transliterate("wc"), "wc");
    }

    #[test]
    fn test_empty() {
        assert_eq!(transliterate(""), "");
    }
}
