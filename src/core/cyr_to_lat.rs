//! Cyrillic -> Latin transliteration
//!
//! Single left-to-right pass with one character of lookback (iotation of е)
//! and one character of lookahead (smart casing of digraphs).

use crate::core::alphabet;
use crate::core::classifier::{classify, is_uppercase_letter, lowered, CharClass};

/// Transliterate Uzbek Cyrillic text to Latin script
///
/// Characters outside the alphabet (Latin letters, digits, punctuation,
/// emoji) are copied through unchanged.
pub fn transliterate(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut result = String::with_capacity(text.len());

    for (i, &c) in chars.iter().enumerate() {
        let lc = lowered(c);

        let base: &str = if lc == 'е' {
            // е is iotated (ye) at word start and after a vowel or sign,
            // plain (e) after a Cyrillic consonant
            if iotation_context(&chars, i) {
                "ye"
            } else {
                "e"
            }
        } else if let Some(mapped) = alphabet::latin_of(lc) {
            mapped
        } else {
            result.push(c);
            continue;
        };

        if c == lc {
            result.push_str(base);
        } else {
            push_capitalized(&mut result, base, &chars, i);
        }
    }

    result
}

/// Should a е at position `i` render as "ye"?
///
/// True at the start of the string, after a vowel, after a hard/soft sign,
/// and after any character that is not a Cyrillic letter (word start).
fn iotation_context(chars: &[char], i: usize) -> bool {
    if i == 0 {
        return true;
    }
    match classify(chars[i - 1]) {
        CharClass::Vowel | CharClass::Sign | CharClass::Other => true,
        CharClass::Consonant => false,
    }
}

/// Append `base` for an uppercase source character at position `i`
///
/// The first Latin character is always capitalized. The rest of a digraph
/// is capitalized too when the surrounding word is in all caps: the next
/// character is uppercase, or (next is missing or not a letter) the
/// previous character was uppercase.
fn push_capitalized(result: &mut String, base: &str, chars: &[char], i: usize) {
    let mut rendered = base.chars();
    let Some(first) = rendered.next() else {
        // empty rendering (soft sign)
        return;
    };
    let rest: &str = &base[first.len_utf8()..];

    for upper in first.to_uppercase() {
        result.push(upper);
    }

    if rest.is_empty() {
        return;
    }

    let mut all_caps = false;
    match chars.get(i + 1) {
        Some(&next) if is_uppercase_letter(next) => all_caps = true,
        Some(&next) if next.is_lowercase() => {} // cased lowercase letter continues the word
        _ => {
            // end of word (caseless characters included): fall back to the
            // previous character
            if i > 0 && is_uppercase_letter(chars[i - 1]) {
                all_caps = true;
            }
        }
    }

    if all_caps {
        result.push_str(&rest.to_uppercase());
    } else {
        result.push_str(rest);
    }
}
