//! Casing transforms

/// All characters uppercased
pub fn to_uppercase(text: &str) -> String {
    text.to_uppercase()
}

/// All characters lowercased
pub fn to_lowercase(text: &str) -> String {
    text.to_lowercase()
}

/// First character of every whitespace-separated word uppercased,
/// everything else lowercased
pub fn to_title_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut word_start = true;

    for c in text.chars() {
        if c.is_whitespace() {
            result.push(c);
            word_start = true;
        } else if word_start {
            result.extend(c.to_uppercase());
            word_start = false;
        } else {
            result.extend(c.to_lowercase());
        }
    }

    result
}

/// Everything lowercased, then the first letter of the text and the first
/// letter after each of `.` `!` `?` uppercased
pub fn to_sentence_case(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut sentence_start = true;

    for c in text.to_lowercase().chars() {
        if matches!(c, '.' | '!' | '?') {
            result.push(c);
            sentence_start = true;
        } else if c.is_whitespace() {
            result.push(c);
        } else if sentence_start {
            result.extend(c.to_uppercase());
            sentence_start = false;
        } else {
            result.push(c);
        }
    }

    result
}
