//! Display text to search key conversion.
//!
//! Han characters are romanized to toneless pinyin with no separator between
//! syllables; every other character is lowercased in place. The result is
//! only ever used as a match target.

use pinyin::ToPinyin;

use crate::unicode::is_plain_ascii;

/// Convert display text into its lowercase searchable key.
///
/// Characters without a known reading pass through (lowercased where a
/// lowercase form exists), so this never fails.
pub fn transliterate(text: &str) -> String {
    if is_plain_ascii(text) {
        return text.to_ascii_lowercase();
    }

    let mut key = String::with_capacity(text.len());
    for c in text.chars() {
        match c.to_pinyin() {
            Some(p) => key.push_str(p.plain()),
            None => key.extend(c.to_lowercase()),
        }
    }
    key
}
