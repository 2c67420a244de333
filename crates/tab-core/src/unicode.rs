//! Character-level Unicode classification for tab titles.

/// Characters a user can type into the switcher's query buffer.
pub fn is_query_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == ' ' || c == '-' || c == '_'
}

/// Check whether a title is plain ASCII text (letters, digits, space, punctuation).
pub fn is_plain_ascii(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_graphic() || c == ' ')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_query_char() {
        for c in ['a', 'Z', '0', '9', ' ', '-', '_'] {
            assert!(is_query_char(c), "{c:?} should be typeable");
        }
        for c in ['.', '/', '\t', 'é', '历'] {
            assert!(!is_query_char(c), "{c:?} should not be typeable");
        }
    }

    #[test]
    fn test_is_plain_ascii() {
        assert!(is_plain_ascii("Alpha Notes (draft).md"));
        assert!(is_plain_ascii(""));
        assert!(!is_plain_ascii("历史 notes"));
        assert!(!is_plain_ascii("tab\tname"));
    }
}
