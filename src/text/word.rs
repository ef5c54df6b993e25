/// Returns true if `c` can continue an identifier token.
///
/// Letters and digits in any script count, as do `_` and `$`.
pub fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Byte length of the run of word characters at the start of `text`.
pub fn leading_word_len(text: &str) -> usize {
    text.chars()
        .take_while(|c| is_word_char(*c))
        .map(char::len_utf8)
        .sum()
}

/// Byte length of the run of word characters at the end of `text`.
pub fn trailing_word_len(text: &str) -> usize {
    text.chars()
        .rev()
        .take_while(|c| is_word_char(*c))
        .map(char::len_utf8)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_characters() {
        assert!(is_word_char('a'));
        assert!(is_word_char('Z'));
        assert!(is_word_char('7'));
        assert!(is_word_char('_'));
        assert!(is_word_char('$'));
        assert!(is_word_char('é'));
        assert!(!is_word_char(' '));
        assert!(!is_word_char('('));
        assert!(!is_word_char('.'));
    }

    #[test]
    fn test_leading_run_stops_at_first_non_word() {
        assert_eq!(leading_word_len("Name(x)"), 4);
        assert_eq!(leading_word_len(" Name"), 0);
        assert_eq!(leading_word_len(""), 0);
        assert_eq!(leading_word_len("abc"), 3);
    }

    #[test]
    fn test_trailing_run_stops_at_last_non_word() {
        assert_eq!(trailing_word_len("x = foo"), 3);
        assert_eq!(trailing_word_len("foo "), 0);
        assert_eq!(trailing_word_len(""), 0);
    }

    #[test]
    fn test_runs_are_measured_in_bytes() {
        // 'é' is two bytes in UTF-8
        assert_eq!(leading_word_len("café;"), 5);
        assert_eq!(trailing_word_len("(été"), 5);
    }
}
