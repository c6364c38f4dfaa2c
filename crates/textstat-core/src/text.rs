//! Text processing utilities.
//!
//! Provides word splitting, line splitting, and character classification
//! for use by the analysis module.

/// Whitespace for word splitting and blank-line detection.
///
/// Unicode whitespace plus the file/group/record/unit separators
/// (`\x1c`..`\x1f`), which also terminate lines.
pub const fn is_space(ch: char) -> bool {
    ch.is_whitespace() || matches!(ch, '\x1c'..='\x1f')
}

/// Split text into words on runs of whitespace (see [`is_space`]).
///
/// Leading, trailing, and repeated whitespace never yields empty tokens.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split(is_space).filter(|word| !word.is_empty()).collect()
}

/// Whether a line holds nothing but whitespace.
pub fn is_blank(line: &str) -> bool {
    line.chars().all(is_space)
}

/// Split text into lines using universal newline rules.
///
/// Recognized terminators: `\n`, `\r\n`, `\r`, vertical tab, form feed,
/// the file/group/record separators (`\x1c`..`\x1e`), NEL, and the Unicode
/// line and paragraph separators. Terminators are not included in the
/// returned lines, and a trailing terminator does not produce an extra
/// empty line.
#[tracing::instrument(skip_all, fields(text_len = text.len()))]
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut start = 0;
    let mut chars = text.char_indices().peekable();

    while let Some((i, ch)) = chars.next() {
        if !is_line_break(ch) {
            continue;
        }
        lines.push(&text[start..i]);
        let mut end = i + ch.len_utf8();
        if ch == '\r'
            && let Some(&(j, '\n')) = chars.peek()
        {
            chars.next();
            end = j + 1;
        }
        start = end;
    }

    // Remaining text
    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

/// Translate `\r\n` and lone `\r` to `\n`, as a text-mode read does.
pub fn normalize_newlines(text: &str) -> String {
    if !text.contains('\r') {
        return text.to_string();
    }
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// A character that is neither alphanumeric nor whitespace.
///
/// This covers punctuation and symbols but excludes letters, digits, and
/// every kind of whitespace including newlines and the `\x1c`..`\x1f`
/// separators.
pub fn is_other_char(ch: char) -> bool {
    !ch.is_alphanumeric() && !is_space(ch)
}

const fn is_line_break(ch: char) -> bool {
    matches!(
        ch,
        '\n' | '\r'
            | '\x0b'
            | '\x0c'
            | '\x1c'
            | '\x1d'
            | '\x1e'
            | '\u{85}'
            | '\u{2028}'
            | '\u{2029}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_collapse_whitespace() {
        let words = split_words("  one\t\ttwo   three\n four  ");
        assert_eq!(words, vec!["one", "two", "three", "four"]);
    }

    #[test]
    fn words_empty_input() {
        assert!(split_words("").is_empty());
        assert!(split_words(" \t\n ").is_empty());
    }

    #[test]
    fn lines_basic() {
        assert_eq!(split_lines("Line one.\nLine two!"), vec!["Line one.", "Line two!"]);
    }

    #[test]
    fn lines_trailing_newline_adds_nothing() {
        assert_eq!(split_lines("a\nb\n"), vec!["a", "b"]);
    }

    #[test]
    fn lines_keep_blank_lines() {
        assert_eq!(split_lines("a\n\n\nb"), vec!["a", "", "", "b"]);
        assert_eq!(split_lines("\n"), vec![""]);
    }

    #[test]
    fn lines_empty_input() {
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn lines_crlf_is_one_break() {
        assert_eq!(split_lines("a\r\nb\rc"), vec!["a", "b", "c"]);
        assert_eq!(split_lines("a\r\n"), vec!["a"]);
    }

    #[test]
    fn lines_unicode_separators() {
        assert_eq!(
            split_lines("a\u{2028}b\u{2029}c\u{85}d\x0ce"),
            vec!["a", "b", "c", "d", "e"]
        );
    }

    #[test]
    fn normalize_translates_carriage_returns() {
        assert_eq!(normalize_newlines("a\r\nb\rc\n"), "a\nb\nc\n");
        assert_eq!(normalize_newlines("plain"), "plain");
    }

    #[test]
    fn other_chars() {
        assert!(is_other_char('.'));
        assert!(is_other_char('—'));
        assert!(is_other_char('$'));
        assert!(!is_other_char('a'));
        assert!(!is_other_char('Я'));
        assert!(!is_other_char('7'));
        assert!(!is_other_char(' '));
        assert!(!is_other_char('\n'));
        assert!(!is_other_char('\x1c'));
        assert!(!is_other_char('\x1f'));
    }

    #[test]
    fn separators_split_words() {
        assert_eq!(split_words("a\x1fb c"), vec!["a", "b", "c"]);
        assert_eq!(split_words("a\x1cb"), vec!["a", "b"]);
        assert!(split_words("\x1d\x1e").is_empty());
    }

    #[test]
    fn separators_count_as_space() {
        for ch in ['\x1c', '\x1d', '\x1e', '\x1f', ' ', '\t', '\u{a0}'] {
            assert!(is_space(ch), "{ch:?}");
        }
        assert!(!is_space('\x1b'));
        assert!(!is_space('a'));
    }

    #[test]
    fn blank_lines() {
        assert!(is_blank(""));
        assert!(is_blank(" \t\x1f"));
        assert!(!is_blank(" x "));
    }
}
