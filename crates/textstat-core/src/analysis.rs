//! Descriptive text statistics.
//!
//! [`analyze`] turns a loaded text into a [`TextStats`] record: overall
//! counts, per-line counts, repeated words, and letter and punctuation
//! frequency tables. The computation is pure and total; the only special
//! case is empty text, which has no statistics at all.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::tally::Tally;
use crate::text;

/// Statistics for one text, in report order.
///
/// The serialized field names are the default (`en`) report labels. The
/// Russian (`ru`) labels are accepted as aliases so that reports written
/// with [`crate::report::Labels::Ru`] parse back into the same record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TextStats {
    /// Number of characters, whitespace and punctuation included.
    #[serde(rename = "total characters", alias = "Всего символов")]
    pub total_characters: usize,
    /// Number of alphabetic characters.
    #[serde(rename = "total letters", alias = "Всего букв")]
    pub total_letters: usize,
    /// Number of lines.
    #[serde(rename = "total lines", alias = "Всего строк")]
    pub total_lines: usize,
    /// Lines with something other than whitespace.
    #[serde(rename = "non-empty lines", alias = "Непустых строк")]
    pub non_empty_lines: usize,
    /// Number of whitespace-delimited words.
    #[serde(rename = "total words", alias = "Всего слов")]
    pub total_words: usize,
    /// Word count per line (1-indexed).
    #[serde(rename = "words per line", alias = "Слов в каждой строке")]
    pub words_per_line: BTreeMap<usize, usize>,
    /// Raw character count per line (1-indexed).
    #[serde(rename = "characters per line", alias = "Символов в каждой строке")]
    pub characters_per_line: BTreeMap<usize, usize>,
    /// Lowercased words that occur more than once.
    #[serde(rename = "repeated words", alias = "Повторяющиеся слова")]
    #[schemars(with = "BTreeMap<String, usize>")]
    pub repeated_words: Tally,
    /// Alphabetic characters of the lowercased text.
    #[serde(rename = "letter frequency", alias = "Частота букв")]
    #[schemars(with = "BTreeMap<String, usize>")]
    pub letter_frequency: Tally,
    /// Characters that are neither alphanumeric nor whitespace.
    #[serde(rename = "other-character frequency", alias = "Другие символы")]
    #[schemars(with = "BTreeMap<String, usize>")]
    pub other_characters: Tally,
}

/// Analyze `text`.
///
/// Returns `None` for empty text: there is nothing to report, and the
/// renderers produce an empty text report and `{}` for it. Any other input,
/// including whitespace-only text, yields a full record.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn analyze(text: &str) -> Option<TextStats> {
    if text.is_empty() {
        tracing::debug!("empty text, nothing to analyze");
        return None;
    }

    let words = text::split_words(text);
    let mut word_counts = Tally::new();
    for word in &words {
        word_counts.add(&word.to_lowercase());
    }

    let mut letter_frequency = Tally::new();
    let mut buf = [0u8; 4];
    for ch in text.to_lowercase().chars().filter(|c| c.is_alphabetic()) {
        letter_frequency.add(ch.encode_utf8(&mut buf));
    }

    let mut other_characters = Tally::new();
    for ch in text.chars().filter(|&c| text::is_other_char(c)) {
        other_characters.add(ch.encode_utf8(&mut buf));
    }

    let lines = text::split_lines(text);
    let words_per_line = lines
        .iter()
        .enumerate()
        .map(|(i, line)| (i + 1, text::split_words(line).len()))
        .collect();
    let characters_per_line = lines
        .iter()
        .enumerate()
        .map(|(i, line)| (i + 1, line.chars().count()))
        .collect();

    let stats = TextStats {
        total_characters: text.chars().count(),
        total_letters: text.chars().filter(|c| c.is_alphabetic()).count(),
        total_lines: lines.len(),
        non_empty_lines: lines.iter().filter(|line| !text::is_blank(line)).count(),
        total_words: words.len(),
        words_per_line,
        characters_per_line,
        repeated_words: word_counts.filter(|count| count > 1),
        letter_frequency,
        other_characters,
    };

    tracing::debug!(
        characters = stats.total_characters,
        words = stats.total_words,
        lines = stats.total_lines,
        "text analyzed"
    );
    Some(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(text: &str) -> TextStats {
        analyze(text).expect("non-empty text has statistics")
    }

    #[test]
    fn empty_text_has_no_stats() {
        assert!(analyze("").is_none());
    }

    #[test]
    fn whitespace_only_is_still_analyzed() {
        let s = stats("  \n\t");
        assert_eq!(s.total_characters, 4);
        assert_eq!(s.total_words, 0);
        assert_eq!(s.total_lines, 2);
        assert_eq!(s.non_empty_lines, 0);
        assert!(s.repeated_words.is_empty());
        assert!(s.other_characters.is_empty());
    }

    #[test]
    fn hello_hello_world() {
        let s = stats("Hello hello world");
        assert_eq!(s.total_words, 3);
        assert_eq!(s.total_letters, 15);
        assert_eq!(s.total_characters, 17);
        assert_eq!(s.repeated_words.iter().collect::<Vec<_>>(), vec![("hello", 2)]);

        let letters: Vec<_> = s.letter_frequency.iter().collect();
        assert_eq!(
            letters,
            vec![("h", 2), ("e", 2), ("l", 5), ("o", 3), ("w", 1), ("r", 1), ("d", 1)]
        );
    }

    #[test]
    fn two_lines_with_punctuation() {
        let s = stats("Line one.\nLine two!");
        assert_eq!(s.total_lines, 2);
        assert_eq!(s.non_empty_lines, 2);
        assert_eq!(s.words_per_line, BTreeMap::from([(1, 2), (2, 2)]));
        assert_eq!(s.characters_per_line, BTreeMap::from([(1, 9), (2, 9)]));
        assert_eq!(
            s.other_characters.iter().collect::<Vec<_>>(),
            vec![(".", 1), ("!", 1)]
        );
        assert_eq!(s.repeated_words.iter().collect::<Vec<_>>(), vec![("line", 2)]);
    }

    #[test]
    fn tabs_and_space_runs_make_no_empty_words() {
        let s = stats("alpha\t\tbeta    gamma \t delta");
        assert_eq!(s.total_words, 4);
        assert_eq!(s.words_per_line, BTreeMap::from([(1, 4)]));
        assert!(s.repeated_words.is_empty());
    }

    #[test]
    fn per_line_lengths_are_raw() {
        let s = stats("  padded  \n\nx");
        assert_eq!(s.total_lines, 3);
        assert_eq!(s.non_empty_lines, 2);
        assert_eq!(s.characters_per_line, BTreeMap::from([(1, 10), (2, 0), (3, 1)]));
        assert_eq!(s.words_per_line, BTreeMap::from([(1, 1), (2, 0), (3, 1)]));
    }

    #[test]
    fn other_characters_keep_original_case_and_skip_digits() {
        let s = stats("A-b, 42% «да»!");
        let others: Vec<_> = s.other_characters.iter().collect();
        assert_eq!(others, vec![("-", 1), (",", 1), ("%", 1), ("«", 1), ("»", 1), ("!", 1)]);
        assert_eq!(s.letter_frequency.get("a"), 1);
        assert_eq!(s.letter_frequency.get("b"), 1);
        assert_eq!(s.letter_frequency.get("д"), 1);
        assert_eq!(s.letter_frequency.get("4"), 0);
    }

    #[test]
    fn ascii_separators_are_whitespace() {
        let s = stats("a\x1fb c");
        assert_eq!(s.total_words, 3);
        assert!(s.other_characters.is_empty());

        let s = stats("a\x1cb");
        assert_eq!(s.total_words, 2);
        assert_eq!(s.words_per_line.values().sum::<usize>(), s.total_words);

        let s = stats("x\n\x1f\n");
        assert_eq!(s.total_lines, 2);
        assert_eq!(s.non_empty_lines, 1);
    }

    #[test]
    fn repeated_words_are_case_folded() {
        let s = stats("Мороз и солнце; МОРОЗ мороз");
        assert_eq!(s.repeated_words.get("мороз"), 3);
        assert_eq!(s.repeated_words.len(), 1);
    }

    #[test]
    fn properties_hold_for_samples() {
        let samples = [
            "a",
            "The the THE cat.",
            "Мороз и солнце; день чудесный!\nЕще ты дремлешь, друг прелестный —\n\n",
            "tab\tseparated\tvalues\r\nand\rmixed\u{2028}breaks",
            "  \n  \n",
            "1 2 3 4 5 5 5",
            "unit\x1fsep\x1crec\x1e",
        ];
        for sample in samples {
            let s = stats(sample);
            assert_eq!(s.total_characters, sample.chars().count(), "{sample:?}");
            assert!(s.total_letters <= s.total_characters, "{sample:?}");
            assert!(s.non_empty_lines <= s.total_lines, "{sample:?}");

            let words = text::split_words(sample);
            let once = words
                .iter()
                .map(|w| w.to_lowercase())
                .filter(|w| s.repeated_words.get(w) == 0)
                .count();
            assert_eq!(s.repeated_words.total() + once, s.total_words, "{sample:?}");

            assert_eq!(
                s.words_per_line.values().sum::<usize>(),
                s.total_words,
                "{sample:?}"
            );

            assert_eq!(analyze(sample), Some(s), "{sample:?}");
        }
    }
}
