//! Report rendering and export.
//!
//! Both renderings walk the fields of a [`TextStats`] in their fixed order
//! ([`Field::ALL`]) and name them through a [`Labels`] set:
//!
//! - [`render_text`]: `label: value` lines, with mapping entries indented by
//!   four spaces underneath their label.
//! - [`render_json`]: one JSON object, keys in field order, four-space
//!   indentation, non-ASCII characters written verbatim.
//!
//! A missing result (empty input) renders as an empty text report and `{}`.

use std::collections::BTreeMap;

use camino::Utf8Path;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::analysis::TextStats;
use crate::error::{ExportError, ExportResult};
use crate::tally::Tally;

/// Default path of the text report.
pub const DEFAULT_TEXT_REPORT: &str = "analyz.txt";

/// Default path of the JSON report.
pub const DEFAULT_JSON_REPORT: &str = "analyz.json";

/// Label set used to name report fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Labels {
    /// English field names (`total words`, `letter frequency`, ...).
    #[default]
    En,
    /// Russian field names (`Всего слов`, `Частота букв`, ...).
    Ru,
}

impl Labels {
    /// Returns the label set name.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Ru => "ru",
        }
    }
}

impl std::fmt::Display for Labels {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named field of the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Total characters.
    TotalCharacters,
    /// Total letters.
    TotalLetters,
    /// Total lines.
    TotalLines,
    /// Non-empty lines.
    NonEmptyLines,
    /// Total words.
    TotalWords,
    /// Words per line.
    WordsPerLine,
    /// Characters per line.
    CharactersPerLine,
    /// Repeated words.
    RepeatedWords,
    /// Letter frequency.
    LetterFrequency,
    /// Other-character frequency.
    OtherCharacters,
}

impl Field {
    /// Every field, in report order.
    pub const ALL: [Self; 10] = [
        Self::TotalCharacters,
        Self::TotalLetters,
        Self::TotalLines,
        Self::NonEmptyLines,
        Self::TotalWords,
        Self::WordsPerLine,
        Self::CharactersPerLine,
        Self::RepeatedWords,
        Self::LetterFrequency,
        Self::OtherCharacters,
    ];

    /// The field's name in the given label set.
    pub const fn label(self, labels: Labels) -> &'static str {
        match labels {
            Labels::En => match self {
                Self::TotalCharacters => "total characters",
                Self::TotalLetters => "total letters",
                Self::TotalLines => "total lines",
                Self::NonEmptyLines => "non-empty lines",
                Self::TotalWords => "total words",
                Self::WordsPerLine => "words per line",
                Self::CharactersPerLine => "characters per line",
                Self::RepeatedWords => "repeated words",
                Self::LetterFrequency => "letter frequency",
                Self::OtherCharacters => "other-character frequency",
            },
            Labels::Ru => match self {
                Self::TotalCharacters => "Всего символов",
                Self::TotalLetters => "Всего букв",
                Self::TotalLines => "Всего строк",
                Self::NonEmptyLines => "Непустых строк",
                Self::TotalWords => "Всего слов",
                Self::WordsPerLine => "Слов в каждой строке",
                Self::CharactersPerLine => "Символов в каждой строке",
                Self::RepeatedWords => "Повторяющиеся слова",
                Self::LetterFrequency => "Частота букв",
                Self::OtherCharacters => "Другие символы",
            },
        }
    }

    /// The field's value in `stats`.
    pub const fn value(self, stats: &TextStats) -> Metric<'_> {
        match self {
            Self::TotalCharacters => Metric::Count(stats.total_characters),
            Self::TotalLetters => Metric::Count(stats.total_letters),
            Self::TotalLines => Metric::Count(stats.total_lines),
            Self::NonEmptyLines => Metric::Count(stats.non_empty_lines),
            Self::TotalWords => Metric::Count(stats.total_words),
            Self::WordsPerLine => Metric::PerLine(&stats.words_per_line),
            Self::CharactersPerLine => Metric::PerLine(&stats.characters_per_line),
            Self::RepeatedWords => Metric::Table(&stats.repeated_words),
            Self::LetterFrequency => Metric::Table(&stats.letter_frequency),
            Self::OtherCharacters => Metric::Table(&stats.other_characters),
        }
    }
}

/// A field value borrowed from [`TextStats`].
#[derive(Debug, Clone, Copy)]
pub enum Metric<'a> {
    /// A scalar count.
    Count(usize),
    /// Counts keyed by 1-indexed line number.
    PerLine(&'a BTreeMap<usize, usize>),
    /// A frequency table.
    Table(&'a Tally),
}

impl Serialize for Metric<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Count(n) => n.serialize(serializer),
            Self::PerLine(map) => map.serialize(serializer),
            Self::Table(tally) => tally.serialize(serializer),
        }
    }
}

/// Statistics paired with the label set used to name their fields.
struct Labeled<'a> {
    stats: Option<&'a TextStats>,
    labels: Labels,
}

impl Serialize for Labeled<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let Some(stats) = self.stats else {
            return serializer.serialize_map(Some(0))?.end();
        };
        let mut map = serializer.serialize_map(Some(Field::ALL.len()))?;
        for field in Field::ALL {
            map.serialize_entry(field.label(self.labels), &field.value(stats))?;
        }
        map.end()
    }
}

/// Render the annotated text report.
pub fn render_text(stats: Option<&TextStats>, labels: Labels) -> String {
    let mut out = String::new();
    let Some(stats) = stats else {
        return out;
    };

    for field in Field::ALL {
        let label = field.label(labels);
        match field.value(stats) {
            Metric::Count(n) => out.push_str(&format!("{label}: {n}\n")),
            Metric::PerLine(map) => {
                out.push_str(&format!("{label}:\n"));
                for (line, count) in map {
                    out.push_str(&format!("    {line}: {count}\n"));
                }
            }
            Metric::Table(tally) => {
                out.push_str(&format!("{label}:\n"));
                for (key, count) in tally.iter() {
                    out.push_str(&format!("    {key}: {count}\n"));
                }
            }
        }
    }
    out
}

/// Render the JSON report.
pub fn render_json(stats: Option<&TextStats>, labels: Labels) -> ExportResult<String> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    Labeled { stats, labels }.serialize(&mut ser)?;
    Ok(String::from_utf8(buf)?)
}

/// Write the text report to `path`, replacing any existing file.
#[tracing::instrument(skip(stats), fields(has_stats = stats.is_some()))]
pub fn write_text_report(
    path: &Utf8Path,
    stats: Option<&TextStats>,
    labels: Labels,
) -> ExportResult<()> {
    write_file(path, &render_text(stats, labels))
}

/// Write the JSON report to `path`, replacing any existing file.
#[tracing::instrument(skip(stats), fields(has_stats = stats.is_some()))]
pub fn write_json_report(
    path: &Utf8Path,
    stats: Option<&TextStats>,
    labels: Labels,
) -> ExportResult<()> {
    let mut json = render_json(stats, labels)?;
    json.push('\n');
    write_file(path, &json)
}

fn write_file(path: &Utf8Path, contents: &str) -> ExportResult<()> {
    std::fs::write(path.as_std_path(), contents).map_err(|source| ExportError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::debug!(%path, bytes = contents.len(), "report written");
    Ok(())
}
