//! Core library for textstat.
//!
//! Reads a plain-text file and computes descriptive statistics about it:
//! character, word, and line counts, per-line counts, repeated words, and
//! letter and punctuation frequency tables. Results are rendered as an
//! annotated text report and as a JSON document.
//!
//! # Modules
//!
//! - [`source`] - Loading the input, with a missing file as a normal outcome
//! - [`analysis`] - The statistics themselves
//! - [`report`] - Text and JSON rendering and export
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```no_run
//! use camino::Utf8Path;
//! use textstat_core::{Labels, analyze, load_text, write_json_report, write_text_report};
//!
//! let outcome = load_text(Utf8Path::new("poem.txt"), None)?;
//! let stats = analyze(&outcome.into_text());
//! write_text_report(Utf8Path::new("analyz.txt"), stats.as_ref(), Labels::En)?;
//! write_json_report(Utf8Path::new("analyz.json"), stats.as_ref(), Labels::En)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
#![deny(unsafe_code)]

pub mod analysis;
pub mod config;
pub mod error;
pub mod report;
pub mod source;
pub mod tally;
pub mod text;

pub use analysis::{TextStats, analyze};
pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};
pub use error::{ConfigError, ConfigResult, ExportError, ExportResult, LoadError, LoadResult};
pub use report::{Labels, render_json, render_text, write_json_report, write_text_report};
pub use source::{DEFAULT_MAX_INPUT_BYTES, LoadOutcome, load_text};
pub use tally::Tally;
