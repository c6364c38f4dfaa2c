//! Loading the input text.
//!
//! A missing input file is an expected outcome, not an error: callers get
//! [`LoadOutcome::Missing`], warn the user, and carry on with empty text.
//! Anything else that stops the file from being read is a [`LoadError`].

use std::io::ErrorKind;

use camino::{Utf8Path, Utf8PathBuf};

use crate::error::{LoadError, LoadResult};
use crate::text;

/// Default input limit (5 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 5 * 1024 * 1024;

/// What [`load_text`] found at the input path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read; line endings are normalized to `\n`.
    Loaded(String),
    /// Nothing exists at the path. Analysis continues on empty text.
    Missing {
        /// The path that was looked up.
        path: Utf8PathBuf,
    },
}

impl LoadOutcome {
    /// Whether the input was missing.
    pub const fn is_missing(&self) -> bool {
        matches!(self, Self::Missing { .. })
    }

    /// The loaded text, or an empty string for a missing file.
    pub fn into_text(self) -> String {
        match self {
            Self::Loaded(text) => text,
            Self::Missing { .. } => String::new(),
        }
    }
}

/// Read the whole file at `path` as UTF-8 text.
///
/// When `max_bytes` is set, the file size is checked against it before
/// anything is read into memory.
#[tracing::instrument(skip(path), fields(%path))]
pub fn load_text(path: &Utf8Path, max_bytes: Option<usize>) -> LoadResult<LoadOutcome> {
    let read_error = |source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    };

    let metadata = match std::fs::metadata(path.as_std_path()) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(missing(path)),
        Err(e) => return Err(read_error(e)),
    };
    if let Some(limit) = max_bytes
        && metadata.len() > limit as u64
    {
        return Err(LoadError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            limit,
        });
    }

    let raw = match std::fs::read_to_string(path.as_std_path()) {
        Ok(raw) => raw,
        // Removed between the size check and the read.
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(missing(path)),
        Err(e) => return Err(read_error(e)),
    };

    tracing::debug!(bytes = raw.len(), "input loaded");
    Ok(LoadOutcome::Loaded(text::normalize_newlines(&raw)))
}

fn missing(path: &Utf8Path) -> LoadOutcome {
    tracing::info!(%path, "input file not found, continuing with empty text");
    LoadOutcome::Missing {
        path: path.to_path_buf(),
    }
}
