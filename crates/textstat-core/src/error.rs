//! Error types for textstat-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors that abort loading the input text.
///
/// A missing file is not an error; see [`crate::source::LoadOutcome::Missing`].
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file exists but could not be read as UTF-8 text.
    #[error("failed to read {path}")]
    Read {
        /// The input path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is larger than the configured input limit.
    #[error("input too large: {path} is {size} bytes (limit: {limit} bytes)")]
    TooLarge {
        /// The input path.
        path: Utf8PathBuf,
        /// Actual file size in bytes.
        size: u64,
        /// Configured limit in bytes.
        limit: usize,
    },
}

/// Result type alias using [`LoadError`].
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors that can occur while writing a report.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The destination could not be written.
    #[error("failed to write {path}")]
    Write {
        /// The destination path.
        path: Utf8PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The report could not be serialized.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),

    /// The serializer produced bytes that are not UTF-8.
    #[error("serialized report is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Result type alias using [`ExportError`].
pub type ExportResult<T> = Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_utf8_report_is_an_error() {
        let err = ExportError::from(String::from_utf8(vec![b'{', 0xff, b'}']).unwrap_err());
        assert!(matches!(err, ExportError::Utf8(_)));
        assert!(err.to_string().starts_with("serialized report is not valid UTF-8"));
    }

    #[test]
    fn too_large_names_path_and_limit() {
        let err = LoadError::TooLarge {
            path: Utf8PathBuf::from("poem.txt"),
            size: 20,
            limit: 10,
        };
        assert_eq!(
            err.to_string(),
            "input too large: poem.txt is 20 bytes (limit: 10 bytes)"
        );
    }
}
