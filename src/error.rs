//! Error types for the ticket pipeline.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading, filtering, or exporting ticket records.
///
/// Every variant is fatal to the run: the pipeline is a fail-fast
/// transformation with no retries and no partial output. Soft outcomes
/// (no input, zero matches) are not errors and are handled by the CLI.
#[derive(Debug, Error)]
pub enum SiftError {
    /// A date string did not match its expected format.
    #[error("could not parse date '{value}' (expected {expected})")]
    ParseError {
        value: String,
        expected: &'static str,
    },

    /// A record is missing a column the pipeline needs.
    #[error("record is missing required column '{column}'")]
    SchemaError { column: &'static str },

    /// A file or directory could not be accessed.
    #[error("could not access '{}'", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV input or a failed CSV write.
    #[error(transparent)]
    Csv(#[from] csv::Error),
}

impl SiftError {
    /// I/O error with the offending path attached.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
