//! Error types for generation and analysis.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced to callers of the generation and analysis APIs.
///
/// Estimator-level problems never appear here: they are absorbed into the
/// analysis report as per-estimator failures. The only fatal analysis error
/// is [`Error::OrchestratorUnavailable`].
#[derive(Error, Debug)]
pub enum Error {
    /// Caller-supplied generation parameters violate a precondition.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The dictionary file could not be read.
    #[error("dictionary not readable: {path}")]
    DictionaryUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No words remain after normalization and length filtering.
    #[error("no usable words in dictionary for length bounds {min}-{max}")]
    DictionaryEmpty { min: usize, max: usize },

    /// Some words matched, but fewer than the requested word count.
    #[error(
        "not enough suitable words: need {needed}, found {available}; \
         try loosening the word length bounds"
    )]
    InsufficientWords { needed: usize, available: usize },

    /// A uniform draw was requested over an empty range.
    #[error("random upper bound must be greater than zero")]
    Range,

    /// A random choice was requested from an empty sequence.
    #[error("cannot choose from an empty sequence")]
    EmptyInput,

    /// The local estimator itself failed; a programming defect, not an
    /// expected runtime condition.
    #[error("local estimator failed: {0}")]
    OrchestratorUnavailable(String),
}

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
