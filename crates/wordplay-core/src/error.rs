//! Error types for wordplay-core.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),

    /// Configuration file not found after searching all locations.
    #[error("no configuration file found")]
    NotFound,
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors raised by a statistic that needs a non-trivial corpus.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AnalysisError {
    /// The corpus held no words, so no extremum exists.
    #[error("corpus contains no words")]
    EmptyCorpus,

    /// No two words in the corpus share an anagram key.
    #[error("no two words in the corpus are anagrams of each other")]
    NoAnagramsFound,

    /// An unknown check name was provided.
    #[error("unknown check: {name}. Use: {available}")]
    UnknownCheck {
        /// The check name that was requested.
        name: String,
        /// Comma-separated list of available check names.
        available: String,
    },
}

/// Result type alias using [`AnalysisError`].
pub type AnalysisResult<T> = Result<T, AnalysisError>;

/// Errors produced while reading a word list.
#[derive(Error, Debug)]
pub enum CorpusError {
    /// A line is empty or contains something other than `A-Z`.
    #[error("malformed word on line {line}: {source}")]
    MalformedWord {
        /// 1-based line number in the source.
        line: usize,
        /// Why the line was rejected.
        source: crate::word::WordError,
    },

    /// The word list could not be opened or read.
    #[error("failed to read {path}: {source}")]
    Io {
        /// Path of the word list (or `<reader>` for in-memory sources).
        path: Utf8PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The word list exceeds the configured size limit.
    #[error("input too large: {path} is {size} bytes (limit: {limit} bytes)")]
    TooLarge {
        /// Path of the word list.
        path: Utf8PathBuf,
        /// Size on disk in bytes.
        size: u64,
        /// Configured limit in bytes.
        limit: usize,
    },
}

/// Result type alias using [`CorpusError`].
pub type CorpusResult<T> = Result<T, CorpusError>;
