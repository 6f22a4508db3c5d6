//! Core library for wordplay.
//!
//! This crate provides the lexical statistics computed over a word list,
//! plus the word source and configuration used by the `wordplay` CLI.
//!
//! # Modules
//!
//! - [`analysis`] - Pure statistics over words and corpora
//! - [`corpus`] - Line-oriented word source
//! - [`word`] - Validated word type and alphabet constants
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use wordplay_core::analysis::{anagrams, palindromes};
//!
//! let corpus = ["STOP", "POTS", "TOPS", "CAT", "ACT", "LEVEL"];
//! let group = anagrams::longest_anagram_group(corpus).unwrap();
//! assert_eq!(group, vec!["STOP", "POTS", "TOPS"]);
//! assert_eq!(palindromes::longest_palindrome(corpus).as_deref(), Some("LEVEL"));
//! ```
#![deny(unsafe_code)]

pub mod analysis;

pub mod config;

pub mod corpus;

pub mod error;

pub mod word;

pub use config::{Config, ConfigLoader, LogLevel};

pub use corpus::{MalformedPolicy, WordSource};

pub use error::{
    AnalysisError, AnalysisResult, ConfigError, ConfigResult, CorpusError, CorpusResult,
};

pub use word::Word;

/// Default maximum word list size in bytes (64 MiB).
///
/// Large enough for the common Scrabble lists (SOWPODS, TWL) with room to
/// spare, small enough to refuse an accidental multi-gigabyte input.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 64 * 1024 * 1024;
