//! Validated word type.
//!
//! A [`Word`] is a non-empty run of ASCII uppercase letters. Every statistic
//! in [`crate::analysis`] accepts plain `&str` as well, but words coming out
//! of a [`crate::corpus::WordSource`] are always validated first.

use std::fmt;
use std::ops::Deref;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The 26 letters every per-letter statistic covers, in order.
pub const ALPHABET: [char; 26] = [
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R', 'S',
    'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// Vowels tracked by the vowel statistics. `Y` counts.
pub const VOWELS: [char; 6] = ['A', 'E', 'I', 'O', 'U', 'Y'];

/// Why a line could not be turned into a [`Word`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WordError {
    /// The line was empty.
    #[error("empty word")]
    Empty,

    /// The line contains a character outside `A-Z`.
    #[error("invalid character {ch:?} at position {position} in {word:?}")]
    InvalidCharacter {
        /// The offending word.
        word: String,
        /// The first character that is not an uppercase ASCII letter.
        ch: char,
        /// 0-based character position of `ch`.
        position: usize,
    },

    /// The line is not valid UTF-8 (e.g. a Latin-1 accented letter).
    #[error("invalid UTF-8 in {lossy:?}")]
    InvalidUtf8 {
        /// The line with invalid bytes replaced by U+FFFD.
        lossy: String,
    },
}

/// A non-empty word made of uppercase ASCII letters.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

impl Word {
    /// Validate `text` as a word.
    ///
    /// No case folding or trimming happens here.
    ///
    /// # Errors
    ///
    /// Returns [`WordError::Empty`] for an empty string and
    /// [`WordError::InvalidCharacter`] for anything outside `A-Z`.
    ///
    /// ```
    /// use wordplay_core::word::{Word, WordError};
    ///
    /// assert_eq!(Word::new("QUEUE").unwrap().as_str(), "QUEUE");
    /// assert_eq!(Word::new(""), Err(WordError::Empty));
    /// assert!(Word::new("queue").is_err());
    /// ```
    pub fn new(text: impl Into<String>) -> Result<Self, WordError> {
        let text = text.into();
        if text.is_empty() {
            return Err(WordError::Empty);
        }
        if let Some((position, ch)) = text
            .chars()
            .enumerate()
            .find(|(_, c)| !c.is_ascii_uppercase())
        {
            return Err(WordError::InvalidCharacter {
                word: text,
                ch,
                position,
            });
        }
        Ok(Self(text))
    }

    /// The word as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the word, returning the underlying string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Deref for Word {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Word {
    type Error = WordError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Word {
    type Error = WordError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_uppercase_letters() {
        let word = Word::new("FACETIOUSLY").unwrap();
        assert_eq!(word.as_str(), "FACETIOUSLY");
        assert_eq!(word.len(), 11);
    }

    #[test]
    fn accepts_single_letter() {
        assert!(Word::new("Q").is_ok());
    }

    #[test]
    fn rejects_empty() {
        assert_eq!(Word::new(""), Err(WordError::Empty));
    }

    #[test]
    fn rejects_lowercase_with_position() {
        let err = Word::new("ABc").unwrap_err();
        assert_eq!(
            err,
            WordError::InvalidCharacter {
                word: "ABc".to_string(),
                ch: 'c',
                position: 2,
            }
        );
    }

    #[test]
    fn rejects_whitespace_and_digits() {
        assert!(Word::new("CAT ").is_err());
        assert!(Word::new("C4T").is_err());
        assert!(Word::new("CAFÉ").is_err());
    }

    #[test]
    fn serializes_as_plain_string() {
        let word = Word::new("LEVEL").unwrap();
        assert_eq!(serde_json::to_string(&word).unwrap(), "\"LEVEL\"");
    }

    #[test]
    fn deserialize_validates() {
        assert!(serde_json::from_str::<Word>("\"LEVEL\"").is_ok());
        assert!(serde_json::from_str::<Word>("\"level\"").is_err());
    }

    #[test]
    fn alphabet_is_complete_and_ordered() {
        assert_eq!(ALPHABET.len(), 26);
        assert!(ALPHABET.windows(2).all(|w| w[0] < w[1]));
        assert!(VOWELS.iter().all(|v| ALPHABET.contains(v)));
    }
}
