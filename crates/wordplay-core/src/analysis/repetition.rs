//! Letter repetition across a corpus.
//!
//! Two statistics live here: the single word in which one letter repeats
//! most ([`word_of_max_single_letter_repetition`]), and, for every letter of
//! the alphabet, the word(s) where that letter reaches its highest count
//! ([`per_letter_max_appearances`]).

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::frequency::{char_frequencies, most_frequent_letter, most_frequent_letters};
use crate::error::{AnalysisError, AnalysisResult};
use crate::word::ALPHABET;

/// The letter, word and count of the highest in-word repetition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MaxRepetition {
    /// The repeated letter.
    pub letter: char,
    /// The word it repeats in.
    pub word: String,
    /// How many times `letter` occurs in `word`.
    pub count: usize,
}

/// Best count seen for one letter and the words that reached it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AppearanceRecord {
    /// Highest count seen so far; 0 if the letter was never offered.
    pub count: usize,
    /// Words achieving `count`, in first-seen order.
    pub words: Vec<String>,
}

impl AppearanceRecord {
    /// Offer `word` with `count` occurrences of this record's letter.
    ///
    /// A greater count replaces the word list, an equal one appends, a lesser
    /// one is ignored. The count never decreases.
    pub fn offer(&mut self, count: usize, word: &str) {
        if count > self.count {
            self.count = count;
            self.words.clear();
            self.words.push(word.to_string());
        } else if count == self.count && count > 0 {
            self.words.push(word.to_string());
        }
    }
}

/// Per-letter appearance records for all 26 letters.
pub type LetterAppearances = BTreeMap<char, AppearanceRecord>;

/// Which letters of a word update their [`AppearanceRecord`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum AppearanceMode {
    /// Every letter present in the word, with its own count (default).
    #[default]
    EveryLetter,
    /// Only the letters tied for the word's highest count.
    MostFrequent,
}

impl AppearanceMode {
    /// Returns the mode as a kebab-case string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::EveryLetter => "every-letter",
            Self::MostFrequent => "most-frequent",
        }
    }
}

fn empty_appearances() -> LetterAppearances {
    ALPHABET
        .iter()
        .map(|&c| (c, AppearanceRecord::default()))
        .collect()
}

/// Find the word in which a single letter repeats the most.
///
/// Ties go to the first word encountered; callers should rely on `count`.
///
/// # Errors
///
/// Returns [`AnalysisError::EmptyCorpus`] if `corpus` yields no words.
#[tracing::instrument(skip_all)]
pub fn word_of_max_single_letter_repetition<I>(corpus: I) -> AnalysisResult<MaxRepetition>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut best: Option<MaxRepetition> = None;
    for word in corpus {
        let word = word.as_ref();
        let Some(top) = most_frequent_letter(word) else {
            continue;
        };
        if best.as_ref().is_none_or(|b| top.count > b.count) {
            best = Some(MaxRepetition {
                letter: top.letter,
                word: word.to_string(),
                count: top.count,
            });
        }
    }
    best.ok_or(AnalysisError::EmptyCorpus)
}

/// For each letter, the highest count it reaches in any single word and the
/// words reaching it.
///
/// Every letter present in a word is offered with its own count. Letters
/// that never occur keep `(0, [])`. The narrower reading, where a word only
/// counts for the letters tied for its highest count, is
/// [`per_letter_max_among_most_frequent`]; the classic wordplay report used
/// that one.
///
/// ```
/// use wordplay_core::analysis::repetition::per_letter_max_appearances;
///
/// let records = per_letter_max_appearances(["ALABAMA"]);
/// assert_eq!(records[&'A'].count, 4);
/// assert_eq!(records[&'L'].words, vec!["ALABAMA"]);
/// assert_eq!(records[&'Z'].count, 0);
/// ```
#[tracing::instrument(skip_all)]
pub fn per_letter_max_appearances<I>(corpus: I) -> LetterAppearances
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut records = empty_appearances();
    for word in corpus {
        let word = word.as_ref();
        for (letter, count) in char_frequencies(word) {
            if let Some(record) = records.get_mut(&letter) {
                record.offer(count, word);
            }
        }
    }
    records
}

/// Like [`per_letter_max_appearances`], but only the letters tied for a
/// word's highest count are offered.
///
/// A letter that is never a word's most frequent letter keeps `(0, [])`.
#[tracing::instrument(skip_all)]
pub fn per_letter_max_among_most_frequent<I>(corpus: I) -> LetterAppearances
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut records = empty_appearances();
    for word in corpus {
        let word = word.as_ref();
        let Some(tied) = most_frequent_letters(word) else {
            continue;
        };
        for letter in tied.letters {
            if let Some(record) = records.get_mut(&letter) {
                record.offer(tied.count, word);
            }
        }
    }
    records
}

/// Dispatch to the per-letter statistic selected by `mode`.
pub fn letter_appearances<I>(corpus: I, mode: AppearanceMode) -> LetterAppearances
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    match mode {
        AppearanceMode::EveryLetter => per_letter_max_appearances(corpus),
        AppearanceMode::MostFrequent => per_letter_max_among_most_frequent(corpus),
    }
}
