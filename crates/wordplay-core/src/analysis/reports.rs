//! Report structs for the full corpus analysis.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so the
//! CLI can emit them as JSON and publish their schema.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::repetition::{AppearanceMode, LetterAppearances, MaxRepetition};

/// Full corpus analysis report combining every selected check.
///
/// A check that was not selected, or that failed, leaves its field unset.
/// Failures are listed in [`FullAnalysisReport::failures`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FullAnalysisReport {
    /// Number of words analyzed.
    pub word_count: usize,
    /// Words containing a doubled letter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repeated_pairs: Option<RepeatedPairsReport>,
    /// Words with a `Q` not followed by `U`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q_without_u: Option<WordMatches>,
    /// Letters never doubled anywhere in the corpus.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub never_doubled: Option<Vec<char>>,
    /// The longest palindrome.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_palindrome: Option<PalindromeReport>,
    /// Words with all vowels and `Y` in alphabetical order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vowels_in_order: Option<WordMatches>,
    /// Words with all vowels and `Y` in any order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all_vowels: Option<WordMatches>,
    /// The single highest in-word letter repetition.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub most_appearances: Option<MaxRepetition>,
    /// The anagram group with the longest words.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub longest_anagrams: Option<AnagramGroupReport>,
    /// Per-letter maximum appearances.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub appearances_by_letter: Option<AppearancesReport>,
    /// Checks that could not produce a result.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<CheckFailure>,
}

/// Words matching a predicate, in corpus order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WordMatches {
    /// Number of matching words.
    pub count: usize,
    /// The matching words.
    pub words: Vec<String>,
}

impl WordMatches {
    /// Wrap a list of matches.
    pub fn new(words: Vec<String>) -> Self {
        Self {
            count: words.len(),
            words,
        }
    }
}

/// Words with a doubled letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RepeatedPairsReport {
    /// Restricts matches to this letter doubled (e.g. `U` for `UU`), if set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub letter: Option<char>,
    /// Matching words.
    #[serde(flatten)]
    pub matches: WordMatches,
}

/// Longest palindrome result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PalindromeReport {
    /// The palindrome, or `None` if no word qualifies.
    pub word: Option<String>,
    /// Its length in letters (0 when absent).
    pub length: usize,
}

/// Largest equal-length anagram group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AnagramGroupReport {
    /// The shared sorted-letter key.
    pub key: String,
    /// Length of every word in the group.
    pub length: usize,
    /// The anagrams, in corpus order.
    pub words: Vec<String>,
}

/// Per-letter maximum appearance records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AppearancesReport {
    /// Which letters of each word were counted.
    pub mode: AppearanceMode,
    /// Record for every letter `A`-`Z`.
    pub letters: LetterAppearances,
}

/// A check that failed, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct CheckFailure {
    /// Check name (one of [`super::ALL_CHECKS`]).
    pub check: String,
    /// Human-readable error.
    pub message: String,
}
