//! Lexical statistics over a word list.
//!
//! Each statistic is a pure function in its own module. Per-word predicates
//! take `&str`; corpus-wide aggregates take any `IntoIterator` of string-like
//! items and walk it exactly once. A [`crate::corpus::WordSource`] yields
//! `CorpusResult<Word>`, so stream it through an adapter such as
//! `source.map_while(Result::ok)` (or collect it first to see errors).
//!
//! [`run_full_analysis`] runs a selection of them over a materialized corpus.

pub mod anagrams;
pub mod companion;
pub mod doubles;
pub mod frequency;
pub mod palindromes;
pub mod repetition;
pub mod reports;
pub mod vowels;

use std::collections::HashSet;

pub use reports::FullAnalysisReport;
pub use repetition::AppearanceMode;

use crate::error::{AnalysisError, AnalysisResult};
use reports::{
    AnagramGroupReport, AppearancesReport, CheckFailure, PalindromeReport, RepeatedPairsReport,
    WordMatches,
};

/// All available check names, in report order.
pub const ALL_CHECKS: &[&str] = &[
    "repeated_pairs",
    "q_without_u",
    "never_doubled",
    "longest_palindrome",
    "vowels_in_order",
    "all_vowels",
    "most_appearances",
    "longest_anagrams",
    "appearances_by_letter",
];

/// Knobs for [`run_full_analysis`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Checks to run. `None` runs all.
    pub checks: Option<Vec<String>>,
    /// Checks to skip.
    pub exclude: Option<Vec<String>>,
    /// Restrict `repeated_pairs` to this letter doubled.
    pub double_letter: Option<char>,
    /// Which letters feed `appearances_by_letter`.
    pub appearances: AppearanceMode,
}

/// Turn the requested check list into the set of checks to run.
///
/// # Errors
///
/// Returns [`AnalysisError::UnknownCheck`] for a name not in [`ALL_CHECKS`].
pub fn resolve_checks(
    checks: Option<&[String]>,
    exclude: Option<&[String]>,
) -> AnalysisResult<HashSet<&'static str>> {
    let lookup = |name: &str| {
        ALL_CHECKS
            .iter()
            .copied()
            .find(|c| *c == name)
            .ok_or_else(|| AnalysisError::UnknownCheck {
                name: name.to_string(),
                available: ALL_CHECKS.join(", "),
            })
    };

    let mut enabled: HashSet<&'static str> = match checks {
        Some(list) => list
            .iter()
            .map(|name| lookup(name))
            .collect::<AnalysisResult<_>>()?,
        None => ALL_CHECKS.iter().copied().collect(),
    };
    if let Some(list) = exclude {
        for name in list {
            enabled.remove(lookup(name)?);
        }
    }
    Ok(enabled)
}

/// Words of `corpus` for which `predicate` holds, in corpus order.
pub fn words_matching<I, F>(corpus: I, predicate: F) -> Vec<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
    F: Fn(&str) -> bool,
{
    corpus
        .into_iter()
        .filter(|w| predicate(w.as_ref()))
        .map(|w| w.as_ref().to_string())
        .collect()
}

/// Run the selected statistics over `corpus`.
///
/// A statistic that fails (e.g. no anagrams) is recorded in
/// [`FullAnalysisReport::failures`] and does not stop the others.
///
/// # Errors
///
/// Returns [`AnalysisError::UnknownCheck`] if the options name an unknown check.
#[tracing::instrument(skip_all, fields(words = corpus.len()))]
pub fn run_full_analysis<W: AsRef<str>>(
    corpus: &[W],
    options: &AnalysisOptions,
) -> AnalysisResult<FullAnalysisReport> {
    let enabled = resolve_checks(options.checks.as_deref(), options.exclude.as_deref())?;
    let mut report = FullAnalysisReport {
        word_count: corpus.len(),
        ..FullAnalysisReport::default()
    };

    if enabled.contains("repeated_pairs") {
        let words = match options.double_letter {
            Some(letter) => {
                words_matching(corpus, |w| doubles::has_repeated_pair_of(w, letter))
            }
            None => words_matching(corpus, doubles::has_repeated_pair),
        };
        report.repeated_pairs = Some(RepeatedPairsReport {
            letter: options.double_letter,
            matches: WordMatches::new(words),
        });
    }

    if enabled.contains("q_without_u") {
        report.q_without_u = Some(WordMatches::new(words_matching(
            corpus,
            companion::has_disallowed_without_companion,
        )));
    }

    if enabled.contains("never_doubled") {
        report.never_doubled = Some(doubles::letters_never_doubled(corpus));
    }

    if enabled.contains("longest_palindrome") {
        let word = palindromes::longest_palindrome(corpus);
        report.longest_palindrome = Some(PalindromeReport {
            length: word.as_ref().map_or(0, |w| w.chars().count()),
            word,
        });
    }

    if enabled.contains("vowels_in_order") {
        report.vowels_in_order = Some(WordMatches::new(words_matching(
            corpus,
            vowels::has_ordered_vowel_sequence,
        )));
    }

    if enabled.contains("all_vowels") {
        report.all_vowels = Some(WordMatches::new(words_matching(
            corpus,
            vowels::has_all_vowels_any_order,
        )));
    }

    if enabled.contains("most_appearances") {
        match repetition::word_of_max_single_letter_repetition(corpus) {
            Ok(best) => report.most_appearances = Some(best),
            Err(e) => report.failures.push(failure("most_appearances", &e)),
        }
    }

    if enabled.contains("longest_anagrams") {
        match anagrams::longest_anagram_group(corpus) {
            Ok(words) => {
                let key = words.first().map(|w| anagrams::anagram_key(w)).unwrap_or_default();
                report.longest_anagrams = Some(AnagramGroupReport {
                    length: key.chars().count(),
                    key,
                    words,
                });
            }
            Err(e) => report.failures.push(failure("longest_anagrams", &e)),
        }
    }

    if enabled.contains("appearances_by_letter") {
        report.appearances_by_letter = Some(AppearancesReport {
            mode: options.appearances,
            letters: repetition::letter_appearances(corpus, options.appearances),
        });
    }

    for f in &report.failures {
        tracing::debug!(check = %f.check, error = %f.message, "check failed");
    }
    Ok(report)
}

fn failure(check: &str, err: &AnalysisError) -> CheckFailure {
    CheckFailure {
        check: check.to_string(),
        message: err.to_string(),
    }
}
