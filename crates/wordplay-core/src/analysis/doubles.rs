//! Doubled letters: adjacent equal pairs such as `LL` in BALLOON.

use std::collections::BTreeSet;

use crate::word::ALPHABET;

/// True if any two adjacent characters of `word` are equal.
pub fn has_repeated_pair(word: &str) -> bool {
    word.as_bytes().windows(2).any(|pair| pair[0] == pair[1])
}

/// True if `word` contains `letter` twice in a row (e.g. `UU` in VACUUM).
pub fn has_repeated_pair_of(word: &str, letter: char) -> bool {
    let mut chars = word.chars().peekable();
    while let Some(c) = chars.next() {
        if c == letter && chars.peek() == Some(&letter) {
            return true;
        }
    }
    false
}

/// The set of letters that appear doubled somewhere in `word`.
pub fn doubled_letters(word: &str) -> BTreeSet<char> {
    let chars: Vec<char> = word.chars().collect();
    chars
        .windows(2)
        .filter(|pair| pair[0] == pair[1])
        .map(|pair| pair[0])
        .collect()
}

/// Letters of the alphabet that are never doubled in any word of `corpus`.
///
/// An empty corpus doubles nothing, so the whole alphabet comes back.
/// The result is in alphabetical order.
#[tracing::instrument(skip_all)]
pub fn letters_never_doubled<I>(corpus: I) -> Vec<char>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut doubled = BTreeSet::new();
    for word in corpus {
        doubled.extend(doubled_letters(word.as_ref()));
        if doubled.len() == ALPHABET.len() {
            break;
        }
    }
    ALPHABET
        .iter()
        .copied()
        .filter(|c| !doubled.contains(c))
        .collect()
}
