//! Per-word letter frequencies.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Letter to occurrence count within a single word.
pub type CharFrequencies = BTreeMap<char, usize>;

/// A letter and how many times it occurs in a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LetterCount {
    /// The letter.
    pub letter: char,
    /// Occurrences of `letter` in the word.
    pub count: usize,
}

/// Every letter tied for the highest count in a word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TiedLetters {
    /// Letters sharing the maximum count, ascending.
    pub letters: Vec<char>,
    /// The maximum count.
    pub count: usize,
}

/// Count each distinct character in `word`.
pub fn char_frequencies(word: &str) -> CharFrequencies {
    let mut freq = CharFrequencies::new();
    for c in word.chars() {
        *freq.entry(c).or_insert(0) += 1;
    }
    freq
}

/// The letter with the highest count in `word`, or `None` for an empty string.
///
/// When several letters tie, which one is returned is not part of the
/// contract. Rely on [`LetterCount::count`] only. (Today the alphabetically
/// first tied letter wins.)
pub fn most_frequent_letter(word: &str) -> Option<LetterCount> {
    char_frequencies(word)
        .into_iter()
        .fold(None, |best: Option<LetterCount>, (letter, count)| match best {
            Some(b) if b.count >= count => Some(b),
            _ => Some(LetterCount { letter, count }),
        })
}

/// All letters tied for the highest count in `word`, or `None` for an empty string.
pub fn most_frequent_letters(word: &str) -> Option<TiedLetters> {
    let freq = char_frequencies(word);
    let count = freq.values().copied().max()?;
    let letters = freq
        .into_iter()
        .filter(|&(_, c)| c == count)
        .map(|(letter, _)| letter)
        .collect();
    Some(TiedLetters { letters, count })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    #[test]
    fn counts_each_letter() {
        let freq = char_frequencies("ALABAMA");
        assert_eq!(freq.get(&'A'), Some(&4));
        assert_eq!(freq.get(&'L'), Some(&1));
        assert_eq!(freq.get(&'B'), Some(&1));
        assert_eq!(freq.get(&'M'), Some(&1));
        assert_eq!(freq.len(), 4);
    }

    #[test]
    fn empty_word_has_no_frequencies() {
        assert!(char_frequencies("").is_empty());
        assert!(most_frequent_letter("").is_none());
        assert!(most_frequent_letters("").is_none());
    }

    #[test]
    fn single_winner() {
        let best = most_frequent_letter("MISSISSIPPI").unwrap();
        assert_eq!(best.count, 4);
        assert!(best.letter == 'I' || best.letter == 'S');
    }

    #[test]
    fn single_winner_unique_max() {
        assert_eq!(
            most_frequent_letter("ALABAMA"),
            Some(LetterCount {
                letter: 'A',
                count: 4
            })
        );
    }

    #[test]
    fn tie_reports_the_shared_count() {
        // Every letter appears once.
        let best = most_frequent_letter("WORD").unwrap();
        assert_eq!(best.count, 1);
        assert!("WORD".contains(best.letter));
    }

    #[test]
    fn all_tied_letters() {
        let tied = most_frequent_letters("MISSISSIPPI").unwrap();
        assert_eq!(tied.count, 4);
        let set: BTreeSet<char> = tied.letters.into_iter().collect();
        assert_eq!(set, BTreeSet::from(['I', 'S']));
    }

    #[test]
    fn all_letters_tied_when_each_appears_once() {
        let tied = most_frequent_letters("CAT").unwrap();
        assert_eq!(tied.count, 1);
        assert_eq!(tied.letters.len(), 3);
    }
}
