//! Anagram grouping.
//!
//! Words are bucketed by their [`anagram_key`]: the letters sorted
//! ascending. Two words share a key exactly when they are anagrams.

use std::collections::HashMap;

use crate::error::{AnalysisError, AnalysisResult};

/// Canonical sorted-letter form of `word`.
pub fn anagram_key(word: &str) -> String {
    let mut letters: Vec<char> = word.chars().collect();
    letters.sort_unstable();
    letters.into_iter().collect()
}

/// Words sharing one anagram key, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnagramBucket {
    /// The shared sorted-letter key.
    pub key: String,
    /// Words with this key, in corpus order.
    pub words: Vec<String>,
}

/// Anagram key to bucket, remembering the order keys were first seen.
#[derive(Debug, Clone, Default)]
pub struct AnagramBuckets {
    index: HashMap<String, usize>,
    buckets: Vec<AnagramBucket>,
}

impl AnagramBuckets {
    fn insert(&mut self, word: &str) {
        let key = anagram_key(word);
        if let Some(&i) = self.index.get(&key) {
            self.buckets[i].words.push(word.to_string());
        } else {
            self.index.insert(key.clone(), self.buckets.len());
            self.buckets.push(AnagramBucket {
                key,
                words: vec![word.to_string()],
            });
        }
    }

    /// Look up the words sharing `key`.
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.index
            .get(key)
            .map(|&i| self.buckets[i].words.as_slice())
    }

    /// Buckets in the order their keys first appeared.
    pub fn iter(&self) -> impl Iterator<Item = &AnagramBucket> {
        self.buckets.iter()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// True if no words were bucketed.
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

/// Bucket every word of `corpus` by anagram key in a single pass.
#[tracing::instrument(skip_all)]
pub fn anagram_buckets<I>(corpus: I) -> AnagramBuckets
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut buckets = AnagramBuckets::default();
    for word in corpus {
        buckets.insert(word.as_ref());
    }
    tracing::debug!(keys = buckets.len(), "anagram buckets built");
    buckets
}

/// The anagram group with the longest key.
///
/// Keys with fewer than two words are ignored. Among keys of equal length,
/// the one first seen in the corpus wins.
///
/// # Errors
///
/// Returns [`AnalysisError::NoAnagramsFound`] when no key holds two or more
/// words, which includes the empty corpus.
#[tracing::instrument(skip_all)]
pub fn longest_anagram_group<I>(corpus: I) -> AnalysisResult<Vec<String>>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let buckets = anagram_buckets(corpus);
    buckets
        .buckets
        .into_iter()
        .filter(|b| b.words.len() > 1)
        .reduce(|best, b| if b.key.len() > best.key.len() { b } else { best })
        .map(|b| b.words)
        .ok_or(AnalysisError::NoAnagramsFound)
}
