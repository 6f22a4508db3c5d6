//! Vowel statistics over `A`, `E`, `I`, `O`, `U` and `Y`.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::word::VOWELS;

/// The six vowels in alphabetical order, with no out-of-order vowel between
/// consecutive required ones. Anchored at the start; any tail is allowed.
static VOWELS_IN_ORDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^AEIOUY]*A[^EIOUY]*E[^IOUY]*I[OUY]*O[^UY]*U[^Y]*Y").expect("valid regex")
});

/// True if `A`, `E`, `I`, `O`, `U`, `Y` occur in that relative order.
///
/// ```
/// use wordplay_core::analysis::vowels::has_ordered_vowel_sequence;
///
/// assert!(has_ordered_vowel_sequence("FACETIOUSLY"));
/// assert!(!has_ordered_vowel_sequence("YOU"));
/// ```
pub fn has_ordered_vowel_sequence(word: &str) -> bool {
    VOWELS_IN_ORDER.is_match(word)
}

/// True if every one of `A`, `E`, `I`, `O`, `U`, `Y` appears somewhere in `word`.
pub fn has_all_vowels_any_order(word: &str) -> bool {
    let present: HashSet<char> = word.chars().filter(|c| VOWELS.contains(c)).collect();
    present.len() == VOWELS.len()
}
