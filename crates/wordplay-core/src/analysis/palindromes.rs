//! Palindromes.

/// True if `word` reads the same forwards and backwards.
pub fn is_palindrome(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    let n = chars.len();
    (0..n / 2).all(|i| chars[i] == chars[n - 1 - i])
}

/// The longest palindrome in `corpus`, or `None` if there is none.
///
/// Among equally long palindromes the first one encountered wins.
#[tracing::instrument(skip_all)]
pub fn longest_palindrome<I>(corpus: I) -> Option<String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut longest: Option<String> = None;
    for word in corpus {
        let word = word.as_ref();
        let longer = longest.as_ref().is_none_or(|best| word.len() > best.len());
        if longer && is_palindrome(word) {
            longest = Some(word.to_string());
        }
    }
    longest
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn odd_and_even_lengths() {
        assert!(is_palindrome("LEVEL"));
        assert!(is_palindrome("NOON"));
        assert!(is_palindrome("A"));
        assert!(!is_palindrome("AB"));
        assert!(!is_palindrome("LEVER"));
    }

    #[test]
    fn middle_character_is_ignored() {
        assert!(is_palindrome("ABXBA"));
        assert!(!is_palindrome("ABXCA"));
    }

    #[test]
    fn empty_is_palindrome() {
        assert!(is_palindrome(""));
    }

    #[test]
    fn palindrome_is_reverse_invariant() {
        for w in ["ROTATOR", "RACECAR", "DEIFIED", "REDDER", "WORDPLAY", "AB", "QAT"] {
            let reversed: String = w.chars().rev().collect();
            assert_eq!(is_palindrome(w), is_palindrome(&reversed), "{w}");
            assert_eq!(is_palindrome(w), reversed == w, "{w}");
        }
    }

    #[test]
    fn longest_wins() {
        let corpus = ["NOON", "CAT", "ROTATOR", "LEVEL", "ZOOLOGY"];
        assert_eq!(longest_palindrome(corpus).as_deref(), Some("ROTATOR"));
    }

    #[test]
    fn first_of_equal_length_wins() {
        let corpus = ["RACECAR", "ROTATOR"];
        assert_eq!(longest_palindrome(corpus).as_deref(), Some("RACECAR"));
    }

    #[test]
    fn none_without_palindromes() {
        assert!(longest_palindrome(["CAT", "DOG"]).is_none());
        assert!(longest_palindrome(Vec::<&str>::new()).is_none());
    }

    fn stream(input: &'static str) -> impl Iterator<Item = crate::Word> {
        crate::corpus::WordSource::new(
            std::io::Cursor::new(input),
            crate::corpus::MalformedPolicy::Reject,
        )
        .map_while(Result::ok)
    }

    #[test]
    fn longest_palindrome_from_word_source() {
        let best = longest_palindrome(stream("LEVEL\nCAT\nROTATOR\nNOON\n"));
        assert_eq!(best.as_deref(), Some("ROTATOR"));
    }
}
