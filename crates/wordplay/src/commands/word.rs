//! Word command: every per-word check on a single word.

use std::collections::BTreeSet;

use anyhow::Context;
use clap::Args;
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::{debug, instrument};

use wordplay_core::Word;
use wordplay_core::analysis::frequency::{self, CharFrequencies, LetterCount, TiedLetters};
use wordplay_core::analysis::{anagrams, companion, doubles, palindromes, vowels};

/// Arguments for the `word` subcommand.
#[derive(Args, Debug)]
pub struct WordArgs {
    /// The word to inspect. Lowercase letters are uppercased first.
    pub word: String,
}

#[derive(Debug, Serialize)]
struct WordReport {
    word: String,
    length: usize,
    repeated_pair: bool,
    doubled_letters: BTreeSet<char>,
    q_without_u: bool,
    palindrome: bool,
    vowels_in_order: bool,
    all_vowels: bool,
    anagram_key: String,
    frequencies: CharFrequencies,
    #[serde(skip_serializing_if = "Option::is_none")]
    most_frequent_letter: Option<LetterCount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    most_frequent_letters: Option<TiedLetters>,
}

impl WordReport {
    fn new(word: &Word) -> Self {
        let w = word.as_str();
        Self {
            word: w.to_string(),
            length: w.len(),
            repeated_pair: doubles::has_repeated_pair(w),
            doubled_letters: doubles::doubled_letters(w),
            q_without_u: companion::has_disallowed_without_companion(w),
            palindrome: palindromes::is_palindrome(w),
            vowels_in_order: vowels::has_ordered_vowel_sequence(w),
            all_vowels: vowels::has_all_vowels_any_order(w),
            anagram_key: anagrams::anagram_key(w),
            frequencies: frequency::char_frequencies(w),
            most_frequent_letter: frequency::most_frequent_letter(w),
            most_frequent_letters: frequency::most_frequent_letters(w),
        }
    }
}

/// Inspect a single word.
#[instrument(name = "cmd_word", skip_all, fields(word = %args.word))]
pub fn cmd_word(args: WordArgs, global_json: bool) -> anyhow::Result<()> {
    debug!(json_output = global_json, "executing word command");

    let word = Word::new(args.word.to_ascii_uppercase())
        .with_context(|| format!("not a valid word: {:?}", args.word))?;
    let report = WordReport::new(&word);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} {}", report.word.bold(), format!("({} letters)", report.length).dimmed());
    let flag = |label: &str, value: bool| {
        let mark = if value { "yes".green().to_string() } else { "no".dimmed().to_string() };
        println!("  {}: {}", label.dimmed(), mark);
    };
    flag("Doubled letter", report.repeated_pair);
    flag("Q not followed by U", report.q_without_u);
    flag("Palindrome", report.palindrome);
    flag("Vowels and Y in order", report.vowels_in_order);
    flag("All vowels and Y", report.all_vowels);

    if !report.doubled_letters.is_empty() {
        let doubled: String = report.doubled_letters.iter().collect();
        println!("  {}: {}", "Doubled".dimmed(), doubled);
    }
    println!("  {}: {}", "Anagram key".dimmed(), report.anagram_key.cyan());

    let counts: Vec<String> = report
        .frequencies
        .iter()
        .map(|(letter, count)| format!("{letter}={count}"))
        .collect();
    println!("  {}: {}", "Letters".dimmed(), counts.join(" "));
    if let Some(ref tied) = report.most_frequent_letters {
        let letters: String = tied.letters.iter().collect();
        println!(
            "  {}: {} ({} times)",
            "Most frequent".dimmed(),
            letters.bold(),
            tied.count
        );
    }
    Ok(())
}
