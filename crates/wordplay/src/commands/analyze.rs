//! Analyze command: run the corpus statistics over a word list.

use anyhow::{Context, bail};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use wordplay_core::Config;
use wordplay_core::analysis::reports::WordMatches;
use wordplay_core::analysis::{self, AnalysisOptions, AppearanceMode, FullAnalysisReport};
use wordplay_core::corpus::MalformedPolicy;
use wordplay_core::word::ALPHABET;

use super::load_word_list;

/// Arguments for the `analyze` subcommand.
#[derive(Args, Debug, Default)]
pub struct AnalyzeArgs {
    /// Word list to analyze. Defaults to `wordlist` from the config.
    pub file: Option<Utf8PathBuf>,

    /// Checks to run (comma-separated). Omit for all checks.
    #[arg(long, value_delimiter = ',')]
    pub checks: Option<Vec<String>>,

    /// Checks to skip (comma-separated).
    #[arg(long, value_delimiter = ',', conflicts_with = "checks")]
    pub exclude: Option<Vec<String>>,

    /// Only report words where this letter appears doubled (e.g. `U` for `UU`).
    #[arg(long, value_name = "LETTER")]
    pub double_letter: Option<char>,

    /// Which letters of each word count toward `appearances_by_letter`.
    #[arg(long, value_enum)]
    pub appearances: Option<AppearanceMode>,

    /// Skip lines that are not valid words instead of failing.
    #[arg(long)]
    pub skip_malformed: bool,
}

impl AnalyzeArgs {
    /// Merge command-line arguments over the loaded config.
    ///
    /// Fails if the doubled letter is not a letter `A`-`Z` (either case).
    fn options(&self, config: &Config) -> anyhow::Result<AnalysisOptions> {
        let (checks, exclude) = if self.checks.is_some() || self.exclude.is_some() {
            (self.checks.clone(), self.exclude.clone())
        } else {
            (config.checks.clone(), config.exclude.clone())
        };
        let double_letter = self
            .double_letter
            .or(config.double_letter)
            .map(|c| c.to_ascii_uppercase());
        if let Some(letter) = double_letter
            && !ALPHABET.contains(&letter)
        {
            bail!("invalid double letter {letter:?}: expected a letter A-Z");
        }
        Ok(AnalysisOptions {
            checks,
            exclude,
            double_letter,
            appearances: self.appearances.unwrap_or(config.appearances),
        })
    }

    fn policy(&self, config: &Config) -> MalformedPolicy {
        if self.skip_malformed {
            MalformedPolicy::Skip
        } else {
            config.malformed
        }
    }
}

/// Load a word list and print the analysis report.
#[instrument(name = "cmd_analyze", skip_all, fields(file))]
pub fn cmd_analyze(
    args: AnalyzeArgs,
    global_json: bool,
    quiet: bool,
    config: &Config,
) -> anyhow::Result<()> {
    let Some(file) = args.file.clone().or_else(|| config.wordlist.clone()) else {
        bail!("no word list given: pass a FILE or set `wordlist` in the config");
    };
    tracing::Span::current().record("file", tracing::field::display(&file));

    let options = args.options(config)?;
    let policy = args.policy(config);
    debug!(%file, ?options, policy = policy.as_str(), "executing analyze command");

    // Check names are validated before the list is read.
    analysis::resolve_checks(options.checks.as_deref(), options.exclude.as_deref())?;

    let corpus = load_word_list(&file, policy, config.input_limit(), !global_json && !quiet)?;
    let report = analysis::run_full_analysis(&corpus, &options)
        .with_context(|| format!("failed to analyze {file}"))?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&file, &report);
    }
    Ok(())
}

fn print_matches(heading: &str, matches: &WordMatches) {
    println!("\n{} {}", heading.cyan(), format!("({})", matches.count).dimmed());
    if matches.words.is_empty() {
        println!("  {}", "none".dimmed());
    } else {
        println!("  {}", matches.words.join(", "));
    }
}

fn print_report(file: &Utf8Path, report: &FullAnalysisReport) {
    println!("{} {}", file.bold(), format!("({} words)", report.word_count).dimmed());

    if let Some(ref r) = report.repeated_pairs {
        let heading = match r.letter {
            Some(letter) => format!("Words containing '{letter}{letter}':"),
            None => "Words containing a doubled letter:".to_string(),
        };
        print_matches(&heading, &r.matches);
    }

    if let Some(ref m) = report.q_without_u {
        print_matches("Words containing a 'Q' which is not followed by a 'U':", m);
    }

    if let Some(ref letters) = report.never_doubled {
        let letters: String = letters.iter().collect();
        println!("\n{}", "Letters which do not appear doubled:".cyan());
        println!("  {letters}");
    }

    if let Some(ref p) = report.longest_palindrome {
        match p.word {
            Some(ref word) => println!(
                "\n{} {} {}",
                "Longest palindrome:".cyan(),
                word.bold(),
                format!("({} letters)", p.length).dimmed()
            ),
            None => println!("\n{} {}", "Longest palindrome:".cyan(), "none".dimmed()),
        }
    }

    if let Some(ref m) = report.vowels_in_order {
        print_matches("Words containing all the vowels and 'Y' in order:", m);
    }

    if let Some(ref m) = report.all_vowels {
        print_matches("Words containing all the vowels and 'Y' in any order:", m);
    }

    if let Some(ref m) = report.most_appearances {
        println!(
            "\n{} Letter {} appears {} times in word {}",
            "Most appearances:".cyan(),
            m.letter.bold(),
            m.count,
            m.word.bold()
        );
    }

    if let Some(ref a) = report.longest_anagrams {
        println!(
            "\n{} {}",
            "Longest anagrams:".cyan(),
            format!("({} letters)", a.length).dimmed()
        );
        println!("  {}", a.words.join(", "));
    }

    if let Some(ref a) = report.appearances_by_letter {
        let heading = match a.mode {
            AppearanceMode::EveryLetter => "Words in which each letter appears most often:",
            AppearanceMode::MostFrequent => "Words in which each letter appears most frequently:",
        };
        println!("\n{}", heading.cyan());
        for (letter, record) in &a.letters {
            if record.words.is_empty() {
                println!("  {} ({}): {}", letter, record.count, "-".dimmed());
            } else {
                println!("  {} ({}): {}", letter.bold(), record.count, record.words.join(", "));
            }
        }
    }

    if !report.failures.is_empty() {
        println!();
        for failure in &report.failures {
            println!(
                "{} {}: {}",
                "✗".red(),
                failure.check.yellow(),
                failure.message
            );
        }
    }
}
