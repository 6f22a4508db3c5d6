//! Command implementations.

use std::time::Duration;

use anyhow::Context;
use camino::Utf8Path;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::debug;

use wordplay_core::corpus::{self, MalformedPolicy, WordSource};
use wordplay_core::{CorpusResult, Word};

pub mod analyze;
pub mod info;
pub mod schema;
pub mod word;

/// Load a word list into memory after checking its size against the limit.
///
/// With `progress` set, a spinner on stderr counts words as they load.
pub fn load_word_list(
    path: &Utf8Path,
    policy: MalformedPolicy,
    max_bytes: Option<usize>,
    progress: bool,
) -> anyhow::Result<Vec<Word>> {
    if !progress {
        return corpus::read_corpus(path, policy, max_bytes)
            .with_context(|| format!("failed to load word list {path}"));
    }

    corpus::check_input_size(path, max_bytes)
        .with_context(|| format!("failed to load word list {path}"))?;
    let mut source = WordSource::open(path, policy)
        .with_context(|| format!("failed to load word list {path}"))?;

    let bar = ProgressBar::new_spinner();
    bar.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg} ({pos} words)")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    bar.set_message(format!("loading {path}"));
    bar.enable_steady_tick(Duration::from_millis(100));

    let words: CorpusResult<Vec<Word>> = source.by_ref().inspect(|_| bar.inc(1)).collect();
    bar.finish_and_clear();

    let words = words.with_context(|| format!("failed to load word list {path}"))?;
    debug!(words = words.len(), skipped = source.skipped(), "word list loaded");
    Ok(words)
}
