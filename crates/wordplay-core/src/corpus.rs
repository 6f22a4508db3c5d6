//! Line-oriented word source.
//!
//! A word list is newline-delimited uppercase words with no header. The
//! source is lazy and forward-only: each [`WordSource`] reads its input
//! exactly once, so a statistic that needs the corpus again must reopen it
//! (or the caller materializes it with [`read_corpus`]).
//!
//! Only the line ending (`\n`, `\r\n`) is stripped. Lines that are not
//! UTF-8 or that fail [`Word::new`] are handled according to
//! [`MalformedPolicy`].

use std::fs::File;
use std::io::{BufRead, BufReader};

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CorpusError, CorpusResult};
use crate::word::{Word, WordError};

/// What to do with a line that is not a valid [`Word`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum MalformedPolicy {
    /// Stop with [`CorpusError::MalformedWord`] (default).
    #[default]
    Reject,
    /// Log a warning and continue with the next line.
    Skip,
}

impl MalformedPolicy {
    /// Returns the policy as a lowercase string slice.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reject => "reject",
            Self::Skip => "skip",
        }
    }
}

/// Lazy iterator over the words of a line-oriented reader.
#[derive(Debug)]
pub struct WordSource<R> {
    reader: R,
    origin: Utf8PathBuf,
    policy: MalformedPolicy,
    line: usize,
    skipped: usize,
    buf: Vec<u8>,
    done: bool,
}

impl<R: BufRead> WordSource<R> {
    /// Wrap a reader. Errors report the origin as `<reader>`.
    pub fn new(reader: R, policy: MalformedPolicy) -> Self {
        Self {
            reader,
            origin: Utf8PathBuf::from("<reader>"),
            policy,
            line: 0,
            skipped: 0,
            buf: Vec::new(),
            done: false,
        }
    }

    /// Number of lines dropped so far under [`MalformedPolicy::Skip`].
    pub const fn skipped(&self) -> usize {
        self.skipped
    }

    /// Read the next line as raw bytes, without its line ending.
    fn next_line(&mut self) -> Option<CorpusResult<Vec<u8>>> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                self.line += 1;
                while let Some(b'\n' | b'\r') = self.buf.last() {
                    self.buf.pop();
                }
                Some(Ok(self.buf.clone()))
            }
            Err(source) => Some(Err(CorpusError::Io {
                path: self.origin.clone(),
                source,
            })),
        }
    }
}

impl WordSource<BufReader<File>> {
    /// Open a word list on disk.
    ///
    /// # Errors
    ///
    /// Returns [`CorpusError::Io`] if the file cannot be opened.
    pub fn open(path: &Utf8Path, policy: MalformedPolicy) -> CorpusResult<Self> {
        let file = File::open(path.as_std_path()).map_err(|source| CorpusError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut source = Self::new(BufReader::new(file), policy);
        source.origin = path.to_path_buf();
        Ok(source)
    }
}

impl<R: BufRead> Iterator for WordSource<R> {
    type Item = CorpusResult<Word>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.done {
            let bytes = match self.next_line()? {
                Ok(bytes) => bytes,
                Err(e) => {
                    self.done = true;
                    return Some(Err(e));
                }
            };
            let parsed = String::from_utf8(bytes)
                .map_err(|e| WordError::InvalidUtf8 {
                    lossy: String::from_utf8_lossy(e.as_bytes()).into_owned(),
                })
                .and_then(Word::new);
            match parsed {
                Ok(word) => return Some(Ok(word)),
                Err(source) => match self.policy {
                    MalformedPolicy::Reject => {
                        self.done = true;
                        return Some(Err(CorpusError::MalformedWord {
                            line: self.line,
                            source,
                        }));
                    }
                    MalformedPolicy::Skip => {
                        warn!(origin = %self.origin, line = self.line, error = %source, "skipping malformed word");
                        self.skipped += 1;
                    }
                },
            }
        }
        None
    }
}

/// Fail if the file at `path` is larger than `max_bytes`.
///
/// Checks metadata only, so nothing is read. `None` disables the check.
///
/// # Errors
///
/// Returns [`CorpusError::Io`] if the file cannot be inspected and
/// [`CorpusError::TooLarge`] if it exceeds the limit.
pub fn check_input_size(path: &Utf8Path, max_bytes: Option<usize>) -> CorpusResult<u64> {
    let metadata = std::fs::metadata(path.as_std_path()).map_err(|source| CorpusError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if let Some(limit) = max_bytes
        && metadata.len() > limit as u64
    {
        return Err(CorpusError::TooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            limit,
        });
    }
    Ok(metadata.len())
}

/// Read a whole word list into memory after checking its size.
///
/// `max_bytes` of `None` disables the size check.
///
/// # Errors
///
/// Returns [`CorpusError::TooLarge`] when the file exceeds `max_bytes`, and
/// otherwise the first error the [`WordSource`] yields.
#[tracing::instrument(skip_all, fields(path = %path, policy = policy.as_str()))]
pub fn read_corpus(
    path: &Utf8Path,
    policy: MalformedPolicy,
    max_bytes: Option<usize>,
) -> CorpusResult<Vec<Word>> {
    check_input_size(path, max_bytes)?;

    let mut source = WordSource::open(path, policy)?;
    let words = source.by_ref().collect::<CorpusResult<Vec<_>>>()?;
    debug!(words = words.len(), skipped = source.skipped(), "corpus loaded");
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn words(input: &str, policy: MalformedPolicy) -> CorpusResult<Vec<String>> {
        WordSource::new(Cursor::new(input.to_string()), policy)
            .map(|w| w.map(Word::into_string))
            .collect()
    }

    #[test]
    fn reads_one_word_per_line() {
        let got = words("CAT\nDOG\nEMU\n", MalformedPolicy::Reject).unwrap();
        assert_eq!(got, vec!["CAT", "DOG", "EMU"]);
    }

    #[test]
    fn last_line_without_newline() {
        let got = words("CAT\nDOG", MalformedPolicy::Reject).unwrap();
        assert_eq!(got, vec!["CAT", "DOG"]);
    }

    #[test]
    fn strips_crlf() {
        let got = words("CAT\r\nDOG\r\n", MalformedPolicy::Reject).unwrap();
        assert_eq!(got, vec!["CAT", "DOG"]);
    }

    #[test]
    fn empty_input_yields_nothing() {
        assert!(words("", MalformedPolicy::Reject).unwrap().is_empty());
    }

    #[test]
    fn reject_reports_line_number() {
        let err = words("CAT\n\nDOG\n", MalformedPolicy::Reject).unwrap_err();
        match err {
            CorpusError::MalformedWord { line, source } => {
                assert_eq!(line, 2);
                assert_eq!(source, WordError::Empty);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reject_stops_iteration() {
        let mut source = WordSource::new(Cursor::new("cat\nDOG\n"), MalformedPolicy::Reject);
        assert!(matches!(
            source.next(),
            Some(Err(CorpusError::MalformedWord { line: 1, .. }))
        ));
        assert!(source.next().is_none());
    }

    #[test]
    fn whitespace_is_not_trimmed() {
        let err = words(" CAT\n", MalformedPolicy::Reject).unwrap_err();
        assert!(matches!(err, CorpusError::MalformedWord { line: 1, .. }));
    }

    #[test]
    fn skip_drops_malformed_lines() {
        let mut source = WordSource::new(
            Cursor::new("CAT\n\nd0g\nEMU\n"),
            MalformedPolicy::Skip,
        );
        let got: Vec<String> = source
            .by_ref()
            .map(|w| w.unwrap().into_string())
            .collect();
        assert_eq!(got, vec!["CAT", "EMU"]);
        assert_eq!(source.skipped(), 2);
    }

    #[test]
    fn skip_drops_invalid_utf8_and_continues() {
        let mut source = WordSource::new(
            Cursor::new(b"CAT\nCAF\xC9\nACT\n".to_vec()),
            MalformedPolicy::Skip,
        );
        let got: Vec<String> = source
            .by_ref()
            .map(|w| w.unwrap().into_string())
            .collect();
        assert_eq!(got, vec!["CAT", "ACT"]);
        assert_eq!(source.skipped(), 1);
    }

    #[test]
    fn reject_reports_invalid_utf8_with_line_number() {
        let mut source = WordSource::new(
            Cursor::new(b"CAT\r\nCAF\xC9\r\nACT\r\n".to_vec()),
            MalformedPolicy::Reject,
        );
        assert_eq!(source.next().unwrap().unwrap().as_str(), "CAT");
        match source.next() {
            Some(Err(CorpusError::MalformedWord { line, source })) => {
                assert_eq!(line, 2);
                assert!(matches!(source, WordError::InvalidUtf8 { .. }));
            }
            other => panic!("unexpected item: {other:?}"),
        }
        assert!(source.next().is_none());
    }

    #[test]
    fn read_corpus_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("words.txt");
        std::fs::write(&path, "STOP\nPOTS\nTOPS\n").unwrap();
        let path = Utf8PathBuf::try_from(path).unwrap();

        let corpus = read_corpus(&path, MalformedPolicy::Reject, None).unwrap();
        assert_eq!(corpus.len(), 3);
        assert_eq!(corpus[1].as_str(), "POTS");
    }

    #[test]
    fn read_corpus_enforces_size_limit() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("words.txt");
        std::fs::write(&path, "ABCDEFGHIJ\n").unwrap();
        let path = Utf8PathBuf::try_from(path).unwrap();

        let err = read_corpus(&path, MalformedPolicy::Reject, Some(4)).unwrap_err();
        assert!(matches!(err, CorpusError::TooLarge { size: 11, limit: 4, .. }));
    }

    #[test]
    fn read_corpus_missing_file() {
        let err = read_corpus(
            Utf8Path::new("/nonexistent/wordplay/words.txt"),
            MalformedPolicy::Reject,
            None,
        )
        .unwrap_err();
        assert!(matches!(err, CorpusError::Io { .. }));
    }

    #[test]
    fn policy_deserializes_kebab_case() {
        let policy: MalformedPolicy = serde_json::from_str("\"skip\"").unwrap();
        assert_eq!(policy, MalformedPolicy::Skip);
        assert_eq!(MalformedPolicy::default(), MalformedPolicy::Reject);
    }
}
