//! `Q` without its companion `U`.

use std::sync::LazyLock;

use regex::Regex;

/// A `Q` followed by anything but `U`, or a `Q` at the very end.
static Q_WITHOUT_U: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Q(?:[^U]|$)").expect("valid regex"));

/// True if `word` contains a `Q` not immediately followed by `U`.
///
/// A trailing `Q` counts: `"Q"` is true, `"TALAQ"` is true, `"QUEUE"` is false.
pub fn has_disallowed_without_companion(word: &str) -> bool {
    Q_WITHOUT_U.is_match(word)
}
