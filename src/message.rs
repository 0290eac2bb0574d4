//! Hidden message normalization.

use once_cell::sync::Lazy;
use regex::Regex;

static NEWLINES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\r\n\x{85}\x{2028}\x{2029}]").expect("valid newline pattern"));
static WHITESPACE_RUNS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// A payload reduced to one line of single-spaced text, indexed by char.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedMessage {
    chars: Vec<char>,
}

impl NormalizedMessage {
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Up to `count` chars starting at `offset`; empty past the end.
    pub fn window(&self, offset: usize, count: usize) -> &[char] {
        let start = offset.min(self.chars.len());
        let end = offset.saturating_add(count).min(self.chars.len());
        &self.chars[start..end]
    }

    pub fn as_string(&self) -> String {
        self.chars.iter().collect()
    }
}

/// Drops newlines, collapses whitespace runs into one space and trims.
///
/// Newlines (`\r`, `\n`, NEL, LINE and PARAGRAPH SEPARATOR) are removed
/// outright, so `"a\nb"` joins into `"ab"`.
pub fn normalize(raw: &str) -> NormalizedMessage {
    let joined = NEWLINES.replace_all(raw, "");
    let collapsed = WHITESPACE_RUNS.replace_all(&joined, " ");
    let chars: Vec<char> = collapsed.trim().chars().collect();
    log::debug!("normalized message to {} chars", chars.len());
    NormalizedMessage { chars }
}
