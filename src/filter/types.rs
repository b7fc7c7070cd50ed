//! Shared types for the word filter.
//!
//! NOTE: Filter-related value types live here, not in the matcher. This keeps
//! the type definitions modular and the scanning implementation focused.

use serde::{Deserialize, Serialize};

/// Tie-break rule choosing among lexicon words that share a prefix at the
/// same start offset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum MatchPolicy {
    /// Report the first word end reached, even when a longer word would also
    /// match from the same offset.
    Shortest,
    /// Keep walking past a word end while children remain and report the
    /// longest word actually confirmed.
    #[default]
    Longest,
}

impl std::fmt::Display for MatchPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchPolicy::Shortest => write!(f, "shortest"),
            MatchPolicy::Longest => write!(f, "longest"),
        }
    }
}

/// A single matched occurrence within scanned text.
///
/// Offsets and lengths are measured in Unicode codepoints, not bytes, so they
/// stay correct for multi-byte text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordMatch {
    /// Codepoint offset of the first matched character.
    pub start: usize,
    /// Match length in codepoints.
    pub len: usize,
    /// The matched substring.
    pub text: String,
}

impl WordMatch {
    /// Codepoint offset one past the last matched character.
    pub fn end(&self) -> usize {
        self.start + self.len
    }
}
