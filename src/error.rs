//! Error types for wordguard filtering operations

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by lexicon construction and text transformation.
///
/// Scanning itself never fails on valid input: `scan` and `is_clean` take
/// `&str`, which is valid UTF-8 by construction, and return empty results
/// rather than errors when nothing matches.
#[derive(Error, Debug)]
pub enum FilterError {
    /// Lexicon construction was attempted from an empty word source.
    #[error("lexicon contains no words")]
    EmptyLexicon,

    /// The lexicon file path does not resolve to a readable file.
    #[error("lexicon file not found: {0}")]
    LexiconNotFound(PathBuf),

    /// `mask` or `mark` was invoked with empty input text.
    #[error("content is empty")]
    EmptyContent,

    /// File bytes are not valid UTF-8, so codepoint indexing is impossible.
    #[error("{}: not valid UTF-8", .path.display())]
    InvalidEncoding { path: PathBuf },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
