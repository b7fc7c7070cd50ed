//! # Wordguard - Trie-Based Sensitive Word Filtering
//!
//! Detects, locates, and transforms occurrences of a configurable set of
//! sensitive words inside arbitrary text. A character trie is built once
//! from a word list, then scanned left-to-right against input — exact,
//! codepoint-for-codepoint matching that works for any language.
//!
//! ## Features
//!
//! - **Shortest/longest match policies**: pick which word wins when lexicon
//!   entries share a prefix
//! - **Multi-byte aware**: all offsets and lengths are Unicode codepoints
//! - **Masking and marking**: replace matches or wrap them in tags
//! - **File and directory scanning**: gitignore-aware walks with parallel
//!   matching against one shared trie
//!
//! ## Quick Start
//!
//! ```
//! use wordguard::{MatchPolicy, WordFilter};
//!
//! let filter = WordFilter::from_words(["bad", "badword"])?;
//! let matches = filter.scan("this is a badword", MatchPolicy::Longest, 0);
//! assert_eq!(matches[0].text, "badword");
//!
//! let masked = filter.mask("this is a badword", '*', true, MatchPolicy::Longest)?;
//! assert_eq!(masked, "this is a *******");
//! # Ok::<(), wordguard::FilterError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod scanner;

pub use config::WordguardConfig;
pub use error::FilterError;
pub use filter::{MatchPolicy, WordFilter, WordMatch, WordTrie};

/// Result type alias for wordguard operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
