//! Command implementations for the wordguard CLI
//!
//! This module contains the actual implementations for each CLI command,
//! one module per command, plus the shared plumbing for loading the
//! configuration and building the word filter from it.

pub mod check;
pub mod config;
pub mod mask;
pub mod mark;
pub mod scan;
pub mod version;

use anyhow::{Context, Result, bail};

use crate::cli::Cli;
use crate::config::WordguardConfig;
use crate::filter::{WordFilter, WordTrie, lexicon};

/// Load the effective configuration, honoring the global `--config` flag.
pub(crate) fn load_config(cli: &Cli) -> Result<WordguardConfig> {
    WordguardConfig::load_with_custom_config(cli.config.as_deref())
}

/// Build the word filter from CLI flags, falling back to the configured
/// lexicon when neither `--lexicon` nor `--word` is given.
pub(crate) fn build_filter(cli: &Cli, config: &WordguardConfig) -> Result<WordFilter> {
    if cli.lexicon.is_none() && cli.word.is_empty() {
        return WordFilter::from_config(config)
            .context("Failed to build word filter from configuration");
    }

    let mut trie = match &cli.lexicon {
        Some(path) => lexicon::from_file(path)
            .with_context(|| format!("Failed to load lexicon from {}", path))?,
        None => WordTrie::new(),
    };
    for word in &cli.word {
        trie.insert(word.trim());
    }
    if trie.is_empty() {
        bail!("lexicon contains no words");
    }
    Ok(WordFilter::from_trie(trie))
}

/// Read input content from a positional argument or a file.
pub(crate) fn read_input(text: Option<String>, file: Option<&str>) -> Result<String> {
    match (text, file) {
        (Some(text), _) => Ok(text),
        (None, Some(path)) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path))
        }
        (None, None) => bail!("no input: pass TEXT or --file"),
    }
}
