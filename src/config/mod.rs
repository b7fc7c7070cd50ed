//! Configuration management for wordguard
//!
//! Layers compile-time defaults, an optional `wordguard.toml` in the working
//! directory (or an explicit `--config` path), and `WORDGUARD_`-prefixed
//! environment variables, then extracts the merged result into typed structs.

use anyhow::{Context, Result};
use figment::{
    Figment,
    providers::{Env, Format, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::filter::MatchPolicy;

// Embed the default config at compile time
const DEFAULT_CONFIG: &str = include_str!("../../default-config.toml");

/// Main configuration structure for wordguard
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WordguardConfig {
    /// Lexicon sources
    pub lexicon: LexiconConfig,

    /// Matching defaults
    pub matching: MatchingConfig,

    /// Masking defaults
    pub masking: MaskingConfig,

    /// Marking defaults
    pub marking: MarkingConfig,

    /// Directory scan settings
    pub scan: ScanConfig,
}

/// Where the sensitive words come from
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LexiconConfig {
    /// Word file path, one word per line
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Inline word list, merged with the word file
    pub words: Vec<String>,
}

/// Matching defaults applied when the CLI does not override them
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Tie-break policy for words sharing a prefix
    pub policy: MatchPolicy,

    /// Match-count cap per scan; 0 scans everything
    pub limit: usize,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self { policy: MatchPolicy::Longest, limit: 0 }
    }
}

/// Masking defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MaskingConfig {
    /// Character substituted for matched words
    pub replacement: char,

    /// Repeat the replacement to the matched word's length
    pub repeat: bool,
}

impl Default for MaskingConfig {
    fn default() -> Self {
        Self { replacement: '*', repeat: true }
    }
}

/// Marking defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MarkingConfig {
    pub open_tag: String,
    pub close_tag: String,
}

impl Default for MarkingConfig {
    fn default() -> Self {
        Self {
            open_tag: "<mark>".to_string(),
            close_tag: "</mark>".to_string(),
        }
    }
}

/// Directory scan settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Glob patterns excluded from directory scans
    pub exclude_patterns: Vec<String>,

    /// Files larger than this are skipped
    pub max_file_size_mb: usize,

    /// Scan files of a directory tree in parallel
    pub parallel: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            exclude_patterns: vec![
                ".git/**".to_string(),
                "target/**".to_string(),
                "node_modules/**".to_string(),
            ],
            max_file_size_mb: 10,
            parallel: true,
        }
    }
}

impl WordguardConfig {
    pub fn load() -> Result<Self> {
        Self::load_with_custom_config(None)
    }

    pub fn load_with_custom_config(custom_config: Option<&str>) -> Result<Self> {
        let mut figment = Figment::new().merge(Toml::string(DEFAULT_CONFIG)); // Embedded defaults

        // If a custom config is specified, use only that + defaults + env vars
        if let Some(custom_path) = custom_config {
            figment = figment.merge(Toml::file(custom_path));
        } else {
            figment = figment.merge(Toml::file("wordguard.toml"));
        }

        // Environment variables always have highest priority
        figment = figment.merge(Env::prefixed("WORDGUARD_"));

        figment
            .extract()
            .context("Failed to load wordguard configuration")
    }

    /// The embedded default configuration, verbatim.
    pub fn default_toml() -> &'static str {
        DEFAULT_CONFIG
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_defaults_load() {
        let config = WordguardConfig::load().expect("Should load default config");

        assert_eq!(config.matching.policy, MatchPolicy::Longest);
        assert_eq!(config.matching.limit, 0);
        assert_eq!(config.masking.replacement, '*');
        assert!(config.masking.repeat);
        assert_eq!(config.marking.open_tag, "<mark>");
        assert!(config.scan.parallel);
        assert!(config.lexicon.words.is_empty());
    }

    #[test]
    fn test_custom_config_overrides_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(
            &path,
            r#"
[lexicon]
words = ["bad", "worse"]

[matching]
policy = "shortest"
limit = 5
"#,
        )
        .unwrap();

        let config =
            WordguardConfig::load_with_custom_config(Some(path.to_str().unwrap())).unwrap();

        assert_eq!(config.lexicon.words, vec!["bad", "worse"]);
        assert_eq!(config.matching.policy, MatchPolicy::Shortest);
        assert_eq!(config.matching.limit, 5);
        // Untouched sections keep their embedded defaults.
        assert_eq!(config.masking.replacement, '*');
    }
}
