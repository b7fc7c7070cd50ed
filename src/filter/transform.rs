//! Masking and highlighting built on the matcher output.
//!
//! Both transformations are thin post-processing: detect once, then rewrite
//! every occurrence of each distinct matched word in the original text. They
//! carry no trie logic of their own.

use super::matcher::WordFilter;
use super::types::{MatchPolicy, WordMatch};
use crate::error::FilterError;

impl WordFilter {
    /// Replace every occurrence of each detected word with `replacement`.
    ///
    /// With `repeat` the replacement is repeated to the matched word's
    /// codepoint length; otherwise each word collapses to a single character.
    /// Fails with [`FilterError::EmptyContent`] when `content` is empty.
    pub fn mask(
        &self,
        content: &str,
        replacement: char,
        repeat: bool,
        policy: MatchPolicy,
    ) -> Result<String, FilterError> {
        if content.is_empty() {
            return Err(FilterError::EmptyContent);
        }
        let matches = self.scan(content, policy, 0);

        let mut masked = content.to_string();
        for word in distinct_words(&matches) {
            let substitute: String = if repeat {
                std::iter::repeat(replacement).take(word.chars().count()).collect()
            } else {
                replacement.to_string()
            };
            masked = masked.replace(word, &substitute);
        }
        Ok(masked)
    }

    /// Wrap every occurrence of each detected word in `open_tag`/`close_tag`.
    ///
    /// Fails with [`FilterError::EmptyContent`] when `content` is empty.
    pub fn mark(
        &self,
        content: &str,
        open_tag: &str,
        close_tag: &str,
        policy: MatchPolicy,
    ) -> Result<String, FilterError> {
        if content.is_empty() {
            return Err(FilterError::EmptyContent);
        }
        let matches = self.scan(content, policy, 0);

        let mut marked = content.to_string();
        for word in distinct_words(&matches) {
            marked = marked.replace(word, &format!("{open_tag}{word}{close_tag}"));
        }
        Ok(marked)
    }
}

/// Distinct matched words in first-occurrence order. Replacement is
/// per-word, so later duplicates would be no-ops anyway.
fn distinct_words(matches: &[WordMatch]) -> Vec<&str> {
    let mut words: Vec<&str> = Vec::new();
    for m in matches {
        if !words.contains(&m.text.as_str()) {
            words.push(&m.text);
        }
    }
    words
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(words: &[&str]) -> WordFilter {
        WordFilter::from_words(words).unwrap()
    }

    #[test]
    fn test_mask_repeats_to_word_length() {
        let filter = filter(&["foo"]);
        let masked = filter.mask("foofoo", '*', true, MatchPolicy::Longest).unwrap();
        assert_eq!(masked, "******");
    }

    #[test]
    fn test_mask_single_character() {
        let filter = filter(&["badword"]);
        let masked = filter
            .mask("a badword here", '#', false, MatchPolicy::Longest)
            .unwrap();
        assert_eq!(masked, "a # here");
    }

    #[test]
    fn test_mask_repeat_counts_codepoints() {
        let filter = filter(&["敏感词"]);
        let masked = filter.mask("有敏感词", '*', true, MatchPolicy::Longest).unwrap();
        assert_eq!(masked, "有***");
    }

    #[test]
    fn test_mask_clean_text_is_untouched() {
        let filter = filter(&["bad"]);
        let masked = filter.mask("all good", '*', true, MatchPolicy::Longest).unwrap();
        assert_eq!(masked, "all good");
    }

    #[test]
    fn test_mask_is_idempotent_on_masked_output() {
        let filter = filter(&["bad", "word"]);
        let once = filter.mask("bad word", '*', true, MatchPolicy::Longest).unwrap();
        let twice = filter.mask(&once, '*', true, MatchPolicy::Longest).unwrap();

        assert_eq!(once, "*** ****");
        assert_eq!(once, twice);
        assert!(filter.is_clean(&once));
    }

    #[test]
    fn test_mask_empty_content() {
        let filter = filter(&["bad"]);
        let err = filter.mask("", '*', true, MatchPolicy::Longest).unwrap_err();
        assert!(matches!(err, FilterError::EmptyContent));
    }

    #[test]
    fn test_mark_wraps_matches() {
        let filter = filter(&["bad"]);
        let marked = filter
            .mark("a bad word", "<mark>", "</mark>", MatchPolicy::Longest)
            .unwrap();
        assert_eq!(marked, "a <mark>bad</mark> word");
    }

    #[test]
    fn test_mark_empty_content() {
        let filter = filter(&["bad"]);
        let err = filter
            .mark("", "<mark>", "</mark>", MatchPolicy::Longest)
            .unwrap_err();
        assert!(matches!(err, FilterError::EmptyContent));
    }
}
