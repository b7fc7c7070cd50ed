//! Left-to-right trie scan over input text.
//!
//! For every unconsumed start position the scan walks the trie one codepoint
//! at a time. A failed child lookup ends the walk; a word-end node either
//! terminates it immediately (shortest policy) or is remembered while the
//! walk continues looking for a longer word (longest policy). After a
//! recorded match the outer cursor jumps past the consumed span, so matches
//! never overlap. All indexing is codepoint-based.

use std::path::Path;

use tracing::debug;

use super::lexicon;
use super::trie::WordTrie;
use super::types::{MatchPolicy, WordMatch};
use crate::config::WordguardConfig;
use crate::error::FilterError;

/// Sensitive-word matcher over an immutable trie.
///
/// Once built the filter never mutates its trie, so a single instance can be
/// shared across threads and scanned concurrently. Replacing the word set
/// means building a new filter and swapping it in; there is no global
/// instance anywhere in the crate.
#[derive(Debug)]
pub struct WordFilter {
    trie: WordTrie,
}

impl WordFilter {
    /// Wrap an already-built trie.
    pub fn from_trie(trie: WordTrie) -> Self {
        Self { trie }
    }

    /// Build a filter from an in-memory word list.
    pub fn from_words<I, S>(words: I) -> Result<Self, FilterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lexicon::from_words(words).map(Self::from_trie)
    }

    /// Build a filter from a word file, one word per line.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, FilterError> {
        lexicon::from_file(path).map(Self::from_trie)
    }

    /// Build a filter from the configured lexicon sources.
    ///
    /// The word file and inline words merge into one trie; at least one of
    /// them must yield a word.
    pub fn from_config(config: &WordguardConfig) -> Result<Self, FilterError> {
        let mut trie = match &config.lexicon.file {
            Some(path) => lexicon::from_file(path)?,
            None => WordTrie::new(),
        };
        for word in &config.lexicon.words {
            trie.insert(word.trim());
        }
        if trie.is_empty() {
            return Err(FilterError::EmptyLexicon);
        }
        debug!(words = trie.len(), "word filter ready");
        Ok(Self::from_trie(trie))
    }

    /// The underlying trie.
    pub fn trie(&self) -> &WordTrie {
        &self.trie
    }

    /// Detect sensitive words in `content`.
    ///
    /// Returns matches in input order. A positive `limit` stops the scan as
    /// soon as that many matches are recorded; `limit == 0` scans the whole
    /// input. Clean content yields an empty vec, never an error.
    pub fn scan(&self, content: &str, policy: MatchPolicy, limit: usize) -> Vec<WordMatch> {
        let chars: Vec<char> = content.chars().collect();
        let mut matches = Vec::new();

        let mut start = 0;
        while start < chars.len() {
            let mut node = self.trie.root();
            let mut walked = 0;
            // Length of the last confirmed word end along this walk. Under
            // the longest policy the walk may continue past a word end and
            // then fail; the earlier confirmed length is what gets reported.
            let mut confirmed = 0;

            for &ch in &chars[start..] {
                let Some(next) = node.child(ch) else { break };
                node = next;
                walked += 1;
                if node.is_word_end() {
                    confirmed = walked;
                    if policy == MatchPolicy::Shortest {
                        break;
                    }
                }
            }

            if confirmed == 0 {
                start += 1;
                continue;
            }

            matches.push(WordMatch {
                start,
                len: confirmed,
                text: chars[start..start + confirmed].iter().collect(),
            });
            if limit > 0 && matches.len() == limit {
                return matches;
            }
            // Skip past the consumed span; matches never overlap.
            start += confirmed;
        }
        matches
    }

    /// Legality check: true when `content` contains no lexicon word.
    ///
    /// Short-circuits on the first word end reached from any start position,
    /// regardless of policy.
    pub fn is_clean(&self, content: &str) -> bool {
        let chars: Vec<char> = content.chars().collect();

        let mut start = 0;
        while start < chars.len() {
            let mut node = self.trie.root();
            for &ch in &chars[start..] {
                let Some(next) = node.child(ch) else { break };
                node = next;
                if node.is_word_end() {
                    return false;
                }
            }
            start += 1;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(words: &[&str]) -> WordFilter {
        WordFilter::from_words(words).unwrap()
    }

    #[test]
    fn test_shortest_prefers_prefix_word() {
        let filter = filter(&["bad", "badword"]);
        let matches = filter.scan("this is a badword", MatchPolicy::Shortest, 0);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "bad");
        assert_eq!(matches[0].start, 10);
        assert_eq!(matches[0].len, 3);
    }

    #[test]
    fn test_longest_prefers_full_word() {
        let filter = filter(&["bad", "badword"]);
        let matches = filter.scan("this is a badword", MatchPolicy::Longest, 0);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "badword");
        assert_eq!(matches[0].start, 10);
        assert_eq!(matches[0].len, 7);
    }

    #[test]
    fn test_longest_falls_back_to_last_confirmed_word() {
        // The walk continues past "ab" hoping for "abcd", fails at 'x', and
        // must report the confirmed "ab" rather than the walked prefix.
        let filter = filter(&["ab", "abcd"]);
        let matches = filter.scan("abcx", MatchPolicy::Longest, 0);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].text, "ab");
        assert_eq!(matches[0].start, 0);
    }

    #[test]
    fn test_adjacent_matches_do_not_overlap() {
        let filter = filter(&["foo"]);
        let matches = filter.scan("foofoo", MatchPolicy::Longest, 0);

        assert_eq!(matches.len(), 2);
        assert_eq!((matches[0].start, matches[0].len), (0, 3));
        assert_eq!((matches[1].start, matches[1].len), (3, 3));
        assert!(matches[0].end() <= matches[1].start);
    }

    #[test]
    fn test_limit_is_respected_and_monotonic() {
        let filter = filter(&["foo"]);
        let all = filter.scan("foo foo foo", MatchPolicy::Longest, 0);
        assert_eq!(all.len(), 3);

        for limit in 1..=3 {
            let limited = filter.scan("foo foo foo", MatchPolicy::Longest, limit);
            assert_eq!(limited.len(), limit);
            // Raising the limit only appends; it never rewrites earlier matches.
            assert_eq!(limited[..], all[..limit]);
        }
    }

    #[test]
    fn test_clean_text_yields_no_matches() {
        let filter = filter(&["bad"]);
        assert!(filter.scan("perfectly fine text", MatchPolicy::Longest, 0).is_empty());
        assert!(filter.is_clean("perfectly fine text"));
    }

    #[test]
    fn test_is_clean_detects_embedded_word() {
        let filter = filter(&["敏感"]);
        assert!(!filter.is_clean("这句话有敏感词"));
        assert!(filter.is_clean("这句话没有问题"));
    }

    #[test]
    fn test_is_clean_finds_match_after_failed_prefix_walk() {
        // Walking "ab" from offset 0 fails without a word end; the word
        // starting one character later must still be found.
        let filter = filter(&["abc", "bx"]);
        assert!(!filter.is_clean("abx"));
    }

    #[test]
    fn test_multibyte_offsets_are_codepoint_based() {
        let filter = filter(&["敏感词"]);
        let matches = filter.scan("前面有敏感词在这里", MatchPolicy::Longest, 0);

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].start, 3);
        assert_eq!(matches[0].len, 3);
        assert_eq!(matches[0].text, "敏感词");
    }

    #[test]
    fn test_empty_content_scans_clean() {
        let filter = filter(&["bad"]);
        assert!(filter.scan("", MatchPolicy::Longest, 0).is_empty());
        assert!(filter.is_clean(""));
    }
}
