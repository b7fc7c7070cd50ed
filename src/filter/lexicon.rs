//! Lexicon loading: in-memory word lists and line-oriented word files.
//!
//! Both sources feed the same trie insertion: words are trimmed of
//! surrounding whitespace, and entries that are empty after trimming are
//! skipped silently. Rebuilding a lexicon always produces a fresh trie;
//! an existing trie is never mutated in place.

use std::fs::File;
use std::io::{BufRead, BufReader, ErrorKind};
use std::path::Path;

use tracing::debug;

use super::trie::WordTrie;
use crate::error::FilterError;

/// Build a trie from an in-memory word list.
///
/// Fails with [`FilterError::EmptyLexicon`] when the input sequence itself is
/// empty. Blank entries are skipped, not errors.
pub fn from_words<I, S>(words: I) -> Result<WordTrie, FilterError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut trie = WordTrie::new();
    let mut seen_any = false;
    for word in words {
        seen_any = true;
        trie.insert(word.as_ref().trim());
    }
    if !seen_any {
        return Err(FilterError::EmptyLexicon);
    }
    debug!(words = trie.len(), "lexicon built from word list");
    Ok(trie)
}

/// Build a trie from a word file, one word per line.
///
/// Lines are streamed through a buffered reader rather than read wholesale;
/// the file handle lives only for the duration of the build and is released
/// on completion or error. Fails with [`FilterError::LexiconNotFound`] when
/// the path does not resolve to a readable file, and with
/// [`FilterError::InvalidEncoding`] when the file is not valid UTF-8.
pub fn from_file<P: AsRef<Path>>(path: P) -> Result<WordTrie, FilterError> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(FilterError::LexiconNotFound(path.to_path_buf()));
    }
    let file =
        File::open(path).map_err(|_| FilterError::LexiconNotFound(path.to_path_buf()))?;

    let mut trie = WordTrie::new();
    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| match e.kind() {
            ErrorKind::InvalidData => FilterError::InvalidEncoding {
                path: path.to_path_buf(),
            },
            _ => FilterError::Io(e),
        })?;
        trie.insert(line.trim());
    }
    debug!(words = trie.len(), path = %path.display(), "lexicon built from file");
    Ok(trie)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_from_words_trims_and_skips_blanks() {
        let trie = from_words(["  bad  ", "", "   ", "word"]).unwrap();

        assert!(trie.contains("bad"));
        assert!(trie.contains("word"));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_from_words_empty_sequence() {
        let words: [&str; 0] = [];
        let err = from_words(words).unwrap_err();
        assert!(matches!(err, FilterError::EmptyLexicon));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.txt");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "bad").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  badword  ").unwrap();
        writeln!(file, "敏感词").unwrap();
        drop(file);

        let trie = from_file(&path).unwrap();
        assert!(trie.contains("bad"));
        assert!(trie.contains("badword"));
        assert!(trie.contains("敏感词"));
        assert_eq!(trie.len(), 3);
    }

    #[test]
    fn test_from_file_missing_path() {
        let err = from_file("/no/such/lexicon.txt").unwrap_err();
        assert!(matches!(err, FilterError::LexiconNotFound(_)));
    }

    #[test]
    fn test_from_file_invalid_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("words.bin");
        std::fs::write(&path, [0x66, 0x6f, 0xff, 0xfe, 0x6f]).unwrap();

        let err = from_file(&path).unwrap_err();
        assert!(matches!(err, FilterError::InvalidEncoding { .. }));
    }
}
