//! File and directory scanning over a shared word filter.
//!
//! Files are read whole, scanned line by line with the trie matcher, and
//! reported with 1-based line/column coordinates. Directory walks respect
//! gitignore rules plus the configured exclude globs, and can fan out over
//! worker threads: the trie is immutable once built, so one filter serves
//! every file concurrently.

use anyhow::{Context, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use ignore::WalkBuilder;
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::types::{DirectoryScan, FileMatch, ScanStats, Warning};
use crate::config::WordguardConfig;
use crate::filter::{MatchPolicy, WordFilter};

/// Scanner tuning knobs, sourced from the `[scan]` config section.
#[derive(Debug, Clone)]
pub struct ScannerConfig {
    pub policy: MatchPolicy,
    pub exclude_patterns: Vec<String>,
    pub max_file_size_mb: usize,
    pub parallel: bool,
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            policy: MatchPolicy::Longest,
            exclude_patterns: Vec::new(),
            max_file_size_mb: 10,
            parallel: true,
        }
    }
}

impl ScannerConfig {
    pub fn from_config(config: &WordguardConfig) -> Self {
        Self {
            policy: config.matching.policy,
            exclude_patterns: config.scan.exclude_patterns.clone(),
            max_file_size_mb: config.scan.max_file_size_mb,
            parallel: config.scan.parallel,
        }
    }
}

/// Scans files and directory trees for sensitive words.
pub struct Scanner {
    filter: WordFilter,
    config: ScannerConfig,
    exclude_globset: GlobSet,
}

impl Scanner {
    pub fn new(filter: WordFilter, config: ScannerConfig) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &config.exclude_patterns {
            let glob = Glob::new(pattern)
                .with_context(|| format!("Invalid exclude pattern: {}", pattern))?;
            builder.add(glob);
        }
        let exclude_globset = builder.build().context("Failed to build exclude globset")?;

        Ok(Self { filter, config, exclude_globset })
    }

    /// The filter this scanner matches with.
    pub fn filter(&self) -> &WordFilter {
        &self.filter
    }

    /// Scan a single file, reporting one entry per matched word occurrence.
    pub fn scan_file(&self, path: &Path) -> Result<Vec<FileMatch>> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        let mut matches = Vec::new();
        for (line_idx, line) in content.lines().enumerate() {
            for m in self.filter.scan(line, self.config.policy, 0) {
                matches.push(FileMatch {
                    file_path: path.display().to_string(),
                    line_number: line_idx + 1,
                    column: m.start + 1,
                    line: line.to_string(),
                    word: m.text,
                });
            }
        }
        Ok(matches)
    }

    /// Scan a directory recursively.
    ///
    /// Unreadable or non-UTF-8 files become warnings, not errors. With the
    /// parallel flag set, files are distributed over rayon workers against
    /// the shared read-only trie.
    pub fn scan_directory(&self, path: &Path) -> Result<DirectoryScan> {
        let start_time = std::time::Instant::now();
        let mut warnings = Vec::new();

        let mut file_paths = Vec::new();
        for entry in WalkBuilder::new(path).build() {
            match entry {
                Ok(entry) => {
                    if entry.file_type().is_some_and(|ft| ft.is_file())
                        && self.should_scan(entry.path())
                    {
                        file_paths.push(entry.path().to_path_buf());
                    }
                }
                Err(e) => {
                    warnings.push(Warning { message: format!("Walk error: {}", e) });
                }
            }
        }
        debug!(files = file_paths.len(), path = %path.display(), "directory walk complete");

        let scan_one = |p: &PathBuf| (p.clone(), self.scan_path_capped(p));
        let results: Vec<(PathBuf, Result<Vec<FileMatch>>)> = if self.config.parallel {
            file_paths.par_iter().map(scan_one).collect()
        } else {
            file_paths.iter().map(scan_one).collect()
        };

        let mut all_matches = Vec::new();
        let mut stats = ScanStats::default();
        for (file_path, result) in results {
            match result {
                Ok(mut matches) => {
                    stats.files_scanned += 1;
                    stats.total_matches += matches.len();
                    all_matches.append(&mut matches);
                }
                Err(e) => {
                    stats.files_skipped += 1;
                    warnings.push(Warning {
                        message: format!("Failed to scan {}: {}", file_path.display(), e),
                    });
                }
            }
        }
        stats.scan_duration_ms = start_time.elapsed().as_millis() as u64;

        Ok(DirectoryScan { matches: all_matches, stats, warnings })
    }

    fn scan_path_capped(&self, path: &Path) -> Result<Vec<FileMatch>> {
        if let Ok(metadata) = std::fs::metadata(path) {
            let size_mb = metadata.len() / (1024 * 1024);
            if size_mb > self.config.max_file_size_mb as u64 {
                debug!(path = %path.display(), "skipping oversized file");
                return Ok(vec![]);
            }
        }
        self.scan_file(path)
    }

    /// Check a path and its ancestors against the exclude globs.
    fn should_scan(&self, path: &Path) -> bool {
        if self.exclude_globset.is_match(path) {
            return false;
        }
        for ancestor in path.ancestors().skip(1) {
            if self.exclude_globset.is_match(ancestor) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn test_scanner(words: &[&str], config: ScannerConfig) -> Scanner {
        let filter = WordFilter::from_words(words).unwrap();
        Scanner::new(filter, config).unwrap()
    }

    #[test]
    fn test_file_scanning() {
        let temp_dir = TempDir::new().unwrap();
        let test_file = temp_dir.path().join("comments.txt");
        fs::write(&test_file, "first line is fine\na badword lurks here\n").unwrap();

        let scanner = test_scanner(&["badword"], ScannerConfig::default());
        let matches = scanner.scan_file(&test_file).unwrap();

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].line_number, 2);
        assert_eq!(matches[0].column, 3);
        assert_eq!(matches[0].word, "badword");
    }

    #[test]
    fn test_scan_directory() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("a.txt"), "badword").unwrap();
        fs::write(temp_dir.path().join("b.txt"), "clean content").unwrap();

        let scanner = test_scanner(&["badword"], ScannerConfig::default());
        let result = scanner.scan_directory(temp_dir.path()).unwrap();

        assert_eq!(result.stats.files_scanned, 2);
        assert_eq!(result.stats.total_matches, 1);
        assert_eq!(result.matches.len(), 1);
    }

    #[test]
    fn test_scan_directory_sequential_matches_parallel() {
        let temp_dir = TempDir::new().unwrap();
        for i in 0..5 {
            fs::write(
                temp_dir.path().join(format!("f{}.txt", i)),
                "a badword per file",
            )
            .unwrap();
        }

        let parallel = test_scanner(&["badword"], ScannerConfig::default())
            .scan_directory(temp_dir.path())
            .unwrap();
        let sequential = test_scanner(
            &["badword"],
            ScannerConfig { parallel: false, ..ScannerConfig::default() },
        )
        .scan_directory(temp_dir.path())
        .unwrap();

        assert_eq!(parallel.stats.total_matches, 5);
        assert_eq!(sequential.stats.total_matches, 5);
    }

    #[test]
    fn test_exclude_patterns_skip_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir(temp_dir.path().join("vendor")).unwrap();
        fs::write(temp_dir.path().join("vendor/skip.txt"), "badword").unwrap();
        fs::write(temp_dir.path().join("keep.txt"), "badword").unwrap();

        let config = ScannerConfig {
            exclude_patterns: vec!["**/vendor".to_string()],
            ..ScannerConfig::default()
        };
        let scanner = test_scanner(&["badword"], config);
        let result = scanner.scan_directory(temp_dir.path()).unwrap();

        assert_eq!(result.stats.total_matches, 1);
        assert!(result.matches[0].file_path.ends_with("keep.txt"));
    }

    #[test]
    fn test_unreadable_file_becomes_warning() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("bin.dat"), [0xff, 0xfe, 0x00]).unwrap();
        fs::write(temp_dir.path().join("ok.txt"), "badword").unwrap();

        let scanner = test_scanner(&["badword"], ScannerConfig::default());
        let result = scanner.scan_directory(temp_dir.path()).unwrap();

        assert_eq!(result.stats.files_skipped, 1);
        assert_eq!(result.stats.files_scanned, 1);
        assert_eq!(result.warnings.len(), 1);
    }
}
