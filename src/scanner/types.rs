//! Scanner result types.
//!
//! NOTE: All scanner-related types are defined here, not in core.rs. This
//! keeps the type definitions modular and the implementation focused.

use serde::Serialize;

/// One matched word occurrence within a scanned file
#[derive(Debug, Clone, Serialize)]
pub struct FileMatch {
    pub file_path: String,
    /// 1-based line number
    pub line_number: usize,
    /// 1-based codepoint column within the line
    pub column: usize,
    pub line: String,
    pub word: String,
}

/// Statistics from a scanning operation
#[derive(Debug, Default, Serialize)]
pub struct ScanStats {
    pub files_scanned: usize,
    pub files_skipped: usize,
    pub total_matches: usize,
    pub scan_duration_ms: u64,
}

/// Non-fatal problem encountered while scanning
#[derive(Debug, Serialize)]
pub struct Warning {
    pub message: String,
}

/// Result of scanning a directory tree
#[derive(Debug, Serialize)]
pub struct DirectoryScan {
    pub matches: Vec<FileMatch>,
    pub stats: ScanStats,
    pub warnings: Vec<Warning>,
}
