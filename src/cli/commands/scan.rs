//! Scan command implementation
//!
//! Detects sensitive words in text, files, or whole directory trees and
//! reports each match with its location. Exits non-zero when anything is
//! found, so the command can gate moderation pipelines.

use anyhow::{Result, bail};
use std::path::Path;

use crate::cli::{Cli, Output};
use crate::filter::{MatchPolicy, WordMatch};
use crate::scanner::{FileMatch, Scanner, ScannerConfig};

#[allow(clippy::too_many_arguments)]
pub fn execute(
    cli: &Cli,
    text: Option<String>,
    files: Vec<String>,
    directory: Option<String>,
    policy: Option<MatchPolicy>,
    limit: Option<usize>,
    format: &str,
    output: &Output,
) -> Result<()> {
    let config = super::load_config(cli)?;
    let filter = super::build_filter(cli, &config)?;
    let policy = policy.unwrap_or(config.matching.policy);
    let limit = limit.unwrap_or(config.matching.limit);
    output.verbose(&format!(
        "{} words loaded, {} policy",
        filter.trie().len(),
        policy
    ));

    // Inline text mode
    if let Some(text) = text {
        let matches = filter.scan(&text, policy, limit);
        display_text_matches(&matches, format, output)?;
        if !matches.is_empty() {
            bail!("sensitive words detected");
        }
        return Ok(());
    }

    // File and directory mode
    let mut scanner_config = ScannerConfig::from_config(&config);
    scanner_config.policy = policy;
    let scanner = Scanner::new(filter, scanner_config)?;

    let mut all_matches = Vec::new();
    if !files.is_empty() {
        output.step("Scanning specified files");
        for file_path in &files {
            let path = Path::new(file_path);
            if path.exists() {
                all_matches.extend(scanner.scan_file(path)?);
            } else {
                output.warning(&format!("File not found: {}", file_path));
            }
        }
    } else if let Some(dir) = directory {
        output.step(&format!("Scanning directory: {}", dir));
        let dir_path = Path::new(&dir);
        if !dir_path.is_dir() {
            bail!("Directory not found: {}", dir);
        }
        let result = scanner.scan_directory(dir_path)?;
        for warning in &result.warnings {
            output.warning(&warning.message);
        }
        output.summary_stats("Files scanned", result.stats.files_scanned);
        output.summary_stats("Files skipped", result.stats.files_skipped);
        all_matches.extend(result.matches);
    } else {
        bail!("no input: pass TEXT, --file, or --directory");
    }

    output.blank_line();
    display_file_matches(&all_matches, format, output)?;
    if !all_matches.is_empty() {
        bail!("sensitive words detected");
    }
    Ok(())
}

fn display_text_matches(matches: &[WordMatch], format: &str, output: &Output) -> Result<()> {
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(matches)?),
        _ => {
            if matches.is_empty() {
                output.success("No sensitive words found");
            } else {
                output.warning(&format!("Found {} sensitive words", matches.len()));
                for m in matches {
                    output.list_item(&format!(
                        "\"{}\" at offset {} (length {})",
                        m.text, m.start, m.len
                    ));
                }
            }
        }
    }
    Ok(())
}

fn display_file_matches(matches: &[FileMatch], format: &str, output: &Output) -> Result<()> {
    match format {
        "json" => println!("{}", serde_json::to_string_pretty(matches)?),
        _ => {
            if matches.is_empty() {
                output.success("No sensitive words found");
            } else {
                output.warning(&format!("Found {} sensitive words", matches.len()));
                output.blank_line();
                for (i, m) in matches.iter().enumerate() {
                    output.error(&format!(
                        "{}. \"{}\" in {}:{}:{}",
                        i + 1,
                        m.word,
                        m.file_path,
                        m.line_number,
                        m.column
                    ));
                    output.indent(&format!("Content: {}", m.line));
                }
                output.separator();
                output.info("Review the findings above before publishing this content");
            }
        }
    }
    Ok(())
}
