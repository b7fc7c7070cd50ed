//! Mask command implementation
//!
//! Replaces detected words with a replacement character and prints the
//! masked content to stdout.

use anyhow::Result;

use crate::cli::{Cli, Output};
use crate::filter::MatchPolicy;

pub fn execute(
    cli: &Cli,
    text: Option<String>,
    file: Option<String>,
    replacement: Option<char>,
    no_repeat: bool,
    policy: Option<MatchPolicy>,
    output: &Output,
) -> Result<()> {
    let config = super::load_config(cli)?;
    let filter = super::build_filter(cli, &config)?;
    let content = super::read_input(text, file.as_deref())?;

    let replacement = replacement.unwrap_or(config.masking.replacement);
    let repeat = if no_repeat { false } else { config.masking.repeat };
    let policy = policy.unwrap_or(config.matching.policy);
    output.verbose(&format!("masking with '{}', repeat: {}", replacement, repeat));

    let masked = filter.mask(&content, replacement, repeat, policy)?;
    println!("{}", masked);
    Ok(())
}
