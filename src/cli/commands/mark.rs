//! Mark command implementation
//!
//! Wraps detected words in marker tags and prints the result to stdout.

use anyhow::Result;

use crate::cli::{Cli, Output};
use crate::filter::MatchPolicy;

pub fn execute(
    cli: &Cli,
    text: Option<String>,
    file: Option<String>,
    open_tag: Option<String>,
    close_tag: Option<String>,
    policy: Option<MatchPolicy>,
    output: &Output,
) -> Result<()> {
    let config = super::load_config(cli)?;
    let filter = super::build_filter(cli, &config)?;
    let content = super::read_input(text, file.as_deref())?;

    let open_tag = open_tag.unwrap_or_else(|| config.marking.open_tag.clone());
    let close_tag = close_tag.unwrap_or_else(|| config.marking.close_tag.clone());
    let policy = policy.unwrap_or(config.matching.policy);
    output.verbose(&format!("marking with {}...{}", open_tag, close_tag));

    let marked = filter.mark(&content, &open_tag, &close_tag, policy)?;
    println!("{}", marked);
    Ok(())
}
