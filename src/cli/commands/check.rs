//! Check command implementation
//!
//! Legality verdict for a piece of content: clean or not. The scan
//! short-circuits on the first hit, so this is cheaper than a full scan
//! when only the verdict matters.

use anyhow::{Result, bail};

use crate::cli::{Cli, Output};

pub fn execute(cli: &Cli, text: Option<String>, file: Option<String>, output: &Output) -> Result<()> {
    let config = super::load_config(cli)?;
    let filter = super::build_filter(cli, &config)?;
    let content = super::read_input(text, file.as_deref())?;

    if filter.is_clean(&content) {
        output.success("Content is clean");
        Ok(())
    } else {
        output.error("Content contains sensitive words");
        bail!("check failed");
    }
}
