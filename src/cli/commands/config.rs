//! Configuration command implementations
//!
//! Commands for initializing, validating, and displaying the effective
//! wordguard configuration.

use anyhow::{Context, Result, bail};
use std::path::Path;

use crate::cli::{Cli, ConfigCommands, Output};
use crate::config::WordguardConfig;
use crate::filter::lexicon;

/// Execute configuration commands
pub fn execute(cmd: ConfigCommands, cli: &Cli, output: &Output) -> Result<()> {
    match cmd {
        ConfigCommands::Init => init(output),
        ConfigCommands::Validate => validate(cli, output),
        ConfigCommands::Show => show(cli, output),
    }
}

/// Write a starter wordguard.toml to the current directory
fn init(output: &Output) -> Result<()> {
    let path = Path::new("wordguard.toml");
    if path.exists() {
        bail!("wordguard.toml already exists");
    }
    std::fs::write(path, WordguardConfig::default_toml())
        .context("Failed to write wordguard.toml")?;
    output.success("Created wordguard.toml");
    output.info("Point [lexicon] at your word file or list words inline");
    Ok(())
}

/// Validate the effective configuration
fn validate(cli: &Cli, output: &Output) -> Result<()> {
    let config = super::load_config(cli)?;

    if let Some(file) = &config.lexicon.file {
        let trie = lexicon::from_file(file)
            .with_context(|| format!("Lexicon file check failed: {}", file.display()))?;
        output.verbose(&format!("lexicon file provides {} words", trie.len()));
    } else if config.lexicon.words.is_empty() {
        output.warning("No lexicon configured; commands will need --lexicon or --word");
    }

    for pattern in &config.scan.exclude_patterns {
        globset::Glob::new(pattern)
            .with_context(|| format!("Invalid exclude pattern: {}", pattern))?;
    }
    if config.marking.open_tag.is_empty() || config.marking.close_tag.is_empty() {
        bail!("marking tags must not be empty");
    }

    output.success("Configuration is valid");
    Ok(())
}

/// Show the effective merged configuration
fn show(cli: &Cli, _output: &Output) -> Result<()> {
    let config = super::load_config(cli)?;
    let rendered = toml::to_string_pretty(&config).context("Failed to render configuration")?;
    println!("{}", rendered);
    Ok(())
}
