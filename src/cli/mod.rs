//! Command-line interface for wordguard
//!
//! This module provides the main CLI structure and command handling. It uses
//! clap for argument parsing and keeps each command in its own module.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};

use crate::filter::MatchPolicy;

pub mod commands;
mod output;

pub use output::Output;

/// Wordguard - trie-based sensitive word detection and masking
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<String>,

    /// Lexicon file (one word per line); overrides the configured lexicon
    #[arg(short, long, value_name = "FILE", global = true)]
    pub lexicon: Option<String>,

    /// Extra sensitive words (comma-separated or multiple -w flags)
    #[arg(short, long, value_delimiter = ',', global = true)]
    pub word: Vec<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Enable quiet output (minimal)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Subcommands
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Scan text, files, or directories for sensitive words
    Scan {
        /// Text to scan; omit when using --file or --directory
        text: Option<String>,
        /// Files to scan (comma-separated or multiple -f flags)
        #[arg(short, long, value_delimiter = ',')]
        file: Vec<String>,
        /// Directory to scan recursively
        #[arg(short, long)]
        directory: Option<String>,
        /// Match policy override
        #[arg(short, long)]
        policy: Option<MatchPolicy>,
        /// Stop after this many matches (0 scans everything)
        #[arg(long)]
        limit: Option<usize>,
        /// Output format (text, json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Check whether content contains any sensitive word
    Check {
        /// Text to check; omit when using --file
        text: Option<String>,
        /// File to check
        #[arg(short, long)]
        file: Option<String>,
    },
    /// Mask sensitive words in content
    Mask {
        /// Text to mask; omit when using --file
        text: Option<String>,
        /// File to mask
        #[arg(short, long)]
        file: Option<String>,
        /// Replacement character
        #[arg(short, long)]
        replacement: Option<char>,
        /// Collapse each word to a single replacement character
        #[arg(long)]
        no_repeat: bool,
        /// Match policy override
        #[arg(short, long)]
        policy: Option<MatchPolicy>,
    },
    /// Wrap sensitive words in marker tags
    Mark {
        /// Text to mark; omit when using --file
        text: Option<String>,
        /// File to mark
        #[arg(short, long)]
        file: Option<String>,
        /// Opening tag
        #[arg(long)]
        open_tag: Option<String>,
        /// Closing tag
        #[arg(long)]
        close_tag: Option<String>,
        /// Match policy override
        #[arg(short, long)]
        policy: Option<MatchPolicy>,
    },
    /// Configuration management
    #[command(subcommand)]
    Config(ConfigCommands),
    /// Show version information
    Version,
}

/// Configuration subcommands
#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Write a starter wordguard.toml to the current directory
    Init,
    /// Validate the effective configuration
    Validate,
    /// Show the effective merged configuration
    Show,
}

impl Cli {
    /// Execute the CLI command
    pub fn run(mut self) -> Result<()> {
        // Initialize output handler with global verbose and quiet settings
        let output = Output::new(self.verbose, self.quiet);

        // Handle the command
        match self.command.take() {
            Some(Commands::Scan { text, file, directory, policy, limit, format }) => {
                commands::scan::execute(&self, text, file, directory, policy, limit, &format, &output)
            }
            Some(Commands::Check { text, file }) => {
                commands::check::execute(&self, text, file, &output)
            }
            Some(Commands::Mask { text, file, replacement, no_repeat, policy }) => {
                commands::mask::execute(&self, text, file, replacement, no_repeat, policy, &output)
            }
            Some(Commands::Mark { text, file, open_tag, close_tag, policy }) => {
                commands::mark::execute(&self, text, file, open_tag, close_tag, policy, &output)
            }
            Some(Commands::Config(cmd)) => commands::config::execute(cmd, &self, &output),
            Some(Commands::Version) => commands::version::execute(&output),
            None => {
                // Show help when no command is provided
                let mut cmd = Cli::command();
                cmd.print_help()?;
                Ok(())
            }
        }
    }
}
