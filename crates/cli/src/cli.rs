// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;
use crate::config::defaults::CONFIG_FILE;

/// Resolve free-text product queries to canonical brands
#[derive(Parser)]
#[command(name = "brandscope")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Brand config file (YAML or JSON)
    #[arg(
        short = 'C',
        long = "config",
        global = true,
        env = "BRANDSCOPE_CONFIG",
        default_value = CONFIG_FILE
    )]
    pub config: PathBuf,

    /// Entity tagger command: reads text on stdin, prints JSON spans on stdout
    #[arg(long, global = true, env = "BRANDSCOPE_TAGGER", value_name = "COMMAND")]
    pub tagger: Option<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve texts to brands
    Resolve(ResolveArgs),
    /// Resolve every row of a prompts CSV
    Batch(BatchArgs),
    /// Load the config and report problems
    CheckConfig,
    /// Write a starter brand config
    Init(InitArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(clap::Args)]
pub struct ResolveArgs {
    /// Texts to resolve (reads lines from stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub texts: Vec<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Disable color output (shorthand for --color=never)
    #[arg(long)]
    pub no_color: bool,
}

#[derive(clap::Args)]
pub struct BatchArgs {
    /// Input CSV with `id,timestamp,text` columns
    #[arg(short, long, default_value = "prompts.csv")]
    pub input: PathBuf,

    /// Output CSV (appended; header written when new)
    #[arg(short, long, default_value = "outputs.csv")]
    pub output: PathBuf,

    /// Output JSON lines (appended)
    #[arg(long, default_value = "outputs.jsonl")]
    pub jsonl: PathBuf,

    /// Write sample prompts when the input file does not exist
    #[arg(long)]
    pub sample: bool,

    /// Retries for a failed tagger call (exponential backoff from 500ms)
    #[arg(long, default_value_t = 2, value_name = "N")]
    pub retries: u32,
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Overwrite existing config
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Target shell
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
