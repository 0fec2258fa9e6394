// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `brandscope check-config` command implementation.

use brandscope::cli::Cli;
use brandscope::config;

/// Load the config and print a summary. Fails on any load error.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = config::load(&cli.config)?;
    let thresholds = config.thresholds();

    println!("{}: ok", cli.config.display());
    println!("  brands:       {}", config.brands().len());
    println!("  aliases:      {}", config.aliases().len());
    println!("  regex hints:  {}", config.regex_hints().len());
    println!(
        "  thresholds:   ner_min_conf={} fuzzy_min_score={}",
        thresholds.ner_min_conf, thresholds.fuzzy_min_score
    );
    for brand in config.undeclared_brands() {
        println!("  warning: brand {brand:?} is referenced but not listed in `brands`");
    }
    Ok(())
}
