// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `brandscope resolve` command implementation.

use std::io::BufRead;
use std::sync::Arc;

use termcolor::{ColorChoice, StandardStream};

use brandscope::cli::{Cli, OutputFormat, ResolveArgs};
use brandscope::color::resolve_color;
use brandscope::report;
use brandscope::{ConfigStore, ResolutionPipeline};

/// Run the resolve command.
pub fn run(cli: &Cli, args: &ResolveArgs) -> anyhow::Result<()> {
    let store = Arc::new(ConfigStore::open(&cli.config)?);
    let pipeline = ResolutionPipeline::new(store, crate::build_tagger(cli));

    let choice = match args.output {
        OutputFormat::Json => ColorChoice::Never,
        OutputFormat::Text => resolve_color(args.color, args.no_color),
    };
    let mut out = StandardStream::stdout(choice);
    let formatter = report::formatter(args.output);

    let mut resolve_one = |text: &str| -> anyhow::Result<()> {
        pipeline.store().maybe_reload();
        let result = pipeline.resolve(text)?;
        formatter.write_result(&mut out, text, &result)?;
        Ok(())
    };

    if args.texts.is_empty() {
        for line in std::io::stdin().lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            resolve_one(&line)?;
        }
    } else {
        for text in &args.texts {
            resolve_one(text)?;
        }
    }

    Ok(())
}
