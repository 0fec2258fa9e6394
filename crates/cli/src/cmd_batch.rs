// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `brandscope batch` command implementation.

use std::sync::Arc;
use std::time::Duration;

use brandscope::batch::{self, BatchPaths};
use brandscope::cli::{BatchArgs, Cli};
use brandscope::tagger::{RetryTagger, SpanTagger};
use brandscope::{ConfigStore, ResolutionPipeline};

/// First retry delay; doubles on each further attempt.
const RETRY_BACKOFF: Duration = Duration::from_millis(500);

/// Run the batch command.
pub fn run(cli: &Cli, args: &BatchArgs) -> anyhow::Result<()> {
    if args.sample && batch::ensure_sample_input(&args.input)? {
        eprintln!("Created sample input file: {}", args.input.display());
    }

    let store = Arc::new(ConfigStore::open(&cli.config)?);
    let tagger: Arc<dyn SpanTagger> =
        Arc::new(RetryTagger::new(crate::build_tagger(cli), args.retries, RETRY_BACKOFF));
    let pipeline = ResolutionPipeline::new(store, tagger);

    let paths = BatchPaths {
        input: args.input.clone(),
        output: args.output.clone(),
        jsonl: args.jsonl.clone(),
    };
    let summary = batch::run(&pipeline, &paths)?;

    println!("Done. Processed: {}, errors: {}", summary.processed, summary.errors);
    println!("- Input:  {}", paths.input.display());
    println!("- Output: {}", paths.output.display());
    println!("- Output: {}", paths.jsonl.display());
    Ok(())
}
