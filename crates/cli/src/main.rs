// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::sync::Arc;

use clap::{CommandFactory, Parser};

use brandscope::cli::{Cli, Command};
use brandscope::logging::{self, Verbosity};
use brandscope::tagger::{CommandTagger, NullTagger, SpanTagger};

mod cmd_batch;
mod cmd_check_config;
mod cmd_init;
mod cmd_resolve;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(Verbosity::from_flags(cli.verbose, cli.quiet));

    match &cli.command {
        Command::Resolve(args) => cmd_resolve::run(&cli, args),
        Command::Batch(args) => cmd_batch::run(&cli, args),
        Command::CheckConfig => cmd_check_config::run(&cli),
        Command::Init(args) => cmd_init::run(&cli, args),
        Command::Completions(args) => {
            clap_complete::generate(
                args.shell,
                &mut Cli::command(),
                "brandscope",
                &mut std::io::stdout(),
            );
            Ok(())
        }
    }
}

/// The tagger named by `--tagger`, or one that finds nothing.
pub(crate) fn build_tagger(cli: &Cli) -> Arc<dyn SpanTagger> {
    match cli.tagger.as_deref().and_then(CommandTagger::from_command_line) {
        Some(tagger) => {
            tracing::debug!("using tagger command `{}`", tagger.program());
            Arc::new(tagger)
        }
        None => {
            tracing::debug!("no tagger configured, alias stages only");
            Arc::new(NullTagger)
        }
    }
}
