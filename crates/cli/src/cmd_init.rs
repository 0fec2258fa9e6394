// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `brandscope init` command implementation.

use anyhow::Context;

use brandscope::cli::{Cli, InitArgs};
use brandscope::config::template::DEFAULT_CONFIG;

/// Write the starter config to the `--config` path.
pub fn run(cli: &Cli, args: &InitArgs) -> anyhow::Result<()> {
    let path = &cli.config;
    if path.exists() && !args.force {
        anyhow::bail!("{} already exists (use --force to overwrite)", path.display());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Created {}", path.display());
    Ok(())
}
