// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color handling.

use std::io::IsTerminal;

use termcolor::{Color, ColorChoice, ColorSpec};

/// When to color text output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

/// Resolve the effective color choice. `--no-color` always wins.
pub fn resolve_color(mode: ColorMode, no_color: bool) -> ColorChoice {
    if no_color {
        return ColorChoice::Never;
    }
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto => {
            if std::env::var_os("NO_COLOR").is_some() || !std::io::stdout().is_terminal() {
                ColorChoice::Never
            } else {
                ColorChoice::Auto
            }
        }
    }
}

/// Color scheme for resolution output.
pub mod scheme {
    use super::*;

    /// Resolved brand name.
    pub fn brand() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    /// Input text echoed back.
    pub fn text() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Resolution method.
    pub fn method() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// No brand found.
    pub fn no_match() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
