// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolution output formatting.
//!
//! Writes one line per resolved text, as colored text or JSON.

mod json;
mod text;

use std::io;

use termcolor::WriteColor;

use crate::cli::OutputFormat;
use crate::pipeline::ExtractionResult;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Trait for writing resolution results in an output format.
pub trait ResultFormatter {
    /// Write the result for `text` as a single line.
    fn write_result(
        &self,
        out: &mut dyn WriteColor,
        text: &str,
        result: &ExtractionResult,
    ) -> io::Result<()>;
}

/// Formatter for the requested output format.
pub fn formatter(format: OutputFormat) -> Box<dyn ResultFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
