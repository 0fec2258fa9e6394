// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format result output, one object per line.

use std::io;

use serde::Serialize;
use termcolor::WriteColor;

use super::ResultFormatter;
use crate::pipeline::ExtractionResult;

/// JSON lines result formatter.
pub struct JsonFormatter;

#[derive(Serialize)]
struct Record<'a> {
    text: &'a str,
    #[serde(flatten)]
    result: &'a ExtractionResult,
}

impl ResultFormatter for JsonFormatter {
    fn write_result(
        &self,
        out: &mut dyn WriteColor,
        text: &str,
        result: &ExtractionResult,
    ) -> io::Result<()> {
        let line = serde_json::to_string(&Record { text, result })?;
        writeln!(out, "{line}")
    }
}
