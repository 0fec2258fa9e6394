// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format result output.
//!
//! ```text
//! lg tv features -> LG (ner-product-alias, 0.91, surface "LG")
//! weather today -> no brand (none, 0.00)
//! ```

use std::io;

use termcolor::WriteColor;

use super::ResultFormatter;
use crate::color::scheme;
use crate::pipeline::ExtractionResult;

/// Text format result formatter.
pub struct TextFormatter;

impl ResultFormatter for TextFormatter {
    fn write_result(
        &self,
        out: &mut dyn WriteColor,
        text: &str,
        result: &ExtractionResult,
    ) -> io::Result<()> {
        out.set_color(&scheme::text())?;
        write!(out, "{}", text.trim())?;
        out.reset()?;
        write!(out, " -> ")?;

        match &result.brand {
            Some(brand) => {
                out.set_color(&scheme::brand())?;
                write!(out, "{brand}")?;
            }
            None => {
                out.set_color(&scheme::no_match())?;
                write!(out, "no brand")?;
            }
        }
        out.reset()?;

        write!(out, " (")?;
        out.set_color(&scheme::method())?;
        write!(out, "{}", result.method)?;
        out.reset()?;
        write!(out, ", {:.2}", result.confidence)?;
        if let Some(surface) = &result.surface {
            write!(out, ", surface {surface:?}")?;
        }
        writeln!(out, ")")
    }
}
