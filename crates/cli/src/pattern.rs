// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Regex hint matching.
//!
//! Hints are compiled case-insensitively at load time and evaluated in
//! declared order. The first pattern found anywhere in the text wins.

use crate::config::{BrandConfig, RegexHint};

/// Evaluates a snapshot's regex hints against raw text.
pub struct PatternMatcher<'a> {
    hints: &'a [RegexHint],
}

impl<'a> PatternMatcher<'a> {
    pub fn new(config: &'a BrandConfig) -> Self {
        Self { hints: config.regex_hints() }
    }

    /// Brand of the first hint whose pattern matches, if any.
    pub fn find(&self, text: &str) -> Option<&'a str> {
        self.hints.iter().find(|h| h.pattern.is_match(text)).map(|h| h.brand.as_str())
    }
}

#[cfg(test)]
#[path = "pattern_tests.rs"]
mod tests;
