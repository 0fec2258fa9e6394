// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Entity span tagging.
//!
//! The statistical tagger is an external capability. The pipeline talks to
//! it through [`SpanTagger`]; labels are mapped onto a closed [`Category`]
//! set, with anything unrecognized becoming [`Category::Other`].

pub mod command;
pub mod retry;

use serde::{Deserialize, Serialize};

use crate::error::TaggingError;

pub use command::CommandTagger;
pub use retry::RetryTagger;

/// Entity category assigned by the tagger.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Category {
    Product,
    Org,
    Misc,
    Other,
}

impl Category {
    /// Map a tagger label such as `ORG`, `product` or `B-ORG`.
    pub fn from_label(label: &str) -> Self {
        let label = label.trim();
        let bare = label
            .strip_prefix("B-")
            .or_else(|| label.strip_prefix("I-"))
            .unwrap_or(label);
        match bare.to_ascii_uppercase().as_str() {
            "PRODUCT" => Category::Product,
            "ORG" => Category::Org,
            "MISC" => Category::Misc,
            _ => Category::Other,
        }
    }
}

/// A labeled, scored substring of the input text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Span {
    pub text: String,
    pub category: Category,
    /// Model score in [0, 1].
    pub score: f64,
}

impl Span {
    pub fn new(text: impl Into<String>, category: Category, score: f64) -> Self {
        Self { text: text.into(), category, score }
    }
}

/// Produces candidate entity spans for a text.
///
/// Implementations may be slow and may fail; the returned spans carry no
/// ordering guarantee.
pub trait SpanTagger: Send + Sync {
    fn tag(&self, text: &str) -> Result<Vec<Span>, TaggingError>;
}

/// Tagger used when no model is configured. Never finds any spans.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullTagger;

impl SpanTagger for NullTagger {
    fn tag(&self, _text: &str) -> Result<Vec<Span>, TaggingError> {
        Ok(Vec::new())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
