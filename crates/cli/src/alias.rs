// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Alias resolution: surface text to canonical brand.
//!
//! Resolution order:
//! 1. Exact match of the normalized surface
//! 2. First whitespace token (left to right) that is itself an alias
//! 3. Best approximate match at or above `fuzzy_min_score`
//!
//! Approximate ties go to the lexicographically smallest alias key.

use std::collections::BTreeMap;

use crate::config::BrandConfig;
use crate::scorer::SimilarityScorer;

/// Lowercase, trim, and collapse internal whitespace to single spaces.
pub fn normalize(s: &str) -> String {
    s.to_lowercase().split_whitespace().collect::<Vec<_>>().join(" ")
}

/// How an alias was found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MatchKind {
    Exact,
    Token,
    Fuzzy { score: f64 },
}

/// A resolved alias.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AliasMatch<'a> {
    pub brand: &'a str,
    pub alias: &'a str,
    pub kind: MatchKind,
}

/// Resolves surface strings against one config snapshot's alias table.
pub struct AliasResolver<'a> {
    aliases: &'a BTreeMap<String, String>,
    min_score: f64,
    scorer: &'a dyn SimilarityScorer,
}

impl<'a> AliasResolver<'a> {
    pub fn new(config: &'a BrandConfig, scorer: &'a dyn SimilarityScorer) -> Self {
        Self { aliases: config.aliases(), min_score: config.thresholds().fuzzy_min_score, scorer }
    }

    /// Resolve `surface` to a canonical brand.
    pub fn resolve(&self, surface: &str) -> Option<&'a str> {
        self.lookup(surface).map(|m| m.brand)
    }

    /// Resolve `surface`, reporting which alias matched and how.
    pub fn lookup(&self, surface: &str) -> Option<AliasMatch<'a>> {
        let normalized = normalize(surface);
        if normalized.is_empty() {
            return None;
        }

        if let Some((alias, brand)) = self.aliases.get_key_value(normalized.as_str()) {
            return Some(AliasMatch { brand, alias, kind: MatchKind::Exact });
        }

        for token in normalized.split(' ') {
            if let Some((alias, brand)) = self.aliases.get_key_value(token) {
                return Some(AliasMatch { brand, alias, kind: MatchKind::Token });
            }
        }

        self.fuzzy(&normalized)
    }

    fn fuzzy(&self, normalized: &str) -> Option<AliasMatch<'a>> {
        let mut best: Option<(&'a String, &'a String, f64)> = None;
        // BTreeMap iterates keys in order, so a strict `>` keeps the smallest key on ties.
        for (alias, brand) in self.aliases {
            let score = self.scorer.score(normalized, alias);
            if !score.is_finite() {
                continue;
            }
            if best.is_none_or(|(_, _, top)| score > top) {
                best = Some((alias, brand, score));
            }
        }

        let (alias, brand, score) = best?;
        if score >= self.min_score {
            tracing::debug!("fuzzy alias {:?} scored {:.1} for {:?}", alias, score, normalized);
            Some(AliasMatch { brand, alias, kind: MatchKind::Fuzzy { score } })
        } else {
            None
        }
    }
}

#[cfg(test)]
#[path = "alias_tests.rs"]
mod tests;
