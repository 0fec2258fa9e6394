// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Brand resolution pipeline.
//!
//! Resolution runs a fixed chain of [`Stage`]s. Each stage either produces
//! the final [`ExtractionResult`] or hands over to the next one:
//!
//! | Stage           | Produces                          | Confidence        |
//! |-----------------|-----------------------------------|-------------------|
//! | `RegexHint`     | first matching hint               | 0.95              |
//! | `Tag`           | (collects tagger spans)           |                   |
//! | `ProductAlias`  | alias of best PRODUCT span        | span score        |
//! | `OrgSpan`       | alias of best ORG span, or itself | span score        |
//! | `FullTextAlias` | alias anywhere in the text        | 0.70              |
//! | `NoMatch`       | nothing                           | 0.0               |
//!
//! Blank input skips the chain entirely and never reaches the tagger.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::alias::AliasResolver;
use crate::config::BrandConfig;
use crate::config::defaults::{confidence, round_score};
use crate::error::ResolveError;
use crate::pattern::PatternMatcher;
use crate::scorer::{SimilarityScorer, WordRatio};
use crate::store::ConfigStore;
use crate::tagger::{Category, Span, SpanTagger};

/// Which stage produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Method {
    #[serde(rename = "regex-hint")]
    RegexHint,
    #[serde(rename = "ner-product-alias")]
    NerProductAlias,
    #[serde(rename = "ner-org")]
    NerOrg,
    #[serde(rename = "alias-only")]
    AliasOnly,
    #[serde(rename = "none")]
    None,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::RegexHint => "regex-hint",
            Method::NerProductAlias => "ner-product-alias",
            Method::NerOrg => "ner-org",
            Method::AliasOnly => "alias-only",
            Method::None => "none",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of resolving one text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    pub brand: Option<String>,
    pub surface: Option<String>,
    pub confidence: f64,
    pub method: Method,
}

impl ExtractionResult {
    /// The terminal "no brand found" result.
    pub fn none() -> Self {
        Self { brand: None, surface: None, confidence: confidence::NONE, method: Method::None }
    }

    fn found(brand: &str, surface: Option<&str>, confidence: f64, method: Method) -> Self {
        Self {
            brand: Some(brand.to_string()),
            surface: surface.map(String::from),
            confidence,
            method,
        }
    }
}

/// Resolution stages, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    RegexHint,
    Tag,
    ProductAlias,
    OrgSpan,
    FullTextAlias,
    NoMatch,
}

impl Stage {
    pub const ORDER: [Stage; 6] = [
        Stage::RegexHint,
        Stage::Tag,
        Stage::ProductAlias,
        Stage::OrgSpan,
        Stage::FullTextAlias,
        Stage::NoMatch,
    ];

    /// The stage evaluated after this one falls through.
    pub fn next(self) -> Option<Stage> {
        let i = Self::ORDER.iter().position(|s| *s == self)?;
        Self::ORDER.get(i + 1).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            Stage::RegexHint => "regex-hint",
            Stage::Tag => "tag",
            Stage::ProductAlias => "product-alias",
            Stage::OrgSpan => "org-span",
            Stage::FullTextAlias => "full-text-alias",
            Stage::NoMatch => "no-match",
        }
    }
}

/// Highest-scoring tagger span per category of interest.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Candidates {
    pub product: Option<Span>,
    pub org: Option<Span>,
}

impl Candidates {
    /// Sort spans by descending score and keep the best PRODUCT and ORG.
    ///
    /// Equal scores keep the tagger's order.
    pub fn select(mut spans: Vec<Span>) -> Self {
        spans.sort_by(|a, b| b.score.total_cmp(&a.score));
        let mut candidates = Candidates::default();
        for span in spans {
            let category = span.category;
            match category {
                Category::Product if candidates.product.is_none() => candidates.product = Some(span),
                Category::Org if candidates.org.is_none() => candidates.org = Some(span),
                _ => {}
            }
        }
        candidates
    }
}

enum Step {
    Done(ExtractionResult),
    Next(Stage),
}

/// State for one request: the config snapshot it started with and the
/// spans collected so far.
struct Run<'a> {
    config: &'a BrandConfig,
    text: &'a str,
    aliases: AliasResolver<'a>,
    candidates: Candidates,
}

/// Resolves free text to a canonical brand.
pub struct ResolutionPipeline {
    store: Arc<ConfigStore>,
    tagger: Arc<dyn SpanTagger>,
    scorer: Arc<dyn SimilarityScorer>,
}

impl ResolutionPipeline {
    pub fn new(store: Arc<ConfigStore>, tagger: Arc<dyn SpanTagger>) -> Self {
        Self { store, tagger, scorer: Arc::new(WordRatio) }
    }

    /// Replace the approximate alias scorer.
    pub fn with_scorer(mut self, scorer: Arc<dyn SimilarityScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Resolve `text` against the currently published config.
    ///
    /// The snapshot is taken once, so a concurrent reload never changes the
    /// config halfway through a request.
    pub fn resolve(&self, text: &str) -> Result<ExtractionResult, ResolveError> {
        let config = self.store.snapshot();
        self.resolve_with(&config, text)
    }

    /// Resolve `text` against an explicit config snapshot.
    pub fn resolve_with(
        &self,
        config: &BrandConfig,
        text: &str,
    ) -> Result<ExtractionResult, ResolveError> {
        if text.trim().is_empty() {
            return Ok(ExtractionResult::none());
        }

        let mut run = Run {
            config,
            text,
            aliases: AliasResolver::new(config, self.scorer.as_ref()),
            candidates: Candidates::default(),
        };

        let mut stage = Stage::RegexHint;
        loop {
            match self.step(&mut run, stage)? {
                Step::Done(result) => {
                    tracing::debug!(
                        "resolved {:?} at stage {}: {:?} ({})",
                        text,
                        stage.name(),
                        result.brand,
                        result.method
                    );
                    return Ok(result);
                }
                Step::Next(next) => stage = next,
            }
        }
    }

    fn step(&self, run: &mut Run<'_>, stage: Stage) -> Result<Step, ResolveError> {
        let done_or = |result: Option<ExtractionResult>, next: Stage| match result {
            Some(result) => Step::Done(result),
            None => Step::Next(next),
        };

        Ok(match stage {
            Stage::RegexHint => done_or(regex_hint(run), Stage::Tag),
            Stage::Tag => {
                let spans = self.tagger.tag(run.text)?;
                tracing::debug!("tagger returned {} spans", spans.len());
                run.candidates = Candidates::select(spans);
                Step::Next(Stage::ProductAlias)
            }
            Stage::ProductAlias => done_or(product_alias(run), Stage::OrgSpan),
            Stage::OrgSpan => done_or(org_span(run), Stage::FullTextAlias),
            Stage::FullTextAlias => done_or(full_text_alias(run), Stage::NoMatch),
            Stage::NoMatch => Step::Done(ExtractionResult::none()),
        })
    }
}

fn regex_hint(run: &Run<'_>) -> Option<ExtractionResult> {
    let brand = PatternMatcher::new(run.config).find(run.text)?;
    Some(ExtractionResult::found(brand, None, confidence::REGEX_HINT, Method::RegexHint))
}

/// A span is usable when it clears the tagger threshold.
fn confident<'s>(span: Option<&'s Span>, run: &Run<'_>) -> Option<&'s Span> {
    span.filter(|s| s.score >= run.config.thresholds().ner_min_conf)
}

fn product_alias(run: &Run<'_>) -> Option<ExtractionResult> {
    let span = confident(run.candidates.product.as_ref(), run)?;
    let brand = run.aliases.resolve(&span.text).or_else(|| run.aliases.resolve(run.text))?;
    Some(ExtractionResult::found(
        brand,
        Some(&span.text),
        round_score(span.score),
        Method::NerProductAlias,
    ))
}

/// Unrecognized organizations are still reported, title-cased.
fn org_span(run: &Run<'_>) -> Option<ExtractionResult> {
    let span = confident(run.candidates.org.as_ref(), run)?;
    let brand = match run.aliases.resolve(&span.text) {
        Some(brand) => brand.to_string(),
        None => title_case(&span.text),
    };
    Some(ExtractionResult::found(&brand, Some(&span.text), round_score(span.score), Method::NerOrg))
}

fn full_text_alias(run: &Run<'_>) -> Option<ExtractionResult> {
    let brand = run.aliases.resolve(run.text)?;
    Some(ExtractionResult::found(brand, None, confidence::ALIAS_ONLY, Method::AliasOnly))
}

/// Uppercase the first letter of each run of letters, lowercase the rest.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for c in s.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
#[path = "pipeline_tests.rs"]
mod tests;
