// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Brand configuration loading and validation.
//!
//! A [`BrandConfig`] is an immutable snapshot. Reloading produces a new
//! instance; nothing mutates a config after [`parse`] returns it.

pub mod defaults;
pub mod template;

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use crate::alias::normalize;
use crate::error::ConfigError;

/// A hand-authored pattern rule mapping directly to a canonical brand.
#[derive(Debug, Clone)]
pub struct RegexHint {
    pub pattern: Regex,
    pub brand: String,
}

/// Score thresholds applied by the resolution stages.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Minimum tagger span score, in [0, 1].
    pub ner_min_conf: f64,
    /// Minimum approximate alias score, in [0, 100].
    pub fuzzy_min_score: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            ner_min_conf: defaults::thresholds::NER_MIN_CONF,
            fuzzy_min_score: defaults::thresholds::FUZZY_MIN_SCORE,
        }
    }
}

/// Published brand configuration.
#[derive(Debug, Clone, Default)]
pub struct BrandConfig {
    brands: BTreeSet<String>,
    aliases: BTreeMap<String, String>,
    regex_hints: Vec<RegexHint>,
    thresholds: Thresholds,
}

impl BrandConfig {
    /// Canonical brand names declared under `brands`.
    pub fn brands(&self) -> &BTreeSet<String> {
        &self.brands
    }

    /// Normalized alias -> canonical brand, ordered by key.
    pub fn aliases(&self) -> &BTreeMap<String, String> {
        &self.aliases
    }

    /// Pattern hints in declared order.
    pub fn regex_hints(&self) -> &[RegexHint] {
        &self.regex_hints
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Canonical names referenced by aliases or hints but absent from `brands`.
    ///
    /// Always empty when `brands` itself is empty.
    pub fn undeclared_brands(&self) -> BTreeSet<&str> {
        if self.brands.is_empty() {
            return BTreeSet::new();
        }
        self.aliases
            .values()
            .chain(self.regex_hints.iter().map(|h| &h.brand))
            .filter(|b| !self.brands.contains(*b))
            .map(String::as_str)
            .collect()
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    brands: Vec<String>,
    aliases: Mapping,
    regex_hints: Vec<RawHint>,
    thresholds: RawThresholds,
}

#[derive(Debug, Default, Deserialize)]
struct RawHint {
    pattern: Option<String>,
    brand: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
struct RawThresholds {
    ner_min_conf: f64,
    fuzzy_min_score: f64,
}

impl Default for RawThresholds {
    fn default() -> Self {
        let t = Thresholds::default();
        Self { ner_min_conf: t.ner_min_conf, fuzzy_min_score: t.fuzzy_min_score }
    }
}

/// Load and parse a brand configuration file.
pub fn load(path: &Path) -> Result<BrandConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::from_io(path, e))?;
    parse(&content, path)
}

/// Parse a YAML (or JSON) brand configuration document.
///
/// An empty document yields an empty configuration with default thresholds.
pub fn parse(content: &str, path: &Path) -> Result<BrandConfig, ConfigError> {
    let root: Value =
        serde_yaml::from_str(content).map_err(|e| ConfigError::parse(path, e.to_string()))?;

    let root = match root {
        Value::Null => Value::Mapping(Mapping::new()),
        Value::Mapping(_) => root,
        other => {
            return Err(ConfigError::parse(
                path,
                format!("expected a mapping at the document root, found {}", value_kind(&other)),
            ));
        }
    };

    let raw: RawConfig =
        serde_yaml::from_value(root).map_err(|e| ConfigError::parse(path, e.to_string()))?;

    let aliases = parse_aliases(raw.aliases, path)?;
    let regex_hints = parse_hints(raw.regex_hints, path)?;
    let thresholds = parse_thresholds(&raw.thresholds, path)?;

    let config = BrandConfig {
        brands: raw.brands.into_iter().collect(),
        aliases,
        regex_hints,
        thresholds,
    };

    for brand in config.undeclared_brands() {
        tracing::warn!("{}: brand {:?} is referenced but not listed in `brands`", path.display(), brand);
    }

    Ok(config)
}

/// Normalize alias keys. Later entries win when two keys normalize alike.
fn parse_aliases(raw: Mapping, path: &Path) -> Result<BTreeMap<String, String>, ConfigError> {
    let mut aliases = BTreeMap::new();
    for (key, value) in raw {
        let (Value::String(key), Value::String(brand)) = (&key, &value) else {
            return Err(ConfigError::parse(
                path,
                format!(
                    "aliases: expected string -> string, found {} -> {}",
                    value_kind(&key),
                    value_kind(&value)
                ),
            ));
        };
        if brand.trim().is_empty() {
            return Err(ConfigError::parse(path, format!("aliases: empty brand for {key:?}")));
        }
        let normalized = normalize(key);
        if normalized.is_empty() {
            tracing::warn!("{}: ignoring blank alias for {:?}", path.display(), brand);
            continue;
        }
        if let Some(previous) = aliases.insert(normalized, brand.clone()) {
            tracing::debug!("alias {:?} redefined: {:?} -> {:?}", key, previous, brand);
        }
    }
    Ok(aliases)
}

fn parse_hints(raw: Vec<RawHint>, path: &Path) -> Result<Vec<RegexHint>, ConfigError> {
    raw.into_iter()
        .enumerate()
        .map(|(i, hint)| {
            let pattern = hint.pattern.ok_or_else(|| {
                ConfigError::parse(path, format!("regex_hints[{i}]: missing `pattern`"))
            })?;
            let brand = hint.brand.ok_or_else(|| {
                ConfigError::parse(path, format!("regex_hints[{i}]: missing `brand`"))
            })?;
            if brand.trim().is_empty() {
                return Err(ConfigError::parse(path, format!("regex_hints[{i}]: empty `brand`")));
            }
            let pattern = RegexBuilder::new(&pattern).case_insensitive(true).build().map_err(|e| {
                ConfigError::parse(path, format!("regex_hints[{i}]: invalid pattern: {e}"))
            })?;
            Ok(RegexHint { pattern, brand })
        })
        .collect()
}

fn parse_thresholds(raw: &RawThresholds, path: &Path) -> Result<Thresholds, ConfigError> {
    if !(0.0..=1.0).contains(&raw.ner_min_conf) {
        return Err(ConfigError::parse(
            path,
            format!("thresholds.ner_min_conf must be in [0, 1], got {}", raw.ner_min_conf),
        ));
    }
    if !(0.0..=100.0).contains(&raw.fuzzy_min_score) {
        return Err(ConfigError::parse(
            path,
            format!("thresholds.fuzzy_min_score must be in [0, 100], got {}", raw.fuzzy_min_score),
        ));
    }
    Ok(Thresholds { ner_min_conf: raw.ner_min_conf, fuzzy_min_score: raw.fuzzy_min_score })
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
