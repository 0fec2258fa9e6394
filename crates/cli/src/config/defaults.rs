// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration and resolution.
//!
//! All default values are documented here for easy reference.
//! The loader and the pipeline stages read these constants rather than
//! repeating literals.

/// Default config file name, relative to the working directory.
pub const CONFIG_FILE: &str = "brands.yml";

/// Default confidence thresholds.
pub mod thresholds {
    /// Minimum tagger score for a span to be considered (0.70).
    pub const NER_MIN_CONF: f64 = 0.70;

    /// Minimum approximate-match score for an alias, on a 0-100 scale (86).
    pub const FUZZY_MIN_SCORE: f64 = 86.0;
}

/// Fixed confidences assigned by stages that have no model score.
pub mod confidence {
    /// Hand-authored pattern hints outrank statistical signals.
    pub const REGEX_HINT: f64 = 0.95;

    /// Whole-text alias fallback. Kept at or below any tagger score that
    /// cleared the default threshold.
    pub const ALIAS_ONLY: f64 = 0.70;

    /// Terminal "no match" result.
    pub const NONE: f64 = 0.0;
}

/// Round a model score to three decimal places for reporting.
pub fn round_score(score: f64) -> f64 {
    (score * 1000.0).round() / 1000.0
}
