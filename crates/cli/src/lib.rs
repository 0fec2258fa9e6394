// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolve free-text product and marketing queries to canonical brands.
//!
//! A [`ResolutionPipeline`] combines hand-authored regex hints, an external
//! entity tagger, and alias matching against a hot-reloadable
//! [`ConfigStore`].

pub mod alias;
pub mod batch;
pub mod cli;
pub mod color;
pub mod config;
pub mod error;
pub mod logging;
pub mod pattern;
pub mod pipeline;
pub mod report;
pub mod scorer;
pub mod store;
pub mod tagger;

#[cfg(test)]
pub mod test_utils;

pub use config::BrandConfig;
pub use error::{ConfigError, ResolveError, TaggingError};
pub use pipeline::{ExtractionResult, Method, ResolutionPipeline, Stage};
pub use store::ConfigStore;
