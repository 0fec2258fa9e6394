//! Shared unit test utilities.
//!
//! Provides config fixtures and deterministic tagger stand-ins for unit
//! tests in the cli crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

use crate::config::{self, BrandConfig};
use crate::error::TaggingError;
use crate::pipeline::ResolutionPipeline;
use crate::store::ConfigStore;
use crate::tagger::{Category, Span, SpanTagger};

/// Parse an inline YAML config, panicking on error.
pub fn config_from(yaml: &str) -> BrandConfig {
    config::parse(yaml, Path::new("brands.yml")).unwrap()
}

/// Creates a temp directory containing `brands.yml` with the given content.
pub fn temp_config(content: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("brands.yml");
    fs::write(&path, content).unwrap();
    (dir, path)
}

/// Overwrite a file and force its mtime forward, so staleness checks see it
/// as newer regardless of filesystem timestamp resolution.
pub fn rewrite_newer(path: &Path, content: &str) {
    let previous = fs::metadata(path)
        .and_then(|m| m.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH);
    fs::write(path, content).unwrap();
    let file = fs::File::options().write(true).open(path).unwrap();
    file.set_modified(previous + Duration::from_secs(5)).unwrap();
}

/// Pipeline over an in-memory config and the given tagger.
pub fn pipeline_with(yaml: &str, tagger: Arc<dyn SpanTagger>) -> ResolutionPipeline {
    let store = ConfigStore::from_config("unused.yml", config_from(yaml));
    ResolutionPipeline::new(Arc::new(store), tagger)
}

/// Shorthand for building a span.
pub fn span(text: &str, category: Category, score: f64) -> Span {
    Span::new(text, category, score)
}

/// Tagger that returns the same spans for every text and counts calls.
#[derive(Default)]
pub struct StaticTagger {
    spans: Vec<Span>,
    calls: AtomicUsize,
}

impl StaticTagger {
    pub fn new(spans: Vec<Span>) -> Arc<Self> {
        Arc::new(Self { spans, calls: AtomicUsize::new(0) })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SpanTagger for StaticTagger {
    fn tag(&self, _text: &str) -> Result<Vec<Span>, TaggingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.spans.clone())
    }
}

/// Tagger that fails a fixed number of times, then returns no spans.
///
/// `usize::MAX` failures means it never succeeds.
pub struct FlakyTagger {
    failures: usize,
    calls: AtomicUsize,
}

impl FlakyTagger {
    pub fn new(failures: usize) -> Arc<Self> {
        Arc::new(Self { failures, calls: AtomicUsize::new(0) })
    }

    pub fn always_failing() -> Arc<Self> {
        Self::new(usize::MAX)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl SpanTagger for FlakyTagger {
    fn tag(&self, _text: &str) -> Result<Vec<Span>, TaggingError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            Err(TaggingError::Malformed("model unavailable".to_string()))
        } else {
            Ok(Vec::new())
        }
    }
}
