// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Retrying wrapper around another tagger.
//!
//! The pipeline itself never retries; callers that want retries wrap their
//! tagger in [`RetryTagger`].

use std::sync::Arc;
use std::time::Duration;

use super::{Span, SpanTagger};
use crate::error::TaggingError;

/// Retries failed tag calls with exponential backoff.
pub struct RetryTagger {
    inner: Arc<dyn SpanTagger>,
    retries: u32,
    backoff: Duration,
}

impl RetryTagger {
    /// Retry up to `retries` times, sleeping `backoff * 2^attempt` between tries.
    pub fn new(inner: Arc<dyn SpanTagger>, retries: u32, backoff: Duration) -> Self {
        Self { inner, retries, backoff }
    }

    fn delay(&self, attempt: u32) -> Duration {
        self.backoff.saturating_mul(2u32.saturating_pow(attempt))
    }
}

impl SpanTagger for RetryTagger {
    fn tag(&self, text: &str) -> Result<Vec<Span>, TaggingError> {
        let mut attempt = 0;
        loop {
            match self.inner.tag(text) {
                Ok(spans) => return Ok(spans),
                Err(e) if attempt < self.retries => {
                    let delay = self.delay(attempt);
                    tracing::debug!("tagger failed ({}), retrying in {:?}", e, delay);
                    std::thread::sleep(delay);
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

#[cfg(test)]
#[path = "retry_tests.rs"]
mod tests;
