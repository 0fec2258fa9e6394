// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Published brand configuration with hot reload.
//!
//! The store holds one `Arc<BrandConfig>` behind a lock. Readers clone the
//! `Arc` and work from that snapshot for the whole request; a reload builds
//! a complete new config before swapping the pointer, so no reader ever sees
//! a mix of old and new data.

use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use std::time::SystemTime;

use crate::config::{self, BrandConfig};
use crate::error::ConfigError;

#[derive(Debug)]
struct Published {
    config: Arc<BrandConfig>,
    /// Modification time of the source when `config` was read.
    modified: Option<SystemTime>,
    /// Modification time of the last source that failed to load.
    rejected: Option<SystemTime>,
}

impl Published {
    fn new(config: Arc<BrandConfig>, modified: Option<SystemTime>) -> Self {
        Self { config, modified, rejected: None }
    }
}

/// Process-wide holder of the current brand configuration.
#[derive(Debug)]
pub struct ConfigStore {
    path: PathBuf,
    published: RwLock<Published>,
}

impl ConfigStore {
    /// Load the config at `path` and publish it.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        let path = path.into();
        let (config, modified) = read_source(&path)?;
        tracing::debug!("loaded config {}", path.display());
        Ok(Self {
            path,
            published: RwLock::new(Published::new(Arc::new(config), modified)),
        })
    }

    /// Publish an in-memory config without reading `path`.
    ///
    /// The next staleness check replaces it as soon as a file exists at `path`.
    pub fn from_config(path: impl Into<PathBuf>, config: BrandConfig) -> Self {
        Self {
            path: path.into(),
            published: RwLock::new(Published::new(Arc::new(config), None)),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The currently published snapshot.
    pub fn snapshot(&self) -> Arc<BrandConfig> {
        Arc::clone(&self.published.read().unwrap_or_else(PoisonError::into_inner).config)
    }

    /// Reload if the source changed since it was last read.
    ///
    /// Never fails: a missing source or a bad document leaves the last good
    /// snapshot in place. A rejected document is not read again until its
    /// modification time changes. Returns whether a new config was published.
    pub fn maybe_reload(&self) -> bool {
        let modified = match std::fs::metadata(&self.path).and_then(|m| m.modified()) {
            Ok(modified) => modified,
            Err(e) => {
                tracing::debug!("config {} unavailable ({}), keeping snapshot", self.path.display(), e);
                return false;
            }
        };

        let stale = {
            let published = self.published.read().unwrap_or_else(PoisonError::into_inner);
            published.rejected != Some(modified)
                && published.modified.is_none_or(|seen| modified > seen)
        };
        if !stale {
            return false;
        }

        match read_source(&self.path) {
            Ok((config, modified)) => {
                self.publish(config, modified);
                true
            }
            Err(e) => {
                tracing::warn!("ignoring config change: {}", e);
                self.published.write().unwrap_or_else(PoisonError::into_inner).rejected =
                    Some(modified);
                false
            }
        }
    }

    /// Reload unconditionally.
    ///
    /// On failure the error is returned and the previous snapshot stays
    /// published.
    pub fn reload(&self) -> Result<Arc<BrandConfig>, ConfigError> {
        let (config, modified) = read_source(&self.path)?;
        Ok(self.publish(config, modified))
    }

    fn publish(&self, config: BrandConfig, modified: Option<SystemTime>) -> Arc<BrandConfig> {
        let config = Arc::new(config);
        let mut published = self.published.write().unwrap_or_else(PoisonError::into_inner);
        *published = Published::new(Arc::clone(&config), modified);
        tracing::info!(
            "published config {} ({} aliases, {} hints)",
            self.path.display(),
            config.aliases().len(),
            config.regex_hints().len()
        );
        config
    }
}

/// Read the source's mtime before its content, so a write racing with the
/// read is picked up again by the next staleness check.
fn read_source(path: &Path) -> Result<(BrandConfig, Option<SystemTime>), ConfigError> {
    let modified = std::fs::metadata(path)
        .map_err(|e| ConfigError::from_io(path, e))?
        .modified()
        .ok();
    let config = config::load(path)?;
    Ok((config, modified))
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
