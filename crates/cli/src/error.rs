// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for config loading, tagging, and resolution.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load or publish a brand configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration source does not exist.
    #[error("config not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The document exists but is not a valid brand configuration.
    #[error("invalid config {}: {message}", path.display())]
    Parse { path: PathBuf, message: String },

    /// Any other I/O failure while reading the source.
    #[error("failed to read config {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    pub(crate) fn parse(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        ConfigError::Parse { path: path.into(), message: message.into() }
    }

    /// Map an I/O error, promoting `NotFound` to [`ConfigError::NotFound`].
    pub(crate) fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            ConfigError::NotFound { path }
        } else {
            ConfigError::Io { path, source }
        }
    }
}

/// The external span tagger could not produce spans.
#[derive(Debug, Error)]
pub enum TaggingError {
    #[error("failed to run tagger `{program}`: {source}")]
    Process {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("tagger `{program}` exited with {status}: {stderr}")]
    Exit { program: String, status: String, stderr: String },

    #[error("tagger returned malformed spans: {0}")]
    Malformed(String),
}

/// Failure of a single resolution request.
#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("tagging unavailable: {0}")]
    TaggingUnavailable(#[from] TaggingError),
}
