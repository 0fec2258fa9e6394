// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tagger backed by an external process.
//!
//! The command receives the raw text on stdin and prints a JSON array of
//! spans on stdout, e.g. the aggregated output of a token-classification
//! model:
//!
//! ```json
//! [{"entity_group": "ORG", "word": "Samsung", "score": 0.98}]
//! ```
//!
//! `category` and `text` are accepted in place of `entity_group` and `word`.

use std::io::{self, Write};
use std::process::{Command, Stdio};

use serde::Deserialize;

use super::{Category, Span, SpanTagger};
use crate::error::TaggingError;

/// Runs an external program once per request.
#[derive(Debug, Clone)]
pub struct CommandTagger {
    program: String,
    args: Vec<String>,
}

impl CommandTagger {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self { program: program.into(), args }
    }

    /// Build from a whitespace-separated command line. Returns None if blank.
    pub fn from_command_line(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace().map(String::from);
        let program = parts.next()?;
        Some(Self::new(program, parts.collect()))
    }

    pub fn program(&self) -> &str {
        &self.program
    }
}

impl SpanTagger for CommandTagger {
    fn tag(&self, text: &str) -> Result<Vec<Span>, TaggingError> {
        let process_err =
            |source| TaggingError::Process { program: self.program.clone(), source };

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(process_err)?;

        // Feed stdin on a second thread while this one drains stdout and stderr.
        let stdin = child.stdin.take();
        let (output, written) = std::thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut stdin) => stdin.write_all(text.as_bytes()),
                None => Ok(()),
            });
            let output = child.wait_with_output();
            let written = writer
                .join()
                .unwrap_or_else(|_| Err(io::Error::other("stdin writer panicked")));
            (output, written)
        });

        let output = output.map_err(process_err)?;
        if !output.status.success() {
            return Err(TaggingError::Exit {
                program: self.program.clone(),
                status: output.status.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }
        written.or_else(allow_unread_input).map_err(process_err)?;

        parse_spans(&output.stdout)
    }
}

/// A tagger may exit successfully without reading all of its input.
fn allow_unread_input(e: io::Error) -> io::Result<()> {
    match e.kind() {
        io::ErrorKind::BrokenPipe => Ok(()),
        _ => Err(e),
    }
}

#[derive(Debug, Deserialize)]
struct RawSpan {
    #[serde(alias = "category")]
    entity_group: String,
    #[serde(alias = "text")]
    word: String,
    score: f64,
}

/// Parse a JSON span list, clamping scores into [0, 1].
pub fn parse_spans(bytes: &[u8]) -> Result<Vec<Span>, TaggingError> {
    let raw: Vec<RawSpan> =
        serde_json::from_slice(bytes).map_err(|e| TaggingError::Malformed(e.to_string()))?;

    raw.into_iter()
        .map(|s| {
            if !s.score.is_finite() {
                return Err(TaggingError::Malformed(format!(
                    "non-finite score for span {:?}",
                    s.word
                )));
            }
            Ok(Span {
                text: s.word,
                category: Category::from_label(&s.entity_group),
                score: s.score.clamp(0.0, 1.0),
            })
        })
        .collect()
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
