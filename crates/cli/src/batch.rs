// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Batch resolution of a prompts CSV.
//!
//! Reads `id,timestamp,text` rows, resolves them in parallel, and appends
//! one flat CSV record and one JSON line per row, in input order. A row
//! whose tagging fails is recorded with method `error` and does not stop
//! the run.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::Context;
use chrono::{SecondsFormat, Utc};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::pipeline::{ExtractionResult, ResolutionPipeline};

/// Column order of the output CSV.
pub const OUTPUT_FIELDS: [&str; 8] =
    ["id", "timestamp", "text", "brand", "surface", "confidence", "method", "error"];

/// Prompts written by `--sample` when the input file is missing.
pub const SAMPLE_PROMPTS: [(&str, &str, &str); 3] = [
    ("1", "2025-10-20T10:00:00Z", "battery life of galaxy fold 5"),
    ("2", "2025-10-20T10:05:00Z", "lg tv features and specifications"),
    ("3", "2025-10-20T10:10:00Z", "compare iphone 15 pro vs pixel 9"),
];

/// File locations for a batch run.
#[derive(Debug, Clone)]
pub struct BatchPaths {
    pub input: PathBuf,
    pub output: PathBuf,
    pub jsonl: PathBuf,
}

/// Counts reported after a batch run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    pub processed: usize,
    pub errors: usize,
}

/// One input row. Missing columns read as empty.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PromptRow {
    pub id: String,
    pub timestamp: String,
    pub text: String,
}

/// Result of one row: a resolution, or the error that prevented it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowResult {
    pub brand: Option<String>,
    pub surface: Option<String>,
    pub confidence: f64,
    pub method: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<ExtractionResult> for RowResult {
    fn from(r: ExtractionResult) -> Self {
        Self {
            brand: r.brand,
            surface: r.surface,
            confidence: r.confidence,
            method: r.method.to_string(),
            error: None,
        }
    }
}

impl RowResult {
    pub fn failed(error: impl ToString) -> Self {
        Self {
            brand: None,
            surface: None,
            confidence: 0.0,
            method: "error".to_string(),
            error: Some(error.to_string()),
        }
    }
}

/// A processed row, ready to write.
#[derive(Debug, Clone)]
pub struct ProcessedRow {
    pub id: String,
    pub timestamp: String,
    pub text: String,
    pub result: RowResult,
}

#[derive(Serialize)]
struct CsvRecord<'a> {
    id: &'a str,
    timestamp: &'a str,
    text: &'a str,
    brand: Option<&'a str>,
    surface: Option<&'a str>,
    confidence: f64,
    method: &'a str,
    error: Option<&'a str>,
}

#[derive(Serialize)]
struct JsonlRecord<'a> {
    id: &'a str,
    timestamp: &'a str,
    text: &'a str,
    result: &'a RowResult,
}

/// Write the sample prompts to `path` unless it exists. Returns true if written.
pub fn ensure_sample_input(path: &Path) -> anyhow::Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create {}", path.display()))?;
    writer.write_record(["id", "timestamp", "text"])?;
    for (id, timestamp, text) in SAMPLE_PROMPTS {
        writer.write_record([id, timestamp, text])?;
    }
    writer.flush()?;
    Ok(true)
}

/// Read all prompt rows from a CSV file with a header line.
pub fn read_prompts(path: &Path) -> anyhow::Result<Vec<PromptRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("failed to open {}", path.display()))?;

    reader
        .deserialize::<PromptRow>()
        .enumerate()
        .map(|(i, row)| row.with_context(|| format!("{}: bad row {}", path.display(), i + 1)))
        .collect()
}

/// Resolve rows in parallel, keeping input order.
///
/// Each row gets the staleness check a single request would, so a config
/// edited mid-run is picked up by later rows.
pub fn process_rows(pipeline: &ResolutionPipeline, rows: &[PromptRow]) -> Vec<ProcessedRow> {
    rows.par_iter()
        .enumerate()
        .map(|(i, row)| {
            pipeline.store().maybe_reload();
            let id = if row.id.is_empty() { (i + 1).to_string() } else { row.id.clone() };
            let timestamp = if row.timestamp.is_empty() {
                Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
            } else {
                row.timestamp.clone()
            };
            let result = match pipeline.resolve(&row.text) {
                Ok(result) => RowResult::from(result),
                Err(e) => {
                    tracing::warn!("row {}: {}", id, e);
                    RowResult::failed(e)
                }
            };
            ProcessedRow { id, timestamp, text: row.text.clone(), result }
        })
        .collect()
}

/// Append processed rows to the CSV and JSONL outputs.
pub fn write_outputs(paths: &BatchPaths, rows: &[ProcessedRow]) -> anyhow::Result<()> {
    let csv_is_new = !paths.output.exists();
    let csv_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&paths.output)
        .with_context(|| format!("failed to open {}", paths.output.display()))?;
    let mut csv_writer = csv::WriterBuilder::new().has_headers(false).from_writer(csv_file);
    if csv_is_new {
        csv_writer.write_record(OUTPUT_FIELDS)?;
    }

    let jsonl_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&paths.jsonl)
        .with_context(|| format!("failed to open {}", paths.jsonl.display()))?;
    let mut jsonl = BufWriter::new(jsonl_file);

    for row in rows {
        csv_writer.serialize(CsvRecord {
            id: &row.id,
            timestamp: &row.timestamp,
            text: &row.text,
            brand: row.result.brand.as_deref(),
            surface: row.result.surface.as_deref(),
            confidence: row.result.confidence,
            method: &row.result.method,
            error: row.result.error.as_deref(),
        })?;

        let line = serde_json::to_string(&JsonlRecord {
            id: &row.id,
            timestamp: &row.timestamp,
            text: &row.text,
            result: &row.result,
        })?;
        writeln!(jsonl, "{line}")?;
    }

    csv_writer.flush()?;
    jsonl.flush()?;
    Ok(())
}

/// Run a whole batch: read, resolve, append.
pub fn run(pipeline: &ResolutionPipeline, paths: &BatchPaths) -> anyhow::Result<BatchSummary> {
    let rows = read_prompts(&paths.input)?;
    let processed = process_rows(pipeline, &rows);
    write_outputs(paths, &processed)?;

    let errors = processed.iter().filter(|r| r.result.error.is_some()).count();
    Ok(BatchSummary { processed: processed.len(), errors })
}

#[cfg(test)]
#[path = "batch_tests.rs"]
mod tests;
