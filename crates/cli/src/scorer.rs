// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Approximate string similarity for alias matching.
//!
//! The alias resolver only depends on [`SimilarityScorer`]; [`WordRatio`] is
//! the default implementation, a word-aware weighted ratio over the indel
//! (insertions and deletions only) similarity of two strings.

use std::collections::BTreeSet;

/// Scores how similar a query is to a candidate, on a 0-100 scale.
pub trait SimilarityScorer: Send + Sync {
    fn score(&self, query: &str, candidate: &str) -> f64;
}

/// Weighted ratio that tolerates typos, word reordering and extra words.
#[derive(Debug, Clone, Copy, Default)]
pub struct WordRatio;

impl SimilarityScorer for WordRatio {
    fn score(&self, query: &str, candidate: &str) -> f64 {
        weighted_ratio(query, candidate)
    }
}

/// Indel similarity, 0-100: `2 * lcs / (len_a + len_b)`.
///
/// A substitution costs two edits, so a single typo in a short word still
/// scores high. Two empty strings are identical.
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if total == 0 {
        return 100.0;
    }
    200.0 * lcs_len(&a, &b) as f64 / total as f64
}

/// Ratio after sorting whitespace tokens on both sides.
pub fn token_sort_ratio(a: &str, b: &str) -> f64 {
    ratio(&sorted_tokens(a), &sorted_tokens(b))
}

/// Ratio over shared tokens plus each side's remainder.
///
/// Returns 100 when one side's tokens are a subset of the other's.
pub fn token_set_ratio(a: &str, b: &str) -> f64 {
    let left: BTreeSet<&str> = a.split_whitespace().collect();
    let right: BTreeSet<&str> = b.split_whitespace().collect();

    let common: Vec<&str> = left.intersection(&right).copied().collect();
    let only_left: Vec<&str> = left.difference(&right).copied().collect();
    let only_right: Vec<&str> = right.difference(&left).copied().collect();

    if !common.is_empty() && (only_left.is_empty() || only_right.is_empty()) {
        return 100.0;
    }

    let sect = common.join(" ");
    let combined_left = join_nonempty(&sect, &only_left.join(" "));
    let combined_right = join_nonempty(&sect, &only_right.join(" "));

    ratio(&sect, &combined_left)
        .max(ratio(&sect, &combined_right))
        .max(ratio(&combined_left, &combined_right))
}

/// Best ratio of the shorter string against same-length windows of the longer.
pub fn partial_ratio(a: &str, b: &str) -> f64 {
    let (short, long) = if a.chars().count() <= b.chars().count() { (a, b) } else { (b, a) };
    let short_len = short.chars().count();
    if short_len == 0 {
        return 0.0;
    }

    let long: Vec<char> = long.chars().collect();
    long.windows(short_len)
        .map(|w| ratio(short, &w.iter().collect::<String>()))
        .fold(0.0, f64::max)
}

/// Combine the individual ratios, weighting by how different the lengths are.
pub fn weighted_ratio(a: &str, b: &str) -> f64 {
    if a.trim().is_empty() || b.trim().is_empty() {
        return 0.0;
    }

    let len_a = a.chars().count() as f64;
    let len_b = b.chars().count() as f64;
    let len_ratio = len_a.max(len_b) / len_a.min(len_b);

    let base = ratio(a, b);
    if len_ratio < 1.5 {
        return base.max(token_sort_ratio(a, b) * 0.95).max(token_set_ratio(a, b) * 0.95);
    }

    let scale = if len_ratio < 8.0 { 0.9 } else { 0.6 };
    base.max(partial_ratio(a, b) * scale).max(token_set_ratio(a, b) * 0.95 * scale)
}

/// Longest common subsequence length, one row at a time.
fn lcs_len(a: &[char], b: &[char]) -> usize {
    let mut row = vec![0usize; b.len() + 1];
    for &ca in a {
        let mut diag = 0;
        for (j, &cb) in b.iter().enumerate() {
            let up = row[j + 1];
            row[j + 1] = if ca == cb { diag + 1 } else { up.max(row[j]) };
            diag = up;
        }
    }
    row[b.len()]
}

fn sorted_tokens(s: &str) -> String {
    let mut tokens: Vec<&str> = s.split_whitespace().collect();
    tokens.sort_unstable();
    tokens.join(" ")
}

fn join_nonempty(head: &str, tail: &str) -> String {
    match (head.is_empty(), tail.is_empty()) {
        (true, _) => tail.to_string(),
        (_, true) => head.to_string(),
        _ => format!("{head} {tail}"),
    }
}

#[cfg(test)]
#[path = "scorer_tests.rs"]
mod tests;
