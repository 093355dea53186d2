// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Dense reference implementations.
//!
//! Slow and direct: a full-width vector per document, no index tricks. The
//! differential tests trust these over the library.

use jobmatch::{tokenize, TokenizerOptions};
use std::collections::BTreeSet;

/// Cosine score of every candidate against the query, in input order.
pub fn oracle_scores(query: &str, candidates: &[&str], options: &TokenizerOptions) -> Vec<f64> {
    let docs: Vec<Vec<String>> = std::iter::once(query)
        .chain(candidates.iter().copied())
        .map(|text| tokenize(text, options))
        .collect();

    let terms: Vec<String> = docs
        .iter()
        .flatten()
        .cloned()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect();

    let total = docs.len() as f64;
    let idf: Vec<f64> = terms
        .iter()
        .map(|term| {
            let df = docs.iter().filter(|d| d.contains(term)).count() as f64;
            ((1.0 + total) / (1.0 + df)).ln() + 1.0
        })
        .collect();

    let vectors: Vec<Vec<f64>> = docs
        .iter()
        .map(|doc| {
            let mut v: Vec<f64> = terms
                .iter()
                .zip(&idf)
                .map(|(term, w)| {
                    if doc.is_empty() {
                        0.0
                    } else {
                        let count = doc.iter().filter(|t| *t == term).count() as f64;
                        count / doc.len() as f64 * w
                    }
                })
                .collect();
            let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
            if norm > 0.0 {
                v.iter_mut().for_each(|x| *x /= norm);
            }
            v
        })
        .collect();

    let query_vec = &vectors[0];
    vectors[1..]
        .iter()
        .map(|v| {
            let dot: f64 = query_vec.iter().zip(v).map(|(a, b)| a * b).sum();
            dot.clamp(0.0, 1.0)
        })
        .collect()
}
