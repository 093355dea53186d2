// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Term weights and sparse vectors.
//!
//! # Formulas
//!
//! ```text
//! tf(t, d)  = count(t, d) / |d|                 (0 when |d| = 0)
//! idf(t)    = ln((1 + D) / (1 + df(t))) + 1     (always > 0)
//! w(t, d)   = tf(t, d) * idf(t)
//! v(d)      = w(·, d) / ||w(·, d)||₂             (all-zero when the norm is 0)
//! ```
//!
//! Every weight is non-negative, so the dot product of two normalized vectors
//! lands in `[0, 1]`.

use std::collections::BTreeMap;

use super::vocabulary::Vocabulary;

/// Smoothed inverse document frequency.
///
/// The `+1` inside the log acts as one extra document containing every term,
/// so `doc_freq == total_docs` still yields `idf == 1.0` rather than zero.
pub fn idf(total_docs: usize, doc_freq: usize) -> f64 {
    ((1.0 + total_docs as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
}

/// IDF for every vocabulary term, indexed like the vocabulary.
pub fn idf_table(vocabulary: &Vocabulary) -> Vec<f64> {
    (0..vocabulary.len())
        .map(|i| idf(vocabulary.total_docs(), vocabulary.doc_freq(i)))
        .collect()
}

/// Raw count / token count for each vocabulary term in a document.
///
/// Returned sparse, sorted by term index. Tokens missing from the vocabulary
/// are ignored (cannot happen when the vocabulary was built from this document).
pub fn term_frequencies(tokens: &[String], vocabulary: &Vocabulary) -> Vec<(usize, f64)> {
    if tokens.is_empty() {
        return Vec::new();
    }
    let mut counts: BTreeMap<usize, usize> = BTreeMap::new();
    for token in tokens {
        if let Some(idx) = vocabulary.index_of(token) {
            *counts.entry(idx).or_insert(0) += 1;
        }
    }
    let total = tokens.len() as f64;
    counts
        .into_iter()
        .map(|(idx, count)| (idx, count as f64 / total))
        .collect()
}

/// A sparse vector over vocabulary indices. Entries are sorted by index and
/// never repeat an index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Wrap entries that are already sorted by index with no duplicates.
    pub fn from_sorted(entries: Vec<(usize, f64)>) -> Self {
        debug_assert!(
            entries.windows(2).all(|w| w[0].0 < w[1].0),
            "sparse entries must be strictly sorted by index"
        );
        SparseVector { entries }
    }

    /// TF-IDF vector for one tokenized document, L2-normalized.
    pub fn tfidf(tokens: &[String], vocabulary: &Vocabulary, idf: &[f64]) -> Self {
        let entries = term_frequencies(tokens, vocabulary)
            .into_iter()
            .map(|(idx, tf)| (idx, tf * idf[idx]))
            .collect();
        let mut vector = SparseVector::from_sorted(entries);
        vector.l2_normalize();
        vector
    }

    pub fn entries(&self) -> &[(usize, f64)] {
        &self.entries
    }

    pub fn get(&self, idx: usize) -> f64 {
        self.entries
            .binary_search_by_key(&idx, |&(i, _)| i)
            .map(|pos| self.entries[pos].1)
            .unwrap_or(0.0)
    }

    pub fn norm(&self) -> f64 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    pub fn is_zero(&self) -> bool {
        self.entries.iter().all(|&(_, w)| w == 0.0)
    }

    /// Scale to unit length. A zero vector stays zero.
    pub fn l2_normalize(&mut self) {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
    }

    /// Sparse dot product: merge-walk the two sorted entry lists.
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let (a, b) = (&self.entries, &other.entries);
        let mut sum = 0.0;
        while i < a.len() && j < b.len() {
            match a[i].0.cmp(&b[j].0) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a[i].1 * b[j].1;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }
}
