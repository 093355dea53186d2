// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the ranking core.
//!
//! Debug-mode assertions for the properties every ranking call must satisfy.
//! They compile to nothing in release builds.
//!
//! | Contract                 | Property                                        |
//! |--------------------------|-------------------------------------------------|
//! | `check_unit_or_zero`     | every vector has norm 1 or is all-zero          |
//! | `check_score_bounds`     | `0 <= score <= 1`, never NaN                    |
//! | `check_ranked`           | descending scores, position tie-break, top-K    |

use crate::tfidf::SparseVector;
use crate::types::ScoredCandidate;

const NORM_TOLERANCE: f64 = 1e-9;

/// A document vector is unit length, or zero when the document had no terms.
#[inline]
pub fn check_unit_or_zero(vector: &SparseVector) {
    debug_assert!(
        vector.is_zero() || (vector.norm() - 1.0).abs() < NORM_TOLERANCE,
        "vector norm {} is neither 0 nor 1",
        vector.norm()
    );
}

/// Scores stay in `[0, 1]`.
#[inline]
pub fn check_score_bounds(score: f64) {
    debug_assert!(
        (0.0..=1.0).contains(&score),
        "score {} outside [0, 1]",
        score
    );
}

/// Ranked output is sorted, tie-broken by position, and cut at `min(top_k, n)`.
#[inline]
pub fn check_ranked(ranked: &[ScoredCandidate], top_k: usize, candidate_count: usize) {
    debug_assert_eq!(
        ranked.len(),
        top_k.min(candidate_count),
        "ranked length must be min(top_k, candidates)"
    );
    for pair in ranked.windows(2) {
        debug_assert!(
            pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score && pair[0].position < pair[1].position),
            "ranking out of order: {:?} before {:?}",
            pair[0],
            pair[1]
        );
    }
}
