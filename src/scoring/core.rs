// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind a match score.
//!
//! Both vectors are L2-normalized with non-negative weights, so the cosine is
//! just their dot product and already lives in `[0, 1]`. Floating-point drift
//! can push a self-match to `1.0000000000000002` or `0.9999999999999999`.
//! Identical vectors short-circuit to exactly 1.0 and the clamp absorbs any
//! remaining drift, so the bounds hold exactly.
//!
//! # Key Invariants
//!
//! ```text
//! 0.0 <= cosine(a, b) <= 1.0
//! cosine(a, b) == 0.0   when a or b is all-zero
//! cosine(a, b) == 0.0   when a and b share no term
//! cosine(a, a) == 1.0   when a is non-zero
//! ```

use crate::tfidf::SparseVector;

/// Lowest possible score: no shared terms, or an empty side.
pub const MIN_SCORE: f64 = 0.0;

/// Highest possible score: identical term distributions.
pub const MAX_SCORE: f64 = 1.0;

/// Cosine similarity of two L2-normalized vectors.
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    if a.is_zero() || b.is_zero() {
        return MIN_SCORE;
    }
    if a.entries() == b.entries() {
        return MAX_SCORE;
    }
    a.dot(b).clamp(MIN_SCORE, MAX_SCORE)
}
