// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how scored candidates get sorted and cut.
//!
//! Sort order:
//! 1. **Score** - descending
//! 2. **Input position** - ascending, so equal scores keep the caller's order
//!
//! The position tie-breaker makes the comparator a total order over distinct
//! candidates, so the output never depends on sort stability or thread timing.

use crate::types::ScoredCandidate;
use std::cmp::Ordering;

/// Compare two scored candidates for ranking. `Less` means `a` ranks first.
pub fn compare_scored(a: &ScoredCandidate, b: &ScoredCandidate) -> Ordering {
    match b.score.total_cmp(&a.score) {
        Ordering::Equal => a.position.cmp(&b.position),
        ord => ord,
    }
}

/// Sort by `compare_scored` and keep the first `top_k`.
pub fn top_k(mut scored: Vec<ScoredCandidate>, top_k: usize) -> Vec<ScoredCandidate> {
    scored.sort_by(compare_scored);
    scored.truncate(top_k);
    scored
}
