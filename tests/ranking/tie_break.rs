// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Equal scores keep the caller's candidate order.

use crate::common::{assert_well_ranked, ids, numbered_corpus};
use jobmatch::rank;

#[test]
fn test_identical_candidates_keep_input_order() {
    let corpus = numbered_corpus(&["rust sql", "rust sql", "rust sql"]);
    let ranked = rank("rust sql", &corpus, 3);
    assert_eq!(ids(&ranked), vec!["c0", "c1", "c2"]);
    assert_eq!(ranked[0].score, ranked[2].score);
}

#[test]
fn test_ties_interleaved_with_distinct_scores() {
    let corpus = numbered_corpus(&["cobol", "rust", "fortran", "rust", "pascal"]);
    let ranked = rank("rust", &corpus, 5);
    assert_eq!(ids(&ranked), vec!["c1", "c3", "c0", "c2", "c4"]);
    assert_well_ranked(&ranked, 5, 5);
}

#[test]
fn test_truncation_cuts_inside_a_tie() {
    let corpus = numbered_corpus(&["zig", "zig", "zig", "zig"]);
    let ranked = rank("zig", &corpus, 2);
    assert_eq!(ids(&ranked), vec!["c0", "c1"]);
    assert!(ranked[0].score > 0.0);
    assert_eq!(ranked[0].score, ranked[1].score);
}

#[test]
fn test_reordering_input_reorders_ties_only() {
    let forward = numbered_corpus(&["zig", "zig"]);
    let ranked = rank("zig", &forward, 2);
    assert_eq!(ranked[0].position, 0);

    let mut reversed = forward.clone();
    reversed.reverse();
    let ranked = rank("zig", &reversed, 2);
    assert_eq!(ids(&ranked), vec!["c1", "c0"]);
}
