// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Inputs that must produce well-defined empty or zero results.

use crate::common::{assert_well_ranked, ids};
use jobmatch::{rank, rank_matches, MatchConfig};

#[test]
fn test_no_candidates_returns_empty_for_any_top_k() {
    let none: Vec<(String, String)> = Vec::new();
    for top_k in [1, 5, 100, 10_000] {
        assert!(rank("python", &none, top_k).is_empty());
    }
}

#[test]
fn test_all_stop_words_scores_zero() {
    let ranked = rank("the and of", &[("only", "the of")], 5);
    assert_eq!(ranked.len(), 1);
    assert_eq!(ranked[0].id, "only");
    assert_eq!(ranked[0].score, 0.0);
}

#[test]
fn test_empty_vocabulary_keeps_order_and_applies_top_k() {
    let candidates = [("a", ""), ("b", "the"), ("c", "!!!"), ("d", "of and")];
    let ranked = rank("", &candidates, 3);
    assert_eq!(ids(&ranked), vec!["a", "b", "c"]);
    assert!(ranked.iter().all(|s| s.score == 0.0));
    assert_well_ranked(&ranked, 3, 4);
}

#[test]
fn test_empty_query_scores_zero() {
    let ranked = rank("   ", &[("a", "python"), ("b", "rust")], 2);
    assert!(ranked.iter().all(|s| s.score == 0.0));
    assert_eq!(ids(&ranked), vec!["a", "b"]);
}

#[test]
fn test_empty_candidate_text_scores_zero() {
    let ranked = rank("python", &[("blank", ""), ("hit", "python")], 2);
    assert_eq!(ids(&ranked), vec!["hit", "blank"]);
    assert_eq!(ranked[1].score, 0.0);
}

#[test]
fn test_zero_overlap_is_exactly_zero() {
    let ranked = rank("haskell monads", &[("x", "cobol mainframe")], 1);
    assert_eq!(ranked[0].score, 0.0);
}

#[test]
fn test_boundary_with_no_candidates() {
    let job = jobmatch::testing::make_job("j", "Title", "Description");
    assert_eq!(rank_matches(&job, &[], 5, &MatchConfig::default()), Ok(vec![]));
}
