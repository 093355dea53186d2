// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for ranking invariants.
//!
//! Scores must be finite, inside [0, 1], sorted descending with input order
//! breaking ties, and identical across two runs over the same input.

#![no_main]

use arbitrary::Arbitrary;
use jobmatch::rank;
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    query: String,
    candidates: Vec<String>,
    top_k: u8,
}

fuzz_target!(|input: Input| {
    let top_k = (input.top_k as usize).max(1);
    let corpus: Vec<(String, &str)> = input
        .candidates
        .iter()
        .take(64)
        .enumerate()
        .map(|(i, text)| (i.to_string(), text.as_str()))
        .collect();

    let first = rank(&input.query, &corpus, top_k);
    let second = rank(&input.query, &corpus, top_k);
    assert_eq!(first, second, "ranking is not deterministic");

    assert_eq!(first.len(), top_k.min(corpus.len()));
    for scored in &first {
        assert!(scored.score.is_finite());
        assert!((0.0..=1.0).contains(&scored.score));
    }
    for pair in first.windows(2) {
        assert!(
            pair[0].score > pair[1].score
                || (pair[0].score == pair[1].score && pair[0].position < pair[1].position)
        );
    }
});
