// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Differential testing: the sparse ranker against the dense oracle.

use super::oracles::oracle_scores;
use super::strategies::{corpus_strategy, text_strategy};
use jobmatch::{rank, TokenizerOptions};
use proptest::prelude::*;

const EPSILON: f64 = 1e-9;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Every candidate's score matches the oracle.
    #[test]
    fn diff_scores_match_oracle(query in text_strategy(), corpus in corpus_strategy(20)) {
        prop_assume!(!corpus.is_empty());
        let texts: Vec<&str> = corpus.iter().map(|(_, t)| t.as_str()).collect();
        let expected = oracle_scores(&query, &texts, &TokenizerOptions::default());

        for scored in rank(&query, &corpus, corpus.len()) {
            let oracle = expected[scored.position];
            prop_assert!(
                (scored.score - oracle).abs() < EPSILON,
                "{}: ranker {} vs oracle {}",
                scored.id,
                scored.score,
                oracle
            );
        }
    }

    /// The best candidate is one the oracle also scores highest.
    #[test]
    fn diff_winner_matches_oracle(query in text_strategy(), corpus in corpus_strategy(20)) {
        prop_assume!(!corpus.is_empty());
        let texts: Vec<&str> = corpus.iter().map(|(_, t)| t.as_str()).collect();
        let expected = oracle_scores(&query, &texts, &TokenizerOptions::default());
        let best = expected.iter().cloned().fold(0.0_f64, f64::max);

        let ranked = rank(&query, &corpus, 1);
        prop_assert!((expected[ranked[0].position] - best).abs() < EPSILON);
    }
}
