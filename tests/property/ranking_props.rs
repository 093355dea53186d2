// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking laws over random corpora.

use super::strategies::{corpus_strategy, text_strategy};
use crate::common::assert_well_ranked;
use jobmatch::{explain, rank, rank_with, tokenize, TokenizerOptions};
use proptest::prelude::*;
use std::collections::HashMap;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Length, bounds, order and tie-break hold for every input.
    #[test]
    fn prop_ranked_well_formed(
        query in text_strategy(),
        corpus in corpus_strategy(24),
        top_k in 1usize..40,
    ) {
        let ranked = rank(&query, &corpus, top_k);
        assert_well_ranked(&ranked, top_k, corpus.len());
    }

    /// Every returned id is a real candidate, each at most once, at its own position.
    #[test]
    fn prop_ranked_ids_match_positions(
        query in text_strategy(),
        corpus in corpus_strategy(24),
        top_k in 1usize..40,
    ) {
        let ranked = rank(&query, &corpus, top_k);
        let mut seen = std::collections::HashSet::new();
        for scored in &ranked {
            prop_assert!(seen.insert(scored.position));
            prop_assert_eq!(&corpus[scored.position].0, &scored.id);
        }
    }

    /// Same inputs, same output.
    #[test]
    fn prop_deterministic(
        query in text_strategy(),
        corpus in corpus_strategy(24),
        top_k in 1usize..40,
    ) {
        prop_assert_eq!(rank(&query, &corpus, top_k), rank(&query, &corpus, top_k));
    }

    /// The K best are a prefix of the full ranking.
    #[test]
    fn prop_top_k_is_prefix_of_full_ranking(
        query in text_strategy(),
        corpus in corpus_strategy(24),
        top_k in 1usize..40,
    ) {
        let full = rank(&query, &corpus, corpus.len().max(1));
        let top = rank(&query, &corpus, top_k);
        prop_assert_eq!(&full[..top.len()], &top[..]);
    }

    /// A candidate's score depends on the candidate set, not on its order.
    #[test]
    fn prop_scores_independent_of_input_order(
        query in text_strategy(),
        corpus in corpus_strategy(16),
    ) {
        prop_assume!(!corpus.is_empty());
        let n = corpus.len();
        let forward: HashMap<String, f64> = rank(&query, &corpus, n)
            .into_iter()
            .map(|s| (s.id, s.score))
            .collect();

        let mut reversed = corpus.clone();
        reversed.reverse();
        for scored in rank(&query, &reversed, n) {
            prop_assert!((forward[&scored.id] - scored.score).abs() < 1e-12);
        }
    }

    /// A candidate with exactly the query text scores 1 when the query has any terms.
    #[test]
    fn prop_self_similarity(query in text_strategy(), corpus in corpus_strategy(8)) {
        let options = TokenizerOptions::default();
        prop_assume!(!tokenize(&query, &options).is_empty());

        let mut with_self = corpus.clone();
        with_self.push(("self".to_string(), query.clone()));
        let ranked = rank(&query, &with_self, with_self.len());
        let me = ranked.iter().find(|s| s.id == "self").unwrap();
        prop_assert_eq!(me.score, 1.0, "self score {}", me.score);
    }

    /// Disjoint vocabularies score exactly zero.
    #[test]
    fn prop_zero_overlap_scores_zero(
        query_words in prop::collection::vec("q[a-z]{2,6}", 1..6),
        candidate_words in prop::collection::vec("z[a-z]{2,6}", 1..6),
    ) {
        let query = query_words.join(" ");
        let candidate = candidate_words.join(" ");
        let ranked = rank(&query, &[("c", candidate.as_str())], 1);
        prop_assert_eq!(ranked[0].score, 0.0);
    }

    /// Per-term contributions add up to the pairwise score.
    #[test]
    fn prop_explain_sums_to_pairwise_score(query in text_strategy(), candidate in text_strategy()) {
        let options = TokenizerOptions::default();
        let pairwise = rank_with(&query, &[("c", candidate.as_str())], 1, &options);
        let terms = explain(&query, &candidate, &options, usize::MAX);
        let total: f64 = terms.iter().map(|t| t.contribution).sum();
        prop_assert!((total - pairwise[0].score).abs() < 1e-9);
        for pair in terms.windows(2) {
            prop_assert!(pair[0].contribution >= pair[1].contribution);
        }
    }
}
