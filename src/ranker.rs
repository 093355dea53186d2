// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The similarity ranker: one query text against N candidate texts.
//!
//! ```text
//! query + candidates ──▶ tokenize ──▶ vocabulary + idf ──▶ unit vectors
//!                                                              │
//!            top-K ◀── stable sort (score desc) ◀── cosine(query, candidate)
//! ```
//!
//! The function is pure. It allocates a fresh vector space per call and drops
//! it on return, so concurrent calls never share state.
//!
//! # Degenerate inputs
//!
//! - No candidates: returns `[]` without building anything.
//! - Empty vocabulary (everything was stop words or punctuation): every
//!   candidate scores 0.0, order is the input order, `top_k` still applies.

use tracing::{debug, warn};

use crate::config::TokenizerOptions;
use crate::contracts::{check_ranked, check_score_bounds, check_unit_or_zero};
use crate::scoring::cosine_similarity;
use crate::scoring::ranking;
use crate::tfidf::VectorSpace;
use crate::types::{ScoredCandidate, TermContribution};

/// Rank candidates by TF-IDF cosine similarity to the query, with default
/// tokenizer options.
///
/// `candidates` are `(id, text)` pairs. The result holds at most
/// `min(top_k, candidates.len())` entries, best first; equal scores keep
/// their input order.
///
/// `top_k` must be at least 1. Validating it is the caller's job; a zero is
/// treated as "return nothing".
pub fn rank<I: AsRef<str>, T: AsRef<str>>(
    query_text: &str,
    candidates: &[(I, T)],
    top_k: usize,
) -> Vec<ScoredCandidate> {
    rank_with(query_text, candidates, top_k, &TokenizerOptions::default())
}

/// `rank` with explicit tokenizer options.
pub fn rank_with<I: AsRef<str>, T: AsRef<str>>(
    query_text: &str,
    candidates: &[(I, T)],
    top_k: usize,
    options: &TokenizerOptions,
) -> Vec<ScoredCandidate> {
    debug_assert!(top_k >= 1, "top_k must be at least 1");
    if top_k == 0 {
        warn!("rank called with top_k = 0; returning no matches");
        return Vec::new();
    }
    if candidates.is_empty() {
        return Vec::new();
    }

    let texts: Vec<&str> = candidates.iter().map(|(_, text)| text.as_ref()).collect();
    let space = VectorSpace::fit(query_text, &texts, options);
    debug!(
        candidates = candidates.len(),
        vocabulary = space.vocabulary().len(),
        top_k,
        "fitted vector space"
    );

    check_unit_or_zero(space.query());
    let scored: Vec<ScoredCandidate> = candidates
        .iter()
        .zip(space.candidates())
        .enumerate()
        .map(|(position, ((id, _), vector))| {
            check_unit_or_zero(vector);
            let score = cosine_similarity(space.query(), vector);
            check_score_bounds(score);
            ScoredCandidate {
                id: id.as_ref().to_string(),
                position,
                score,
            }
        })
        .collect();

    let ranked = ranking::top_k(scored, top_k);
    check_ranked(&ranked, top_k, candidates.len());
    ranked
}

/// Break one candidate's score down by shared term.
///
/// The vector space is fitted over just the query and this candidate, so the
/// numbers describe a two-document corpus, not the full candidate set. The
/// contributions of all shared terms sum to that pairwise cosine score. At
/// most `limit` terms are returned, largest contribution first, ties by term.
pub fn explain(
    query_text: &str,
    candidate_text: &str,
    options: &TokenizerOptions,
    limit: usize,
) -> Vec<TermContribution> {
    let space = VectorSpace::fit(query_text, &[candidate_text], options);
    let Some(candidate) = space.candidate(0) else {
        return Vec::new();
    };

    let mut contributions: Vec<TermContribution> = space
        .query()
        .entries()
        .iter()
        .filter_map(|&(idx, query_weight)| {
            let candidate_weight = candidate.get(idx);
            if candidate_weight == 0.0 {
                return None;
            }
            let term = space.vocabulary().term(idx)?.to_string();
            Some(TermContribution {
                term,
                query_weight,
                candidate_weight,
                contribution: query_weight * candidate_weight,
            })
        })
        .collect();

    contributions.sort_by(|a, b| {
        b.contribution
            .total_cmp(&a.contribution)
            .then_with(|| a.term.cmp(&b.term))
    });
    contributions.truncate(limit);
    contributions
}
