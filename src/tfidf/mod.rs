// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A TF-IDF vector space scoped to one query and its candidates.
//!
//! `VectorSpace::fit` is the only constructor. It tokenizes the corpus
//! (query first, candidates after, in input order), builds the vocabulary and
//! IDF table over all of it, and produces one unit vector per document. The
//! space is never shared or updated: a different query or candidate set means
//! a new `fit`.

mod vocabulary;
mod weighting;

pub use vocabulary::Vocabulary;
pub use weighting::{idf, idf_table, term_frequencies, SparseVector};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::TokenizerOptions;
use crate::tokenize::tokenize;

/// Corpus size at which tokenization and vectorization move onto rayon.
/// Below this the thread handoff costs more than it saves.
pub const PARALLEL_THRESHOLD: usize = 256;

#[derive(Debug, Clone)]
pub struct VectorSpace {
    vocabulary: Vocabulary,
    idf: Vec<f64>,
    query: SparseVector,
    candidates: Vec<SparseVector>,
}

impl VectorSpace {
    pub fn fit<S: AsRef<str> + Sync>(
        query_text: &str,
        candidate_texts: &[S],
        options: &TokenizerOptions,
    ) -> Self {
        let mut corpus = Vec::with_capacity(candidate_texts.len() + 1);
        corpus.push(tokenize(query_text, options));
        corpus.extend(tokenize_all(candidate_texts, options));

        let vocabulary = Vocabulary::build(&corpus);
        let idf = idf_table(&vocabulary);
        let mut vectors = vectorize_all(&corpus, &vocabulary, &idf).into_iter();
        let query = vectors.next().unwrap_or_default();
        let candidates = vectors.collect();

        VectorSpace {
            vocabulary,
            idf,
            query,
            candidates,
        }
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    pub fn query(&self) -> &SparseVector {
        &self.query
    }

    pub fn candidate(&self, idx: usize) -> Option<&SparseVector> {
        self.candidates.get(idx)
    }

    pub fn candidates(&self) -> &[SparseVector] {
        &self.candidates
    }
}

#[cfg(feature = "parallel")]
fn tokenize_all<S: AsRef<str> + Sync>(texts: &[S], options: &TokenizerOptions) -> Vec<Vec<String>> {
    if texts.len() >= PARALLEL_THRESHOLD {
        texts.par_iter().map(|t| tokenize(t.as_ref(), options)).collect()
    } else {
        texts.iter().map(|t| tokenize(t.as_ref(), options)).collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn tokenize_all<S: AsRef<str>>(texts: &[S], options: &TokenizerOptions) -> Vec<Vec<String>> {
    texts.iter().map(|t| tokenize(t.as_ref(), options)).collect()
}

#[cfg(feature = "parallel")]
fn vectorize_all(corpus: &[Vec<String>], vocabulary: &Vocabulary, idf: &[f64]) -> Vec<SparseVector> {
    if corpus.len() >= PARALLEL_THRESHOLD {
        corpus
            .par_iter()
            .map(|tokens| SparseVector::tfidf(tokens, vocabulary, idf))
            .collect()
    } else {
        corpus
            .iter()
            .map(|tokens| SparseVector::tfidf(tokens, vocabulary, idf))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn vectorize_all(corpus: &[Vec<String>], vocabulary: &Vocabulary, idf: &[f64]) -> Vec<SparseVector> {
    corpus
        .iter()
        .map(|tokens| SparseVector::tfidf(tokens, vocabulary, idf))
        .collect()
}
