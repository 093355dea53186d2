// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The per-call vocabulary: every distinct token seen in the corpus.
//!
//! Terms are stored sorted so a term's index depends only on the set of terms,
//! never on hash order or document order. `doc_freq[i]` counts the documents
//! containing `terms[i]` at least once.

use std::collections::{BTreeMap, HashMap, HashSet};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: HashMap<String, usize>,
    doc_freq: Vec<usize>,
    total_docs: usize,
}

impl Vocabulary {
    /// Build from tokenized documents (query first, then candidates).
    pub fn build(documents: &[Vec<String>]) -> Self {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for tokens in documents {
            let distinct: HashSet<&str> = tokens.iter().map(String::as_str).collect();
            for term in distinct {
                *counts.entry(term).or_insert(0) += 1;
            }
        }

        let mut terms = Vec::with_capacity(counts.len());
        let mut doc_freq = Vec::with_capacity(counts.len());
        for (term, df) in counts {
            terms.push(term.to_string());
            doc_freq.push(df);
        }
        let index = terms
            .iter()
            .enumerate()
            .map(|(i, term)| (term.clone(), i))
            .collect();

        Vocabulary {
            terms,
            index,
            doc_freq,
            total_docs: documents.len(),
        }
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Documents the vocabulary was built from (D in the IDF formula).
    pub fn total_docs(&self) -> usize {
        self.total_docs
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn term(&self, idx: usize) -> Option<&str> {
        self.terms.get(idx).map(String::as_str)
    }

    pub fn index_of(&self, term: &str) -> Option<usize> {
        self.index.get(term).copied()
    }

    pub fn doc_freq(&self, idx: usize) -> usize {
        self.doc_freq.get(idx).copied().unwrap_or(0)
    }
}
