// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Rank candidate profiles against a job posting by TF-IDF cosine similarity.
//!
//! The core is a pure function: give it one query text and N `(id, text)`
//! candidates, get back the best K by cosine similarity. It builds a fresh
//! vector space for every call and keeps nothing afterwards, so calls can run
//! concurrently without coordination.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐    ┌──────────────┐    ┌─────────────┐    ┌──────────────┐
//! │ extract.rs  │───▶│ tokenize.rs  │───▶│  tfidf/     │───▶│  scoring/    │
//! │ record→text │    │ lowercase,   │    │ vocabulary, │    │ cosine,      │
//! │             │    │ stop words   │    │ idf, vectors│    │ stable top-K │
//! └─────────────┘    └──────────────┘    └─────────────┘    └──────────────┘
//!        ▲                                                         │
//!        │                   ┌─────────────┐                       ▼
//!        └───────────────────│ matching.rs │◀──────────────── ranker.rs
//!                            │ validation, │
//!                            │ rounding    │
//!                            └─────────────┘
//! ```
//!
//! `catalog` is the record store the CLI uses; the ranking core never sees it.
//!
//! # Usage
//!
//! ```
//! use jobmatch::rank;
//!
//! let candidates = [
//!     ("A", "Experienced Python developer, SQL expert"),
//!     ("B", "Graphic designer, Photoshop, Illustrator"),
//! ];
//! let ranked = rank("Python backend engineer with SQL experience", &candidates, 2);
//!
//! assert_eq!(ranked[0].id, "A");
//! assert!(ranked[0].score > ranked[1].score);
//! ```

pub mod catalog;
pub mod config;
pub mod contracts;
pub mod error;
mod extract;
pub mod logging;
mod matching;
mod ranker;
pub mod scoring;
pub mod testing;
pub mod tfidf;
mod tokenize;
mod types;
mod utils;

pub use catalog::{Catalog, NewCandidate, NewJob};
pub use config::{MatchConfig, TokenizerOptions, MAX_SCORE_PRECISION};
pub use error::{CatalogError, MatchError};
pub use extract::{extract_text, TextRecord};
pub use matching::{rank_matches, validate_candidate, validate_job, validate_top_k};
pub use ranker::{explain, rank, rank_with};
pub use scoring::cosine_similarity;
pub use tfidf::{SparseVector, VectorSpace, Vocabulary};
pub use tokenize::{is_stop_word, tokenize, STOP_WORDS};
pub use types::{
    CandidateProfile, Document, JobPosting, MatchResult, ScoredCandidate, TermContribution,
};
pub use utils::{fold_case, round_score};
