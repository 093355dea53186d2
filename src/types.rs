// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The records that flow through a ranking call.
//!
//! Two kinds of structured record come in from the outside world: job postings
//! (the query side) and candidate profiles (the corpus side). Both collapse into
//! the same `Document` shape - an id plus one blob of text - before the ranker
//! ever sees them. What comes out is a list of `ScoredCandidate` (full precision,
//! produced by the core) or `MatchResult` (rounded, named, produced by the
//! boundary layer in `matching`).
//!
//! # Lifecycle
//!
//! Nothing here owns a vector space. Vocabulary, IDF weights and vectors are
//! built per call in `tfidf` and dropped when `rank` returns.

use serde::{Deserialize, Serialize};

/// A job posting: the query side of a match.
///
/// `title` and `description` are required and must be non-empty by the time a
/// posting reaches `rank_matches`. `requirements` is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub requirements: Option<String>,
}

/// A candidate profile: one entry of the corpus being ranked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateProfile {
    pub id: String,
    pub name: String,
    /// Free text, typically comma-separated skills.
    pub skills: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
}

/// The shape every record reduces to before ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Document {
            id: id.into(),
            text: text.into(),
        }
    }

    /// Query document for a job posting: title, description, requirements.
    pub fn from_job(job: &JobPosting) -> Self {
        Document::new(job.id.clone(), crate::extract::extract_text(job))
    }

    /// Corpus document for a candidate: skills, then summary.
    pub fn from_candidate(candidate: &CandidateProfile) -> Self {
        Document::new(candidate.id.clone(), crate::extract::extract_text(candidate))
    }
}

/// Output of the ranking core.
///
/// `score` is the raw cosine similarity in `[0, 1]`, not rounded.
/// `position` is the candidate's index in the input sequence; it is the tie-breaker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredCandidate {
    pub id: String,
    pub position: usize,
    pub score: f64,
}

/// Output of the boundary layer: what a caller formats and shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub candidate_id: String,
    pub name: String,
    /// Cosine similarity rounded to the configured precision.
    pub score: f64,
}

/// One term's share of a candidate's score, as reported by `explain`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TermContribution {
    pub term: String,
    pub query_weight: f64,
    pub candidate_weight: f64,
    /// `query_weight * candidate_weight`; contributions sum to the cosine score.
    pub contribution: f64,
}
