// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared test utilities and fixtures.

#![allow(dead_code, unused_imports)]

use jobmatch::{CandidateProfile, JobPosting, ScoredCandidate};

// Re-export canonical test utilities from jobmatch::testing
pub use jobmatch::testing::{make_candidate, make_candidate_with_summary, make_job, numbered_corpus};

/// Query text used by the canonical two-candidate scenario.
pub const BACKEND_QUERY: &str = "Python backend engineer with SQL experience";

/// A small, varied candidate pool for a backend job.
pub fn backend_pool() -> Vec<CandidateProfile> {
    vec![
        make_candidate_with_summary(
            "c-ada",
            "Ada",
            "Python, SQL, PostgreSQL",
            "Backend engineer building data APIs",
        ),
        make_candidate("c-grace", "Grace", "Graphic designer, Photoshop, Illustrator"),
        make_candidate_with_summary(
            "c-linus",
            "Linus",
            "C, kernel, git",
            "Operating systems and version control",
        ),
        make_candidate("c-guido", "Guido", "Python, language design"),
        make_candidate("c-edgar", "Edgar", "SQL, relational databases"),
    ]
}

pub fn backend_job() -> JobPosting {
    JobPosting {
        requirements: Some("PostgreSQL, REST APIs".to_string()),
        ..make_job(
            "job-backend",
            "Python backend engineer",
            "Build services with SQL experience",
        )
    }
}

/// Assert the ranking laws every result list must satisfy.
pub fn assert_well_ranked(ranked: &[ScoredCandidate], top_k: usize, candidate_count: usize) {
    assert_eq!(
        ranked.len(),
        top_k.min(candidate_count),
        "length must be min(top_k, candidates)"
    );
    for scored in ranked {
        assert!(
            (0.0..=1.0).contains(&scored.score),
            "score {} out of [0, 1] for {}",
            scored.score,
            scored.id
        );
    }
    for pair in ranked.windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "not descending: {:?} then {:?}",
            pair[0],
            pair[1]
        );
        if pair[0].score == pair[1].score {
            assert!(
                pair[0].position < pair[1].position,
                "tie not in input order: {:?} then {:?}",
                pair[0],
                pair[1]
            );
        }
    }
}

pub fn ids(ranked: &[ScoredCandidate]) -> Vec<&str> {
    ranked.iter().map(|s| s.id.as_str()).collect()
}
