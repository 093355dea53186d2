// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{CandidateProfile, JobPosting};

/// Create a job posting with no requirements.
pub fn make_job(id: &str, title: &str, description: &str) -> JobPosting {
    JobPosting {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        requirements: None,
    }
}

/// Create a candidate profile with no summary.
pub fn make_candidate(id: &str, name: &str, skills: &str) -> CandidateProfile {
    CandidateProfile {
        id: id.to_string(),
        name: name.to_string(),
        skills: skills.to_string(),
        summary: None,
    }
}

/// Create a candidate profile with a summary.
pub fn make_candidate_with_summary(
    id: &str,
    name: &str,
    skills: &str,
    summary: &str,
) -> CandidateProfile {
    CandidateProfile {
        summary: Some(summary.to_string()),
        ..make_candidate(id, name, skills)
    }
}

/// `(id, text)` pairs `c0, c1, ...` for feeding `rank` directly.
pub fn numbered_corpus(texts: &[&str]) -> Vec<(String, String)> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| (format!("c{}", i), text.to_string()))
        .collect()
}
