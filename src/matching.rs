// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The boundary around the ranking core.
//!
//! Everything the core refuses to care about happens here: `top_k` is checked
//! against the configured range, required fields are checked for content,
//! records are flattened to text, and scores are rounded for display. Once
//! these checks pass, `rank_with` cannot fail.

use crate::config::MatchConfig;
use crate::error::MatchError;
use crate::ranker::rank_with;
use crate::types::{CandidateProfile, Document, JobPosting, MatchResult};
use crate::utils::round_score;

/// Accept `top_k` only inside `config.min_top_k..=config.max_top_k`.
pub fn validate_top_k(top_k: usize, config: &MatchConfig) -> Result<usize, MatchError> {
    if top_k < config.min_top_k || top_k > config.max_top_k {
        return Err(MatchError::TopKOutOfRange {
            top_k,
            min: config.min_top_k,
            max: config.max_top_k,
        });
    }
    Ok(top_k)
}

fn require(value: &str, record: &'static str, field: &'static str) -> Result<(), MatchError> {
    if value.trim().is_empty() {
        Err(MatchError::EmptyField { record, field })
    } else {
        Ok(())
    }
}

/// Title and description must carry text.
pub fn validate_job(job: &JobPosting) -> Result<(), MatchError> {
    require(&job.title, "job", "title")?;
    require(&job.description, "job", "description")
}

/// Name and skills must carry text.
pub fn validate_candidate(candidate: &CandidateProfile) -> Result<(), MatchError> {
    require(&candidate.name, "candidate", "name")?;
    require(&candidate.skills, "candidate", "skills")
}

/// Rank `candidates` against `job` and return the best `top_k`, rounded.
///
/// An empty candidate list is not an error: it yields `Ok(vec![])`.
pub fn rank_matches(
    job: &JobPosting,
    candidates: &[CandidateProfile],
    top_k: usize,
    config: &MatchConfig,
) -> Result<Vec<MatchResult>, MatchError> {
    let top_k = validate_top_k(top_k, config)?;
    validate_job(job)?;
    for candidate in candidates {
        validate_candidate(candidate)?;
    }
    if candidates.is_empty() {
        return Ok(Vec::new());
    }

    let query = Document::from_job(job);
    let documents: Vec<Document> = candidates.iter().map(Document::from_candidate).collect();
    let corpus: Vec<(&str, &str)> = documents
        .iter()
        .map(|d| (d.id.as_str(), d.text.as_str()))
        .collect();

    let ranked = rank_with(&query.text, &corpus, top_k, &config.tokenizer);
    Ok(ranked
        .into_iter()
        .map(|scored| {
            let candidate = &candidates[scored.position];
            MatchResult {
                candidate_id: candidate.id.clone(),
                name: candidate.name.clone(),
                score: round_score(scored.score, config.score_precision),
            }
        })
        .collect())
}
