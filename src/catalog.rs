// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! A JSON file of job postings and candidate profiles.
//!
//! This is the collaborator the ranking core assumes: it owns ids, checks
//! required fields on the way in, finds the job for a match request and hands
//! over the full candidate set. The file layout is
//!
//! ```json
//! { "jobs": [ { "id": "...", "title": "...", "description": "..." } ],
//!   "candidates": [ { "id": "...", "name": "...", "skills": "..." } ] }
//! ```
//!
//! Saves go to a sibling temp file first and are renamed into place, so a
//! crash mid-write never leaves a truncated catalog behind.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::info;
use uuid::Uuid;

use crate::config::{MatchConfig, TokenizerOptions};
use crate::error::CatalogError;
use crate::extract::extract_text;
use crate::matching::{rank_matches, validate_candidate, validate_job};
use crate::tokenize::tokenize;
use crate::types::{CandidateProfile, JobPosting, MatchResult};

/// Fields for a job posting that has no id yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewJob {
    pub title: String,
    pub description: String,
    pub requirements: Option<String>,
}

/// Fields for a candidate profile that has no id yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NewCandidate {
    pub name: String,
    pub skills: String,
    pub summary: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    jobs: Vec<JobPosting>,
    #[serde(default)]
    candidates: Vec<CandidateProfile>,
}

impl Catalog {
    pub fn new() -> Self {
        Catalog::default()
    }

    /// Load a catalog. A missing file is an empty catalog.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "catalog not found, starting empty");
                return Ok(Catalog::new());
            }
            Err(e) => {
                return Err(CatalogError::Io {
                    path: path.display().to_string(),
                    reason: e.to_string(),
                })
            }
        };
        let catalog = Catalog::from_json(&content).map_err(|e| match e {
            CatalogError::Parse { reason, .. } => CatalogError::Parse {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })?;
        info!(
            path = %path.display(),
            jobs = catalog.jobs.len(),
            candidates = catalog.candidates.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Parse and validate catalog JSON.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json).map_err(|e| CatalogError::Parse {
            path: "<input>".to_string(),
            reason: e.to_string(),
        })?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Every record has its required fields, and no id is used twice.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for job in &self.jobs {
            validate_job(job)?;
            if !seen.insert(job.id.as_str()) {
                return Err(CatalogError::DuplicateId(job.id.clone()));
            }
        }
        for candidate in &self.candidates {
            validate_candidate(candidate)?;
            if !seen.insert(candidate.id.as_str()) {
                return Err(CatalogError::DuplicateId(candidate.id.clone()));
            }
        }
        Ok(())
    }

    /// Write pretty JSON atomically (temp file + rename).
    pub fn save(&self, path: &Path) -> Result<(), CatalogError> {
        let io_err = |e: std::io::Error| CatalogError::Io {
            path: path.display().to_string(),
            reason: e.to_string(),
        };
        let json = serde_json::to_string_pretty(self).map_err(|e| CatalogError::Parse {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, json).map_err(io_err)?;
        if let Err(e) = fs::rename(&tmp, path) {
            let _ = fs::remove_file(&tmp);
            return Err(io_err(e));
        }
        info!(
            path = %path.display(),
            jobs = self.jobs.len(),
            candidates = self.candidates.len(),
            "saved catalog"
        );
        Ok(())
    }

    pub fn add_job(&mut self, new: NewJob) -> Result<&JobPosting, CatalogError> {
        let job = JobPosting {
            id: Uuid::new_v4().to_string(),
            title: new.title,
            description: new.description,
            requirements: new.requirements.filter(|r| !r.trim().is_empty()),
        };
        validate_job(&job)?;
        self.jobs.push(job);
        Ok(&self.jobs[self.jobs.len() - 1])
    }

    pub fn add_candidate(&mut self, new: NewCandidate) -> Result<&CandidateProfile, CatalogError> {
        let candidate = CandidateProfile {
            id: Uuid::new_v4().to_string(),
            name: new.name,
            skills: new.skills,
            summary: new.summary.filter(|s| !s.trim().is_empty()),
        };
        validate_candidate(&candidate)?;
        self.candidates.push(candidate);
        Ok(&self.candidates[self.candidates.len() - 1])
    }

    pub fn jobs(&self) -> &[JobPosting] {
        &self.jobs
    }

    pub fn candidates(&self) -> &[CandidateProfile] {
        &self.candidates
    }

    pub fn job(&self, id: &str) -> Result<&JobPosting, CatalogError> {
        self.jobs
            .iter()
            .find(|job| job.id == id)
            .ok_or_else(|| CatalogError::JobNotFound(id.to_string()))
    }

    pub fn candidate(&self, id: &str) -> Result<&CandidateProfile, CatalogError> {
        self.candidates
            .iter()
            .find(|candidate| candidate.id == id)
            .ok_or_else(|| CatalogError::CandidateNotFound(id.to_string()))
    }

    /// Ids of records whose text tokenizes to nothing. Such a job matches
    /// every candidate at 0.0, and such a candidate never scores above 0.0.
    pub fn unindexable(&self, options: &TokenizerOptions) -> Vec<&str> {
        let empty = |text: String| tokenize(&text, options).is_empty();
        self.jobs
            .iter()
            .filter(|job| empty(extract_text(*job)))
            .map(|job| job.id.as_str())
            .chain(
                self.candidates
                    .iter()
                    .filter(|candidate| empty(extract_text(*candidate)))
                    .map(|candidate| candidate.id.as_str()),
            )
            .collect()
    }

    /// Top `top_k` candidates for a job, over every candidate in the catalog.
    pub fn matches(
        &self,
        job_id: &str,
        top_k: usize,
        config: &MatchConfig,
    ) -> Result<Vec<MatchResult>, CatalogError> {
        let job = self.job(job_id)?;
        Ok(rank_matches(job, &self.candidates, top_k, config)?)
    }
}
