// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the boundary layer and the record catalog.
//!
//! The ranking core has no error type: `rank` is total over its input domain.
//! Everything that can go wrong (a `top_k` out of range, an empty required
//! field, an unknown job id, an unreadable file) is caught here before the
//! core runs.

use std::fmt;

/// Rejected input at the matching boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    /// `top_k` outside the configured inclusive range.
    TopKOutOfRange { top_k: usize, min: usize, max: usize },
    /// A required text field is empty or whitespace.
    EmptyField {
        record: &'static str,
        field: &'static str,
    },
    /// Config file could not be read or parsed.
    Config { path: String, reason: String },
    /// Config parsed but its values contradict each other.
    InvalidConfig(String),
}

impl fmt::Display for MatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchError::TopKOutOfRange { top_k, min, max } => {
                write!(f, "top_k {} must be between {} and {}", top_k, min, max)
            }
            MatchError::EmptyField { record, field } => {
                write!(f, "{} {} must not be empty", record, field)
            }
            MatchError::Config { path, reason } => {
                write!(f, "failed to load config {}: {}", path, reason)
            }
            MatchError::InvalidConfig(reason) => write!(f, "invalid config: {}", reason),
        }
    }
}

impl std::error::Error for MatchError {}

/// Failures reading, writing or querying the record catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    Io { path: String, reason: String },
    Parse { path: String, reason: String },
    JobNotFound(String),
    CandidateNotFound(String),
    DuplicateId(String),
    Invalid(MatchError),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io { path, reason } => write!(f, "{}: {}", path, reason),
            CatalogError::Parse { path, reason } => {
                write!(f, "invalid catalog JSON in {}: {}", path, reason)
            }
            CatalogError::JobNotFound(id) => write!(f, "job not found: {}", id),
            CatalogError::CandidateNotFound(id) => write!(f, "candidate not found: {}", id),
            CatalogError::DuplicateId(id) => write!(f, "duplicate record id: {}", id),
            CatalogError::Invalid(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Invalid(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MatchError> for CatalogError {
    fn from(err: MatchError) -> Self {
        CatalogError::Invalid(err)
    }
}
