// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning structured records into one blob of text.
//!
//! Each record type declares its text fields in a fixed order. Present,
//! non-empty fields are joined with a single space; absent or empty ones
//! contribute nothing, not even the separator. Field order matters only for
//! readability of the joined text - TF-IDF is order-insensitive - but it is
//! fixed so the output is reproducible.

use crate::types::{CandidateProfile, JobPosting};

/// A record with an ordered list of text fields.
///
/// Required fields are returned as `Some`, optional ones as whatever they hold.
pub trait TextRecord {
    fn text_fields(&self) -> Vec<Option<&str>>;
}

impl TextRecord for JobPosting {
    fn text_fields(&self) -> Vec<Option<&str>> {
        vec![
            Some(self.title.as_str()),
            Some(self.description.as_str()),
            self.requirements.as_deref(),
        ]
    }
}

impl TextRecord for CandidateProfile {
    fn text_fields(&self) -> Vec<Option<&str>> {
        vec![Some(self.skills.as_str()), self.summary.as_deref()]
    }
}

/// Space-join the present, non-empty fields of a record.
pub fn extract_text<R: TextRecord + ?Sized>(record: &R) -> String {
    record
        .text_fields()
        .into_iter()
        .flatten()
        .filter(|field| !field.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
