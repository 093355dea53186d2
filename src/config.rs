// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Knobs for tokenization and for the matching boundary.
//!
//! Every field has a default, so an empty JSON object (or no config file at
//! all) gives the stock behaviour: top 5 matches, `top_k` limited to 1..=100,
//! scores rounded to 4 places, two-character minimum tokens, no diacritic folding.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::MatchError;

/// Most decimal places a reported score can keep. An f64 carries about 15
/// significant digits; past that the rounding factor overflows to infinity.
pub const MAX_SCORE_PRECISION: u32 = 15;

/// How text becomes tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TokenizerOptions {
    /// Tokens with fewer characters than this are dropped.
    pub min_token_len: usize,
    /// Strip combining marks before lowercasing ("café" → "cafe").
    pub fold_diacritics: bool,
}

impl Default for TokenizerOptions {
    fn default() -> Self {
        TokenizerOptions {
            min_token_len: 2,
            fold_diacritics: false,
        }
    }
}

/// Limits and formatting applied around the ranking core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MatchConfig {
    pub default_top_k: usize,
    pub min_top_k: usize,
    pub max_top_k: usize,
    /// Decimal places kept in reported scores.
    pub score_precision: u32,
    pub tokenizer: TokenizerOptions,
}

impl Default for MatchConfig {
    fn default() -> Self {
        MatchConfig {
            default_top_k: 5,
            min_top_k: 1,
            max_top_k: 100,
            score_precision: 4,
            tokenizer: TokenizerOptions::default(),
        }
    }
}

impl MatchConfig {
    /// Read a config from a JSON file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, MatchError> {
        let content = fs::read_to_string(path).map_err(|e| MatchError::Config {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let config: MatchConfig =
            serde_json::from_str(&content).map_err(|e| MatchError::Config {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        config.check()?;
        Ok(config)
    }

    /// Reject configs whose own bounds make no sense.
    pub fn check(&self) -> Result<(), MatchError> {
        if self.min_top_k == 0 || self.min_top_k > self.max_top_k {
            return Err(MatchError::InvalidConfig(format!(
                "top_k range {}..={} is empty or starts at zero",
                self.min_top_k, self.max_top_k
            )));
        }
        if self.default_top_k < self.min_top_k || self.default_top_k > self.max_top_k {
            return Err(MatchError::InvalidConfig(format!(
                "default top_k {} outside {}..={}",
                self.default_top_k, self.min_top_k, self.max_top_k
            )));
        }
        if self.tokenizer.min_token_len == 0 {
            return Err(MatchError::InvalidConfig(
                "tokenizer.minTokenLen must be at least 1".to_string(),
            ));
        }
        if self.score_precision > MAX_SCORE_PRECISION {
            return Err(MatchError::InvalidConfig(format!(
                "scorePrecision {} exceeds {}",
                self.score_precision, MAX_SCORE_PRECISION
            )));
        }
        Ok(())
    }
}
