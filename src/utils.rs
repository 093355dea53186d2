// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Utility functions for string processing and score formatting.

#[cfg(feature = "unicode-normalization")]
use unicode_normalization::UnicodeNormalization;

use crate::config::MAX_SCORE_PRECISION;

/// Lowercase a string, optionally stripping diacritics first.
///
/// With diacritic folding on, accented and plain spellings collapse to the
/// same token:
/// - "Café" → "cafe"
/// - "Müller" → "muller"
/// - "naïve" → "naive"
///
/// # Algorithm (with unicode-normalization feature)
///
/// 1. NFD normalize (decompose characters into base + combining marks)
/// 2. Filter out combining marks
/// 3. Lowercase
#[cfg(feature = "unicode-normalization")]
pub fn fold_case(value: &str, fold_diacritics: bool) -> String {
    if fold_diacritics {
        value
            .nfd()
            .filter(|c| !is_combining_mark(*c))
            .collect::<String>()
            .to_lowercase()
    } else {
        value.to_lowercase()
    }
}

/// Lowercase only. Without the unicode-normalization feature there is no NFD
/// table to decompose with, so `fold_diacritics` is ignored.
#[cfg(not(feature = "unicode-normalization"))]
pub fn fold_case(value: &str, _fold_diacritics: bool) -> String {
    value.to_lowercase()
}

/// Check if a character is a combining mark (diacritic).
#[cfg(feature = "unicode-normalization")]
fn is_combining_mark(c: char) -> bool {
    matches!(c,
        '\u{0300}'..='\u{036F}' |  // Combining Diacritical Marks
        '\u{1AB0}'..='\u{1AFF}' |  // Combining Diacritical Marks Extended
        '\u{1DC0}'..='\u{1DFF}' |  // Combining Diacritical Marks Supplement
        '\u{20D0}'..='\u{20FF}' |  // Combining Diacritical Marks for Symbols
        '\u{FE20}'..='\u{FE2F}'    // Combining Half Marks
    )
}

/// Round a score to `precision` decimal places.
///
/// Rounds half away from zero, like `f64::round`. Scores are non-negative so
/// this behaves as ordinary half-up rounding. `precision` is capped at
/// [`MAX_SCORE_PRECISION`] so the factor stays finite.
pub fn round_score(score: f64, precision: u32) -> f64 {
    let factor = 10f64.powi(precision.min(MAX_SCORE_PRECISION) as i32);
    (score * factor).round() / factor
}
