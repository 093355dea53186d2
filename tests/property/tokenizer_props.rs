// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tokenizer output laws.

use jobmatch::{is_stop_word, tokenize, TokenizerOptions};
use proptest::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn prop_tokens_are_clean(text in "[ -~]{0,80}", min_token_len in 1usize..5) {
        let options = TokenizerOptions { min_token_len, ..TokenizerOptions::default() };
        for token in tokenize(&text, &options) {
            prop_assert!(token.chars().count() >= min_token_len);
            prop_assert!(token.chars().all(char::is_alphanumeric), "token {:?}", token);
            prop_assert_eq!(token.to_lowercase(), token.clone());
            prop_assert!(!is_stop_word(&token));
        }
    }

    /// Case and separators never change the token stream.
    #[test]
    fn prop_case_and_separator_insensitive(words in prop::collection::vec("[a-z]{1,8}", 0..10)) {
        let options = TokenizerOptions::default();
        let plain = words.join(" ");
        let shouted = words.iter().map(|w| w.to_uppercase()).collect::<Vec<_>>().join(",\t!");
        prop_assert_eq!(tokenize(&plain, &options), tokenize(&shouted, &options));
    }

    /// Tokens come out in text order, so joining and re-tokenizing is stable.
    #[test]
    fn prop_retokenize_stable(text in "[ -~]{0,80}") {
        let options = TokenizerOptions::default();
        let once = tokenize(&text, &options);
        prop_assert_eq!(tokenize(&once.join(" "), &options), once);
    }
}
