// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the tokenizer.
//!
//! Any string must tokenize without panicking, and every token that comes out
//! must be lowercase, alphanumeric, long enough, and not a stop word.

#![no_main]

use arbitrary::Arbitrary;
use jobmatch::{is_stop_word, tokenize, TokenizerOptions};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input {
    text: String,
    min_token_len: u8,
    fold_diacritics: bool,
}

fuzz_target!(|input: Input| {
    let options = TokenizerOptions {
        min_token_len: (input.min_token_len % 8).max(1) as usize,
        fold_diacritics: input.fold_diacritics,
    };
    let tokens = tokenize(&input.text, &options);

    for token in &tokens {
        assert!(!token.is_empty());
        assert!(token.chars().all(char::is_alphanumeric), "token {:?}", token);
        assert!(token.chars().count() >= options.min_token_len);
        assert!(!is_stop_word(token), "stop word {:?} leaked", token);
    }
});
