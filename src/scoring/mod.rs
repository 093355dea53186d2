// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how candidates get their numbers and their places.

mod core;
pub mod ranking;

pub use core::*;
