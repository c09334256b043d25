// Copyright 2025 the Gloss Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Optional adapters for related crates.

#[cfg(feature = "lexicon_adapter")]
pub mod lexicon;
