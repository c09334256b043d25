// Copyright 2025 the Gloss Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Gloss Lexicon: a rules-glossary dictionary with maximum-munch tokenization.
//!
//! Gloss Lexicon is the text side of a reference-lookup overlay: it knows the
//! set of defined terms and can segment arbitrary prose into term spans and
//! plain-text spans.
//!
//! - Build a [`TermTrie`] over the dictionary's term strings.
//! - Segment text with [`tokenize`] using greedy longest-match ("maximum
//!   munch"): at every position the longest known term wins, and everything
//!   else falls through to coalesced text spans.
//! - Or keep terms and definitions together in a [`Glossary`], which owns both
//!   the map and the trie and tokenizes directly.
//!
//! Tokenization never fails: unmatched characters always become text tokens,
//! and concatenating the produced token values reconstructs the input exactly.
//!
//! # Example
//!
//! ```rust
//! use gloss_lexicon::{Glossary, Token};
//!
//! let glossary = Glossary::from_entries([
//!     ("fire".to_string(), "Elemental damage type.".to_string()),
//!     ("firebolt".to_string(), "A mote of fire. 1d10 fire damage.".to_string()),
//! ]);
//!
//! // The longer term wins even though "fire" matches first.
//! let tokens = glossary.tokenize("firebolt damage");
//! assert_eq!(tokens[0], Token::Term("firebolt".to_string()));
//! assert_eq!(tokens[1], Token::Text(" damage".to_string()));
//!
//! assert_eq!(glossary.definition("fire"), Some("Elemental damage type."));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod glossary;
pub mod token;
pub mod trie;

pub use glossary::Glossary;
pub use token::{Token, tokenize};
pub use trie::TermTrie;
