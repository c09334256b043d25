// Copyright 2025 the Gloss Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Maximum-munch segmentation of prose into term and text spans.

use alloc::string::String;
use alloc::vec::Vec;

use crate::trie::TermTrie;

/// One span of segmented text.
///
/// Produced by [`tokenize`]. The sequence is ordered and lossless:
/// concatenating the [`value`](Self::value) of every token reconstructs the
/// input exactly.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Token {
    /// A recognized dictionary term, carrying the matched term string.
    Term(String),
    /// A run of characters with no term match. Adjacent text spans are
    /// coalesced, so two `Text` tokens never touch.
    Text(String),
}

impl Token {
    /// The span's characters, regardless of kind.
    pub fn value(&self) -> &str {
        match self {
            Self::Term(s) | Self::Text(s) => s,
        }
    }

    /// True for [`Token::Term`].
    pub fn is_term(&self) -> bool {
        matches!(self, Self::Term(_))
    }

    /// True for [`Token::Text`].
    pub fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }
}

/// Segment `text` into term and text spans using greedy longest-match.
///
/// Scans left to right. At each position the trie's longest matching term is
/// taken and the scan advances past it; when nothing matches, a single
/// character is appended to an open text span. Pure function of its inputs:
/// no residual state, and no failure path (arbitrary input is valid).
///
/// Empty input yields an empty sequence.
///
/// # Example
///
/// ```rust
/// use gloss_lexicon::{TermTrie, Token, tokenize};
///
/// let trie = TermTrie::from_terms(["fire", "firebolt"]);
/// let tokens = tokenize(&trie, "firebolt damage");
/// assert_eq!(
///     tokens,
///     vec![
///         Token::Term("firebolt".to_string()),
///         Token::Text(" damage".to_string()),
///     ]
/// );
/// ```
pub fn tokenize(trie: &TermTrie, text: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < text.len() {
        let rest = &text[i..];
        if let Some(term) = trie.longest_match(rest) {
            tokens.push(Token::Term(String::from(term)));
            i += term.len();
        } else {
            // The matched term is always a char-boundary-aligned prefix, so
            // advancing by one char here keeps `i` on a boundary.
            let Some(ch) = rest.chars().next() else {
                break;
            };
            match tokens.last_mut() {
                Some(Token::Text(open)) => open.push(ch),
                _ => {
                    let mut open = String::new();
                    open.push(ch);
                    tokens.push(Token::Text(open));
                }
            }
            i += ch.len_utf8();
        }
    }
    tokens
}
