// Copyright 2025 the Gloss Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Adapter helpers for Gloss Lexicon.
//!
//! ## Feature
//!
//! Enable with `lexicon_adapter`.
//!
//! ## Notes
//!
//! These helpers tokenize an open tooltip's definition so the render layer
//! knows which spans to draw as nested anchors and at which level. They do
//! not register regions or open tooltips; that stays with the host.

use alloc::string::String;
use alloc::vec::Vec;

use gloss_lexicon::{Glossary, Token};

use crate::types::TooltipRecord;

/// One span of a tooltip definition, ready for the render layer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NestedSpan {
    /// A recognized term to render as a hoverable anchor.
    Anchor {
        /// The term the anchor opens.
        term: String,
        /// Level for the anchor's tooltip: the owning record's level + 1.
        level: usize,
    },
    /// Plain characters.
    Text(String),
}

/// Tokenize `record`'s definition into render-ready spans.
///
/// Every recognized term becomes an [`NestedSpan::Anchor`] at
/// `record.level + 1`, except a term equal to the record's own: the
/// controller refuses an immediately self-referential open, so offering that
/// anchor would be a dead control. It is demoted to text (and coalesced with
/// its neighbors) instead.
pub fn nested_spans(glossary: &Glossary, record: &TooltipRecord) -> Vec<NestedSpan> {
    let level = record.level + 1;
    let mut out: Vec<NestedSpan> = Vec::new();
    for token in glossary.tokenize(&record.definition) {
        match token {
            Token::Term(term) if term != record.term => {
                out.push(NestedSpan::Anchor { term, level });
            }
            Token::Term(text) | Token::Text(text) => match out.last_mut() {
                Some(NestedSpan::Text(open)) => open.push_str(&text),
                _ => out.push(NestedSpan::Text(text)),
            },
        }
    }
    out
}
