// Copyright 2025 the Gloss Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Term→definition dictionary with a prebuilt trie for tokenization.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use crate::token::{Token, tokenize};
use crate::trie::TermTrie;

/// A rules dictionary: term→definition map plus a [`TermTrie`] over the keys.
///
/// Supplied wholesale before any tokenization happens; the trie is built once
/// at construction, proportional to the total character count of all terms.
/// Loading and storage of the dictionary data are the caller's concern.
///
/// # Example
///
/// ```rust
/// use gloss_lexicon::Glossary;
///
/// let glossary = Glossary::from_entries([
///     ("Advantage".to_string(), "Roll twice, keep the higher.".to_string()),
/// ]);
/// assert_eq!(glossary.definition("Advantage"), Some("Roll twice, keep the higher."));
/// assert_eq!(glossary.definition("Disadvantage"), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Glossary {
    definitions: BTreeMap<String, String>,
    trie: TermTrie,
}

impl Glossary {
    /// Build a glossary from `(term, definition)` pairs.
    ///
    /// Later entries for the same term replace earlier ones.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut definitions = BTreeMap::new();
        for (term, definition) in entries {
            definitions.insert(term, definition);
        }
        let trie = TermTrie::from_terms(definitions.keys());
        Self { definitions, trie }
    }

    /// Look up the definition of an exact term.
    pub fn definition(&self, term: &str) -> Option<&str> {
        self.definitions.get(term).map(String::as_str)
    }

    /// Whether the glossary defines `term`.
    pub fn contains(&self, term: &str) -> bool {
        self.definitions.contains_key(term)
    }

    /// Iterate over all terms in sorted order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.definitions.keys().map(String::as_str)
    }

    /// The trie built over this glossary's terms.
    pub fn trie(&self) -> &TermTrie {
        &self.trie
    }

    /// Segment `text` against this glossary's terms. See [`tokenize`].
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        tokenize(&self.trie, text)
    }

    /// Number of defined terms.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    /// True if no terms are defined.
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }
}
