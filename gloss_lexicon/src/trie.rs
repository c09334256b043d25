// Copyright 2025 the Gloss Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Prefix tree over dictionary term strings with longest-match lookup.

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};

/// One node of the trie. Children are keyed by a single `char`; terminal
/// nodes carry the complete term so a match can be returned without
/// re-assembling the walked path.
#[derive(Clone, Debug, Default)]
struct Node {
    children: BTreeMap<char, Node>,
    /// Set when a term ends at this node. Populated exactly once per distinct
    /// term; re-inserting the same term is a no-op.
    term: Option<String>,
}

/// A prefix tree over a set of term strings.
///
/// Built once per dictionary version from all term strings, then queried with
/// [`longest_match`](Self::longest_match) during tokenization. Matching is
/// exact and case-sensitive.
///
/// # Example
///
/// ```rust
/// use gloss_lexicon::TermTrie;
///
/// let mut trie = TermTrie::new();
/// trie.insert("fire");
/// trie.insert("firebolt");
///
/// // Greedy: the longest present term wins.
/// assert_eq!(trie.longest_match("firebolt damage"), Some("firebolt"));
/// assert_eq!(trie.longest_match("fireplace"), Some("fire"));
/// assert_eq!(trie.longest_match("ice storm"), None);
/// ```
#[derive(Clone, Debug, Default)]
pub struct TermTrie {
    root: Node,
    len: usize,
}

impl TermTrie {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie from an iterator of terms.
    pub fn from_terms<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::new();
        for term in terms {
            trie.insert(term.as_ref());
        }
        trie
    }

    /// Insert a term, extending the tree one character at a time.
    ///
    /// Duplicate insertion is a no-op; the empty string is ignored.
    pub fn insert(&mut self, term: &str) {
        if term.is_empty() {
            return;
        }
        let mut node = &mut self.root;
        for ch in term.chars() {
            node = node.children.entry(ch).or_default();
        }
        if node.term.is_none() {
            node.term = Some(term.to_string());
            self.len += 1;
        }
    }

    /// Find the longest inserted term that is a prefix of `text`.
    ///
    /// Walks the tree as far as matching characters allow and remembers the
    /// deepest terminal node passed, so a term that is a prefix of a longer
    /// present term loses to the longer term when both match.
    pub fn longest_match(&self, text: &str) -> Option<&str> {
        let mut node = &self.root;
        let mut longest = None;
        for ch in text.chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => break,
            }
            if let Some(term) = &node.term {
                longest = Some(term.as_str());
            }
        }
        longest
    }

    /// Whether `term` was inserted exactly.
    pub fn contains(&self, term: &str) -> bool {
        let mut node = &self.root;
        for ch in term.chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.term.is_some()
    }

    /// Number of distinct terms inserted.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True if no terms have been inserted.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
