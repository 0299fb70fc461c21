// Copyright (c) 2026 Lehua Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lehua Trie: a compressed prefix tree for string sets.
//!
//! This module provides a space-efficient trie for storing and querying sets
//! of words. Non-branching tails are stored as single compressed string
//! edges instead of chains of nodes, insertion re-expands a compressed edge
//! the moment a second continuation diverges under it, and a post-build
//! compaction pass collapses the single-path chains incremental insertion
//! leaves behind. Memory stays proportional to branch points plus leaves,
//! not to total character count.
//!
//! # Features
//!
//! - Three-way edge encoding (terminal marker, compressed suffix, child
//!   node) modeled as an explicit sum type
//! - Exact membership lookup with no partial-match false positives
//! - Duplicate-free enumeration of the stored set
//! - Structural JSON export and re-import
//! - Configurable word length guard bounding recursion depth
//!
//! # Example
//!
//! ```
//! use lehua_trie::LehuaTrie;
//!
//! let mut trie = LehuaTrie::new();
//! trie.add("bat").unwrap().add("ball").unwrap().add("bar").unwrap();
//!
//! // Compact the tree, then canonicalize edge order.
//! let merged = trie.optimize();
//! trie.clean();
//!
//! assert!(merged >= 1);
//! assert!(trie.contains("ball"));
//! assert!(!trie.contains("ba"));
//! assert_eq!(trie.words(), vec!["ball", "bar", "bat"]);
//! ```
//!
//! # Intended lifecycle
//!
//! Build once through repeated [`LehuaTrie::add`] calls, run
//! [`LehuaTrie::optimize`] (and optionally [`LehuaTrie::clean`]) after bulk
//! insertion, then share the trie read-only for lookups and enumeration.
//! The structure contains no interior locking; the mutating operations take
//! `&mut self`, so exclusive access during the build phase is enforced by
//! the borrow checker rather than at runtime.

mod config;
mod error;
mod node;

pub use config::LehuaTrieConfig;
pub use error::{LehuaTrieError, LehuaTrieResult};
pub use node::{EdgeValue, TrieNode};

use serde::{Serialize, Serializer};
use serde_json::Value;
use tracing::{debug, trace};

/// A compressed prefix trie over an owned root node.
///
/// `LehuaTrie` owns the recursive [`TrieNode`] structure and applies the
/// configured guards at the public boundary; the node type itself carries
/// the traversal algorithms and is available for direct use where no
/// guarding is wanted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LehuaTrie {
    /// The root node of the trie
    root: TrieNode,

    /// Configuration options
    config: LehuaTrieConfig,
}

impl LehuaTrie {
    /// Creates a new empty trie with default configuration.
    pub fn new() -> Self {
        Self::with_config(LehuaTrieConfig::default())
    }

    /// Creates a new empty trie with the specified configuration.
    pub fn with_config(config: LehuaTrieConfig) -> Self {
        Self {
            root: TrieNode::new(),
            config,
        }
    }

    /// Creates a trie seeded with one word.
    ///
    /// An empty seed marks the root itself as end-of-word.
    ///
    /// # Errors
    ///
    /// Returns [`LehuaTrieError::WordTooLong`] when the seed exceeds the
    /// default word length limit.
    pub fn with_word<W: AsRef<str>>(word: W) -> LehuaTrieResult<Self> {
        let mut trie = Self::new();
        trie.add(word)?;
        Ok(trie)
    }

    /// Inserts one word into the trie. Safe to call repeatedly; inserting a
    /// word that is already present changes nothing.
    ///
    /// Returns `&mut Self` so bulk insertions can be chained.
    ///
    /// # Errors
    ///
    /// Returns [`LehuaTrieError::WordTooLong`] when the word exceeds the
    /// configured maximum length.
    pub fn add<W: AsRef<str>>(&mut self, word: W) -> LehuaTrieResult<&mut Self> {
        let word = word.as_ref();
        let length = word.chars().count();
        if length > self.config.max_word_len() {
            trace!(
                length,
                max_len = self.config.max_word_len(),
                "word rejected by length guard"
            );
            return Err(LehuaTrieError::WordTooLong {
                length,
                max_len: self.config.max_word_len(),
            });
        }
        self.root.add(word);
        Ok(self)
    }

    /// Exact-membership query: `true` iff `word` was stored. Read-only.
    pub fn contains<W: AsRef<str>>(&self, word: W) -> bool {
        self.root.contains(word.as_ref())
    }

    /// Runs the structural compaction pass over the whole tree and returns
    /// the number of nodes eliminated. Idempotent once no further
    /// optimizable nodes remain.
    pub fn optimize(&mut self) -> usize {
        let merged = self.root.optimize();
        debug!(merged, "trie compaction pass finished");
        merged
    }

    /// Recursively sorts every node's edge labels into lexicographic order,
    /// making enumeration and export deterministic. Membership is unchanged.
    pub fn clean(&mut self) {
        self.root.clean();
    }

    /// Enumerates every stored word, delivering each to `visit` prefixed
    /// with `prefix`. Each call is one fresh full traversal.
    pub fn walk<F>(&self, prefix: &str, visit: &mut F)
    where
        F: FnMut(&str),
    {
        self.root.walk(prefix, visit);
    }

    /// Collects every stored word, in enumeration order.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::new();
        self.root.walk("", &mut |word| words.push(word.to_owned()));
        words
    }

    /// Number of words stored in the trie.
    ///
    /// This traverses the whole tree, so it is an O(n) operation.
    pub fn word_count(&self) -> usize {
        let mut count = 0;
        self.root.walk("", &mut |_| count += 1);
        count
    }

    /// Returns `true` if the trie stores no words.
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Number of nodes currently backing the trie (at least 1, the root).
    pub fn node_count(&self) -> usize {
        self.root.node_count()
    }

    /// Structural JSON export of the whole tree. See [`TrieNode::to_json`]
    /// for the format.
    pub fn to_json(&self) -> Value {
        self.root.to_json()
    }

    /// Rebuilds a trie from the export format produced by
    /// [`LehuaTrie::to_json`], with default configuration.
    ///
    /// # Errors
    ///
    /// Returns [`LehuaTrieError::InvalidExport`] when the value does not
    /// follow the documented format.
    pub fn from_export(value: &Value) -> LehuaTrieResult<Self> {
        let root = TrieNode::from_json(value)?;
        Ok(Self {
            root,
            config: LehuaTrieConfig::default(),
        })
    }

    /// The root node of the trie.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Mutable access to the root node, bypassing the word length guard.
    pub fn root_mut(&mut self) -> &mut TrieNode {
        &mut self.root
    }

    /// The active configuration.
    pub fn config(&self) -> &LehuaTrieConfig {
        &self.config
    }
}

impl Default for LehuaTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for LehuaTrie {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.root.serialize(serializer)
    }
}

#[cfg(test)]
mod tests;
