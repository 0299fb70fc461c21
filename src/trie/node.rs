// Copyright (c) 2026 Lehua Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Lehua Trie.
//!
//! This module provides the recursive `TrieNode` structure and the three-way
//! edge encoding it is built around. A node owns an ordered list of edges,
//! each mapping a non-empty label to either a terminal marker, a compressed
//! suffix, or a nested child node. Every operation on the trie interprets
//! this encoding recursively at each level.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::trie::error::{LehuaTrieError, LehuaTrieResult};

/// JSON export value marking a completed word.
pub(crate) const END_MARKER: u64 = 1;

/// The value carried by one edge of a [`TrieNode`].
///
/// The trie stays maximally compressed for linear chains by encoding a whole
/// non-branching tail as a single [`EdgeValue::Suffix`]; a full child node is
/// only paid for at the first point where two words actually diverge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EdgeValue {
    /// The edge label completes a stored word exactly, with no further suffix.
    Terminal,
    /// A literal remaining character sequence. Concatenated after the edge
    /// label it must match exactly to confirm membership; nothing branches
    /// beneath this point.
    Suffix(String),
    /// A nested node, required wherever the path branches or a completed
    /// word continues into longer words. Owned exclusively by this edge.
    Node(Box<TrieNode>),
}

/// One entry of a node's edge table.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Edge {
    label: String,
    value: EdgeValue,
}

impl Edge {
    fn new(label: String, value: EdgeValue) -> Self {
        Self { label, value }
    }
}

/// A node in the Lehua Trie.
///
/// Each node represents all stored words sharing the prefix that leads to it.
/// Its state is an ordered edge table plus an end-of-word flag recording
/// whether the prefix itself is a completed word. Edges are kept in insertion
/// order; [`TrieNode::clean`] re-sorts them into lexicographic order for
/// deterministic enumeration and export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieNode {
    /// Ordered edge table: label to edge value.
    edges: Vec<Edge>,

    /// Whether the path consumed so far is itself a stored word.
    terminal: bool,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            edges: Vec::new(),
            terminal: false,
        }
    }

    /// Creates a node seeded with one word.
    ///
    /// An empty seed marks the node itself as end-of-word.
    pub fn with_word(word: &str) -> Self {
        let mut node = Self::new();
        node.add(word);
        node
    }

    /// Returns whether this node terminates a stored word at its own position.
    pub fn is_end(&self) -> bool {
        self.terminal
    }

    /// Sets or clears the end-of-word marker. Idempotent; no other edges are
    /// affected.
    pub fn set_end(&mut self, end: bool) -> &mut Self {
        self.terminal = end;
        self
    }

    /// Returns `true` if the node stores no words at or below itself.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty() && !self.terminal
    }

    /// Number of nodes in this subtree, including this one.
    pub fn node_count(&self) -> usize {
        1 + self
            .edges
            .iter()
            .map(|edge| match &edge.value {
                EdgeValue::Node(child) => child.node_count(),
                _ => 0,
            })
            .sum::<usize>()
    }

    /// Iterates over this node's edges as `(label, value)` pairs, in the
    /// current table order.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &EdgeValue)> {
        self.edges.iter().map(|edge| (edge.label.as_str(), &edge.value))
    }

    /// Inserts one word into the subtree rooted here.
    ///
    /// An empty word marks this node as end-of-word. Otherwise the first
    /// character selects an edge: a fresh path is stored in compressed form
    /// (a terminal marker or a suffix), and an existing terminal or suffix
    /// edge is promoted to a child node at the first insertion that diverges
    /// from it. Inserting a word that is already present is a no-op.
    ///
    /// Returns `&mut Self` so bulk insertions can be chained.
    pub fn add(&mut self, word: &str) -> &mut Self {
        let Some(first) = word.chars().next() else {
            self.terminal = true;
            return self;
        };
        let (head, tail) = word.split_at(first.len_utf8());

        let Some(index) = self.position(head) else {
            // Brand-new, still-uncontested path: cheapest case.
            let value = if tail.is_empty() {
                EdgeValue::Terminal
            } else {
                EdgeValue::Suffix(tail.to_owned())
            };
            self.edges.push(Edge::new(head.to_owned(), value));
            return self;
        };

        let value = &mut self.edges[index].value;
        match value {
            EdgeValue::Node(child) => {
                child.add(tail);
            }
            EdgeValue::Terminal if tail.is_empty() => {}
            EdgeValue::Terminal => {
                // The completed word gains a longer sibling: promote, keeping
                // the old word as the child's end-of-word marker.
                let mut child = TrieNode::new();
                child.terminal = true;
                child.add(tail);
                *value = EdgeValue::Node(Box::new(child));
            }
            EdgeValue::Suffix(suffix) if suffix.as_str() == tail => {}
            EdgeValue::Suffix(suffix) => {
                // The path branches: re-expand the compressed tail into a
                // child node holding both continuations.
                let old = std::mem::take(suffix);
                let mut child = TrieNode::new();
                child.add(&old);
                child.add(tail);
                *value = EdgeValue::Node(Box::new(child));
            }
        }
        self
    }

    /// Exact-membership query.
    ///
    /// Matches any edge whose label is a prefix of the remaining word; with
    /// single-character labels this is a plain head/tail descent, and it
    /// stays correct over the longer labels [`TrieNode::optimize`] produces.
    /// No partial matches: a suffix edge must consume the remainder exactly.
    pub fn contains(&self, word: &str) -> bool {
        if word.is_empty() {
            return self.terminal;
        }
        for edge in &self.edges {
            let Some(rest) = word.strip_prefix(edge.label.as_str()) else {
                continue;
            };
            let matched = match &edge.value {
                EdgeValue::Terminal => rest.is_empty(),
                EdgeValue::Suffix(suffix) => suffix.as_str() == rest,
                EdgeValue::Node(child) => child.contains(rest),
            };
            if matched {
                return true;
            }
        }
        false
    }

    /// Structural compaction pass; returns the number of nodes eliminated.
    ///
    /// Depth-first: each child subtree is optimized before the child itself
    /// is judged. A child is absorbed into this node when it has exactly one
    /// edge, or exactly two edges neither of which is a child node (the
    /// end-of-word marker counts as an edge). Absorption re-keys the child's
    /// edges by prepending the edge label, collapsing runs of single-path
    /// nodes left behind by incremental insertion into compressed edges.
    /// A single pass reaches the fixpoint; further calls return 0.
    pub fn optimize(&mut self) -> usize {
        let mut merged = 0;
        let mut index = 0;
        while index < self.edges.len() {
            let mergeable = match &mut self.edges[index].value {
                EdgeValue::Node(child) => {
                    merged += child.optimize();
                    child.is_mergeable()
                }
                _ => {
                    index += 1;
                    continue;
                }
            };
            if mergeable {
                let Edge { label, value } = self.edges.remove(index);
                match value {
                    EdgeValue::Node(child) => {
                        self.absorb(&label, *child);
                        merged += 1;
                    }
                    _ => unreachable!("merge target must be a child-node edge"),
                }
            } else {
                index += 1;
            }
        }
        merged
    }

    /// A node can be merged into its parent when it is a pure pass-through
    /// or a two-way leaf fork with no further branching beneath it.
    fn is_mergeable(&self) -> bool {
        let fanout = self.edges.len() + usize::from(self.terminal);
        fanout == 1
            || (fanout == 2
                && !self
                    .edges
                    .iter()
                    .any(|edge| matches!(edge.value, EdgeValue::Node(_))))
    }

    /// Absorbs `child` into this node under `label`: the child's edges are
    /// re-keyed by prepending `label`, and its end-of-word marker becomes a
    /// terminal edge at `label` itself.
    fn absorb(&mut self, label: &str, child: TrieNode) {
        if child.terminal {
            self.set_edge(label.to_owned(), EdgeValue::Terminal);
        }
        for edge in child.edges {
            let mut key = String::with_capacity(label.len() + edge.label.len());
            key.push_str(label);
            key.push_str(&edge.label);
            self.set_edge(key, edge.value);
        }
    }

    /// Inserts or replaces the edge at `label`, preserving table order.
    fn set_edge(&mut self, label: String, value: EdgeValue) {
        assert!(!label.is_empty(), "edge labels must be non-empty");
        match self.edges.iter_mut().find(|edge| edge.label == label) {
            Some(existing) => existing.value = value,
            None => self.edges.push(Edge::new(label, value)),
        }
    }

    /// Canonicalization pass: recursively sorts each node's edge labels into
    /// lexicographic order. Enumeration and export become deterministic;
    /// membership semantics are unchanged.
    pub fn clean(&mut self) {
        self.edges.sort_by(|a, b| a.label.cmp(&b.label));
        for edge in &mut self.edges {
            if let EdgeValue::Node(child) = &mut edge.value {
                child.clean();
            }
        }
    }

    /// Enumerates every word stored in this subtree, delivering each to
    /// `visit` as `prefix` concatenated with the reconstructed suffix.
    ///
    /// Each call is one fresh, finite, depth-first traversal driven by the
    /// callback. Compression is respected: a multi-character edge whose word
    /// is already covered by descending through the single-character edge
    /// sharing its first character is skipped, so no word is emitted twice.
    pub fn walk<F>(&self, prefix: &str, visit: &mut F)
    where
        F: FnMut(&str),
    {
        let mut word = String::from(prefix);
        self.walk_inner(&mut word, visit);
    }

    fn walk_inner<F>(&self, word: &mut String, visit: &mut F)
    where
        F: FnMut(&str),
    {
        if self.terminal {
            visit(word);
        }
        for edge in &self.edges {
            let depth = word.len();
            match &edge.value {
                EdgeValue::Node(child) => {
                    word.push_str(&edge.label);
                    child.walk_inner(word, visit);
                }
                EdgeValue::Terminal => {
                    if self.covered_by_single(&edge.label, "") {
                        continue;
                    }
                    word.push_str(&edge.label);
                    visit(word);
                }
                EdgeValue::Suffix(suffix) => {
                    if self.covered_by_single(&edge.label, suffix) {
                        continue;
                    }
                    word.push_str(&edge.label);
                    word.push_str(suffix);
                    visit(word);
                }
            }
            word.truncate(depth);
        }
    }

    /// Duplicate guard for enumeration.
    ///
    /// True when the word spelled by a multi-character edge (`label` plus
    /// `tail`) is also spelled by the single-character edge sharing its first
    /// character. The overlap arises when an insertion follows a compaction
    /// pass and re-splits a compressed label; skipping the compressed edge
    /// then keeps the enumeration duplicate-free. Labels that merely share a
    /// first character are not covered and are never skipped.
    fn covered_by_single(&self, label: &str, tail: &str) -> bool {
        let Some(first) = label.chars().next() else {
            return false;
        };
        let (head, rest) = label.split_at(first.len_utf8());
        if rest.is_empty() {
            // Single-character labels are the covering side, never the
            // covered one.
            return false;
        }
        match self.value_of(head) {
            // A bare terminal spells only the one-character word itself,
            // which a multi-character edge can never equal.
            Some(EdgeValue::Terminal) => false,
            Some(EdgeValue::Suffix(suffix)) => {
                suffix.strip_prefix(rest) == Some(tail)
            }
            Some(EdgeValue::Node(child)) => {
                let mut remainder = String::with_capacity(rest.len() + tail.len());
                remainder.push_str(rest);
                remainder.push_str(tail);
                child.contains(&remainder)
            }
            None => false,
        }
    }

    /// Structural export mirroring the edge table: child nodes expand to
    /// nested maps recursively, terminal markers export as `1`, compressed
    /// suffixes as strings, and the end-of-word marker as a `1` under the
    /// empty key. Read-only; the tree is not modified.
    pub fn to_json(&self) -> Value {
        let mut map = Map::new();
        if self.terminal {
            map.insert(String::new(), Value::from(END_MARKER));
        }
        for edge in &self.edges {
            let value = match &edge.value {
                EdgeValue::Terminal => Value::from(END_MARKER),
                EdgeValue::Suffix(suffix) => Value::from(suffix.as_str()),
                EdgeValue::Node(child) => child.to_json(),
            };
            map.insert(edge.label.clone(), value);
        }
        Value::Object(map)
    }

    /// Rebuilds a node from the export format produced by
    /// [`TrieNode::to_json`].
    ///
    /// # Errors
    ///
    /// Returns [`LehuaTrieError::InvalidExport`] when the value is not an
    /// object, an empty label maps to anything but the end-of-word marker,
    /// or an edge value is not `1`, a string, or a nested object.
    pub fn from_json(value: &Value) -> LehuaTrieResult<Self> {
        let Value::Object(map) = value else {
            return Err(LehuaTrieError::InvalidExport(
                "trie export must be a JSON object".to_owned(),
            ));
        };
        let mut node = TrieNode::new();
        for (label, entry) in map {
            if label.is_empty() {
                if entry.as_u64() != Some(END_MARKER) {
                    return Err(LehuaTrieError::InvalidExport(format!(
                        "empty label must map to the end-of-word marker, got {entry}"
                    )));
                }
                node.terminal = true;
                continue;
            }
            let value = match entry {
                Value::Number(marker) if marker.as_u64() == Some(END_MARKER) => {
                    EdgeValue::Terminal
                }
                Value::String(suffix) => EdgeValue::Suffix(suffix.clone()),
                Value::Object(_) => {
                    EdgeValue::Node(Box::new(TrieNode::from_json(entry)?))
                }
                other => {
                    return Err(LehuaTrieError::InvalidExport(format!(
                        "label '{label}' maps to unsupported value {other}"
                    )));
                }
            };
            node.edges.push(Edge::new(label.clone(), value));
        }
        Ok(node)
    }

    fn position(&self, label: &str) -> Option<usize> {
        self.edges.iter().position(|edge| edge.label == label)
    }

    fn value_of(&self, label: &str) -> Option<&EdgeValue> {
        self.edges
            .iter()
            .find(|edge| edge.label == label)
            .map(|edge| &edge.value)
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::new()
    }
}

impl Serialize for TrieNode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_json().serialize(serializer)
    }
}
