// Copyright (c) 2026 Lehua Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Scenario tests for the Lehua Trie public surface.

use test_case::test_case;

use crate::trie::{EdgeValue, LehuaTrie, LehuaTrieConfig, LehuaTrieError, TrieNode};

fn build(words: &[&str]) -> LehuaTrie {
    let mut trie = LehuaTrie::new();
    for word in words {
        trie.add(word).unwrap();
    }
    trie
}

fn sorted_words(trie: &LehuaTrie) -> Vec<String> {
    let mut words = trie.words();
    words.sort();
    words
}

#[test]
fn test_trie_basic_operations() {
    let mut trie = LehuaTrie::new();

    // Test initial state
    assert!(trie.is_empty());
    assert_eq!(trie.word_count(), 0);
    assert_eq!(trie.node_count(), 1);

    // Test chained insertion
    trie.add("hello").unwrap().add("help").unwrap();
    assert!(!trie.is_empty());
    assert_eq!(trie.word_count(), 2);

    // Test membership
    assert!(trie.contains("hello"));
    assert!(trie.contains("help"));
    assert!(!trie.contains("hel"));
    assert!(!trie.contains("helping"));

    // Test idempotent insertion
    trie.add("hello").unwrap();
    assert_eq!(trie.word_count(), 2);
}

#[test]
fn test_custom_configuration() {
    let config = LehuaTrieConfig::new().with_max_word_len(4);
    let mut trie = LehuaTrie::with_config(config);

    trie.add("tiny").unwrap();
    let err = trie.add("toolong").unwrap_err();
    assert_eq!(
        err,
        LehuaTrieError::WordTooLong {
            length: 7,
            max_len: 4,
        }
    );

    // The rejected word must not have been partially inserted.
    assert_eq!(trie.words(), vec!["tiny"]);
}

#[test_case("a", true; "one character word")]
#[test_case("ab", true; "two character word")]
#[test_case("abc", true; "three character word")]
#[test_case("abcd", false; "extension of stored word")]
#[test_case("b", false; "absent sibling")]
#[test_case("", false; "empty word not stored")]
fn test_nested_prefix_membership(query: &str, expected: bool) {
    let trie = build(&["a", "ab", "abc"]);
    assert_eq!(trie.contains(query), expected);
}

#[test_case("xy", true; "middle word is stored")]
#[test_case("xyz", true; "longest word is stored")]
#[test_case("xyzz", false; "no accidental prefix match")]
#[test_case("xz", false; "absent branch")]
fn test_no_partial_match_false_positives(query: &str, expected: bool) {
    let trie = build(&["x", "xy", "xyz"]);
    assert_eq!(trie.contains(query), expected);
}

#[test]
fn test_shared_prefix_creates_single_branch_point() {
    let trie = build(&["cat", "car"]);

    // Exactly one branch point after "ca": root -> 'c' -> 'a' -> {t, r}.
    let root_edges: Vec<_> = trie.root().edges().collect();
    assert_eq!(root_edges.len(), 1);
    assert_eq!(root_edges[0].0, "c");
    let EdgeValue::Node(middle) = root_edges[0].1 else {
        panic!("'c' must hold a child node");
    };
    let middle_edges: Vec<_> = middle.edges().collect();
    assert_eq!(middle_edges.len(), 1);
    assert_eq!(middle_edges[0].0, "a");
    let EdgeValue::Node(fork) = middle_edges[0].1 else {
        panic!("'a' must hold the branch point");
    };
    assert_eq!(fork.edges().count(), 2);

    assert_eq!(sorted_words(&trie), vec!["car", "cat"]);
}

#[test]
fn test_enumeration_has_no_spurious_prefixes() {
    let trie = build(&["bat", "ball", "bar"]);
    assert_eq!(sorted_words(&trie), vec!["ball", "bar", "bat"]);
    assert!(!trie.contains("ba"));
    assert!(!trie.contains("b"));
}

#[test]
fn test_optimize_preserves_membership_and_enumeration() {
    let mut trie = build(&["bat", "ball", "bar", "bath", "cap", ""]);
    let words_before = sorted_words(&trie);
    let nodes_before = trie.node_count();

    let merged = trie.optimize();

    assert_eq!(sorted_words(&trie), words_before);
    assert_eq!(trie.node_count(), nodes_before - merged);
    for word in &words_before {
        assert!(trie.contains(word), "lost {word:?} in compaction");
    }
    assert!(!trie.contains("bal"));
    assert!(!trie.contains("c"));

    // Idempotent once no optimizable nodes remain.
    assert_eq!(trie.optimize(), 0);
}

#[test]
fn test_single_word_trie_is_born_compressed() {
    let mut trie = LehuaTrie::with_word("dog").unwrap();
    assert_eq!(trie.node_count(), 1);
    assert_eq!(trie.optimize(), 0);
    assert!(trie.contains("dog"));
    assert!(!trie.contains("do"));
}

#[test]
fn test_branched_chain_collapses_to_compressed_edges() {
    let mut trie = build(&["dog", "dot"]);
    assert_eq!(trie.node_count(), 3);

    let merged = trie.optimize();
    assert_eq!(merged, 2);
    assert_eq!(trie.node_count(), 1);
    assert!(trie.contains("dog"));
    assert!(trie.contains("dot"));
    assert_eq!(sorted_words(&trie), vec!["dog", "dot"]);
}

#[test]
fn test_clean_makes_enumeration_lexicographic() {
    let mut trie = build(&["mango", "apple", "zebra", "map"]);
    trie.optimize();
    trie.clean();
    assert_eq!(trie.words(), vec!["apple", "mango", "map", "zebra"]);

    // Clean never changes the stored set.
    assert!(trie.contains("map"));
    assert!(!trie.contains("ma"));
}

#[test]
fn test_empty_word_marks_root() {
    let mut trie = LehuaTrie::with_word("").unwrap();
    assert!(trie.root().is_end());
    assert!(trie.contains(""));
    assert_eq!(trie.words(), vec![""]);

    trie.add("a").unwrap();
    assert_eq!(sorted_words(&trie), vec!["", "a"]);
}

#[test]
fn test_walk_applies_starting_prefix() {
    let trie = build(&["cat", "car"]);
    let mut words = Vec::new();
    trie.walk("re:", &mut |word| words.push(word.to_owned()));
    words.sort();
    assert_eq!(words, vec!["re:car", "re:cat"]);
}

#[test]
fn test_export_round_trip_preserves_membership() {
    let mut trie = build(&["bat", "ball", "bar", ""]);
    trie.optimize();

    let exported = trie.to_json();
    let rebuilt = LehuaTrie::from_export(&exported).unwrap();

    assert_eq!(sorted_words(&rebuilt), sorted_words(&trie));
    for word in ["bat", "ball", "bar", ""] {
        assert!(rebuilt.contains(word));
    }
    assert!(!rebuilt.contains("ba"));

    // The rebuilt tree exports the same structure again.
    assert_eq!(rebuilt.to_json(), exported);
}

#[test]
fn test_serialize_matches_export() {
    let mut trie = build(&["cat", "car"]);
    trie.clean();
    let serialized = serde_json::to_value(&trie).unwrap();
    assert_eq!(serialized, trie.to_json());
}

#[test]
fn test_root_mut_exposes_node_operations() {
    let mut trie = LehuaTrie::new();
    trie.root_mut().set_end(true);
    assert!(trie.contains(""));
    trie.root_mut().set_end(false);
    assert!(trie.is_empty());
}

#[test]
fn test_node_wrapper_agreement() {
    // The guarded wrapper and the bare node agree on the stored set.
    let trie = build(&["bat", "ball", "bar"]);
    let mut node = TrieNode::new();
    node.add("bat").add("ball").add("bar");
    assert_eq!(trie.root(), &node);
}
