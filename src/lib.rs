//! Lehua Trie Library
//!
//! This library provides a compressed trie (radix-style prefix tree) for
//! storing and querying sets of strings space-efficiently. Long runs of
//! non-branching nodes are flattened into compressed string edges, so memory
//! stays proportional to the number of branch points plus leaves rather than
//! to total character count.
//!
//! # Architecture
//!
//! The Lehua Trie is designed with the following principles in mind:
//! - Explicit sum-type edge encoding enforced by the compiler
//! - Exclusive hierarchical ownership (no shared references, no cycles)
//! - Build-then-share lifecycle: bulk insertion, one compaction pass,
//!   then read-only querying and enumeration
//! - Comprehensive error handling at the public boundary
//! - No unsafe code
//!
//! # Example
//!
//! ```
//! use lehua_trie::LehuaTrie;
//!
//! let mut trie = LehuaTrie::new();
//! trie.add("cat").unwrap().add("car").unwrap();
//! let merged = trie.optimize();
//!
//! assert!(trie.contains("cat"));
//! assert!(trie.contains("car"));
//! assert!(!trie.contains("ca"));
//! assert!(merged >= 1);
//! ```

// Re-export public modules
pub mod trie;

pub use trie::{
    EdgeValue, LehuaTrie, LehuaTrieConfig, LehuaTrieError, LehuaTrieResult, TrieNode,
};

/// Version information for the Lehua Trie library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
