// Copyright (c) 2026 Lehua Trie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Lehua Trie.
//!
//! The error surface is deliberately narrow: the trie operates purely on
//! in-memory data, so runtime errors exist only at the guarded public
//! boundary and when parsing an export. Invariant violations inside the
//! structure are programming errors and fail fast instead.

/// Errors that can occur in Lehua Trie operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone)]
pub enum LehuaTrieError {
    /// A word exceeds the configured maximum length.
    #[error("Word of {length} characters exceeds maximum trie word length of {max_len}")]
    WordTooLong {
        /// Length of the rejected word, in characters.
        length: usize,
        /// The configured maximum length.
        max_len: usize,
    },

    /// An export value does not follow the documented format.
    #[error("Invalid trie export: {0}")]
    InvalidExport(String),
}

/// Result type for Lehua Trie operations.
pub type LehuaTrieResult<T> = Result<T, LehuaTrieError>;
