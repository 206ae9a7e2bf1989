// Copyright (c) 2025 Lehua Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the Lehua prefix trie.
//!
//! This module defines the error types that can occur during Lehua Trie operations.

use crate::error::codec::CodecError;

/// Errors that can occur in Lehua Trie operations.
#[derive(Debug, thiserror::Error)]
pub enum LehuaTrieError {
    /// Error when an empty key is provided to an insertion.
    #[error("Empty key not allowed")]
    EmptyKey,

    /// Error when the interchange data cannot be decoded into a trie.
    #[error("Failed to deserialize trie: {0}")]
    Deserialization(#[from] CodecError),

    /// Error when decoded data has the right shape but breaks a trie invariant.
    #[error("Invalid trie structure at '{path}': {reason}")]
    InvalidStructure {
        /// The prefix leading to the offending node.
        path: String,
        /// What is wrong with the node.
        reason: String,
    },
}
