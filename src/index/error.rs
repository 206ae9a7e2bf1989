// Copyright (c) 2025 Lehua Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Error types for the entity index.

/// Errors that can occur while building or restoring an entity index.
#[derive(Debug, thiserror::Error)]
pub enum IndexError {
    /// Error when a name token exceeds the configured maximum key length.
    #[error("Key '{key}' exceeds maximum key length of {max_len}")]
    KeyTooLong {
        /// The token that was too long.
        key: String,
        /// The maximum allowed length in characters.
        max_len: usize,
    },

    /// Error when a restored trie refers to an entity that is not in the snapshot.
    #[error("Entity position {position} out of range for {entities} entities")]
    DanglingPosition {
        /// The stored position.
        position: usize,
        /// The number of entities in the snapshot.
        entities: usize,
    },
}
