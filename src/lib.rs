// Copyright (c) 2025 Lehua Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lehua Index Library
//!
//! This library contains the core components of the Lehua Index: a bounded
//! prefix trie, the scored entities it indexes, the entity index that ties
//! them together, and the JSON codec used to persist both.
//!
//! # Architecture
//!
//! - [`data_structures::lehua_trie`]: the bounded, deduplicating prefix trie
//! - [`entity`]: scored records, their null-aware ordering and a sample generator
//! - [`index`]: tokenizes entity names and answers prefix queries
//! - [`codec`]: generic JSON encode/decode
//! - [`config`] and [`error`]: layered configuration and error types

pub mod codec;
pub mod config;
pub mod data_structures;
pub mod entity;
pub mod error;
pub mod index;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use data_structures::{LehuaTrie, LehuaTrieError};
pub use entity::ScoredEntity;
pub use index::{EntityIndex, IndexError};

/// Version information for the Lehua Index.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
