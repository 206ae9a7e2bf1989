// Copyright (c) 2025 Lehua Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Data structures for the Lehua Index.
//!
//! All implementations adhere to the project requirements:
//! - No unsafe code
//! - Whole-tree walks use an explicit stack, so key length is unbounded
//! - Exclusive ownership trees with no shared or back references

pub mod lehua_trie;

// Re-export common data structures
pub use lehua_trie::{LehuaTrie, LehuaTrieError, LehuaTrieResult};
