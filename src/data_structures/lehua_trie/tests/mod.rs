// Copyright (c) 2025 Lehua Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Unit and property-based tests for the Lehua prefix trie.

mod unit_tests;
