// Copyright (c) 2025 Lehua Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Test modules for the Lehua Index.
//!
//! This module contains the crate-level test suites:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Property-based tests for the entity index
//! - Test fixtures and utilities


pub use test_utils::{entity_strategy, TestFixture};
