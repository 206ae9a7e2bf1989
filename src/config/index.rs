// Copyright (c) 2025 Lehua Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Index configuration module.
//!
//! This module defines how entity names are turned into trie keys and how
//! many results each trie node keeps.

use super::{ConfigResult, Validate};
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Index configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct IndexConfig {
    /// Maximum number of values kept per trie node
    pub max_results: usize,

    /// Separator used to split entity names into tokens
    pub delimiter: String,

    /// Whether names and queries are lower-cased before use
    pub lowercase: bool,

    /// Maximum token length in characters (0 disables the check)
    pub max_key_len: usize,
}

impl Default for IndexConfig {
    fn default() -> Self {
        Self {
            max_results: 10,
            delimiter: "_".to_string(),
            lowercase: true,
            max_key_len: 64,
        }
    }
}

impl Validate for IndexConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_results == 0 {
            return Err(ConfigError::ValidationError(
                "max_results must be greater than 0".to_string(),
            ));
        }

        if self.delimiter.is_empty() {
            return Err(ConfigError::ValidationError(
                "delimiter must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
