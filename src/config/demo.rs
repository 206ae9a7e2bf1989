// Copyright (c) 2025 Lehua Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Demo configuration module.

use super::{ConfigResult, Validate};
use crate::entity::MAX_GENERATED_ENTITIES;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Settings for the `demo` command.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DemoConfig {
    /// Number of sample entities to generate
    pub entity_count: usize,

    /// Prefixes to look up once the index is built
    pub queries: Vec<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            entity_count: 20,
            queries: vec!["a".to_string(), "h".to_string()],
        }
    }
}

impl Validate for DemoConfig {
    fn validate(&self) -> ConfigResult<()> {
        if self.entity_count == 0 || self.entity_count > MAX_GENERATED_ENTITIES {
            return Err(ConfigError::ValueOutOfRange {
                key: "demo.entity_count".to_string(),
                message: format!("must be between 1 and {MAX_GENERATED_ENTITIES}"),
            });
        }

        Ok(())
    }
}
