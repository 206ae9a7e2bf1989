// Copyright (c) 2025 Lehua Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Codec error module.
//!
//! This module defines error types that may occur while encoding values to
//! or decoding values from the JSON interchange format.

use thiserror::Error;

/// Errors that can occur during codec operations.
#[derive(Error, Debug)]
pub enum CodecError {
    /// Error when a value cannot be encoded.
    #[error("Failed to encode value: {0}")]
    Encode(#[source] serde_json::Error),

    /// Error when the input does not decode into the requested type.
    #[error("Failed to decode value: {0}")]
    Decode(#[source] serde_json::Error),
}

impl CodecError {
    /// Returns the line and column reported by the JSON parser, if any.
    pub fn position(&self) -> Option<(usize, usize)> {
        let inner = match self {
            Self::Encode(e) | Self::Decode(e) => e,
        };
        match inner.line() {
            0 => None,
            line => Some((line, inner.column())),
        }
    }
}
