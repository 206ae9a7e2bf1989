// Copyright (c) 2025 Lehua Index Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! JSON codec for the Lehua Index.
//!
//! [`JsonCodec`] is a stateless encoder/decoder parameterized over the type
//! it handles, so call sites name the type once and reuse the codec for both
//! directions.
//!
//! Decoding has no nesting limit: serde_json's recursion guard is switched
//! off and the stack is grown on demand while the document is walked, so
//! deeply nested values such as long trie chains decode like shallow ones.

use std::fmt;
use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::codec::CodecError;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Encodes `T` to JSON and decodes JSON back to `T`.
pub struct JsonCodec<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> JsonCodec<T> {
    /// Creates a new codec for `T`.
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> JsonCodec<T>
where
    T: Serialize,
{
    /// Encodes `value` as compact JSON.
    pub fn encode(&self, value: &T) -> CodecResult<String> {
        serde_json::to_string(value).map_err(CodecError::Encode)
    }

    /// Encodes `value` as indented JSON.
    pub fn encode_pretty(&self, value: &T) -> CodecResult<String> {
        serde_json::to_string_pretty(value).map_err(CodecError::Encode)
    }
}

impl<T> JsonCodec<T>
where
    T: DeserializeOwned,
{
    /// Decodes a `T` from JSON text.
    pub fn decode(&self, json: &str) -> CodecResult<T> {
        let mut de = serde_json::Deserializer::from_str(json);
        de.disable_recursion_limit();

        let value = T::deserialize(serde_stacker::Deserializer::new(&mut de))
            .map_err(CodecError::Decode)?;
        de.end().map_err(CodecError::Decode)?;
        Ok(value)
    }
}

impl<T> Default for JsonCodec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for JsonCodec<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for JsonCodec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JsonCodec")
            .field("type", &std::any::type_name::<T>())
            .finish()
    }
}
